//! Map building that refuses duplicate keys
//!
//! Map-valued fields (event attributes, endpoint blobs, label mappers,
//! output variable mappings) are ordered maps. Inserting a key that is
//! already present is a client-side error rather than a silent overwrite.

use crate::error::ValidationError;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Insert `key` into `map`, failing if the key is already present.
pub fn insert_unique<V>(
    map: &mut BTreeMap<String, V>,
    field: &str,
    key: impl Into<String>,
    value: V,
) -> Result<(), ValidationError> {
    match map.entry(key.into()) {
        Entry::Vacant(slot) => {
            slot.insert(value);
            Ok(())
        }
        Entry::Occupied(slot) => {
            log::debug!("duplicate key '{}' for field '{}'", slot.key(), field);
            Err(ValidationError::DuplicateKey {
                field: field.to_string(),
                key: slot.key().clone(),
            })
        }
    }
}

/// Collect `(key, value)` pairs into a map, failing on the first repeated key.
pub fn collect_unique<K, V, I>(field: &str, entries: I) -> Result<BTreeMap<String, V>, ValidationError>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut map = BTreeMap::new();
    for (key, value) in entries {
        insert_unique(&mut map, field, key, value)?;
    }
    Ok(map)
}

/// Serde `deserialize_with` adapter for map fields
///
/// A key repeated in the input is an error instead of last-one-wins.
pub fn deserialize_unique<'de, D, V>(deserializer: D) -> Result<BTreeMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    deserializer.deserialize_map(UniqueKeys(PhantomData))
}

struct UniqueKeys<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueKeys<V> {
    type Value = BTreeMap<String, V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map with unique keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = BTreeMap::new();
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            match map.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                Entry::Occupied(slot) => {
                    log::debug!("duplicate key '{}' in decoded map", slot.key());
                    return Err(de::Error::custom(format_args!(
                        "duplicate map key '{}'",
                        slot.key()
                    )));
                }
            }
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_unique_rejects_second_insert() {
        let mut attrs = BTreeMap::new();
        insert_unique(&mut attrs, "eventAttributes", "amount", "100".to_string()).unwrap();

        let err = insert_unique(&mut attrs, "eventAttributes", "amount", "200".to_string())
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateKey {
                field: "eventAttributes".to_string(),
                key: "amount".to_string(),
            }
        );
        // first value is kept
        assert_eq!(attrs.get("amount"), Some(&"100".to_string()));
    }

    #[test]
    fn test_collect_unique() {
        let map = collect_unique("scores", vec![("a", 1), ("b", 2)]).unwrap();
        assert_eq!(map.len(), 2);

        let err = collect_unique("scores", vec![("a", 1), ("a", 2)]).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateKey { .. }));
    }

    #[derive(Debug, serde::Deserialize)]
    struct Attrs {
        #[serde(default, deserialize_with = "deserialize_unique")]
        attrs: BTreeMap<String, String>,
    }

    #[test]
    fn test_decoded_map_rejects_repeated_key() {
        let ok: Attrs = serde_json::from_str(r#"{"attrs": {"a": "1", "b": "2"}}"#).unwrap();
        assert_eq!(ok.attrs.len(), 2);

        let missing: Attrs = serde_json::from_str("{}").unwrap();
        assert!(missing.attrs.is_empty());

        let err = serde_json::from_str::<Attrs>(r#"{"attrs": {"a": "1", "a": "2"}}"#).unwrap_err();
        assert!(err.to_string().contains("duplicate map key 'a'"));
    }
}
