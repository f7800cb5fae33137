//! Binding between a request type, its result type and the service operation

use frauddetector_core::validation::{check_optional, check_range, Validate};
use frauddetector_core::ValidationError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// A service operation: a validated request body and the result it yields
pub trait Operation: Serialize + Validate + Send + Sync {
    /// Service-side operation name, e.g. `CreateRule`
    const NAME: &'static str;

    /// Result payload returned by the service
    type Output: DeserializeOwned + Send;
}

/// A listing operation driven by an opaque continuation token
///
/// Its `Output` implements [`Paginated`].
pub trait PaginatedOperation: Operation + Clone {
    /// Token the request currently carries
    fn next_token(&self) -> Option<&str>;

    /// Copy of this request that resumes at `token`
    fn with_next_token(&self, token: String) -> Self;
}

/// A result page holding items and an optional continuation token
pub trait Paginated {
    type Item;

    /// Token to pass back verbatim for the next page; `None` on the last page
    fn next_token(&self) -> Option<&str>;

    /// Items on this page, in service order
    fn into_items(self) -> Vec<Self::Item>;
}

/// Check an optional page size against the operation's inclusive range
pub(crate) fn check_max_results(
    value: Option<i32>,
    (min, max): (i32, i32),
) -> Result<(), ValidationError> {
    check_optional(value.as_ref(), |v| check_range("maxResults", *v, min, max))
}

/// Read a continuation token, treating an empty string as "no more pages"
pub(crate) fn non_empty_token<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let token = Option::<String>::deserialize(deserializer)?;
    Ok(token.filter(|t| !t.is_empty()))
}
