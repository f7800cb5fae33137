//! Closed vocabularies used on the wire
//!
//! Every enumeration serializes to the exact literal the service expects and
//! parses back with [`std::str::FromStr`], failing with
//! [`ValidationError::InvalidEnumValue`](crate::error::ValidationError) on an
//! unknown literal.

/// Declare a string-backed enumeration with its wire literals.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire literal for this variant
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Comma-separated list of accepted literals
            pub fn allowed_values() -> String {
                [$($wire),+].join(", ")
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => {
                        log::debug!("unknown {} literal '{}'", stringify!($name), other);
                        Err($crate::error::ValidationError::InvalidEnumValue {
                            field: stringify!($name).to_string(),
                            value: other.to_string(),
                            allowed: Self::allowed_values(),
                        })
                    }
                }
            }
        }
    };
}

pub mod status;
pub mod vocabulary;

pub use status::{DetectorVersionStatus, ModelVersionStatus};
pub use vocabulary::{
    DataSource, DataType, Language, ModelEndpointStatus, ModelInputDataFormat,
    ModelOutputDataFormat, ModelSource, ModelTypeEnum, RuleExecutionMode, TrainingDataSourceEnum,
};
