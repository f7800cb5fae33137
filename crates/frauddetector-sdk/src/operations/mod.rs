//! Request and result types for every service operation
//!
//! Grouped by the resource each operation acts on. Every request implements
//! [`Operation`](crate::operation::Operation) and
//! [`Validate`](frauddetector_core::Validate); listing requests additionally
//! implement [`PaginatedOperation`](crate::operation::PaginatedOperation).

/// Bind a request type to its result type and operation name.
macro_rules! operation {
    ($request:ty => $output:ty, $name:literal) => {
        impl $crate::operation::Operation for $request {
            const NAME: &'static str = $name;
            type Output = $output;
        }
    };
}

/// Wire up `nextToken` continuation for a listing request and its result page.
macro_rules! paginated {
    ($request:ty => $output:ty, $item:ty, $items:ident) => {
        impl $crate::operation::PaginatedOperation for $request {
            fn next_token(&self) -> Option<&str> {
                self.next_token.as_deref()
            }

            fn with_next_token(&self, token: String) -> Self {
                let mut next = self.clone();
                next.next_token = Some(token);
                next
            }
        }

        impl $crate::operation::Paginated for $output {
            type Item = $item;

            fn next_token(&self) -> Option<&str> {
                self.next_token.as_deref().filter(|t| !t.is_empty())
            }

            fn into_items(self) -> Vec<$item> {
                self.$items
            }
        }
    };
}

pub mod detector;
pub mod event;
pub mod external_model;
pub mod model;
pub mod outcome;
pub mod prediction;
pub mod rule;
pub mod variable;

pub use detector::*;
pub use event::*;
pub use external_model::*;
pub use model::*;
pub use outcome::*;
pub use prediction::*;
pub use rule::*;
pub use variable::*;
