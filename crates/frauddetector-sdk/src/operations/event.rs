//! Event operations

use frauddetector_core::validation::{check_identifier, Validate};
use frauddetector_core::ValidationError;
use serde::{Deserialize, Serialize};

/// Delete a stored event by id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEventRequest {
    pub event_id: String,
}

impl DeleteEventRequest {
    pub fn new(event_id: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
        }
    }
}

impl Validate for DeleteEventRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("eventId", &self.event_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeleteEventResult {}

operation!(DeleteEventRequest => DeleteEventResult, "DeleteEvent");
