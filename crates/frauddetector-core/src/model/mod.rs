//! Value objects exchanged with the service
//!
//! These are plain records. Requests embed them, results return them, and
//! none of them change after they have been built.

pub mod detector;
pub mod external_model;
pub mod outcome;
pub mod prediction;
pub mod rule;
pub mod scoring_model;
pub mod variable;

pub use detector::{Detector, DetectorVersionSummary};
pub use external_model::{
    ExternalModel, ModelEndpointDataBlob, ModelInputConfiguration, ModelOutputConfiguration, Role,
};
pub use outcome::Outcome;
pub use prediction::{ModelScores, RuleResult};
pub use rule::{Rule, RuleDetail};
pub use scoring_model::{
    LabelSchema, Model, ModelVariable, ModelVersion, ModelVersionDetail, TrainingDataSource,
};
pub use variable::{BatchCreateVariableError, BatchGetVariableError, Variable, VariableEntry};
