//! Lifecycle statuses for detector versions and model versions
//!
//! The service owns both state machines. The helpers here only describe the
//! transitions the service documents, so callers can check a requested
//! transition before sending it.

wire_enum! {
    /// Detector version status
    pub enum DetectorVersionStatus {
        Draft => "DRAFT",
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

impl DetectorVersionStatus {
    /// Only a draft version may have its rules, models or endpoints edited
    pub fn is_mutable(self) -> bool {
        self == DetectorVersionStatus::Draft
    }

    /// Whether `UpdateDetectorVersionStatus` may move a version from `self` to `next`
    pub fn can_transition_to(self, next: DetectorVersionStatus) -> bool {
        use DetectorVersionStatus::*;
        matches!(
            (self, next),
            (Draft, Active) | (Active, Inactive) | (Inactive, Active)
        )
    }

    /// Statuses a caller may request through `UpdateDetectorVersionStatus`
    pub fn is_requestable(self) -> bool {
        self != DetectorVersionStatus::Draft
    }
}

wire_enum! {
    /// Model version status
    pub enum ModelVersionStatus {
        TrainingInProgress => "TRAINING_IN_PROGRESS",
        TrainingComplete => "TRAINING_COMPLETE",
        ActivateRequested => "ACTIVATE_REQUESTED",
        ActivateInProgress => "ACTIVATE_IN_PROGRESS",
        Active => "ACTIVE",
        InactivateInProgress => "INACTIVATE_IN_PROGRESS",
        Inactive => "INACTIVE",
        Error => "ERROR",
    }
}

impl ModelVersionStatus {
    /// The service is still working on this version
    pub fn is_in_progress(self) -> bool {
        use ModelVersionStatus::*;
        matches!(
            self,
            TrainingInProgress | ActivateRequested | ActivateInProgress | InactivateInProgress
        )
    }

    /// No further transitions leave this status
    pub fn is_terminal(self) -> bool {
        self == ModelVersionStatus::Error
    }

    /// Whether the documented lifecycle allows `self` to be followed by `next`
    pub fn can_transition_to(self, next: ModelVersionStatus) -> bool {
        use ModelVersionStatus::*;
        if next == Error {
            return self.is_in_progress();
        }
        matches!(
            (self, next),
            (TrainingInProgress, TrainingComplete)
                | (TrainingComplete, ActivateRequested)
                | (ActivateRequested, ActivateInProgress)
                | (ActivateInProgress, Active)
                | (Active, InactivateInProgress)
                | (InactivateInProgress, Inactive)
                | (TrainingComplete, Active)
                | (Active, TrainingComplete)
        )
    }

    /// Statuses a caller may request through `UpdateModelVersion`
    pub fn is_requestable(self) -> bool {
        matches!(self, ModelVersionStatus::Active | ModelVersionStatus::TrainingComplete)
    }
}
