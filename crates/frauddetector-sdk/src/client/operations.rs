//! Named methods for every service operation

use super::FraudDetectorClient;
use crate::error::Result;
use crate::operations::*;
use crate::transport::Transport;

/// Expand `name(Request) -> Result` pairs into async methods that call `send`.
macro_rules! operation_methods {
    ($( $(#[$doc:meta])* $method:ident($request:ty) -> $output:ty; )+) => {
        impl<T: Transport> FraudDetectorClient<T> {
            $(
                $(#[$doc])*
                pub async fn $method(&self, request: $request) -> Result<$output> {
                    self.send(&request).await
                }
            )+
        }
    };
}

operation_methods! {
    // Detectors
    put_detector(PutDetectorRequest) -> PutDetectorResult;
    /// Fails with a conflict while the detector still has versions or rules
    delete_detector(DeleteDetectorRequest) -> DeleteDetectorResult;
    /// One page of detector versions; see [`collect_pages`](Self::collect_pages)
    describe_detector(DescribeDetectorRequest) -> DescribeDetectorResult;
    get_detectors(GetDetectorsRequest) -> GetDetectorsResult;

    // Detector versions
    create_detector_version(CreateDetectorVersionRequest) -> CreateDetectorVersionResult;
    get_detector_version(GetDetectorVersionRequest) -> GetDetectorVersionResult;
    /// Only accepted by the service while the version is `DRAFT`
    update_detector_version(UpdateDetectorVersionRequest) -> UpdateDetectorVersionResult;
    update_detector_version_metadata(UpdateDetectorVersionMetadataRequest)
        -> UpdateDetectorVersionMetadataResult;
    update_detector_version_status(UpdateDetectorVersionStatusRequest)
        -> UpdateDetectorVersionStatusResult;
    delete_detector_version(DeleteDetectorVersionRequest) -> DeleteDetectorVersionResult;

    // Rules
    create_rule(CreateRuleRequest) -> CreateRuleResult;
    get_rules(GetRulesRequest) -> GetRulesResult;
    update_rule_metadata(UpdateRuleMetadataRequest) -> UpdateRuleMetadataResult;
    update_rule_version(UpdateRuleVersionRequest) -> UpdateRuleVersionResult;
    delete_rule_version(DeleteRuleVersionRequest) -> DeleteRuleVersionResult;

    // Variables
    create_variable(CreateVariableRequest) -> CreateVariableResult;
    batch_create_variable(BatchCreateVariableRequest) -> BatchCreateVariableResult;
    batch_get_variable(BatchGetVariableRequest) -> BatchGetVariableResult;
    get_variables(GetVariablesRequest) -> GetVariablesResult;
    update_variable(UpdateVariableRequest) -> UpdateVariableResult;

    // Models
    put_model(PutModelRequest) -> PutModelResult;
    get_models(GetModelsRequest) -> GetModelsResult;
    create_model_version(CreateModelVersionRequest) -> CreateModelVersionResult;
    get_model_version(GetModelVersionRequest) -> GetModelVersionResult;
    describe_model_versions(DescribeModelVersionsRequest) -> DescribeModelVersionsResult;
    update_model_version(UpdateModelVersionRequest) -> UpdateModelVersionResult;

    // External models
    put_external_model(PutExternalModelRequest) -> PutExternalModelResult;
    get_external_models(GetExternalModelsRequest) -> GetExternalModelsResult;

    // Outcomes
    put_outcome(PutOutcomeRequest) -> PutOutcomeResult;
    get_outcomes(GetOutcomesRequest) -> GetOutcomesResult;

    // Events
    delete_event(DeleteEventRequest) -> DeleteEventResult;
    get_prediction(GetPredictionRequest) -> GetPredictionResult;
}
