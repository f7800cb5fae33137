//! Unit tests for FraudDetectorClient

use super::*;
use crate::config::ClientConfig;
use crate::error::SdkError;
use crate::operations::*;
use crate::transport::{ServiceErrorKind, Transport, TransportError};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays canned replies in order and records every call
#[derive(Default)]
struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<Value, TransportError>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl ScriptedTransport {
    fn reply(self, body: Value) -> Self {
        self.replies.lock().unwrap().push_back(Ok(body));
        self
    }

    fn fail(self, err: TransportError) -> Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn invoke(&self, target: &str, body: Value) -> Result<Value, TransportError> {
        self.calls.lock().unwrap().push((target.to_string(), body));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connection("no scripted reply".to_string())))
    }
}

fn client(transport: ScriptedTransport) -> FraudDetectorClient<ScriptedTransport> {
    FraudDetectorClient::new(ClientConfig::default(), transport)
}

#[tokio::test]
async fn test_send_targets_operation() {
    let client = client(ScriptedTransport::default().reply(json!({})));

    let result = client
        .put_outcome(PutOutcomeRequest::new("review"))
        .await
        .unwrap();
    assert_eq!(result, PutOutcomeResult::default());

    let calls = client.transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "AWSHawksNestServiceFacade.PutOutcome");
    assert_eq!(calls[0].1, json!({"name": "review"}));
}

#[tokio::test]
async fn test_invalid_request_never_sent() {
    let client = client(ScriptedTransport::default());

    let err = client
        .get_detectors(GetDetectorsRequest::new().with_max_results(15))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SdkError::Validation(frauddetector_core::ValidationError::InvalidRange { value: 15, .. })
    ));
    assert!(client.transport().calls().is_empty());
}

#[tokio::test]
async fn test_null_body_reads_as_ack() {
    let client = client(ScriptedTransport::default().reply(Value::Null));
    let result = client
        .delete_event(DeleteEventRequest::new("evt-1"))
        .await
        .unwrap();
    assert_eq!(result, DeleteEventResult::default());
}

#[tokio::test]
async fn test_service_error_surfaces_kind() {
    let client = client(ScriptedTransport::default().fail(TransportError::from_code(
        "ConflictException",
        "rule version is used by an active detector version",
    )));

    let err = client
        .delete_rule_version(DeleteRuleVersionRequest::new("fraud1", "high-amount", "1"))
        .await
        .unwrap_err();
    assert_eq!(err.service_kind(), Some(ServiceErrorKind::Conflict));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_malformed_response_is_serialization_error() {
    let client = client(ScriptedTransport::default().reply(json!({"detectors": "nope"})));
    let err = client.get_detectors(GetDetectorsRequest::new()).await.unwrap_err();
    assert!(matches!(err, SdkError::Serialization(_)));
}

#[tokio::test]
async fn test_collect_pages_passes_token_verbatim() {
    let transport = ScriptedTransport::default()
        .reply(json!({
            "detectors": [{"detectorId": "fraud1"}, {"detectorId": "fraud2"}],
            "nextToken": "opaque/token==1"
        }))
        .reply(json!({
            "detectors": [{"detectorId": "fraud3"}],
            "nextToken": ""
        }));
    let client = client(transport);

    let detectors = client
        .collect_pages(GetDetectorsRequest::new().with_max_results(10))
        .await
        .unwrap();
    let ids: Vec<_> = detectors.iter().map(|d| d.detector_id.as_str()).collect();
    assert_eq!(ids, ["fraud1", "fraud2", "fraud3"]);

    let calls = client.transport().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1, json!({"maxResults": 10}));
    assert_eq!(calls[1].1, json!({"maxResults": 10, "nextToken": "opaque/token==1"}));
}

#[tokio::test]
async fn test_page_limit() {
    let transport = ScriptedTransport::default()
        .reply(json!({"outcomes": [{"name": "a"}], "nextToken": "t1"}))
        .reply(json!({"outcomes": [{"name": "b"}], "nextToken": "t2"}));
    let client = FraudDetectorClient::new(ClientConfig::new().with_max_pages(2), transport);

    let err = client.collect_pages(GetOutcomesRequest::new()).await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::PageLimitExceeded { operation: "GetOutcomes", pages: 2 }
    ));
    assert_eq!(client.transport().calls().len(), 2);
}

#[tokio::test]
async fn test_paginator_stops_after_last_page() {
    let transport = ScriptedTransport::default().reply(json!({
        "ruleDetails": [{"ruleId": "high-amount", "ruleVersion": "1"}]
    }));
    let client = client(transport);

    let mut pages = client.paginate(GetRulesRequest::new("fraud1"));
    let first = pages.next_page().await.unwrap().unwrap();
    assert_eq!(first.rule_details.len(), 1);
    assert!(pages.next_page().await.unwrap().is_none());
    assert_eq!(pages.pages(), 1);
    assert_eq!(client.transport().calls().len(), 1);
}

#[tokio::test]
async fn test_clones_share_transport() {
    let client = client(
        ScriptedTransport::default()
            .reply(json!({}))
            .reply(json!({})),
    );
    let other = client.clone();

    client.put_detector(PutDetectorRequest::new("fraud1")).await.unwrap();
    other.put_detector(PutDetectorRequest::new("fraud2")).await.unwrap();
    assert_eq!(client.transport().calls().len(), 2);
}
