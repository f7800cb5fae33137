//! Continuation token handling across listing operations

mod common;

use common::{scripted_client, ScriptedTransport};
use frauddetector_sdk::operations::*;
use frauddetector_sdk::{
    ClientConfig, FraudDetectorClient, Paginated, PaginatedOperation, SdkError,
};
use serde_json::json;
use std::sync::Arc;

#[test]
fn test_absent_and_empty_tokens_end_listing() {
    let page: GetRulesResult = serde_json::from_value(json!({"ruleDetails": []})).unwrap();
    assert_eq!(Paginated::next_token(&page), None);

    let page: GetVariablesResult =
        serde_json::from_value(json!({"variables": [], "nextToken": ""})).unwrap();
    assert_eq!(page.next_token, None);

    let page: DescribeDetectorResult =
        serde_json::from_value(json!({"nextToken": "abc"})).unwrap();
    assert_eq!(Paginated::next_token(&page), Some("abc"));
}

#[test]
fn test_with_next_token_keeps_filters() {
    let request = GetRulesRequest::new("fraud1")
        .with_rule_id("high-amount")
        .with_max_results(60);
    let next = request.with_next_token("t-2".to_string());

    assert_eq!(PaginatedOperation::next_token(&next), Some("t-2"));
    assert_eq!(next.rule_id.as_deref(), Some("high-amount"));
    assert_eq!(next.max_results, Some(60));
    assert_eq!(PaginatedOperation::next_token(&request), None);
}

#[tokio::test]
async fn test_collect_model_versions_across_pages() -> anyhow::Result<()> {
    let (client, transport) = scripted_client(
        ScriptedTransport::new()
            .with_reply(json!({
                "modelVersionDetails": [{"modelId": "m", "modelVersionNumber": "1.0"}],
                "nextToken": "page-2"
            }))
            .with_reply(json!({
                "modelVersionDetails": [{"modelId": "m", "modelVersionNumber": "2.0"}],
                "nextToken": "page-3"
            }))
            .with_reply(json!({
                "modelVersionDetails": [{"modelId": "m", "modelVersionNumber": "3.0"}]
            })),
    );

    let details = client
        .collect_pages(DescribeModelVersionsRequest::new().with_model_id("m"))
        .await?;
    let numbers: Vec<_> = details
        .iter()
        .filter_map(|d| d.model_version_number.as_deref())
        .collect();
    assert_eq!(numbers, ["1.0", "2.0", "3.0"]);

    let tokens: Vec<_> = transport
        .calls()
        .iter()
        .map(|c| c.body.get("nextToken").and_then(|t| t.as_str()).map(str::to_string))
        .collect();
    assert_eq!(
        tokens,
        [None, Some("page-2".to_string()), Some("page-3".to_string())]
    );
    Ok(())
}

#[tokio::test]
async fn test_page_budget_enforced() {
    let transport = Arc::new(
        ScriptedTransport::new()
            .with_reply(json!({"externalModels": [], "nextToken": "a"}))
            .with_reply(json!({"externalModels": [], "nextToken": "b"}))
            .with_reply(json!({"externalModels": [], "nextToken": "c"})),
    );
    let client = FraudDetectorClient::from_shared(
        ClientConfig::new().with_max_pages(3),
        Arc::clone(&transport),
    );

    let err = client
        .collect_pages(GetExternalModelsRequest::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SdkError::PageLimitExceeded { operation: "GetExternalModels", pages: 3 }
    ));
    assert_eq!(transport.calls().len(), 3);
}

#[tokio::test]
async fn test_manual_paging() -> anyhow::Result<()> {
    let (client, _transport) = scripted_client(
        ScriptedTransport::new()
            .with_reply(json!({"models": [{"modelId": "a"}], "nextToken": "n"}))
            .with_reply(json!({"models": [{"modelId": "b"}]})),
    );

    let mut paginator = client.paginate(GetModelsRequest::new().with_max_results(1));
    let mut ids = Vec::new();
    while let Some(page) = paginator.next_page().await? {
        ids.extend(page.models.into_iter().filter_map(|m| m.model_id));
    }
    assert_eq!(ids, ["a", "b"]);
    assert_eq!(paginator.pages(), 2);
    Ok(())
}

#[tokio::test]
async fn test_retry_after_throttling_resumes_same_page() -> anyhow::Result<()> {
    let (client, transport) = scripted_client(
        ScriptedTransport::new()
            .with_reply(json!({"detectors": [{"detectorId": "fraud1"}], "nextToken": "p2"}))
            .with_error("ThrottlingException", "Rate exceeded")
            .with_reply(json!({"detectors": [{"detectorId": "fraud2"}]})),
    );

    let mut paginator = client.paginate(GetDetectorsRequest::new());
    assert!(paginator.next_page().await?.is_some());

    let err = paginator.next_page().await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(paginator.pages(), 1);

    let page = paginator.next_page().await?.expect("page after retry");
    let ids: Vec<_> = page.detectors.into_iter().map(|d| d.detector_id).collect();
    assert_eq!(ids, ["fraud2"]);
    assert!(paginator.next_page().await?.is_none());

    let tokens: Vec<_> = transport
        .calls()
        .iter()
        .map(|c| c.body.get("nextToken").and_then(|t| t.as_str()).map(str::to_string))
        .collect();
    assert_eq!(tokens, [None, Some("p2".to_string()), Some("p2".to_string())]);
    Ok(())
}
