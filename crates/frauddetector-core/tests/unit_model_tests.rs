//! Unit tests for the Fraud Detector data model
//!
//! Tests identifiers, vocabularies, wire shapes and value equality

use frauddetector_core::map::insert_unique;
use frauddetector_core::model::*;
use frauddetector_core::types::*;
use frauddetector_core::validation::{check_identifier, Validate};
use frauddetector_core::ValidationError;
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Identifier Tests
// =============================================================================

#[test]
fn test_identifier_fields_reject_malformed_values() {
    let long = "a".repeat(65);
    let rejected = ["", "Fraud", "fraud detector", "fraud/1", "fraud.1", "ünïcode", long.as_str()];
    for value in rejected {
        let err = check_identifier("detectorId", value).unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidIdentifier { .. }),
            "{value:?} should be rejected"
        );
    }

    let accepted = ["fraud1", "high-amount", "_", "-", "0", "abc_def-123"];
    for value in accepted {
        assert!(check_identifier("detectorId", value).is_ok(), "{value:?} should be accepted");
    }
}

#[test]
fn test_rule_reference_checks_each_identifier() {
    let cases = [
        (Rule::new("Fraud1", "r", "1"), "detectorId"),
        (Rule::new("fraud1", "", "1"), "ruleId"),
        (Rule::new("fraud1", "r", "v1"), "ruleVersion"),
    ];
    for (rule, field) in cases {
        assert_eq!(rule.validate().unwrap_err().field(), field);
    }
}

// =============================================================================
// Vocabulary Tests
// =============================================================================

#[test]
fn test_vocabularies_accept_only_documented_literals() {
    assert_eq!(DetectorVersionStatus::allowed_values(), "DRAFT, ACTIVE, INACTIVE");
    assert_eq!(DataSource::allowed_values(), "EVENT, MODEL_SCORE, EXTERNAL_MODEL_SCORE");
    assert_eq!(ModelEndpointStatus::allowed_values(), "ASSOCIATED, DISSOCIATED");
    assert_eq!(Language::allowed_values(), "DETECTORPL");
    assert_eq!(ModelSource::allowed_values(), "SAGEMAKER");
    assert_eq!(TrainingDataSourceEnum::allowed_values(), "EXTERNAL_EVENTS");

    for literal in ["draft", "Active", "DELETED", ""] {
        assert!(literal.parse::<DetectorVersionStatus>().is_err());
    }
    for literal in ["FIRST_MATCH", "ALL", "all_matched"] {
        assert!(literal.parse::<RuleExecutionMode>().is_err());
    }
}

#[test]
fn test_every_variant_round_trips_through_its_literal() {
    for status in ModelVersionStatus::ALL {
        let json = serde_json::to_string(status).unwrap();
        assert_eq!(json, format!("\"{}\"", status.as_str()));
        let back: ModelVersionStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, *status);
    }
    for format in ModelInputDataFormat::ALL {
        assert_eq!(format.as_str().parse::<ModelInputDataFormat>().unwrap(), *format);
    }
}

// =============================================================================
// Value Object Tests
// =============================================================================

fn sample_model_version_detail() -> ModelVersionDetail {
    let mut training_metrics = BTreeMap::new();
    training_metrics.insert("auc".to_string(), "0.93".to_string());

    ModelVersionDetail {
        model_id: Some("onlinefraud".to_string()),
        model_type: Some(ModelTypeEnum::OnlineFraudInsights),
        model_version_number: Some("1.0".to_string()),
        description: Some("first training run".to_string()),
        status: Some(ModelVersionStatus::TrainingComplete),
        training_data_source: Some(TrainingDataSource::new(
            "s3://fraud-training/events.csv",
            "arn:aws:iam::123456789012:role/FraudDetectorTraining",
        )),
        model_variables: vec![
            ModelVariable::new("amount").with_index(0),
            ModelVariable::new("email_address").with_index(1),
        ],
        label_schema: Some(
            LabelSchema::new("is_fraud")
                .add_label_mapping("FRAUD", ["1"])
                .unwrap()
                .add_label_mapping("LEGIT", ["0"])
                .unwrap(),
        ),
        validation_metrics: BTreeMap::new(),
        training_metrics,
        last_updated_time: Some("2020-06-01T12:00:00Z".to_string()),
        created_time: Some("2020-06-01T10:00:00Z".to_string()),
    }
}

#[test]
fn test_model_version_detail_wire_round_trip() -> anyhow::Result<()> {
    let detail = sample_model_version_detail();
    let json = serde_json::to_string(&detail)?;
    let back: ModelVersionDetail = serde_json::from_str(&json)?;
    assert_eq!(back, detail);
    assert_eq!(
        detail.model_version(),
        Some(ModelVersion::new("onlinefraud", ModelTypeEnum::OnlineFraudInsights, "1.0"))
    );
    Ok(())
}

#[test]
fn test_external_model_wire_round_trip() {
    let model = ExternalModel {
        model_endpoint: Some("sagemaker-fraud-xgb".to_string()),
        model_source: Some(ModelSource::Sagemaker),
        role: Some(Role::new(
            "arn:aws:iam::123456789012:role/FraudDetectorInvoke",
            "FraudDetectorInvoke",
        )),
        input_configuration: Some(ModelInputConfiguration::csv("{{amount}},{{currency}}")),
        output_configuration: Some(
            ModelOutputConfiguration::new(ModelOutputDataFormat::TextCsv)
                .map_csv_index(0, "xgb_score")
                .unwrap(),
        ),
        model_endpoint_status: Some(ModelEndpointStatus::Associated),
        last_updated_time: None,
        created_time: None,
    };
    let json = serde_json::to_value(&model).unwrap();
    assert_eq!(json["modelEndpointStatus"], "ASSOCIATED");
    assert_eq!(json["inputConfiguration"]["csvInputTemplate"], "{{amount}},{{currency}}");
    assert!(json.get("createdTime").is_none());

    let back: ExternalModel = serde_json::from_value(json).unwrap();
    assert_eq!(back, model);
    assert!(back.is_associated());
}

#[test]
fn test_building_twice_gives_equal_values_and_hashes() {
    let build = || {
        ModelOutputConfiguration::new(ModelOutputDataFormat::ApplicationJsonlines)
            .map_json_key("score", "xgb_score")
            .unwrap()
            .map_json_key("label", "xgb_label")
            .unwrap()
    };
    assert_eq!(build(), build());
    assert_eq!(hash_of(&build()), hash_of(&build()));

    let a = sample_model_version_detail();
    let b = sample_model_version_detail();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let v1 = VariableEntry::new("amount", DataType::Float, DataSource::Event).with_default_value("0.0");
    let v2 = VariableEntry::new("amount", DataType::Float, DataSource::Event).with_default_value("0.0");
    assert_eq!(hash_of(&v1), hash_of(&v2));
}

#[test]
fn test_map_insertion_is_order_independent() {
    let mut forward = BTreeMap::new();
    insert_unique(&mut forward, "eventAttributes", "amount", "10").unwrap();
    insert_unique(&mut forward, "eventAttributes", "currency", "USD").unwrap();

    let mut backward = BTreeMap::new();
    insert_unique(&mut backward, "eventAttributes", "currency", "USD").unwrap();
    insert_unique(&mut backward, "eventAttributes", "amount", "10").unwrap();

    assert_eq!(forward, backward);
    assert_eq!(
        serde_json::to_string(&forward).unwrap(),
        serde_json::to_string(&backward).unwrap()
    );
}

#[test]
fn test_model_scores_lookup() {
    let scores: ModelScores = serde_json::from_value(serde_json::json!({
        "modelVersion": {
            "modelId": "onlinefraud",
            "modelType": "ONLINE_FRAUD_INSIGHTS",
            "modelVersionNumber": "1.0"
        },
        "scores": {"onlinefraud_insightscore": 912.0}
    }))
    .unwrap();
    assert_eq!(scores.score("onlinefraud_insightscore"), Some(912.0));
    assert_eq!(scores.score("missing"), None);
}

#[test]
fn test_decoded_maps_reject_repeated_keys() {
    let label_schema = r#"{"labelKey": "is_fraud", "labelMapper": {"FRAUD": ["1"], "FRAUD": ["yes"]}}"#;
    assert!(serde_json::from_str::<LabelSchema>(label_schema).is_err());

    let scores = r#"{"scores": {"insightscore": 10.0, "insightscore": 900.0}}"#;
    assert!(serde_json::from_str::<ModelScores>(scores).is_err());

    let output = r#"{"format": "TEXT_CSV", "csvIndexToVariableMap": {"0": "score", "0": "other"}}"#;
    assert!(serde_json::from_str::<ModelOutputConfiguration>(output).is_err());

    let scores: ModelScores = serde_json::from_str(r#"{"scores": {"insightscore": 900.0}}"#).unwrap();
    assert_eq!(scores.score("insightscore"), Some(900.0));
}
