use esg_signal::{EsgError, PredictionField, PredictionInput};
use httpmock::Method::POST;
use serde_json::json;

use crate::common::{client_for, setup_server};

#[tokio::test]
async fn posts_all_seven_inputs_as_json() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/predict").json_body(json!({
            "environmental_score": 82.0,
            "social_score": 75.0,
            "governance_score": 77.0,
            "carbon_emissions": 22_600_000.0,
            "employee_satisfaction": 81.0,
            "board_diversity": 38.5,
            "controversies": 12.0
        }));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"predicted_esg_score": 77.91, "model_version": "rf-200"}"#);
    });

    let input = PredictionInput::new()
        .with(PredictionField::EnvironmentalScore, 82.0)
        .with(PredictionField::SocialScore, 75.0)
        .with(PredictionField::GovernanceScore, 77.0)
        .with(PredictionField::CarbonEmissions, 22_600_000.0)
        .with(PredictionField::EmployeeSatisfaction, 81.0)
        .with(PredictionField::BoardDiversity, 38.5)
        .with(PredictionField::Controversies, 12.0);

    let out = client_for(&server).predict(&input).await.unwrap();
    mock.assert();

    assert_eq!(out.predicted_esg_score, Some(77.91));
    assert_eq!(out.extra.get("model_version"), Some(&json!("rf-200")));
}

#[tokio::test]
async fn server_error_is_reported_not_retried_by_default() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(503).body("busy");
    });

    let err = client_for(&server)
        .predict(&PredictionInput::new())
        .await
        .unwrap_err();

    assert_eq!(mock.calls(), 1);
    assert!(matches!(err, EsgError::Status { status: 503, .. }), "got {err:?}");
}
