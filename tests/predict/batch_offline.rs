use esg_signal::{BatchPredictions, BatchUpload, EsgError};
use httpmock::Method::POST;

use crate::common::{client_for, fixture, fixture_path, setup_server};

fn staged(name: &str) -> BatchUpload {
    let bytes = std::fs::read(fixture_path("upload_valid.csv")).unwrap();
    BatchUpload::from_bytes(name, bytes).unwrap()
}

#[tokio::test]
async fn offline_batch_prediction_uses_recorded_fixture() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/predict-csv");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("predict_csv", "batch", "json"));
    });

    let out = client_for(&server).predict_csv(staged("batch")).await.unwrap();
    mock.assert();

    assert_eq!(out.len(), 3);
    assert_eq!(
        &out.columns()[..3],
        ["company", "predicted_esg_score", "actual_esg_score"]
    );
    assert_eq!(BatchPredictions::column_label("predicted_esg_score"), "predicted esg score");
    assert_eq!(BatchPredictions::cell(&out.rows[0], "company"), "Apple Inc.");
    assert_eq!(BatchPredictions::cell(&out.rows[1], "actual_esg_score"), "");
    assert_eq!(BatchPredictions::cell(&out.rows[2], "controversies"), "71.0");
    assert_eq!(BatchPredictions::cell(&out.rows[2], "missing"), "");

    let points = out.as_points();
    assert_eq!(points[1].label, "Unknown Co");
    assert_eq!(points[1].actual, None);

    let acc = out.accuracy().unwrap();
    assert!((acc.mae - 2.05).abs() < 1e-9);
    assert!((acc.rmse - 8.005_f64.sqrt()).abs() < 1e-9);
    assert_eq!(acc.latest.label, "Exxon Mobil Corporation");
}

#[tokio::test]
async fn rows_without_company_get_positional_labels() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/predict-csv");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"predicted_esg_score": 50.0}, null, {"predicted_esg_score": 60.0}]"#);
    });

    let out = client_for(&server).predict_csv(staged("anon.csv")).await.unwrap();
    mock.assert();

    let labels: Vec<String> = out.as_points().into_iter().map(|p| p.label).collect();
    assert_eq!(labels, ["Row 1", "Row 2"]);
    assert!(out.accuracy().is_none());
}

#[tokio::test]
async fn empty_result_has_no_columns() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/predict-csv");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let out = client_for(&server).predict_csv(staged("batch.csv")).await.unwrap();
    mock.assert();
    assert!(out.is_empty());
    assert!(out.columns().is_empty());
}

#[tokio::test]
async fn rejected_upload_surfaces_status() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/predict-csv");
        then.status(422).body(r#"{"detail": "bad file"}"#);
    });

    let err = client_for(&server)
        .predict_csv(staged("batch.csv"))
        .await
        .unwrap_err();
    mock.assert();
    assert!(matches!(err, EsgError::Status { status: 422, .. }), "got {err:?}");
}

#[tokio::test]
async fn error_object_instead_of_rows() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/predict-csv");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"error": "Model not trained"}"#);
    });

    let err = client_for(&server)
        .predict_csv(staged("batch.csv"))
        .await
        .unwrap_err();
    mock.assert();
    assert_eq!(err.to_string(), "Model not trained");
}

#[tokio::test]
async fn scalar_body_is_a_data_error() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/predict-csv");
        then.status(200)
            .header("content-type", "application/json")
            .body("42");
    });

    let err = client_for(&server)
        .predict_csv(staged("batch.csv"))
        .await
        .unwrap_err();
    mock.assert();
    assert!(matches!(err, EsgError::Data(_)), "got {err:?}");
}
