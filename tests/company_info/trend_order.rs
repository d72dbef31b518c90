use httpmock::Method::GET;

use crate::common::{client_for, setup_server};

#[tokio::test]
async fn missing_years_sort_first_and_get_positional_labels() {
    let server = setup_server();
    let body = r#"{
        "trend": [
            {"year": 2021, "actual_esg_score": 70.0, "predicted_esg_score": 71.0},
            {"actual_esg_score": 50.0, "predicted_esg_score": 52.0},
            {"year": "n/a", "actual_esg_score": 55.0, "predicted_esg_score": 53.0},
            {"year": 2019, "actual_esg_score": 60.0, "predicted_esg_score": 58.0},
            {"year": 0, "actual_esg_score": 1.0, "predicted_esg_score": 2.0}
        ]
    }"#;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/company-esg-info");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let info = client_for(&server).company_info("Acme").await.unwrap();
    mock.assert();

    let labels: Vec<&str> = info.trend.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, ["Point 1", "Point 2", "Point 3", "2019", "2021"]);

    // Stable: the three year-less points keep their relative order.
    let actuals: Vec<Option<f64>> = info.trend.iter().map(|p| p.actual).collect();
    assert_eq!(
        actuals,
        [Some(50.0), Some(55.0), Some(1.0), Some(60.0), Some(70.0)]
    );
}

#[tokio::test]
async fn numeric_string_and_fractional_years_keep_their_value() {
    let server = setup_server();
    let body = r#"{
        "trend": [
            {"year": "2021", "actual_esg_score": 70.0, "predicted_esg_score": 71.0},
            {"year": 2019.0, "actual_esg_score": 60.0, "predicted_esg_score": 58.0},
            {"year": " 2020 ", "actual_esg_score": 65.0, "predicted_esg_score": 64.0},
            {"year": 2022.5, "actual_esg_score": 72.0, "predicted_esg_score": 73.0}
        ]
    }"#;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/company-esg-info");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let info = client_for(&server).company_info("Acme").await.unwrap();
    mock.assert();

    let labels: Vec<&str> = info.trend.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, ["2019", "2020", "2021", "2022"]);
    assert_eq!(info.trend[2].year, Some(2021));
}
