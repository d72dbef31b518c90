use esg_signal::{CompanyScorecard, Dashboard, FetchOutcome};
use httpmock::Method::GET;
use std::time::Duration;

use crate::common::{client_for, setup_server};

fn selection(name: &str) -> CompanyScorecard {
    CompanyScorecard::seed(name, name, "")
}

#[tokio::test]
async fn slow_earlier_response_never_overwrites_newer_selection() {
    let server = setup_server();
    let slow = server.mock(|when, then| {
        when.method(GET)
            .path("/company-esg-info")
            .query_param("company", "Alpha");
        then.status(200)
            .header("content-type", "application/json")
            .delay(Duration::from_millis(300))
            .body(r#"{"company": {"company": "Alpha", "esg_score": 20}}"#);
    });
    let fast = server.mock(|when, then| {
        when.method(GET)
            .path("/company-esg-info")
            .query_param("company", "Beta");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"company": {"company": "Beta", "esg_score": 90}}"#);
    });

    let dash = Dashboard::new(client_for(&server), selection("Start"));
    let (a, b) = futures::join!(dash.select_company(selection("Alpha")), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        dash.select_company(selection("Beta")).await
    });
    slow.assert();
    fast.assert();

    assert_eq!(a.unwrap(), FetchOutcome::Discarded);
    assert_eq!(b.unwrap(), FetchOutcome::Applied);

    let view = dash.snapshot().await;
    assert_eq!(view.scorecard.name, "Beta");
    assert_eq!(view.scorecard.esg_score, 90);
    assert!(!view.loading);
}

#[tokio::test]
async fn stale_failure_is_discarded_silently() {
    let server = setup_server();
    let slow = server.mock(|when, then| {
        when.method(GET)
            .path("/company-esg-info")
            .query_param("company", "Alpha");
        then.status(500)
            .delay(Duration::from_millis(300))
            .body("boom");
    });
    let fast = server.mock(|when, then| {
        when.method(GET)
            .path("/company-esg-info")
            .query_param("company", "Beta");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"company": {"company": "Beta", "esg_score": 55}}"#);
    });

    let dash = Dashboard::new(client_for(&server), selection("Start"));
    let (a, b) = futures::join!(dash.select_company(selection("Alpha")), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        dash.select_company(selection("Beta")).await
    });
    slow.assert();
    fast.assert();

    assert_eq!(a.unwrap(), FetchOutcome::Discarded);
    assert_eq!(b.unwrap(), FetchOutcome::Applied);

    let view = dash.snapshot().await;
    assert!(view.last_error.is_none());
    assert_eq!(view.scorecard.esg_score, 55);
}

#[tokio::test]
async fn loading_tracks_outstanding_requests() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/company-esg-info");
        then.status(200)
            .header("content-type", "application/json")
            .delay(Duration::from_millis(200))
            .body(r#"{"company": {"company": "Alpha"}}"#);
    });

    let dash = Dashboard::new(client_for(&server), selection("Alpha"));
    assert!(!dash.loading());

    let handle = tokio::spawn({
        let dash = dash.clone();
        async move { dash.refresh().await }
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(dash.loading());
    assert!(dash.snapshot().await.loading);

    assert_eq!(handle.await.unwrap().unwrap(), FetchOutcome::Applied);
    mock.assert();
    assert!(!dash.loading());
}

#[tokio::test]
async fn new_selection_clears_previous_payload_immediately() {
    let server = setup_server();
    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/company-esg-info")
            .query_param("company", "Alpha");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"company": {"company": "Alpha", "esg_score": 80},
                      "trend": [{"year": 2020, "actual_esg_score": 80, "predicted_esg_score": 79}]}"#);
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/company-esg-info")
            .query_param("company", "Beta");
        then.status(200)
            .header("content-type", "application/json")
            .delay(Duration::from_millis(200))
            .body(r#"{"company": {"company": "Beta", "esg_score": 30}}"#);
    });

    let dash = Dashboard::new(client_for(&server), selection("Alpha"));
    dash.refresh().await.unwrap();
    first.assert();
    assert_eq!(dash.snapshot().await.trend.len(), 1);

    let pending = tokio::spawn({
        let dash = dash.clone();
        async move { dash.select_company(selection("Beta")).await }
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    let mid = dash.snapshot().await;
    assert_eq!(mid.scorecard.name, "Beta");
    assert_eq!(mid.scorecard.esg_score, 0);
    assert!(mid.trend.is_empty());
    assert!(mid.loading);

    assert_eq!(pending.await.unwrap().unwrap(), FetchOutcome::Applied);
    second.assert();
    assert_eq!(dash.snapshot().await.scorecard.esg_score, 30);
}
