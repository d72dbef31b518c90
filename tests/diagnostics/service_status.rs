use esg_signal::ServiceStatus;
use httpmock::Method::GET;

use crate::common::{client_for, setup_server};

#[tokio::test]
async fn healthy_and_ready() {
    let server = setup_server();
    let health = server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"status": "ok"}"#);
    });
    let ready = server.mock(|when, then| {
        when.method(GET).path("/readiness");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"ready": true}"#);
    });

    let status = client_for(&server).service_status().await;
    health.assert();
    ready.assert();
    assert_eq!(
        status,
        ServiceStatus {
            healthy: true,
            ready: true
        }
    );
}

#[tokio::test]
async fn failures_count_as_down() {
    let server = setup_server();
    let health = server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"status": "degraded"}"#);
    });
    let ready = server.mock(|when, then| {
        when.method(GET).path("/readiness");
        then.status(503).body("starting");
    });

    let status = client_for(&server).service_status().await;
    health.assert();
    ready.assert();
    assert!(!status.healthy);
    assert!(!status.ready);
}

#[tokio::test]
async fn individual_checks_surface_errors() {
    let server = setup_server();
    let health = server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"status": "ok"}"#);
    });
    let ready = server.mock(|when, then| {
        when.method(GET).path("/readiness");
        then.status(503).body("starting");
    });

    let client = client_for(&server);
    assert!(client.health().await.unwrap());
    let err = client.readiness().await.unwrap_err();
    health.assert();
    ready.assert();
    assert!(matches!(err, esg_signal::EsgError::Status { status: 503, .. }));
}
