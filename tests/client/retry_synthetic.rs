use esg_signal::{Backoff, EsgClient, EsgError, RetryConfig};
use httpmock::Method::GET;
use std::time::Duration;
use url::Url;

use crate::common::setup_server;

fn retrying_client(server: &httpmock::MockServer, max_retries: u32) -> EsgClient {
    let mut cfg = RetryConfig::enabled();
    cfg.backoff = Backoff::Fixed(Duration::from_millis(1));
    cfg.max_retries = max_retries;

    EsgClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .retry_config(cfg)
        .build()
        .unwrap()
}

#[tokio::test]
async fn retries_on_persistent_5xx_when_enabled() {
    let server = setup_server();
    let fail = server.mock(|when, then| {
        when.method(GET).path("/company-list");
        then.status(503).body("Service Unavailable");
    });

    let max_retries = 3;
    let result = retrying_client(&server, max_retries).company_list().await;

    // 1 initial attempt + 3 retries.
    assert_eq!(fail.calls(), (1 + max_retries) as usize);
    match result {
        Err(EsgError::Status { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected Status error after retries, got {other:?}"),
    }
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = setup_server();
    let missing = server.mock(|when, then| {
        when.method(GET).path("/model/metrics");
        then.status(404).body("{}");
    });

    let result = retrying_client(&server, 3).model_metrics().await;
    assert_eq!(missing.calls(), 1);
    assert!(matches!(result, Err(EsgError::Status { status: 404, .. })));
}

#[test]
fn retries_are_off_by_default() {
    let cfg = RetryConfig::default();
    assert!(!cfg.enabled);
    assert!(RetryConfig::enabled().enabled);
}

#[test]
fn exponential_backoff_is_capped() {
    let b = Backoff::Exponential {
        base: Duration::from_millis(100),
        factor: 2.0,
        max: Duration::from_millis(500),
    };
    let ms: Vec<u128> = [0, 1, 2, 3, 40].map(|a| b.delay(a).as_millis()).to_vec();
    assert_eq!(ms, [100, 200, 400, 500, 500]);
}
