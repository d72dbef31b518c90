use esg_signal::EsgClient;
use httpmock::Method::GET;
use url::Url;

use crate::common::setup_server;

#[test]
fn default_points_at_local_service() {
    let client = EsgClient::builder().build().unwrap();
    assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8000/");
}

#[tokio::test]
async fn base_path_without_trailing_slash_is_kept() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/company-list");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"companies": [{"company": "Apple Inc."}]}"#);
    });

    let client = EsgClient::builder()
        .base_url(Url::parse(&format!("{}/api/v1", server.base_url())).unwrap())
        .build()
        .unwrap();
    assert!(client.base_url().path().ends_with("/api/v1/"));

    let list = client.company_list().await.unwrap();
    mock.assert();
    assert_eq!(list.len(), 1);
}
