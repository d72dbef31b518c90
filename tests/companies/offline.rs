use esg_signal::RiskLevel;
use httpmock::Method::GET;

use crate::common::{client_for, fixture, setup_server};

#[tokio::test]
async fn offline_company_list_drops_nameless_entries() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/company-list");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("company_list", "all", "json"));
    });

    let list = client_for(&server).company_list().await.unwrap();
    mock.assert();

    let names: Vec<&str> = list.iter().map(|c| c.company.as_str()).collect();
    assert_eq!(
        names,
        ["Apple Inc.", "Exxon Mobil Corporation", "Siemens AG", "Tesla, Inc."]
    );
    assert_eq!(list[2].region.as_deref(), Some("Europe"));
    assert_eq!(list[3].industry, None);
}

#[tokio::test]
async fn missing_companies_key_is_an_empty_list() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/company-list");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"count": 0}"#);
    });

    let list = client_for(&server).company_list().await.unwrap();
    mock.assert();
    assert!(list.is_empty());
}

#[tokio::test]
async fn listing_seeds_a_blank_selection() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/company-list");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("company_list", "all", "json"));
    });

    let list = client_for(&server).company_list().await.unwrap();
    mock.assert();

    let apple = list[0].to_selection();
    assert_eq!(apple.name, "Apple Inc.");
    assert_eq!(apple.symbol, "Apple Inc.");
    assert_eq!(apple.sector, "Technology");
    assert_eq!(apple.esg_score, 0);
    assert_eq!(apple.risk_level, RiskLevel::Critical);

    let tesla = list[3].to_selection();
    assert_eq!(tesla.sector, "");
}
