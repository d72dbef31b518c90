use crate::core::{EsgClient, EsgError};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Read the response body as text.
/// In `test-mode`, if `ESG_RECORD=1`, the body is saved as a fixture.
pub(crate) async fn get_text(
    resp: Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if std::env::var("ESG_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &text)
        {
            eprintln!("ESG_RECORD: failed to write fixture for {_key}: {e}");
        }
    }

    Ok(text)
}

/// Send `req`, require a 2xx status and decode the JSON body into `T`.
///
/// `endpoint` and `key` only name the fixture file when recording.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    client: &EsgClient,
    req: RequestBuilder,
    endpoint: &str,
    key: &str,
) -> Result<T, EsgError> {
    let resp = client.send_with_retry(req).await?;
    if !resp.status().is_success() {
        return Err(EsgError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    let text = get_text(resp, endpoint, key, "json").await?;
    Ok(serde_json::from_str(&text)?)
}

/// Convenience for a GET against `path` without query parameters.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &EsgClient,
    path: &str,
) -> Result<T, EsgError> {
    let url = client.endpoint(path)?;
    let fixture = path.replace('/', "_");
    fetch_json(client, client.http().get(url), &fixture, "all").await
}
