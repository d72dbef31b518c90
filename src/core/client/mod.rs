//! Public client surface + builder.
//! Defaults live in `constants`; the retry policy lives in `retry`.

pub(crate) mod constants;
mod retry;

pub use constants::BASE_URL_ENV;
pub use retry::{Backoff, RetryConfig};

use crate::core::EsgError;
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use url::Url;

/// Handle to the ESG scoring service.
///
/// Holds a configured HTTP client and the service base URL. Cloning is cheap and clones
/// share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct EsgClient {
    http: Client,
    base: Url,
    retry: RetryConfig,
}

impl EsgClient {
    /// Create a new builder.
    pub fn builder() -> EsgClientBuilder {
        EsgClientBuilder::default()
    }

    /// Build a client whose base URL comes from the `ESG_API_URL` environment variable,
    /// falling back to the local default when it is unset or empty.
    ///
    /// # Errors
    ///
    /// Returns `EsgError::Url` if the variable is set to something that is not a URL.
    pub fn from_env() -> Result<Self, EsgError> {
        let mut builder = Self::builder();
        if let Ok(raw) = std::env::var(BASE_URL_ENV) {
            let raw = raw.trim();
            if !raw.is_empty() {
                builder = builder.base_url(Url::parse(raw)?);
            }
        }
        builder.build()
    }

    /// The base URL every endpoint path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Resolve an endpoint path (with or without a leading `/`) against the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, EsgError> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }

    /// Send a request, retrying according to the client's policy.
    ///
    /// The returned response may still carry a non-2xx status; callers decide how to map it.
    /// Requests whose body cannot be cloned (multipart uploads) are sent exactly once.
    pub(crate) async fn send_with_retry(&self, req: RequestBuilder) -> Result<Response, EsgError> {
        let cfg = &self.retry;
        let mut pending = req;
        let mut attempt: u32 = 0;

        loop {
            let next = if cfg.enabled && attempt < cfg.max_retries {
                pending.try_clone()
            } else {
                None
            };

            let retryable = match pending.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if resp.status().is_success() || !cfg.should_retry_status(status) {
                        return Ok(resp);
                    }
                    match next {
                        Some(n) => n,
                        None => return Ok(resp),
                    }
                }
                Err(e) => {
                    if !cfg.should_retry_error(&e) {
                        return Err(e.into());
                    }
                    match next {
                        Some(n) => n,
                        None => return Err(e.into()),
                    }
                }
            };

            let delay = cfg.backoff.delay(attempt);
            #[cfg(feature = "tracing")]
            tracing::debug!(attempt, ?delay, "retrying request");
            tokio::time::sleep(delay).await;
            attempt += 1;
            pending = retryable;
        }
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`EsgClient`].
#[derive(Default, Debug)]
pub struct EsgClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl EsgClientBuilder {
    /// Override the service base URL (default `http://127.0.0.1:8000`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Set the retry policy. Default: [`RetryConfig::default`], which does not retry.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL fails to parse or the HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<EsgClient, EsgError> {
        let mut base = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        // `Url::join` replaces the last path segment unless the base ends with '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(EsgClient {
            http: httpb.build()?,
            base,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
