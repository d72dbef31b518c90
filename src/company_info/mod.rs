//! Per-company detail and history (`/company-esg-info`).

mod api;
mod model;
mod wire;

pub use model::{CompanyEsgInfo, PeerScore, RawCompanyInfo, TrendVsRest};

use crate::{EsgClient, EsgError};

/// A builder for fetching the detail payload of one company.
///
/// The service matches the name case-insensitively, falling back to a substring match.
#[derive(Debug, Clone)]
pub struct CompanyInfoBuilder {
    client: EsgClient,
    company: String,
    compare_with: Option<String>,
}

impl CompanyInfoBuilder {
    /// Creates a new `CompanyInfoBuilder` for a company name.
    pub fn new(client: &EsgClient, company: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            company: company.into(),
            compare_with: None,
        }
    }

    /// Also fetch the history of a second company for a side-by-side trend.
    #[must_use]
    pub fn compare_with(mut self, other: impl Into<String>) -> Self {
        self.compare_with = Some(other.into());
        self
    }

    /// Fetches the company row, its trend and its peer comparisons.
    ///
    /// # Errors
    ///
    /// Returns `EsgError::Backend` when the service reports an error in the body (for example
    /// an unknown company), or a transport/status/JSON error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(company = %self.company)))]
    pub async fn fetch(self) -> Result<CompanyEsgInfo, EsgError> {
        api::fetch_company_info(&self.client, &self.company, self.compare_with.as_deref()).await
    }
}

impl EsgClient {
    /// Shorthand for `CompanyInfoBuilder::new(self, company).fetch()`.
    ///
    /// # Errors
    ///
    /// See [`CompanyInfoBuilder::fetch`].
    pub async fn company_info(&self, company: &str) -> Result<CompanyEsgInfo, EsgError> {
        CompanyInfoBuilder::new(self, company).fetch().await
    }
}
