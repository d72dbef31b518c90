//! The searchable company directory (`/company-list`).

mod api;
mod model;
mod wire;

pub use model::CompanyListing;

use crate::{EsgClient, EsgError};

impl EsgClient {
    /// Fetches every company the scoring service knows about.
    ///
    /// A response without a `companies` key yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 2xx, or the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn company_list(&self) -> Result<Vec<CompanyListing>, EsgError> {
        api::fetch_company_list(self).await
    }
}

/// Filters a company list by a free-text term, preserving order.
#[must_use]
pub fn filter_companies<'a>(list: &'a [CompanyListing], term: &str) -> Vec<&'a CompanyListing> {
    list.iter().filter(|c| c.matches(term)).collect()
}
