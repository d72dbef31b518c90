use serde::Serialize;

use crate::scorecard::CompanyScorecard;

/// One searchable company as listed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyListing {
    /// Company name; doubles as the lookup key for company detail requests.
    pub company: String,
    /// Industry the company is classified under, if known.
    pub industry: Option<String>,
    /// Geographic region, if known.
    pub region: Option<String>,
}

impl CompanyListing {
    /// Whether this listing matches a free-text search term.
    ///
    /// Matching is a case-insensitive substring test on the company name or industry.
    /// An empty term matches everything.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.company.to_lowercase().contains(&needle)
            || self
                .industry
                .as_deref()
                .is_some_and(|i| i.to_lowercase().contains(&needle))
    }

    /// A scorecard seed for this listing, used as the fallback while detail data loads.
    ///
    /// The list carries no ticker, so the company name stands in for the symbol.
    /// Scores start at zero.
    #[must_use]
    pub fn to_selection(&self) -> CompanyScorecard {
        CompanyScorecard::seed(
            &self.company,
            &self.company,
            self.industry.as_deref().unwrap_or_default(),
        )
    }
}
