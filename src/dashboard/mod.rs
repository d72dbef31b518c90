//! In-memory session state for the company dashboard.
//!
//! A [`Dashboard`] owns the current selection and the last company payload received for it.
//! Selecting a company or refreshing issues a sequenced request; only the response to the
//! most recent request is applied. Views are taken with [`Dashboard::snapshot`], which
//! recomputes every derived figure from the stored payload.

mod snapshot;

pub use snapshot::DashboardSnapshot;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    company_info::{CompanyEsgInfo, CompanyInfoBuilder},
    core::{EsgClient, EsgError, InFlight, RequestSequencer, RequestToken},
    scorecard::CompanyScorecard,
};

/// What happened to a company request once its response arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response belonged to the latest request and is now displayed.
    Applied,
    /// A newer request was issued meanwhile; the response was dropped.
    Discarded,
}

#[derive(Debug)]
struct SessionState {
    selected: CompanyScorecard,
    info: Option<CompanyEsgInfo>,
    last_error: Option<String>,
}

/// Shared handle to one dashboard session. Clones refer to the same session.
#[derive(Debug, Clone)]
pub struct Dashboard {
    client: EsgClient,
    sequencer: Arc<RequestSequencer>,
    in_flight: InFlight,
    state: Arc<RwLock<SessionState>>,
}

impl Dashboard {
    /// Start a session showing `initial` until company data is loaded.
    #[must_use]
    pub fn new(client: EsgClient, initial: CompanyScorecard) -> Self {
        Self {
            client,
            sequencer: Arc::new(RequestSequencer::new()),
            in_flight: InFlight::new(),
            state: Arc::new(RwLock::new(SessionState {
                selected: initial,
                info: None,
                last_error: None,
            })),
        }
    }

    /// Select a company and load its data.
    ///
    /// The selection takes effect immediately; the previous company's payload is dropped so
    /// the scorecard shows `selection` until the new data arrives.
    ///
    /// # Errors
    ///
    /// Returns the fetch error when the request is still the latest one. The error text is
    /// also kept for [`DashboardSnapshot::last_error`]. Failures of superseded requests are
    /// reported as [`FetchOutcome::Discarded`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, selection), err, fields(company = %selection.name)))]
    pub async fn select_company(&self, selection: CompanyScorecard) -> Result<FetchOutcome, EsgError> {
        let (token, name) = {
            let mut st = self.state.write().await;
            let token = self.sequencer.issue();
            st.selected = selection;
            st.info = None;
            st.last_error = None;
            (token, st.selected.name.clone())
        };
        self.load(token, &name).await
    }

    /// Reload data for the current selection, keeping what is displayed until it arrives.
    ///
    /// # Errors
    ///
    /// Same as [`select_company`](Self::select_company).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn refresh(&self) -> Result<FetchOutcome, EsgError> {
        let (token, name) = {
            let st = self.state.write().await;
            (self.sequencer.issue(), st.selected.name.clone())
        };
        self.load(token, &name).await
    }

    /// Whether any company request is outstanding.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.in_flight.active()
    }

    /// The client this session talks to.
    #[must_use]
    pub fn client(&self) -> &EsgClient {
        &self.client
    }

    /// A fresh view of the session.
    pub async fn snapshot(&self) -> DashboardSnapshot {
        let st = self.state.read().await;
        DashboardSnapshot::build(
            &st.selected,
            st.info.as_ref(),
            st.last_error.clone(),
            self.loading(),
        )
    }

    async fn load(&self, token: RequestToken, company: &str) -> Result<FetchOutcome, EsgError> {
        let _guard = self.in_flight.begin();
        let result = CompanyInfoBuilder::new(&self.client, company).fetch().await;

        let mut st = self.state.write().await;
        if !self.sequencer.is_current(token) {
            #[cfg(feature = "tracing")]
            tracing::debug!(token = token.value(), company, "discarding stale company response");
            return Ok(FetchOutcome::Discarded);
        }

        match result {
            Ok(info) => {
                st.info = Some(info);
                st.last_error = None;
                Ok(FetchOutcome::Applied)
            }
            // Whatever was displayed stays; a fresh selection was already cleared.
            Err(e) => {
                st.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
