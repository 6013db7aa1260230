//! Selection change -> fetch -> chart data, independent of the UI runtime.
//!
//! A fetch is split at its await point so callers holding reactive state
//! (which cannot be borrowed across `.await`) can drive it:
//!
//! 1. [`PendingFetch::begin`] issues a ticket and captures the query.
//! 2. [`PendingFetch::run`] performs the request through any fetcher.
//! 3. [`CompletedFetch::resolve`] checks the ticket and pivots the records.

use crate::chart::{build_chart_data, ChartData};
use crate::dataset::Dataset;
use crate::error::{ClimateError, Result};
use crate::query::ClimateQuery;
use crate::record::ClimateListResponse;
use crate::selection::Selection;
use crate::sequencer::{RequestSequencer, Ticket};
use std::future::Future;

/// A request issued for one selection, not yet sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFetch {
    pub ticket: Ticket,
    pub query: ClimateQuery,
    /// Datasets selected when the request was issued; the pivot uses these.
    pub datasets: Vec<Dataset>,
}

impl PendingFetch {
    /// Issue a ticket for `selection`, superseding every earlier fetch.
    pub fn begin(requests: &mut RequestSequencer, selection: &Selection) -> Self {
        Self {
            ticket: requests.issue(),
            query: selection.query(),
            datasets: selection.datasets.clone(),
        }
    }

    /// Send the request through `fetch`, called exactly once.
    pub async fn run<F, Fut>(self, fetch: F) -> CompletedFetch
    where
        F: FnOnce(ClimateQuery) -> Fut,
        Fut: Future<Output = Result<ClimateListResponse>>,
    {
        let result = fetch(self.query.clone()).await;
        CompletedFetch {
            ticket: self.ticket,
            datasets: self.datasets,
            result,
        }
    }
}

/// A finished request, not yet checked against newer ones.
#[derive(Debug)]
pub struct CompletedFetch {
    pub ticket: Ticket,
    pub datasets: Vec<Dataset>,
    pub result: Result<ClimateListResponse>,
}

impl CompletedFetch {
    /// Decide what the response means for the chart.
    ///
    /// Staleness is checked first: a superseded request is dropped whether it
    /// succeeded or failed.
    pub fn resolve(self, requests: &RequestSequencer) -> FetchOutcome {
        if !requests.is_current(self.ticket) {
            return FetchOutcome::Stale(self.ticket);
        }
        match self.result {
            Ok(list) => FetchOutcome::Updated(build_chart_data(&list.results, &self.datasets)),
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}

/// What to do with the current chart after a fetch completes.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Replace the chart with these rows.
    Updated(ChartData),
    /// A newer request was issued; keep the chart.
    Stale(Ticket),
    /// The request failed; keep the chart.
    Failed(ClimateError),
}

impl FetchOutcome {
    /// Apply to `chart`, returning whether it changed.
    pub fn apply(self, chart: &mut ChartData) -> bool {
        match self {
            FetchOutcome::Updated(data) => {
                *chart = data;
                true
            }
            FetchOutcome::Stale(_) | FetchOutcome::Failed(_) => false,
        }
    }
}
