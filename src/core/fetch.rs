//! Pagination over a [`RiderSource`]
//!
//! Pages are requested one after another with `limit = page_size` and
//! `skip = page * page_size`. The walk ends on the first page that is shorter
//! than `page_size` or that carries no `data` key. A page holding exactly
//! `page_size` riders always triggers one more request.

use crate::adapters::sparelabs::RiderSource;
use crate::domain::{Rider, Result};

/// Everything collected by one pagination walk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    /// Riders in the order the API returned them
    pub riders: Vec<Rider>,

    /// Number of requests issued
    pub pages_requested: usize,
}

/// Fetch every rider from `source`
///
/// # Errors
///
/// Stops at the first failed page and returns its error; riders gathered so
/// far are dropped.
pub async fn fetch_all_riders(source: &dyn RiderSource, page_size: usize) -> Result<FetchOutcome> {
    let mut outcome = FetchOutcome::default();
    let mut page = 0usize;

    loop {
        let skip = page * page_size;
        let response = source.fetch_page(page_size, skip).await?;
        outcome.pages_requested += 1;

        let Some(riders) = response.data else {
            tracing::debug!(page, skip, "Response has no data key, stopping");
            break;
        };

        let received = riders.len();
        outcome.riders.extend(riders);

        tracing::info!(
            page,
            received,
            "Fetched {} riders so far...",
            outcome.riders.len()
        );

        if received < page_size {
            break;
        }

        page += 1;
    }

    tracing::info!(
        source = source.base_url(),
        pages = outcome.pages_requested,
        "Fetched {} riders.",
        outcome.riders.len()
    );

    Ok(outcome)
}
