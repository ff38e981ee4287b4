//! Rider source trait definition
//!
//! `RiderSource` abstracts "give me one page of riders" so that the
//! pagination loop can run against the live API or an in-memory source.

use super::models::RiderPage;
use crate::domain::Result;
use async_trait::async_trait;

/// A paginated provider of rider records
///
/// # Example
///
/// ```no_run
/// use rider_export::adapters::sparelabs::{RiderSource, SpareLabsClient};
/// use rider_export::config::load_config;
///
/// # async fn example() -> rider_export::domain::Result<()> {
/// let config = load_config()?;
/// let client = SpareLabsClient::new(&config.api)?;
///
/// let first_page = client.fetch_page(50, 0).await?;
/// println!("{} riders", first_page.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait RiderSource: Send + Sync {
    /// Fetch one page of riders
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum number of records in the page
    /// * `skip` - Number of records to skip from the start of the collection
    ///
    /// # Errors
    ///
    /// Returns an API error if the request fails, the server answers with a
    /// non-success status, or the body cannot be decoded.
    async fn fetch_page(&self, limit: usize, skip: usize) -> Result<RiderPage>;

    /// Where the riders come from, for log lines
    fn base_url(&self) -> &str;
}
