//! Rider API wire models

use crate::domain::{ApiError, Rider, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One page as returned by `GET /v1/riders`
///
/// `data` is `None` when the body carried no `data` key, which ends
/// pagination. An entry that is not a rider object (e.g. `null`) decodes to
/// an empty [`Rider`], which the transformer later skips.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RiderPage {
    #[serde(default, deserialize_with = "lenient_riders")]
    pub data: Option<Vec<Rider>>,
}

impl RiderPage {
    /// Page holding the given riders
    pub fn with_riders(riders: Vec<Rider>) -> Self {
        Self { data: Some(riders) }
    }

    /// Page without a `data` key
    pub fn end_of_stream() -> Self {
        Self { data: None }
    }

    /// Number of riders in the page
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }

    /// True when the page holds no riders
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode a response body; a JSON `null` body counts as end of stream
    pub fn from_body(body: &str) -> Result<Self> {
        let page: Option<RiderPage> = serde_json::from_str(body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to decode riders page: {e}")))?;
        Ok(page.unwrap_or_default())
    }
}

fn lenient_riders<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<Rider>>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(entries.map(|entries| {
        entries
            .into_iter()
            .map(|entry| serde_json::from_value(entry).unwrap_or_default())
            .collect()
    }))
}
