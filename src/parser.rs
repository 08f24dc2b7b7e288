// Feed JSON parsing
use crate::model::{FeedResponse, ImportError, RawOffer};

/// Decodes the feed body into offers. A single invalid record fails the whole feed.
pub fn parse_feed(body: &str) -> Result<Vec<RawOffer>, ImportError> {
    let feed: FeedResponse = serde_json::from_str(body)?;
    Ok(feed.data)
}
