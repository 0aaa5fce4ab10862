use std::sync::LazyLock;

use regex::Regex;

use crate::models::collection::Collection;

use super::ApiLocation;

/// A record id is 24 hex characters; reference URLs end with it.
static TRAILING_RECORD_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([a-f0-9]{24})$").expect("static regex"));

/// Pull the record id out of a reference URL.
pub fn extract_record_id(url: &str) -> Option<&str> {
    TRAILING_RECORD_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// True when `s` is a bare record id and nothing else.
pub fn is_record_id(s: &str) -> bool {
    s.len() == 24 && extract_record_id(s).is_some()
}

/// Build the URL a reference field stores for `record_id` in app `app_id`.
pub fn record_url(base_url: &str, app_id: &str, record_id: &str) -> String {
    format!(
        "{}/apps/{}/records/{}",
        base_url.trim_end_matches('/'),
        app_id,
        record_id
    )
}

/// Typed pointer to a record in another collection.
///
/// Reference fields travel over the wire as URLs; everything inside the
/// crate works with this value and converts at the edges through
/// [`RecordRef::from_url`] and [`RecordRef::to_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRef {
    pub collection: Collection,
    pub record_id: String,
}

impl RecordRef {
    pub fn new(collection: Collection, record_id: impl Into<String>) -> Self {
        RecordRef { collection, record_id: record_id.into() }
    }

    /// Decode a stored reference URL pointing into `collection`.
    pub fn from_url(url: &str, collection: Collection) -> Option<Self> {
        extract_record_id(url).map(|id| RecordRef::new(collection, id))
    }

    pub fn to_url(&self, location: &ApiLocation) -> String {
        record_url(
            &location.base_url,
            location.app_ids.get(self.collection),
            &self.record_id,
        )
    }
}
