//! Access layer for the LivingApps record API.
//!
//! Every collection is one LivingApps "app" addressed by a 24-hex app id.
//! The client exposes list/create/update/delete per collection; nothing is
//! cached here, callers re-fetch after mutating.

pub mod client;
pub mod error;
pub mod record;
pub mod reference;

pub use self::client::LivingAppsClient;
pub use self::error::ApiError;
pub use self::record::{RawRecord, Record};
pub use self::reference::{extract_record_id, is_record_id, record_url, RecordRef};

use crate::models::collection::Collection;

pub const DEFAULT_BASE_URL: &str = "https://my.living-apps.de/rest";

/// App id of each collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIds {
    pub instructors: String,
    pub rooms: String,
    pub participants: String,
    pub courses: String,
    pub registrations: String,
}

impl AppIds {
    pub fn get(&self, collection: Collection) -> &str {
        match collection {
            Collection::Instructors => &self.instructors,
            Collection::Rooms => &self.rooms,
            Collection::Participants => &self.participants,
            Collection::Courses => &self.courses,
            Collection::Registrations => &self.registrations,
        }
    }
}

/// Where the API lives. Reference URLs are built from the same base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiLocation {
    pub base_url: String,
    pub app_ids: AppIds,
}

impl ApiLocation {
    pub fn records_url(&self, collection: Collection) -> String {
        format!(
            "{}/apps/{}/records",
            self.base_url.trim_end_matches('/'),
            self.app_ids.get(collection)
        )
    }

    pub fn record_url(&self, collection: Collection, record_id: &str) -> String {
        record_url(&self.base_url, self.app_ids.get(collection), record_id)
    }
}
