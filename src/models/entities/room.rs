use serde::{Deserialize, Serialize};

use super::{lenient_int, Entity};
use crate::models::collection::Collection;

/// Raum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "raumname", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "gebaeude", default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(
        rename = "kapazitaet",
        default,
        deserialize_with = "lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub capacity: Option<i64>,
}

impl Entity for Room {
    const COLLECTION: Collection = Collection::Rooms;

    fn display_name(&self) -> String {
        format!(
            "{} ({})",
            self.name.as_deref().unwrap_or_default(),
            self.building.as_deref().unwrap_or_default()
        )
    }

    fn option_label(&self) -> String {
        format!(
            "{} – {} Plätze",
            self.display_name(),
            self.capacity.map(|c| c.to_string()).unwrap_or_default()
        )
    }
}
