use serde::{Deserialize, Serialize};

use super::Entity;
use crate::models::collection::Collection;

/// Teilnehmer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefon", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "geburtsdatum", default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

impl Entity for Participant {
    const COLLECTION: Collection = Collection::Participants;

    fn display_name(&self) -> String {
        self.name.clone().unwrap_or_default()
    }

    fn option_label(&self) -> String {
        format!(
            "{} ({})",
            self.display_name(),
            self.email.as_deref().unwrap_or_default()
        )
    }
}
