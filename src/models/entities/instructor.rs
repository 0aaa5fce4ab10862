use serde::{Deserialize, Serialize};

use super::Entity;
use crate::models::collection::Collection;

/// Dozent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefon", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "fachgebiet", default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

impl Entity for Instructor {
    const COLLECTION: Collection = Collection::Instructors;

    fn display_name(&self) -> String {
        self.name.clone().unwrap_or_default()
    }

    fn option_label(&self) -> String {
        match self.specialty.as_deref().filter(|s| !s.is_empty()) {
            Some(specialty) => format!("{} ({specialty})", self.display_name()),
            None => self.display_name(),
        }
    }
}
