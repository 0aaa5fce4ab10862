use serde::{Deserialize, Serialize};

use super::Entity;
use crate::livingapps::RecordRef;
use crate::models::collection::Collection;
use crate::models::format;

/// Anmeldung.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(rename = "teilnehmer", default, skip_serializing_if = "Option::is_none")]
    pub participant: Option<String>,
    #[serde(rename = "kurs", default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(rename = "anmeldedatum", default, skip_serializing_if = "Option::is_none")]
    pub registered_on: Option<String>,
    #[serde(rename = "bezahlt", default, skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
}

impl Registration {
    pub fn is_paid(&self) -> bool {
        self.paid.unwrap_or(false)
    }

    pub fn participant_ref(&self) -> Option<RecordRef> {
        RecordRef::from_url(self.participant.as_deref()?, Collection::Participants)
    }

    pub fn course_ref(&self) -> Option<RecordRef> {
        RecordRef::from_url(self.course.as_deref()?, Collection::Courses)
    }
}

impl Entity for Registration {
    const COLLECTION: Collection = Collection::Registrations;

    fn display_name(&self) -> String {
        format::date(self.registered_on.as_deref())
    }
}
