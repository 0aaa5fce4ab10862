use serde::{Deserialize, Serialize};

use super::{lenient_decimal, lenient_int, Entity};
use crate::livingapps::RecordRef;
use crate::models::collection::Collection;
use crate::models::format;

/// Kurs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "titel", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "beschreibung", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "startdatum", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "enddatum", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_teilnehmer: Option<i64>,
    #[serde(
        rename = "preis",
        default,
        deserialize_with = "lenient_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(rename = "dozent", default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(rename = "raum", default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl Course {
    pub fn instructor_ref(&self) -> Option<RecordRef> {
        RecordRef::from_url(self.instructor.as_deref()?, Collection::Instructors)
    }

    pub fn room_ref(&self) -> Option<RecordRef> {
        RecordRef::from_url(self.room.as_deref()?, Collection::Rooms)
    }
}

impl Entity for Course {
    const COLLECTION: Collection = Collection::Courses;

    fn display_name(&self) -> String {
        self.title.clone().unwrap_or_default()
    }

    fn option_label(&self) -> String {
        format!(
            "{} ({})",
            self.display_name(),
            format::date(self.start_date.as_deref())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_remote_names() {
        let c: Course = serde_json::from_value(json!({
            "titel": "Python Grundlagen",
            "startdatum": "2024-05-02",
            "enddatum": "2024-05-04",
            "max_teilnehmer": 12,
            "preis": "299.5",
            "dozent": "https://my.living-apps.de/rest/apps/aaaaaaaaaaaaaaaaaaaaaaaa/records/0123456789abcdef01234567",
        }))
        .unwrap();
        assert_eq!(c.price, Some(299.5));
        assert_eq!(c.max_teilnehmer, Some(12));
        assert_eq!(
            c.instructor_ref().map(|r| r.record_id),
            Some("0123456789abcdef01234567".to_string())
        );
        assert_eq!(c.room_ref(), None);
        assert_eq!(c.option_label(), "Python Grundlagen (02.05.2024)");
    }

    #[test]
    fn unset_fields_are_not_serialized() {
        let c = Course { title: Some("X".into()), ..Default::default() };
        assert_eq!(serde_json::to_value(&c).unwrap(), json!({"titel": "X"}));
    }
}
