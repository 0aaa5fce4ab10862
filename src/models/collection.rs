use serde::{Deserialize, Serialize};

/// The five record collections. Slugs double as URL segments and tab keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    #[serde(rename = "dozenten")]
    Instructors,
    #[serde(rename = "raeume")]
    Rooms,
    #[serde(rename = "teilnehmer")]
    Participants,
    #[serde(rename = "kurse")]
    Courses,
    #[serde(rename = "anmeldungen")]
    Registrations,
}

impl Collection {
    /// Tab order on the dashboard.
    pub const ALL: [Collection; 5] = [
        Collection::Courses,
        Collection::Instructors,
        Collection::Participants,
        Collection::Rooms,
        Collection::Registrations,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Collection::Instructors => "dozenten",
            Collection::Rooms => "raeume",
            Collection::Participants => "teilnehmer",
            Collection::Courses => "kurse",
            Collection::Registrations => "anmeldungen",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Collection::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Plural label used for tabs and stat cards.
    pub fn label(self) -> &'static str {
        match self {
            Collection::Instructors => "Dozenten",
            Collection::Rooms => "Räume",
            Collection::Participants => "Teilnehmer",
            Collection::Courses => "Kurse",
            Collection::Registrations => "Anmeldungen",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
