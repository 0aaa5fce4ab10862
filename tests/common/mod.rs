//! Shared test infrastructure: a wiremock stand-in for the LivingApps
//! REST API plus builders for its record JSON.
//!
//! # Setup
//! - `LivingAppsMock::start()` - empty mock server
//! - `mock.mount_list(..)` - answer one collection's list call
//! - `mock.mount_empty_lists()` - every other list answers `{}`

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kursverwaltung::dashboard::DashboardController;
use kursverwaltung::livingapps::{ApiLocation, AppIds, LivingAppsClient};
use kursverwaltung::models::collection::Collection;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const APP_DOZENTEN: &str = "aaaaaaaaaaaaaaaaaaaaaaaa";
pub const APP_RAEUME: &str = "bbbbbbbbbbbbbbbbbbbbbbbb";
pub const APP_TEILNEHMER: &str = "cccccccccccccccccccccccc";
pub const APP_KURSE: &str = "dddddddddddddddddddddddd";
pub const APP_ANMELDUNGEN: &str = "eeeeeeeeeeeeeeeeeeeeeeee";

pub const DOZENT_1: &str = "0000000000000000000000d1";
pub const RAUM_1: &str = "0000000000000000000000a1";
pub const TEILNEHMER_1: &str = "0000000000000000000000b1";
pub const KURS_1: &str = "0000000000000000000000c1";
pub const KURS_2: &str = "0000000000000000000000c2";
pub const ANMELDUNG_1: &str = "0000000000000000000000e1";
pub const ANMELDUNG_2: &str = "0000000000000000000000e2";
pub const ANMELDUNG_3: &str = "0000000000000000000000e3";

// ============================================================================
// MOCK SERVER
// ============================================================================

pub struct LivingAppsMock {
    pub server: MockServer,
}

impl LivingAppsMock {
    pub async fn start() -> Self {
        LivingAppsMock { server: MockServer::start().await }
    }

    pub fn base_url(&self) -> String {
        format!("{}/rest", self.server.uri())
    }

    pub fn location(&self) -> ApiLocation {
        ApiLocation {
            base_url: self.base_url(),
            app_ids: AppIds {
                instructors: APP_DOZENTEN.to_string(),
                rooms: APP_RAEUME.to_string(),
                participants: APP_TEILNEHMER.to_string(),
                courses: APP_KURSE.to_string(),
                registrations: APP_ANMELDUNGEN.to_string(),
            },
        }
    }

    pub fn client(&self) -> LivingAppsClient {
        LivingAppsClient::new(self.location(), Duration::from_secs(5)).unwrap()
    }

    pub fn controller(&self) -> DashboardController {
        DashboardController::new(self.client())
    }

    /// Path of a collection's records endpoint on the mock.
    pub fn records_path(&self, collection: Collection) -> String {
        format!("/rest/apps/{}/records", app_id(collection))
    }

    pub fn record_path(&self, collection: Collection, record_id: &str) -> String {
        format!("/rest/apps/{}/records/{record_id}", app_id(collection))
    }

    /// Full record URL as stored in reference fields.
    pub fn reference(&self, collection: Collection, record_id: &str) -> String {
        format!("{}{}", self.server.uri(), self.record_path(collection, record_id))
    }

    pub async fn mount_list(&self, collection: Collection, body: Value) {
        Mock::given(method("GET"))
            .and(path(self.records_path(collection)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Fallback `{}` for every list not mounted explicitly.
    pub async fn mount_empty_lists(&self) {
        for collection in Collection::ALL {
            Mock::given(method("GET"))
                .and(path(self.records_path(collection)))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
                .with_priority(10)
                .mount(&self.server)
                .await;
        }
    }

    /// The course-administration sample: one instructor, one room, one
    /// participant, two courses (100 € and 150 €) and three registrations
    /// of which two are paid.
    pub async fn mount_sample(&self) {
        self.mount_list(
            Collection::Instructors,
            json!({ DOZENT_1: record(json!({"name": "Max Mustermann", "email": "max@example.com", "fachgebiet": "Informatik"})) }),
        )
        .await;
        self.mount_list(
            Collection::Rooms,
            json!({ RAUM_1: record(json!({"raumname": "Seminarraum A", "gebaeude": "Hauptgebäude", "kapazitaet": 20})) }),
        )
        .await;
        self.mount_list(
            Collection::Participants,
            json!({ TEILNEHMER_1: record(json!({"name": "Anna Beispiel", "email": "anna@example.com"})) }),
        )
        .await;
        self.mount_list(
            Collection::Courses,
            json!({
                KURS_1: record(json!({
                    "titel": "Einführung in Python",
                    "startdatum": "2024-05-02",
                    "enddatum": "2024-05-04",
                    "max_teilnehmer": 12,
                    "preis": 100,
                    "dozent": self.reference(Collection::Instructors, DOZENT_1),
                    "raum": self.reference(Collection::Rooms, RAUM_1),
                })),
                KURS_2: record(json!({
                    "titel": "Marketing Basics",
                    "startdatum": "2024-06-10",
                    "enddatum": "2024-06-11",
                    "preis": 150,
                })),
            }),
        )
        .await;
        self.mount_list(
            Collection::Registrations,
            json!({
                ANMELDUNG_1: record(json!({
                    "teilnehmer": self.reference(Collection::Participants, TEILNEHMER_1),
                    "kurs": self.reference(Collection::Courses, KURS_1),
                    "anmeldedatum": "2024-04-01",
                    "bezahlt": true,
                })),
                ANMELDUNG_2: record(json!({
                    "kurs": self.reference(Collection::Courses, KURS_2),
                    "anmeldedatum": "2024-04-02",
                    "bezahlt": true,
                })),
                ANMELDUNG_3: record(json!({
                    "kurs": self.reference(Collection::Courses, KURS_1),
                    "anmeldedatum": "2024-04-03",
                    "bezahlt": false,
                })),
            }),
        )
        .await;
    }
}

pub fn app_id(collection: Collection) -> &'static str {
    match collection {
        Collection::Instructors => APP_DOZENTEN,
        Collection::Rooms => APP_RAEUME,
        Collection::Participants => APP_TEILNEHMER,
        Collection::Courses => APP_KURSE,
        Collection::Registrations => APP_ANMELDUNGEN,
    }
}

/// One record as the list endpoint returns it.
pub fn record(fields: Value) -> Value {
    json!({
        "createdat": "2024-03-01T10:00:00",
        "updatedat": "2024-03-02T12:30:00",
        "fields": fields,
    })
}
