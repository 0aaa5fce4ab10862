mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use kursverwaltung::livingapps::ApiError;
use kursverwaltung::models::collection::Collection;
use kursverwaltung::models::entities::{Course, Room};

#[tokio::test]
async fn list_keeps_backend_order() {
    let mock = LivingAppsMock::start().await;
    mock.mount_list(
        Collection::Rooms,
        json!({
            "0000000000000000000000ff": record(json!({"raumname": "Z"})),
            "0000000000000000000000aa": record(json!({"raumname": "A"})),
            "0000000000000000000000cc": record(json!({"raumname": "C"})),
        }),
    )
    .await;

    let records = mock.client().list_raw(Collection::Rooms).await.unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.record_id.as_str()).collect();
    assert_eq!(ids, ["0000000000000000000000ff", "0000000000000000000000aa", "0000000000000000000000cc"]);
    assert_eq!(records[0].created_at.as_deref(), Some("2024-03-01T10:00:00"));
    assert_eq!(records[1].fields["raumname"], json!("A"));
}

#[tokio::test]
async fn list_decodes_typed_fields() {
    let mock = LivingAppsMock::start().await;
    mock.mount_sample().await;

    let client = mock.client();
    let rooms = client.list::<Room>().await.unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].fields.capacity, Some(20));

    let courses = client.list::<Course>().await.unwrap();
    assert_eq!(courses[0].record_id, KURS_1);
    assert_eq!(courses[0].fields.price, Some(100.0));
    assert_eq!(
        courses[0].fields.instructor_ref().map(|r| r.record_id),
        Some(DOZENT_1.to_string())
    );
}

#[tokio::test]
async fn empty_collection_is_empty_list() {
    let mock = LivingAppsMock::start().await;
    mock.mount_empty_lists().await;

    let records = mock.client().list_raw(Collection::Courses).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn create_posts_fields_envelope() {
    let mock = LivingAppsMock::start().await;
    Mock::given(method("POST"))
        .and(path(mock.records_path(Collection::Rooms)))
        .and(body_json(json!({"fields": {"raumname": "A1", "gebaeude": "Haus B", "kapazitaet": 20}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "0000000000000000000000a9"})))
        .expect(1)
        .mount(&mock.server)
        .await;

    let fields = json!({"raumname": "A1", "gebaeude": "Haus B", "kapazitaet": 20});
    let created = mock
        .client()
        .create(Collection::Rooms, fields.as_object().cloned().unwrap())
        .await
        .unwrap();
    assert_eq!(created["id"], json!("0000000000000000000000a9"));
}

#[tokio::test]
async fn update_patches_record_url() {
    let mock = LivingAppsMock::start().await;
    Mock::given(method("PATCH"))
        .and(path(mock.record_path(Collection::Registrations, ANMELDUNG_1)))
        .and(body_json(json!({"fields": {"bezahlt": false}})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock.server)
        .await;

    let fields = json!({"bezahlt": false});
    mock.client()
        .update(Collection::Registrations, ANMELDUNG_1, fields.as_object().cloned().unwrap())
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_hits_record_url() {
    let mock = LivingAppsMock::start().await;
    Mock::given(method("DELETE"))
        .and(path(mock.record_path(Collection::Courses, KURS_2)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock.server)
        .await;

    mock.client().delete(Collection::Courses, KURS_2).await.unwrap();
}

#[tokio::test]
async fn error_status_is_reported() {
    let mock = LivingAppsMock::start().await;
    Mock::given(method("GET"))
        .and(path(mock.records_path(Collection::Instructors)))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock.server)
        .await;

    let err = mock.client().list_raw(Collection::Instructors).await.unwrap_err();
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn non_object_list_body_is_a_decode_error() {
    let mock = LivingAppsMock::start().await;
    mock.mount_list(Collection::Rooms, json!("nope")).await;

    let err = mock.client().list_raw(Collection::Rooms).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
