use crate::livingapps::{RawRecord, Record, RecordRef};
use crate::models::collection::Collection;
use crate::models::entities::{Course, Entity, Instructor, Participant, Registration, Room};
use crate::models::format;

/// The five collections as fetched together by one refresh.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub instructors: Vec<Record<Instructor>>,
    pub rooms: Vec<Record<Room>>,
    pub participants: Vec<Record<Participant>>,
    pub courses: Vec<Record<Course>>,
    pub registrations: Vec<Record<Registration>>,
}

/// Figures shown on the stat cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    pub revenue: f64,
    pub paid_registrations: usize,
    pub total_registrations: usize,
    pub courses: usize,
    pub instructors: usize,
    pub participants: usize,
    pub rooms: usize,
}

impl Stats {
    pub fn revenue_label(&self) -> String {
        format::euro_rounded(self.revenue)
    }

    pub fn registrations_label(&self) -> String {
        format!("{}/{}", self.paid_registrations, self.total_registrations)
    }
}

/// Selection control entry: record id and visible text.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOption {
    pub record_id: String,
    pub label: String,
}

fn find<'a, E>(records: &'a [Record<E>], record_id: &str) -> Option<&'a Record<E>> {
    records.iter().find(|r| r.record_id == record_id)
}

fn raw<E: Entity>(records: &[Record<E>]) -> Vec<RawRecord> {
    records.iter().map(to_raw).collect()
}

fn to_raw<E: Entity>(record: &Record<E>) -> RawRecord {
    Record {
        record_id: record.record_id.clone(),
        created_at: record.created_at.clone(),
        updated_at: record.updated_at.clone(),
        fields: record.field_map(),
    }
}

fn options<E: Entity>(records: &[Record<E>]) -> Vec<RecordOption> {
    records
        .iter()
        .map(|r| RecordOption {
            record_id: r.record_id.clone(),
            label: r.fields.option_label(),
        })
        .collect()
}

impl Snapshot {
    pub fn count(&self, collection: Collection) -> usize {
        match collection {
            Collection::Instructors => self.instructors.len(),
            Collection::Rooms => self.rooms.len(),
            Collection::Participants => self.participants.len(),
            Collection::Courses => self.courses.len(),
            Collection::Registrations => self.registrations.len(),
        }
    }

    /// Records of a collection with untyped fields, in backend order.
    pub fn records(&self, collection: Collection) -> Vec<RawRecord> {
        match collection {
            Collection::Instructors => raw(&self.instructors),
            Collection::Rooms => raw(&self.rooms),
            Collection::Participants => raw(&self.participants),
            Collection::Courses => raw(&self.courses),
            Collection::Registrations => raw(&self.registrations),
        }
    }

    pub fn record(&self, collection: Collection, record_id: &str) -> Option<RawRecord> {
        match collection {
            Collection::Instructors => find(&self.instructors, record_id).map(to_raw),
            Collection::Rooms => find(&self.rooms, record_id).map(to_raw),
            Collection::Participants => find(&self.participants, record_id).map(to_raw),
            Collection::Courses => find(&self.courses, record_id).map(to_raw),
            Collection::Registrations => find(&self.registrations, record_id).map(to_raw),
        }
    }

    /// Name of the record a reference points at, if it is still there.
    pub fn display_name(&self, reference: &RecordRef) -> Option<String> {
        let id = reference.record_id.as_str();
        let name = match reference.collection {
            Collection::Instructors => find(&self.instructors, id)?.fields.display_name(),
            Collection::Rooms => find(&self.rooms, id)?.fields.display_name(),
            Collection::Participants => find(&self.participants, id)?.fields.display_name(),
            Collection::Courses => find(&self.courses, id)?.fields.display_name(),
            Collection::Registrations => find(&self.registrations, id)?.fields.display_name(),
        };
        Some(name)
    }

    pub fn options(&self, collection: Collection) -> Vec<RecordOption> {
        match collection {
            Collection::Instructors => options(&self.instructors),
            Collection::Rooms => options(&self.rooms),
            Collection::Participants => options(&self.participants),
            Collection::Courses => options(&self.courses),
            Collection::Registrations => options(&self.registrations),
        }
    }

    /// Registrations pointing at a course. Deleting the course leaves them dangling.
    pub fn registrations_for_course(&self, course_id: &str) -> usize {
        self.registrations
            .iter()
            .filter(|r| r.fields.course_ref().is_some_and(|c| c.record_id == course_id))
            .count()
    }

    /// Revenue joins paid registrations to their course price; a registration
    /// whose course is gone (or has no price) adds nothing.
    pub fn stats(&self) -> Stats {
        let mut revenue = 0.0;
        let mut paid = 0;
        for registration in &self.registrations {
            if !registration.fields.is_paid() {
                continue;
            }
            paid += 1;
            let price = registration
                .fields
                .course_ref()
                .and_then(|c| find(&self.courses, &c.record_id))
                .and_then(|course| course.fields.price)
                .unwrap_or(0.0);
            revenue += price;
        }

        Stats {
            revenue,
            paid_registrations: paid,
            total_registrations: self.registrations.len(),
            courses: self.courses.len(),
            instructors: self.instructors.len(),
            participants: self.participants.len(),
            rooms: self.rooms.len(),
        }
    }
}
