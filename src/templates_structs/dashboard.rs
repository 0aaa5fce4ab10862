use askama::Template;

use crate::models::collection::Collection;
use crate::models::dashboard::Stats;
use crate::models::schema::EntitySchema;
use crate::models::table::PanelTable;
use super::PageContext;

pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub hero: bool,
}

impl StatCard {
    /// Revenue first, then the collection counts, then paid/total registrations.
    pub fn from_stats(stats: &Stats) -> Vec<StatCard> {
        let count = |label, n: usize| StatCard { label, value: n.to_string(), hero: false };
        vec![
            StatCard { label: "Einnahmen (bezahlt)", value: stats.revenue_label(), hero: true },
            count(Collection::Courses.label(), stats.courses),
            count(Collection::Instructors.label(), stats.instructors),
            count(Collection::Participants.label(), stats.participants),
            count(Collection::Rooms.label(), stats.rooms),
            StatCard {
                label: Collection::Registrations.label(),
                value: stats.registrations_label(),
                hero: false,
            },
        ]
    }
}

/// The active tab's panel: texts from the schema plus the built table.
pub struct PanelView {
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub add_label: &'static str,
    pub empty_title: &'static str,
    pub empty_description: &'static str,
    pub table: PanelTable,
}

impl PanelView {
    pub fn new(schema: &'static EntitySchema, table: PanelTable) -> Self {
        PanelView {
            slug: schema.collection.slug(),
            title: schema.collection.label(),
            subtitle: schema.subtitle,
            add_label: schema.add_label,
            empty_title: schema.empty_title,
            empty_description: schema.empty_description,
            table,
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub stats: Vec<StatCard>,
    pub panel: PanelView,
}
