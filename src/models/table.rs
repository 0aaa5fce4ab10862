use serde_json::{Map, Value};

use crate::livingapps::RecordRef;

use super::dashboard::Snapshot;
use super::format::{self, DASH};
use super::schema::{Cell, EntitySchema};

/// A rendered table cell. `paid` is set only for the paid toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub text: String,
    pub class: &'static str,
    pub paid: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub record_id: String,
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone)]
pub struct PanelTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<TableRow>,
}

impl PanelTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn cell(text: String, class: &'static str) -> TableCell {
    TableCell { text, class, paid: None }
}

fn str_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

fn render_cell(kind: Cell, fields: &Map<String, Value>, snapshot: &Snapshot) -> TableCell {
    match kind {
        Cell::Primary(key) => cell(format::text(str_field(fields, key)), "cell-primary"),
        Cell::Text(key) => cell(format::text(str_field(fields, key)), ""),
        Cell::Date(key) => cell(format::date(str_field(fields, key)), "cell-muted"),
        Cell::DateRange(from, to) => cell(
            format!(
                "{} – {}",
                format::date(str_field(fields, from)),
                format::date(str_field(fields, to))
            ),
            "cell-muted",
        ),
        Cell::Reference(key, target) => {
            let name = str_field(fields, key)
                .and_then(|url| RecordRef::from_url(url, target))
                .and_then(|r| snapshot.display_name(&r));
            cell(format::text(name.as_deref()), "")
        }
        Cell::Badge(key, suffix) => {
            let text = format::value_text(fields.get(key));
            if text.trim().is_empty() {
                cell(DASH.to_string(), "cell-muted")
            } else {
                cell(format!("{text}{suffix}"), "badge-muted")
            }
        }
        Cell::Price(key) => match fields.get(key).and_then(Value::as_f64) {
            Some(price) => cell(format::euro(price), "cell-price"),
            None => cell(DASH.to_string(), "cell-muted"),
        },
        Cell::PaidToggle(key) => {
            let paid = fields.get(key).and_then(Value::as_bool).unwrap_or(false);
            let (text, class) = if paid {
                ("Bezahlt", "badge-success")
            } else {
                ("Offen", "badge-warning")
            };
            TableCell { text: text.to_string(), class, paid: Some(paid) }
        }
    }
}

/// Lay out a collection's records as the panel table.
pub fn build(schema: &EntitySchema, snapshot: &Snapshot) -> PanelTable {
    let rows = snapshot
        .records(schema.collection)
        .into_iter()
        .map(|record| TableRow {
            cells: schema
                .columns
                .iter()
                .map(|c| render_cell(c.cell, &record.fields, snapshot))
                .collect(),
            record_id: record.record_id,
        })
        .collect();

    PanelTable {
        headers: schema.columns.iter().map(|c| c.header).collect(),
        rows,
    }
}
