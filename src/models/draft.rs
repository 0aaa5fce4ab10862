use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::NaiveDate;
use serde_json::{Map, Number, Value};

use crate::livingapps::{extract_record_id, is_record_id, ApiLocation, RecordRef};

use super::format;
use super::schema::{EntitySchema, FieldKind};

/// The dialog's local copy of a record: every field as the string the
/// control shows. Reference fields hold bare record ids, checkboxes
/// `"true"` or nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    values: BTreeMap<String, String>,
}

/// Create omits empty optional fields; update clears them with `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DraftError {
    Missing(&'static str),
    NotANumber { label: &'static str, value: String },
    BelowMinimum { label: &'static str, min: String },
    BadReference { label: &'static str, value: String },
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::Missing(label) => write!(f, "{label} ist ein Pflichtfeld"),
            DraftError::NotANumber { label, value } => {
                write!(f, "{label}: \"{value}\" ist keine gültige Zahl")
            }
            DraftError::BelowMinimum { label, min } => {
                write!(f, "{label} muss mindestens {min} sein")
            }
            DraftError::BadReference { label, value } => {
                write!(f, "{label}: unbekannte Auswahl \"{value}\"")
            }
        }
    }
}

impl std::error::Error for DraftError {}

const CHECKED: &str = "true";

impl Draft {
    /// Every field blank.
    pub fn empty(schema: &EntitySchema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|f| (f.key.to_string(), String::new()))
            .collect();
        Draft { values }
    }

    /// Defaults for the add dialog.
    pub fn for_add(schema: &EntitySchema, today: NaiveDate) -> Self {
        let mut draft = Draft::empty(schema);
        if let Some(key) = schema.today_default {
            draft.set(key, today.format("%Y-%m-%d").to_string());
        }
        draft
    }

    /// Seed from a stored record, turning reference URLs into bare ids.
    pub fn from_record(schema: &EntitySchema, fields: &Map<String, Value>) -> Self {
        let mut draft = Draft::empty(schema);
        for def in schema.fields {
            let value = match (fields.get(def.key), def.kind) {
                (None | Some(Value::Null), _) => String::new(),
                (Some(Value::String(url)), FieldKind::Reference(_)) => {
                    extract_record_id(url).unwrap_or_default().to_string()
                }
                (Some(Value::String(s)), _) => s.clone(),
                (Some(Value::Bool(true)), _) => CHECKED.to_string(),
                (Some(Value::Bool(false)), _) => String::new(),
                (Some(Value::Number(n)), _) => format::number_text(n),
                (Some(other), _) => other.to_string(),
            };
            draft.set(def.key, value);
        }
        draft
    }

    /// Read a submitted form. Unchecked checkboxes are simply absent.
    pub fn from_form(schema: &EntitySchema, form: &HashMap<String, String>) -> Self {
        let mut draft = Draft::empty(schema);
        for def in schema.fields {
            let submitted = form.get(def.key).map(String::as_str).unwrap_or_default();
            let value = match def.kind {
                FieldKind::Checkbox if !submitted.is_empty() && submitted != "false" => {
                    CHECKED.to_string()
                }
                FieldKind::Checkbox => String::new(),
                _ => submitted.to_string(),
            };
            draft.set(def.key, value);
        }
        draft
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn is_checked(&self, key: &str) -> bool {
        self.get(key) == CHECKED
    }

    fn is_blank(&self, key: &str) -> bool {
        self.get(key).trim().is_empty()
    }

    /// Labels of required fields that are still empty.
    pub fn missing_required(&self, schema: &EntitySchema) -> Vec<&'static str> {
        schema
            .required_fields()
            .filter(|f| self.is_blank(f.key))
            .map(|f| f.label)
            .collect()
    }

    /// Submit is only possible once every required field has a value.
    pub fn is_complete(&self, schema: &EntitySchema) -> bool {
        self.missing_required(schema).is_empty()
    }

    /// Convert into the remote field bag.
    pub fn to_fields(
        &self,
        schema: &EntitySchema,
        location: &ApiLocation,
        mode: SaveMode,
    ) -> Result<Map<String, Value>, DraftError> {
        let mut out = Map::new();
        for def in schema.fields {
            let raw = self.get(def.key).trim();

            if let FieldKind::Checkbox = def.kind {
                out.insert(def.key.to_string(), Value::Bool(self.is_checked(def.key)));
                continue;
            }

            if raw.is_empty() {
                if def.required {
                    return Err(DraftError::Missing(def.label));
                }
                if mode == SaveMode::Update {
                    out.insert(def.key.to_string(), Value::Null);
                }
                continue;
            }

            let value = match def.kind {
                FieldKind::Integer { min } => {
                    let n: i64 = raw.parse().map_err(|_| DraftError::NotANumber {
                        label: def.label,
                        value: raw.to_string(),
                    })?;
                    if n < min {
                        return Err(DraftError::BelowMinimum { label: def.label, min: min.to_string() });
                    }
                    Value::from(n)
                }
                FieldKind::Decimal { min, .. } => {
                    let n = raw
                        .replace(',', ".")
                        .parse::<f64>()
                        .ok()
                        .and_then(Number::from_f64)
                        .ok_or_else(|| DraftError::NotANumber {
                            label: def.label,
                            value: raw.to_string(),
                        })?;
                    if n.as_f64().unwrap_or_default() < min {
                        return Err(DraftError::BelowMinimum { label: def.label, min: min.to_string() });
                    }
                    Value::Number(n)
                }
                FieldKind::Reference(target) => {
                    if !is_record_id(raw) {
                        return Err(DraftError::BadReference {
                            label: def.label,
                            value: raw.to_string(),
                        });
                    }
                    Value::String(RecordRef::new(target, raw).to_url(location))
                }
                _ => Value::String(raw.to_string()),
            };
            out.insert(def.key.to_string(), value);
        }
        Ok(out)
    }
}
