use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// One record of a collection: its id plus the field bag.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<F> {
    pub record_id: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub fields: F,
}

/// Record with untyped fields, as the panels see it.
pub type RawRecord = Record<Map<String, Value>>;

#[derive(Deserialize)]
struct WireRecord<F> {
    #[serde(default)]
    createdat: Option<String>,
    #[serde(default)]
    updatedat: Option<String>,
    #[serde(default)]
    fields: F,
}

impl<F: serde::Serialize> Record<F> {
    /// The fields as a JSON object, keyed by their remote names.
    pub fn field_map(&self) -> Map<String, Value> {
        match serde_json::to_value(&self.fields) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Decode a list response. The API answers with an object keyed by record
/// id; key order is kept so records come back in backend order.
pub(crate) fn decode_records<F>(body: Value) -> Result<Vec<Record<F>>, serde_json::Error>
where
    F: DeserializeOwned + Default,
{
    let entries = match body {
        Value::Object(entries) => entries,
        Value::Null => return Ok(vec![]),
        Value::Array(items) if items.is_empty() => return Ok(vec![]),
        other => {
            return Err(serde::de::Error::custom(format!(
                "expected an object of records, got {}",
                kind_of(&other)
            )));
        }
    };

    entries
        .into_iter()
        .map(|(record_id, value)| {
            let wire: WireRecord<F> = serde_json::from_value(value)?;
            Ok(Record {
                record_id,
                created_at: wire.createdat,
                updated_at: wire.updatedat,
                fields: wire.fields,
            })
        })
        .collect()
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_backend_order() {
        let body = json!({
            "bbbbbbbbbbbbbbbbbbbbbbbb": {"fields": {"name": "B"}},
            "aaaaaaaaaaaaaaaaaaaaaaaa": {"fields": {"name": "A"}, "createdat": "2024-01-01T10:00:00"},
        });
        let records: Vec<RawRecord> = decode_records(body).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.record_id.as_str()).collect();
        assert_eq!(ids, ["bbbbbbbbbbbbbbbbbbbbbbbb", "aaaaaaaaaaaaaaaaaaaaaaaa"]);
        assert_eq!(records[1].created_at.as_deref(), Some("2024-01-01T10:00:00"));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let records: Vec<RawRecord> =
            decode_records(json!({"aaaaaaaaaaaaaaaaaaaaaaaa": {}})).unwrap();
        assert!(records[0].fields.is_empty());
    }

    #[test]
    fn empty_answers() {
        assert!(decode_records::<Map<String, Value>>(json!({})).unwrap().is_empty());
        assert!(decode_records::<Map<String, Value>>(Value::Null).unwrap().is_empty());
        assert!(decode_records::<Map<String, Value>>(json!([])).unwrap().is_empty());
        assert!(decode_records::<Map<String, Value>>(json!("nope")).is_err());
    }
}
