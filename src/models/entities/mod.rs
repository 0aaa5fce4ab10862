//! Typed field bags of the five collections. Remote field names are German
//! and kept verbatim through serde renames.

pub mod course;
pub mod instructor;
pub mod participant;
pub mod registration;
pub mod room;

pub use self::course::Course;
pub use self::instructor::Instructor;
pub use self::participant::Participant;
pub use self::registration::Registration;
pub use self::room::Room;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::collection::Collection;

pub trait Entity: Serialize + DeserializeOwned + Default + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;

    /// How other records refer to this one in tables.
    fn display_name(&self) -> String;

    /// Entry text inside a selection control.
    fn option_label(&self) -> String {
        self.display_name()
    }
}

/// Whole numbers sometimes come back as `20.0` or `"20"`.
pub(crate) fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Decimals may arrive as strings.
pub(crate) fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
