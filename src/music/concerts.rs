use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Cities an artist played in
#[allow(dead_code)]
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Location {
    pub id: i64,

    #[serde(default)]
    pub locations: Vec<String>,

    /// Upstream URL of the matching dates record
    #[serde(default)]
    pub dates: String,
}

/// Concert dates of an artist. Upstream marks some with a leading `*`
#[allow(dead_code)]
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Date {
    pub id: i64,

    #[serde(default)]
    pub dates: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub id: i64,

    /// Location name to the dates played there. Values are left untyped
    #[serde(default)]
    pub dates_locations: BTreeMap<String, Value>,
}

impl Relation {
    /// Dates played at `location`, rendered as plain strings
    pub fn dates_at(&self, location: &str) -> Vec<String> {
        match self.dates_locations.get(location) {
            Some(Value::Array(dates)) => dates.iter().map(display_value).collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => vec![display_value(other)],
        }
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Locations {
    #[serde(default)]
    pub index: Vec<Location>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Dates {
    #[serde(default)]
    pub index: Vec<Date>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Relations {
    #[serde(default)]
    pub index: Vec<Relation>,
}
