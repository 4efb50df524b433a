//! Planet record model.
//!
//! A record is a free-form JSON object. Only three fields carry meaning for
//! queries and are exposed through typed accessors; everything else is kept
//! as-is so a record serializes back exactly as it was read.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the planet identifier.
pub const FIELD_NAME: &str = "pl_name";

/// Field holding the year of discovery.
pub const FIELD_DISC_YEAR: &str = "disc_year";

/// Field holding the host star name.
pub const FIELD_HOSTNAME: &str = "hostname";

/// A single exoplanet entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanetRecord {
    fields: Map<String, Value>,
}

impl PlanetRecord {
    /// Planet identifier (`pl_name`), if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.fields.get(FIELD_NAME).and_then(Value::as_str)
    }

    /// Year of discovery (`disc_year`), if present and numeric.
    pub fn disc_year(&self) -> Option<f64> {
        self.fields.get(FIELD_DISC_YEAR).and_then(Value::as_f64)
    }

    /// Host star name (`hostname`), if present and a string.
    pub fn hostname(&self) -> Option<&str> {
        self.fields.get(FIELD_HOSTNAME).and_then(Value::as_str)
    }

    /// Look up any field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

impl From<PlanetRecord> for Value {
    fn from(record: PlanetRecord) -> Self {
        Value::Object(record.fields)
    }
}
