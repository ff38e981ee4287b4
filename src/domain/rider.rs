//! Rider domain models
//!
//! Source records arrive as loosely structured JSON. They are decoded into
//! typed structs whose fields are all optional; default substitution happens
//! later, when a [`Rider`] is turned into a [`RiderRow`].

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// CSV header, in output column order
pub const COLUMNS: [&str; 10] = [
    "Registration Number",
    "First Name",
    "Last Name",
    "Telephone",
    "Telephone Ext",
    "Email",
    "Mailing Address",
    "City/Town",
    "Province/State",
    "Postal/Zip Code",
];

/// A rider record as returned by the rider API
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rider {
    #[serde(default, deserialize_with = "lenient_text")]
    pub external_numeric_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub first_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub last_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub phone_number: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,

    /// Address bag; `None` when the key is absent, `null` or not an object
    #[serde(default, deserialize_with = "lenient_metadata")]
    pub metadata: Option<RiderMetadata>,
}

impl Rider {
    /// Identifier used in log lines
    pub fn display_id(&self) -> &str {
        self.external_numeric_id.as_deref().unwrap_or("N/A")
    }
}

/// Address attributes nested under a rider's `metadata` key
///
/// Built from the raw JSON object so that emptiness reflects the mapping
/// itself: an object carrying only unrelated keys is not empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct RiderMetadata {
    pub mailing_address: Option<String>,
    pub mailing_address_unit: Option<String>,
    pub mailing_city: Option<String>,
    pub mailing_province_state: Option<String>,
    pub mailing_postal_zip_code: Option<String>,
    key_count: usize,
}

impl RiderMetadata {
    /// True when the source mapping had no keys at all
    pub fn is_empty(&self) -> bool {
        self.key_count == 0
    }
}

impl From<Map<String, Value>> for RiderMetadata {
    fn from(mut map: Map<String, Value>) -> Self {
        let key_count = map.len();
        let mut take = |key: &str| map.remove(key).and_then(scalar_text);

        Self {
            mailing_address: take("mailing_address"),
            mailing_address_unit: take("mailing_address_unit"),
            mailing_city: take("mailing_city"),
            mailing_province_state: take("mailing_province_state"),
            mailing_postal_zip_code: take("mailing_postal_zip_code"),
            key_count,
        }
    }
}

/// One output line of the rider report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiderRow {
    pub registration_number: String,
    pub first_name: String,
    pub last_name: String,
    pub telephone: String,
    pub telephone_ext: String,
    pub email: String,
    pub mailing_address: String,
    pub city: String,
    pub province_state: String,
    pub postal_zip_code: String,
}

impl RiderRow {
    /// Fields in [`COLUMNS`] order
    pub fn as_record(&self) -> [&str; 10] {
        [
            self.registration_number.as_str(),
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.telephone.as_str(),
            self.telephone_ext.as_str(),
            self.email.as_str(),
            self.mailing_address.as_str(),
            self.city.as_str(),
            self.province_state.as_str(),
            self.postal_zip_code.as_str(),
        ]
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_text))
}

fn lenient_metadata<'de, D>(deserializer: D) -> Result<Option<RiderMetadata>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Object(map)) => Ok(Some(RiderMetadata::from(map))),
        _ => Ok(None),
    }
}

/// Textual form of a JSON value; `null` counts as absent
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
