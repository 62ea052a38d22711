//! User records as served by the users endpoint.
//!
//! Decoding is lenient: a record with a missing (or `null`) name,
//! email, address or city still decodes, and the missing value renders as a blank cell.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a record, either a JSON number or a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl Default for RecordId {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Postal address. Only `city` is displayed; every other field is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One user entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default)]
    pub address: Option<Address>,
}

impl UserRecord {
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        email: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            address: Some(Address {
                city: Some(city.into()),
                extra: BTreeMap::new(),
            }),
        }
    }

    /// City of the address, empty when the address or city is missing.
    pub fn city(&self) -> &str {
        self.address
            .as_ref()
            .and_then(|address| address.city.as_deref())
            .unwrap_or_default()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_full_record_and_keeps_extra_address_fields() {
        let record: UserRecord = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "city": "Gwenborough",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            }
        }))
        .expect("record should decode");

        assert_eq!(record.id, RecordId::Number(1));
        assert_eq!(record.name, "Leanne Graham");
        assert_eq!(record.city(), "Gwenborough");
        let address = record.address.expect("address present");
        assert_eq!(address.extra.get("street"), Some(&serde_json::json!("Kulas Light")));
    }

    #[test]
    fn missing_fields_decode_as_blank() {
        let records: Vec<UserRecord> = serde_json::from_value(serde_json::json!([
            { "id": "a-1", "name": "No Address", "email": "none@x.com" },
            { "id": 2, "name": null, "email": "n@x.com", "address": {} },
            { "id": 3, "address": null }
        ]))
        .expect("lenient decode");

        assert_eq!(records[0].id.to_string(), "a-1");
        assert_eq!(records[0].city(), "");
        assert_eq!(records[1].name, "");
        assert_eq!(records[1].city(), "");
        assert_eq!(records[2].email, "");
        assert_eq!(records[2].city(), "");
    }

    #[test]
    fn non_array_payload_is_an_error() {
        let result = serde_json::from_str::<Vec<UserRecord>>(r#"{"users": []}"#);
        assert!(result.is_err());
    }
}
