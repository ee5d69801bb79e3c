use chrono::NaiveDateTime;
use serde::de;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const PUBLISHED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Custom deserialization for numeric fields the API serves as int or String
pub fn opt_u64_int_or_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.trim().parse().map_err(de::Error::custom)?),
        Value::Number(num) => {
            Some(num.as_u64().ok_or(de::Error::custom("invalid unsigned number"))?)
        }
        _ => return Err(de::Error::custom("wrong type")),
    })
}

pub fn opt_f64_int_or_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.trim().parse().map_err(de::Error::custom)?),
        Value::Number(num) => Some(num.as_f64().ok_or(de::Error::custom("invalid number"))?),
        _ => return Err(de::Error::custom("wrong type")),
    })
}

// Listing timestamps come back as "2013-01-02 11:10:33"
pub fn opt_published_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            NaiveDateTime::parse_from_str(raw.trim(), PUBLISHED_DATE_FORMAT)
                .map(Some)
                .map_err(de::Error::custom)
        }
        _ => Ok(None),
    }
}
