//! Lenient parsing for completion timestamps
//!
//! Accepts naive date-times (`2025-01-28T00:00:00`, optional fraction),
//! RFC 3339 with `Z` or an offset, and bare dates (`2025-01-28`, taken as
//! midnight). Offsets are dropped and the wall-clock time is kept, so the
//! calendar date the client wrote is the one stored. Values are always
//! serialized back in the naive form.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

pub fn parse(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|d| d.naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(NaiveDateTime::from)
        })
}

/// `deserialize_with` target for `Option<NaiveDateTime>` fields
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date-time: {:?}", raw))),
    }
}
