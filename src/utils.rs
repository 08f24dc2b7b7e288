// Utility functions
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use sha2::{Digest, Sha256};
use url::Url;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a feed timestamp into `DateTime<Utc>`.
///
/// Accepts RFC 3339 with any offset, naive date-times (taken as UTC) and
/// bare dates (midnight UTC).
pub fn parse_datetime(date_str: &str) -> Option<DateTime<Utc>> {
    let date_str = date_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DateOrEpoch {
    Epoch(i64),
    Text(String),
}

/// Reads a feed date given as text or as Unix epoch seconds.
pub fn deserialize_feed_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match DateOrEpoch::deserialize(deserializer)? {
        DateOrEpoch::Epoch(secs) => DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {secs}"))),
        DateOrEpoch::Text(raw) => parse_datetime(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid date: {raw:?}"))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Reads an optional number that the feed may also send as a decimal string.
/// Null, a missing field and an empty string all mean "absent".
/// NaN and infinities are rejected.
pub fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<NumberOrText>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(NumberOrText::Number(n)) => n,
        Some(NumberOrText::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("invalid number: {text:?}")))?
        }
    };

    if !value.is_finite() {
        return Err(D::Error::custom("non-finite number"));
    }
    Ok(Some(value))
}

/// Hex SHA-256 of the name. Same name, same id, on every run.
pub fn stable_id(name: &str) -> String {
    hex::encode(Sha256::digest(name.as_bytes()))
}

/// Joins an image reference onto the asset base URL.
pub fn resolve_image_url(base: &Url, image: &str) -> Result<String, url::ParseError> {
    Ok(base.join(image)?.to_string())
}
