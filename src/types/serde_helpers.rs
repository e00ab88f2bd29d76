//! Serde helpers for the OpenAPI date-time format.
//!
//! The API expects timestamps as ISO-8601 with seconds precision and an
//! explicit numeric UTC offset, e.g. `2021-06-01T10:00:00+03:00`. A zero
//! offset is written as `+00:00`, never `Z`.

use serde::{Deserialize, Deserializer, Serializer, de};
use time::OffsetDateTime;
use time::macros::format_description;

/// Format a timestamp the way the API expects it in query strings.
///
/// # Example
///
/// ```rust
/// use time::macros::datetime;
/// use tinkoff_open_api::types::serde_helpers::format_datetime;
///
/// let from = datetime!(2021-06-01 10:00:00 +03:00);
/// assert_eq!(format_datetime(&from).unwrap(), "2021-06-01T10:00:00+03:00");
/// ```
pub fn format_datetime(value: &OffsetDateTime) -> Result<String, time::error::Format> {
    value.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
    ))
}

/// Parse a timestamp in the API format.
pub fn parse_datetime(value: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(
        value,
        format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
        ),
    )
}

/// Serialize/deserialize an `OffsetDateTime` in the API format.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use time::OffsetDateTime;
/// use tinkoff_open_api::types::serde_helpers::open_api_datetime;
///
/// #[derive(Serialize, Deserialize)]
/// struct Window {
///     #[serde(with = "open_api_datetime")]
///     from: OffsetDateTime,
/// }
///
/// let window: Window = serde_json::from_str(r#"{"from":"2021-06-01T00:00:00+00:00"}"#).unwrap();
/// let json = serde_json::to_string(&window).unwrap();
/// assert_eq!(json, r#"{"from":"2021-06-01T00:00:00+00:00"}"#);
/// ```
pub mod open_api_datetime {
    use super::*;

    /// Serialize a timestamp in the API format.
    pub fn serialize<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = format_datetime(value).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }

    /// Deserialize a timestamp in the API format.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_datetime(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_format_keeps_zero_offset_numeric() {
        let value = datetime!(2021-06-01 00:00:00 +00:00);
        assert_eq!(format_datetime(&value).unwrap(), "2021-06-01T00:00:00+00:00");
    }

    #[test]
    fn test_format_positive_offset() {
        let value = datetime!(2021-06-01 10:00:00 +03:00);
        assert_eq!(format_datetime(&value).unwrap(), "2021-06-01T10:00:00+03:00");
    }

    #[test]
    fn test_format_negative_offset_drops_subseconds() {
        let value = datetime!(2020-12-31 23:59:59.750 -05:30);
        assert_eq!(format_datetime(&value).unwrap(), "2020-12-31T23:59:59-05:30");
    }

    #[test]
    fn test_parse_rejects_zulu_suffix() {
        assert!(parse_datetime("2021-06-01T00:00:00Z").is_err());
        assert_eq!(
            parse_datetime("2021-06-01T10:00:00+03:00").unwrap(),
            datetime!(2021-06-01 10:00:00 +03:00)
        );
    }
}
