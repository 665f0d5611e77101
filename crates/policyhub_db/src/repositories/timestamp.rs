//! RFC 3339 text encoding for timestamp columns.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::warn;

/// Millisecond precision, `Z` suffix, e.g. `2025-01-31T12:00:00.000Z`.
pub fn to_db_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// An unparseable stored value reads as "no timestamp".
pub fn from_db_timestamp(value: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(e) => {
            warn!("Ignoring malformed timestamp {:?}: {}", value, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_with_millis_and_zulu() {
        let at = Utc.with_ymd_and_hms(2025, 1, 31, 12, 0, 0).unwrap();
        assert_eq!(to_db_timestamp(at), "2025-01-31T12:00:00.000Z");
        assert_eq!(from_db_timestamp("2025-01-31T12:00:00.000Z"), Some(at));
    }

    #[test]
    fn accepts_offsets_and_rejects_garbage() {
        let at = Utc.with_ymd_and_hms(2025, 1, 31, 10, 0, 0).unwrap();
        assert_eq!(from_db_timestamp("2025-01-31T12:00:00+02:00"), Some(at));
        assert_eq!(from_db_timestamp("yesterday"), None);
    }
}
