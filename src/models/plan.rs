use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A committed assignment of one forklift to one order within a time window.
///
/// Every non-key field is nullable on the wire; the simulation skips plans
/// missing any piece rather than treating them as errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,
    #[serde(default)]
    pub forklift_id: Option<i64>,
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default, with = "timestamp")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp")]
    pub end_time: Option<DateTime<Utc>>,
}

/// Serde helpers for the backend's timestamp strings.
///
/// The backend emits naive local-format timestamps ("2024-01-01T10:00:00" or
/// with a space separator); unparseable values deserialize to `None`, the
/// same tolerance the grid applies when filtering plan times.
mod timestamp {
    use super::*;
    use serde::{Deserializer, Serializer};

    const FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.format("%Y-%m-%dT%H:%M:%S").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse))
    }

    fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        FORMATS.iter().find_map(|format| {
            NaiveDateTime::parse_from_str(raw, format)
                .ok()
                .map(|naive| naive.and_utc())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_naive_and_rfc3339_timestamps() {
        for raw in [
            r#"{"id":1,"forklift_id":2,"order_id":3,"start_time":"2024-06-01T08:00:00","end_time":"2024-06-01 08:00:20"}"#,
            r#"{"id":1,"forklift_id":2,"order_id":3,"start_time":"2024-06-01T08:00:00Z","end_time":"2024-06-01T08:00:20+00:00"}"#,
        ] {
            let plan: Plan = serde_json::from_str(raw).unwrap();
            assert_eq!(
                plan.start_time,
                Some(Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap())
            );
            assert_eq!(
                plan.end_time,
                Some(Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 20).unwrap())
            );
        }
    }

    #[test]
    fn tolerates_missing_and_garbage_timestamps() {
        let plan: Plan =
            serde_json::from_str(r#"{"id":7,"start_time":"soon","end_time":null}"#).unwrap();
        assert_eq!(plan.forklift_id, None);
        assert_eq!(plan.start_time, None);
        assert_eq!(plan.end_time, None);
    }
}
