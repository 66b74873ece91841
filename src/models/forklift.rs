use serde::{Deserialize, Serialize};
use validator::Validate;

/// Enum representing the possible statuses of a forklift.
///
/// The wire values are the spelled-out strings the backend stores,
/// including the embedded space in `"not available"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum ForkliftStatus {
    #[serde(rename = "available")]
    #[strum(serialize = "available")]
    Available,
    #[serde(rename = "blocked")]
    #[strum(serialize = "blocked")]
    Blocked,
    #[serde(rename = "not available")]
    #[strum(serialize = "not available")]
    NotAvailable,
}

/// A forklift as reported by the backend.
///
/// Status is mutated only via backend calls; the local copy is read-only
/// between refetches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Forklift {
    pub id: i64,
    pub name: String,
    pub status: ForkliftStatus,
    #[serde(default)]
    pub location_id: Option<i64>,
}

/// Payload for creating a forklift.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct NewForklift {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub status: ForkliftStatus,
    pub x: i32,
    pub y: i32,
}

impl NewForklift {
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            status: ForkliftStatus::Available,
            x,
            y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_wire_values() {
        for (status, wire) in [
            (ForkliftStatus::Available, "\"available\""),
            (ForkliftStatus::Blocked, "\"blocked\""),
            (ForkliftStatus::NotAvailable, "\"not available\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
            let parsed: ForkliftStatus = serde_json::from_str(wire).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn empty_name_fails_validation() {
        let forklift = NewForklift::new("", 0, 0);
        assert!(forklift.validate().is_err());
    }
}
