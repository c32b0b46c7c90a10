use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of an event store operation.
///
/// Returned by value from every operation; callers branch on it before
/// trusting any accompanying payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "NOT FOUND")]
    NotFound,
    /// The operation is invalid for the current state, e.g. a duplicate add.
    #[serde(rename = "FAIL")]
    Fail,
}

impl StatusCode {
    /// Returns the wire representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "NOT FOUND",
            StatusCode::Fail => "FAIL",
        }
    }

    /// Returns true if this is [`StatusCode::Ok`].
    pub fn is_ok(&self) -> bool {
        matches!(self, StatusCode::Ok)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(StatusCode::Ok.to_string(), "OK");
        assert_eq!(StatusCode::NotFound.to_string(), "NOT FOUND");
        assert_eq!(StatusCode::Fail.to_string(), "FAIL");
    }

    #[test]
    fn test_status_serializes_to_wire_strings() {
        assert_eq!(
            serde_json::to_string(&StatusCode::NotFound).unwrap(),
            r#""NOT FOUND""#
        );
        let parsed: StatusCode = serde_json::from_str(r#""FAIL""#).unwrap();
        assert_eq!(parsed, StatusCode::Fail);
    }

    #[test]
    fn test_is_ok() {
        assert!(StatusCode::Ok.is_ok());
        assert!(!StatusCode::NotFound.is_ok());
        assert!(!StatusCode::Fail.is_ok());
    }
}
