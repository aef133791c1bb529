//! Response envelopes the backend uses around its payloads.

use serde::{Deserialize, Serialize};

/// Error body returned with any non-2xx status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
        }
    }

    /// The message, if the backend sent a non-blank one.
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().filter(|m| !m.trim().is_empty())
    }
}

/// `{ "id": ... }` returned by create endpoints. Users get numeric ids,
/// hotels and reservations get strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse<T> {
    pub id: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_error_is_ignored() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"  "}"#).unwrap();
        assert_eq!(body.message(), None);

        let body: ErrorBody = serde_json::from_str(r#"{"detail":"x"}"#).unwrap();
        assert_eq!(body.message(), None);

        assert_eq!(ErrorBody::new("hotel not found").message(), Some("hotel not found"));
    }
}
