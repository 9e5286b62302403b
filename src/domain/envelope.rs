use serde::{Deserialize, Serialize};

/// Response envelope used by every backend endpoint:
/// `{ success: boolean, data?: ..., message?: string }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_ack_without_data() {
        let env: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"success": true, "message": "Event created"}"#).unwrap();
        assert!(env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message.as_deref(), Some("Event created"));
    }

    #[test]
    fn deserializes_rejection() {
        let env: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"success": false, "message": "nope"}"#).unwrap();
        assert!(!env.success);
        assert_eq!(env.message.as_deref(), Some("nope"));
    }

    #[test]
    fn deserializes_bare_success() {
        let env: Envelope<u32> = serde_json::from_str(r#"{"success": true, "data": 7}"#).unwrap();
        assert_eq!(env.data, Some(7));
        assert!(env.message.is_none());
    }
}
