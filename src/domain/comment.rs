use serde::{Deserialize, Serialize};

/// A comment on an event, as embedded in `commentsData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// The backend uses a Mongo-style `_id` field.
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
    /// User id of the author.
    pub poster: String,
    #[serde(default)]
    pub is_pinned: bool,
}

/// Request body for `POST /comment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub event_id: u64,
    pub text: String,
    pub poster: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_comment() {
        let body = r#"{"_id": "c1", "text": "Cant wait for this!", "poster": "u1", "isPinned": false}"#;
        let comment: Comment = serde_json::from_str(body).unwrap();
        assert_eq!(comment.id, "c1");
        assert_eq!(comment.text, "Cant wait for this!");
        assert!(!comment.is_pinned);
    }

    #[test]
    fn new_comment_serializes_camel_case() {
        let comment = NewComment {
            event_id: 101,
            text: "hello".to_string(),
            poster: "u1".to_string(),
        };
        let value = serde_json::to_value(&comment).unwrap();
        assert_eq!(value["eventId"], 101);
        assert_eq!(value["poster"], "u1");
    }
}
