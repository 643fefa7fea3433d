use serde::{Deserialize, Serialize};

/// Request body for both create (`POST {base}`) and update
/// (`PUT {base}/{id}`). The id is carried in the path, never in the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub website: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{UserId, UserRecord};

    #[test]
    fn payload_serializes_without_id() {
        let payload = UserPayload {
            name: "A".into(),
            email: "a@x.com".into(),
            website: "w".into(),
        };
        let value = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({"name": "A", "email": "a@x.com", "website": "w"})
        );
    }

    #[test]
    fn record_roundtrips_server_shape() {
        let raw = r#"{"id":101,"name":"A","email":"a@x.com","website":"w"}"#;
        let record: UserRecord = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(record.id, UserId(101));
        assert_eq!(record.name, "A");
    }
}
