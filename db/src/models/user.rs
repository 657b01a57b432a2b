use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account row. Rows are never hard-deleted: soft deletion flips `active`
/// and stamps `deleted_at`, so readers must not assume every row is active.
///
/// `password_hash` and `billing_customer_id` never leave the server;
/// serialization skips them along with `deleted_at`.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    #[serde(skip_serializing, default)]
    pub billing_customer_id: String,
    pub picture_url: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing, default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 7,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$secret".to_string(),
            billing_customer_id: "cus_123".to_string(),
            picture_url: Some("http://x/a.png".to_string()),
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn serialization_uses_camel_case_public_fields() {
        let value = serde_json::to_value(sample_user()).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["lastName"], "Lovelace");
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["pictureUrl"], "http://x/a.png");
        assert_eq!(value["active"], true);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
    }

    #[test]
    fn secrets_are_never_serialized() {
        let value = serde_json::to_value(sample_user()).unwrap();
        let obj = value.as_object().unwrap();
        for key in obj.keys() {
            assert!(!key.to_lowercase().contains("password"), "leaked {key}");
            assert!(!key.to_lowercase().contains("billing"), "leaked {key}");
            assert!(!key.to_lowercase().contains("hash"), "leaked {key}");
        }
        assert!(obj.get("deletedAt").is_none());
    }
}
