use serde::Deserialize;
use validator::{Validate, ValidationError};

pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Registration payload. Field names follow the wire contract (camelCase);
/// every field is required.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
    #[validate(url, length(max = 511))]
    pub picture_url: String,
}

/// At least 8 characters with at least one letter and one digit.
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.chars().count() >= 8;
    let has_letter = password.chars().any(|c| c.is_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if long_enough && has_letter && has_digit {
        Ok(())
    } else {
        Err(ValidationError::new("password_strength"))
    }
}

/// Listing query string. Both parameters are optional and tolerant: anything
/// missing or unparseable falls back to offset 0, limit 20 instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub offset: Option<String>,
    pub limit: Option<String>,
}

impl ListQuery {
    pub fn offset_and_limit(&self) -> (i64, i64) {
        let offset = self
            .offset
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0);
        let limit = self
            .limit
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PAGE_LIMIT);
        (offset, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "Str0ngPass!".to_string(),
            picture_url: "http://x/a.png".to_string(),
        }
    }

    #[test]
    fn well_formed_registration_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn malformed_email_is_rejected_on_the_email_field() {
        let mut req = valid_request();
        req.email = "not-an-email".to_string();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn weak_passwords_are_rejected() {
        for weak in ["short1", "lettersonly", "12345678", "a1"] {
            let mut req = valid_request();
            req.password = weak.to_string();
            let errors = req.validate().unwrap_err();
            assert!(
                errors.field_errors().contains_key("password"),
                "{weak} should be rejected"
            );
        }
    }

    #[test]
    fn name_and_url_bounds_are_enforced() {
        let mut req = valid_request();
        req.first_name = "x".repeat(101);
        assert!(
            req.validate()
                .unwrap_err()
                .field_errors()
                .contains_key("first_name")
        );

        let mut req = valid_request();
        req.picture_url = "definitely not a url".to_string();
        assert!(
            req.validate()
                .unwrap_err()
                .field_errors()
                .contains_key("picture_url")
        );
    }

    #[test]
    fn list_query_defaults_and_tolerates_garbage() {
        assert_eq!(ListQuery::default().offset_and_limit(), (0, 20));

        let query = ListQuery {
            offset: Some("40".to_string()),
            limit: Some("5".to_string()),
        };
        assert_eq!(query.offset_and_limit(), (40, 5));

        let query = ListQuery {
            offset: Some("abc".to_string()),
            limit: Some("".to_string()),
        };
        assert_eq!(query.offset_and_limit(), (0, 20));
    }
}
