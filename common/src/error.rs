use actix_web::{HttpResponse, http::StatusCode};
use thiserror::Error;

pub type Res<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    // === CONVERSION ERRORS ===
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Billing provider error: {0}")]
    Billing(#[from] stripe::StripeError),

    // === APPLICATION ERRORS ===
    #[error("Invalid value for field '{field}'")]
    InvalidField { field: String },

    #[error("Email address already in use")]
    EmailTaken,

    #[error("{0} not found")]
    NotFound(String),

    #[error("Billing customer {customer_id} exists but the local record was not committed: {detail}")]
    BillingOrphan { customer_id: String, detail: String },

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// The public error code this failure classifies into. Every variant
    /// resolves to exactly one code; anything unclassified is `internal`.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidField { .. } => "invalid_field",
            AppError::EmailTaken => "email_taken",
            AppError::NotFound(_) => "not_found",
            AppError::Database(_)
            | AppError::Billing(_)
            | AppError::BillingOrphan { .. }
            | AppError::Internal(_) => "internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            AppError::EmailTaken => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_)
            | AppError::Billing(_)
            | AppError::BillingOrphan { .. }
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message included in the response body. Internal detail (driver
    /// text, provider responses) never crosses this boundary; it is only
    /// written to the server-side log.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidField { .. } | AppError::EmailTaken | AppError::NotFound(_) => {
                self.to_string()
            }
            AppError::Database(_)
            | AppError::Billing(_)
            | AppError::BillingOrphan { .. }
            | AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    pub fn to_http_response(&self) -> HttpResponse {
        match self {
            AppError::Database(error) => {
                log::error!("Database error: {}", error);
            }
            AppError::Billing(error) => {
                log::error!("Billing provider error: {}", error);
            }
            // The one condition that must reach operator-visible diagnostics:
            // a remote billing identity with no committed local row.
            AppError::BillingOrphan {
                customer_id,
                detail,
            } => {
                log::error!(
                    "ORPHANED billing customer {}: local commit failed ({}); reconciliation required",
                    customer_id,
                    detail
                );
            }
            AppError::Internal(error) => {
                log::error!("Internal error: {}", error);
            }
            _ => {}
        }

        HttpResponse::build(self.status()).json(serde_json::json!({
            "code": self.code(),
            "message": self.public_message(),
        }))
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        self.to_http_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_conflict_and_missing_rows_keep_their_own_codes() {
        let err = AppError::InvalidField {
            field: "email".to_string(),
        };
        assert_eq!(err.code(), "invalid_field");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.public_message().contains("email"));

        assert_eq!(AppError::EmailTaken.code(), "email_taken");
        assert_eq!(AppError::EmailTaken.status(), StatusCode::CONFLICT);

        let err = AppError::NotFound("user".to_string());
        assert_eq!(err.code(), "not_found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "user not found");
    }

    #[test]
    fn storage_detail_never_reaches_the_public_message() {
        let err = AppError::Database(sqlx::Error::PoolClosed);
        assert_eq!(err.code(), "internal");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn orphaned_billing_identity_is_classified_as_internal() {
        let err = AppError::BillingOrphan {
            customer_id: "cus_123".to_string(),
            detail: "commit failed".to_string(),
        };
        assert_eq!(err.code(), "internal");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.public_message().contains("cus_123"));
    }
}
