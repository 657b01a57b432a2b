use chrono::{DateTime, Utc};
use serde::Serialize;

/// A pending-compensation record: the billing provider holds a customer we
/// have no committed user row for. Written by the provisioning path, consumed
/// by an out-of-band sweep.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct BillingOrphan {
    pub id: i64,
    pub billing_customer_id: String,
    pub email: String,
    pub detail: String,
    pub created_at: DateTime<Utc>,
}
