use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::models::orphan::BillingOrphan;

const INSERT_ORPHAN: &str = r#"
    INSERT INTO billing_orphans (billing_customer_id, email, detail)
    VALUES ($1, $2, $3)
"#;
const SELECT_ORPHANS: &str = "SELECT * FROM billing_orphans ORDER BY id";

/// Records a billing customer that exists remotely without a committed local
/// user row so an out-of-band sweep can reconcile it.
pub async fn insert_billing_orphan<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    billing_customer_id: &str,
    email: &str,
    detail: &str,
) -> Res<()> {
    sqlx::query(INSERT_ORPHAN)
        .bind(billing_customer_id)
        .bind(email)
        .bind(detail)
        .execute(executor)
        .await?;
    Ok(())
}

/// All pending reconciliation records, oldest first.
pub async fn list_billing_orphans<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<BillingOrphan>> {
    sqlx::query_as::<_, BillingOrphan>(SELECT_ORPHANS)
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}
