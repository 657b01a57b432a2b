use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::{dtos::user::NewUser, models::user::User};

/// Hard upper bound on a single page; caller-supplied limits above it are
/// capped rather than rejected.
pub const MAX_PAGE_SIZE: i64 = 100;

const SELECT_USER: &str = "SELECT * FROM users WHERE id = $1";
const SELECT_USER_BY_EMAIL: &str = "SELECT * FROM users WHERE email = $1";
const SELECT_USERS: &str = "SELECT * FROM users ORDER BY id OFFSET $1 LIMIT $2";
const INSERT_USER: &str = r#"
    INSERT INTO users
    (first_name, last_name, email, password_hash, billing_customer_id, picture_url, active, created_at, updated_at)
    VALUES ($1, $2, $3, $4, '', $5, TRUE, now(), now())
    RETURNING id
"#;

/// Looks a user up by id. Both a missing row and a driver-level failure are
/// reported as the same public not-found error; the driver detail only goes
/// to the log.
pub async fn get_user_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: i64,
) -> Res<User> {
    sqlx::query_as::<_, User>(SELECT_USER)
        .bind(user_id)
        .fetch_optional(executor)
        .await
        .map_err(|err| {
            log::error!("user lookup by id failed: {}", err);
            AppError::NotFound("user".to_string())
        })?
        .ok_or_else(|| AppError::NotFound("user".to_string()))
}

/// Looks a user up by email address. Same not-found contract as
/// [`get_user_by_id`].
pub async fn get_user_by_email<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<User> {
    sqlx::query_as::<_, User>(SELECT_USER_BY_EMAIL)
        .bind(email)
        .fetch_optional(executor)
        .await
        .map_err(|err| {
            log::error!("user lookup by email failed: {}", err);
            AppError::NotFound("user".to_string())
        })?
        .ok_or_else(|| AppError::NotFound("user".to_string()))
}

/// Returns up to `limit` users in insertion (id) order, starting after
/// `offset`. A range beyond the data yields an empty vec. Inputs are
/// untrusted: negatives clamp to zero and `limit` is capped at
/// [`MAX_PAGE_SIZE`].
pub async fn list_users<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    offset: i64,
    limit: i64,
) -> Res<Vec<User>> {
    let (offset, limit) = clamp_page(offset, limit);
    sqlx::query_as::<_, User>(SELECT_USERS)
        .bind(offset)
        .bind(limit)
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

/// Inserts a new user row with `active = TRUE`, both timestamps at `now()`,
/// and an empty billing customer id; returns the assigned id. A violation of
/// the email uniqueness constraint maps to the distinguishable
/// [`AppError::EmailTaken`]; any other persistence error stays generic.
pub async fn insert_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: NewUser,
) -> Res<i64> {
    sqlx::query_scalar::<_, i64>(INSERT_USER)
        .bind(data.first_name)
        .bind(data.last_name)
        .bind(data.email)
        .bind(data.password_hash)
        .bind(data.picture_url)
        .fetch_one(executor)
        .await
        .map_err(classify_insert_error)
}

fn classify_insert_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
            return AppError::EmailTaken;
        }
    }
    AppError::Database(err)
}

fn clamp_page(offset: i64, limit: i64) -> (i64, i64) {
    (offset.max(0), limit.clamp(0, MAX_PAGE_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_bounds_are_clamped() {
        assert_eq!(clamp_page(0, 20), (0, 20));
        assert_eq!(clamp_page(-5, 20), (0, 20));
        assert_eq!(clamp_page(40, -1), (40, 0));
        assert_eq!(clamp_page(0, 10_000), (0, MAX_PAGE_SIZE));
    }
}
