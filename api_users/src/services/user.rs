use common::error::Res;
use db::models::user::User;
use sqlx::PgPool;

pub async fn get_user_by_id(pool: &PgPool, user_id: i64) -> Res<User> {
    db::user::get_user_by_id(pool, user_id).await
}

pub async fn list_users(pool: &PgPool, offset: i64, limit: i64) -> Res<Vec<User>> {
    db::user::list_users(pool, offset, limit).await
}
