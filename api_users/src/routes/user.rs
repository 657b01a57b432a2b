use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::billing::BillingProvider;
use common::env_config::Config;
use common::http::Success;
use sqlx::PgPool;

use crate::dtos::user::{ListQuery, RegisterRequest};
use crate::services;

/// Registers a new user and provisions its billing customer.
///
/// # Input
/// - `req`: JSON payload with `firstName`, `lastName`, `email`, `password`
///   and `pictureUrl`, all required strings
///
/// # Output
/// - Success: 201 Created with the public user object; the password hash and
///   billing linkage are never part of the body
/// - Error: 400 `invalid_field` naming the offending field, 409 `email_taken`
///   for a duplicate email, 500 `internal` otherwise
#[post("")]
async fn post_register(
    req: web::Json<RegisterRequest>,
    pool: web::Data<Arc<PgPool>>,
    billing: web::Data<Arc<dyn BillingProvider>>,
    config: web::Data<Arc<Config>>,
) -> impl Responder {
    let pg_pool: &PgPool = &pool;
    let billing: &dyn BillingProvider = billing.get_ref().as_ref();
    let user =
        services::provision::provision_user(pg_pool, billing, &config, &req.into_inner()).await?;
    Success::created(user)
}

/// Lists users in insertion order.
///
/// # Input
/// - `offset` / `limit` query parameters; missing or unparseable values
///   default to 0 and 20
///
/// # Output
/// - Success: 200 OK with an array of public user objects; an offset past the
///   end of the data yields an empty array
#[get("")]
async fn get_users(
    query: web::Query<ListQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> impl Responder {
    let (offset, limit) = query.offset_and_limit();
    let users = services::user::list_users(&pool, offset, limit).await?;
    Success::ok(users)
}

/// Fetches a single user by id.
///
/// # Output
/// - Success: 200 OK with the public user object
/// - Error: 404 `not_found` whether the row is missing or the lookup failed
#[get("/{id}")]
async fn get_user(path: web::Path<i64>, pool: web::Data<Arc<PgPool>>) -> impl Responder {
    let user = services::user::get_user_by_id(&pool, path.into_inner()).await?;
    Success::ok(user)
}
