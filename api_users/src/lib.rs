use actix_web::{Scope, web};

pub mod dtos {
    pub mod user;
}
pub mod routes {
    pub mod user;
}
pub mod services {
    pub mod provision;
    pub mod user;
}

pub fn mount_users() -> Scope {
    web::scope("/users")
        .service(routes::user::post_register)
        .service(routes::user::get_users)
        .service(routes::user::get_user)
}
