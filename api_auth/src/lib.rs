use actix_web::web;

pub mod middleware {
    pub mod gate;
}

pub mod services {
    pub mod identity;
}

mod dtos {
    pub(crate) mod auth;
}

pub mod routes {
    pub mod session;
}

// Re-export the session gate middleware
pub use middleware::gate::SessionGate;

pub fn mount_auth() -> actix_web::Scope {
    web::scope("/auth")
        .service(routes::session::post_login)
        .service(routes::session::post_logout)
        .service(routes::session::get_session)
}
