pub mod health;
pub mod users;

use actix_web::{error, web, Scope};

use crate::error::ApiError;

/// Routes under `/api/{backend}`.
pub fn api_scope(prefix: &str) -> Scope {
    web::scope(prefix)
        .service(
            web::scope("/users")
                .service(users::list_users)
                .service(users::create_user)
                .service(users::get_user)
                .service(users::update_user)
                .service(users::delete_user),
        )
        .service(health::health_check)
}

/// Decode any body as JSON whatever its content type; reject only what fails to decode.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, _req| {
            log::warn!("rejected request body: {}", err);
            error::Error::from(ApiError::BadRequest(format!("Invalid request body: {}", err)))
        })
}
