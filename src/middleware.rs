use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::{header, Method};
use actix_web::middleware::{DefaultHeaders, Next};
use actix_web::{Error, HttpResponse};

pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type";

/// Permissive CORS headers added to every response.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
}

pub fn json_content_type() -> DefaultHeaders {
    DefaultHeaders::new().add((header::CONTENT_TYPE, "application/json"))
}

/// Answers pre-flight requests with a bare 200 before routing, on any path.
pub async fn preflight(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<EitherBody<impl MessageBody>>, Error> {
    if req.method() == Method::OPTIONS {
        log::debug!("pre-flight for {}", req.path());
        return Ok(req
            .into_response(HttpResponse::Ok().finish())
            .map_into_right_body());
    }

    next.call(req).await.map(ServiceResponse::map_into_left_body)
}
