use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, post, put, HttpResponse};

use crate::error::{ApiError, ApiResult};
use crate::models::common::MessageResponse;
use crate::models::user::{parse_user_id, UserPayload};
use crate::services::UserStore;

#[get("")]
pub async fn list_users(store: Data<dyn UserStore>) -> ApiResult<HttpResponse> {
    let users = store.list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

#[post("")]
pub async fn create_user(
    store: Data<dyn UserStore>,
    payload: Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let user = store.create_user(payload.into_inner()).await?;
    log::info!("Created user {}", user.id);
    Ok(HttpResponse::Ok().json(user))
}

/// Unknown ids answer 404 with an empty body.
#[get("/{id}")]
pub async fn get_user(store: Data<dyn UserStore>, path: Path<String>) -> ApiResult<HttpResponse> {
    let Some(id) = parse_user_id(&path) else {
        return Ok(HttpResponse::NotFound().finish());
    };

    match store.get_user(id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

#[put("/{id}")]
pub async fn update_user(
    store: Data<dyn UserStore>,
    path: Path<String>,
    payload: Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path).ok_or_else(ApiError::user_not_found)?;

    match store.update_user(id, payload.into_inner()).await? {
        Some(user) => {
            log::info!("Updated user {}", user.id);
            Ok(HttpResponse::Ok().json(user))
        }
        None => Err(ApiError::user_not_found()),
    }
}

#[delete("/{id}")]
pub async fn delete_user(
    store: Data<dyn UserStore>,
    path: Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path).ok_or_else(ApiError::user_not_found)?;

    if !store.delete_user(id).await? {
        return Err(ApiError::user_not_found());
    }

    log::info!("Deleted user {}", id);
    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted")))
}
