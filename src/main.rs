mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{from_fn, Logger};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;

use services::UserStore;

/// Assemble the application: users routes behind the CORS and JSON layers.
pub fn build_app(
    store: Data<dyn UserStore>,
    api_prefix: &str,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(store)
        .app_data(handlers::json_config())
        .wrap(from_fn(middleware::preflight))
        .wrap(middleware::cors_headers())
        .wrap(middleware::json_content_type())
        .wrap(Logger::default())
        .service(handlers::api_scope(api_prefix))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = config::Config::from_env().context("DATABASE_URL must be set")?;

    let store = services::connect(&config)
        .await
        .context("Failed to initialize database")?;
    let store_data: Data<dyn UserStore> = Data::from(store.clone());

    let bind_address = config.server.bind_address();
    let api_prefix = config.server.api_prefix();

    log::info!("Starting users API on {}", bind_address);
    log::info!("  GET    {}/users", api_prefix);
    log::info!("  POST   {}/users", api_prefix);
    log::info!("  GET    {}/users/{{id}}", api_prefix);
    log::info!("  PUT    {}/users/{{id}}", api_prefix);
    log::info!("  DELETE {}/users/{{id}}", api_prefix);

    HttpServer::new(move || build_app(store_data.clone(), &api_prefix))
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    store.close().await;
    log::info!("Server stopped");
    Ok(())
}
