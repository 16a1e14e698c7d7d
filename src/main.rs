/// Draft Service - HTTP Server
///
/// Stateless JSON adapter for the video-editing assistant plugin. All state
/// lives in the request; handlers share only the immutable configuration.
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use anyhow::Context;
use draft_service::handlers;
use draft_service::{AppError, Config};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

// Matches the payload ceiling of the upstream editing clients
const JSON_PAYLOAD_LIMIT: usize = 50 * 1024 * 1024;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let bind_address = format!("{}:{}", config.app.host, config.app.port);

    tracing::info!(env = %config.app.env, "Draft service starting HTTP server on {}", bind_address);

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in &config.cors.allowed_origins {
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(
                web::JsonConfig::default()
                    .limit(JSON_PAYLOAD_LIMIT)
                    .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
            )
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(handlers::health))
            .route("/", web::get().to(handlers::index))
            .route(
                "/openapi.json",
                web::get().to(|| async {
                    use utoipa::OpenApi;
                    HttpResponse::Ok()
                        .content_type("application/json")
                        .json(draft_service::openapi::ApiDoc::openapi())
                }),
            )
            .service(web::scope("/api").configure(handlers::routes))
            .default_service(web::route().to(handlers::not_found))
    })
    .bind(&bind_address)?
    .run()
    .await?;

    tracing::info!("Draft service shutting down");

    Ok(())
}
