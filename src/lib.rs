#[cfg(feature = "server")]
use std::sync::Arc;
#[cfg(feature = "server")]
use std::time::Duration;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::middleware::RedirectUnauthorized;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::ResourceClient;
#[cfg(feature = "server")]
use crate::repository::fixtures::FixtureRepository;
#[cfg(feature = "server")]
use crate::repository::http::HttpRepository;

pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
mod error_conversions;
pub mod filters;
#[cfg(feature = "server")]
pub mod forms;
pub mod hooks;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod models;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod session;

/// Picks the resource client once for the whole process.
#[cfg(feature = "server")]
pub fn build_resource_client(config: &ServerConfig) -> std::io::Result<Arc<dyn ResourceClient>> {
    if config.mock_mode {
        log::info!("Mock mode enabled, serving fixture data");
        return Ok(Arc::new(FixtureRepository::new()));
    }

    let timeout = Duration::from_secs(config.request_timeout_secs);
    let repo = HttpRepository::new(&config.api_base_url, timeout)
        .map_err(|e| std::io::Error::other(format!("Failed to build HTTP client: {e}")))?;
    log::info!("Using backend at {}", repo.base_url());
    Ok(Arc::new(repo))
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = web::Data::from(build_resource_client(&server_config)?);

    // Keys and stores for sessions and flash messages.
    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid session secret: {e}")))?;

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(routes::main::health)
            .service(routes::main::show_home)
            .service(routes::auth::show_login)
            .service(routes::auth::login)
            .service(routes::auth::logout)
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(routes::dashboard::show_dashboard)
                    .service(routes::influencers::show_influencers)
                    .service(routes::influencers::quick_outreach)
                    .service(routes::outreach::show_outreach)
                    .service(routes::outreach::send_outreach)
                    .service(routes::outreach::create_template)
                    .service(routes::outreach::delete_template)
                    .service(routes::outreach::create_campaign)
                    .service(routes::analytics::show_analytics)
                    .service(routes::analytics::export_analytics)
                    .service(routes::notifications::show_notifications)
                    .service(routes::notifications::mark_notification_read)
                    .service(routes::notifications::mark_all_notifications_read),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(repo.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
