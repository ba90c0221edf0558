use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde_json::json;
use tera::Tera;

use crate::routes::{base_context, render_template};
use crate::services::home as home_service;
use crate::session::{AuthSession, SessionClient};

#[get("/")]
/// Landing page with headline metrics and testimonials. Public.
pub async fn show_home(
    auth: AuthSession,
    SessionClient(repo): SessionClient,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = home_service::load_home_page(&*repo).await;

    let user = auth.user();
    let mut context = base_context(&flash_messages, user.as_ref(), "home");
    context.insert("analytics", &data.analytics);
    context.insert("testimonials", &data.testimonials);

    render_template(&tera, "main/index.html", &context)
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
