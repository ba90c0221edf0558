use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use chrono::{Local, Timelike};
use tera::Tera;

use crate::routes::{base_context, render_template};
use crate::services::dashboard as dashboard_service;
use crate::session::{CurrentUser, SessionClient};

#[get("/dashboard")]
pub async fn show_dashboard(
    CurrentUser(user): CurrentUser,
    SessionClient(repo): SessionClient,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let hour = Local::now().hour();
    let data = dashboard_service::load_dashboard_page(&*repo, Some(&user), hour).await;

    let mut context = base_context(&flash_messages, Some(&user), "dashboard");
    context.insert("dashboard", &data);

    render_template(&tera, "dashboard/index.html", &context)
}
