use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::analytics::AnalyticsRangeQuery;
use crate::routes::{base_context, redirect, render_template};
use crate::services::analytics as analytics_service;
use crate::session::{CurrentUser, SessionClient};

#[get("/analytics")]
pub async fn show_analytics(
    CurrentUser(user): CurrentUser,
    query: web::Query<AnalyticsRangeQuery>,
    SessionClient(repo): SessionClient,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = analytics_service::load_analytics_page(&*repo, query.range()).await;

    let mut context = base_context(&flash_messages, Some(&user), "analytics");
    context.insert("analytics", &data);

    render_template(&tera, "analytics/index.html", &context)
}

#[post("/analytics/export")]
/// Streams the CSV export as a download.
pub async fn export_analytics(
    _user: CurrentUser,
    web::Form(form): web::Form<AnalyticsRangeQuery>,
    SessionClient(repo): SessionClient,
) -> impl Responder {
    let range = form.range();

    match analytics_service::export_analytics(&*repo, range).await {
        Ok(export) => {
            if export.simulated {
                log::info!("Serving demo analytics export for {range}");
            }
            HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header(ContentDisposition {
                    disposition: DispositionType::Attachment,
                    parameters: vec![DispositionParam::Filename(export.filename)],
                })
                .body(export.body)
        }
        Err(err) => {
            log::error!("Failed to export analytics: {err}");
            FlashMessage::error("Failed to export analytics.").send();
            redirect(&format!("/analytics?range={range}"))
        }
    }
}
