use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::types::NotificationId;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, notifications as notifications_service};
use crate::session::{self, CurrentUser, SessionClient};

#[get("/notifications")]
pub async fn show_notifications(
    CurrentUser(user): CurrentUser,
    session: Session,
    SessionClient(repo): SessionClient,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let read_ids = session::read_notifications(&session);
    let data = notifications_service::load_notifications_page(&*repo, &read_ids).await;

    let mut context = base_context(&flash_messages, Some(&user), "notifications");
    context.insert("notifications", &data.notifications);
    context.insert("unread_count", &data.unread_count);

    render_template(&tera, "notifications/index.html", &context)
}

#[post("/notifications/{notification_id}/read")]
pub async fn mark_notification_read(
    _user: CurrentUser,
    notification_id: web::Path<String>,
    session: Session,
    SessionClient(repo): SessionClient,
) -> impl Responder {
    let Ok(notification_id) = NotificationId::new(notification_id.into_inner()) else {
        return HttpResponse::BadRequest().finish();
    };
    let read_ids = session::read_notifications(&session);

    match notifications_service::mark_read(&*repo, &notification_id, &read_ids).await {
        Ok(read_ids) => {
            if let Err(err) = session::save_read_notifications(&session, &read_ids) {
                log::error!("Failed to store read notifications: {err}");
                return HttpResponse::InternalServerError().finish();
            }
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::warning("Notification no longer exists.").send();
        }
        Err(err) => {
            log::error!("Failed to mark notification read: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }
    redirect("/notifications")
}

#[post("/notifications/read-all")]
pub async fn mark_all_notifications_read(
    _user: CurrentUser,
    session: Session,
    SessionClient(repo): SessionClient,
) -> impl Responder {
    let read_ids = session::read_notifications(&session);
    let read_ids = notifications_service::mark_all_read(&*repo, &read_ids).await;

    if let Err(err) = session::save_read_notifications(&session, &read_ids) {
        log::error!("Failed to store read notifications: {err}");
        return HttpResponse::InternalServerError().finish();
    }
    FlashMessage::success("All notifications marked as read.").send();
    redirect("/notifications")
}
