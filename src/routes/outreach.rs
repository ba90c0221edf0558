//! Outreach composer, templates and campaigns.

use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::types::TemplateId;
use crate::forms::campaigns::CreateCampaignForm;
use crate::forms::outreach::{OutreachPageQuery, SendOutreachForm};
use crate::forms::templates::CreateTemplateForm;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{OutreachOutcome, ServiceError, outreach as outreach_service};
use crate::session::{self, CurrentUser, SessionClient};

#[get("/outreach")]
pub async fn show_outreach(
    CurrentUser(user): CurrentUser,
    req: HttpRequest,
    session: Session,
    SessionClient(repo): SessionClient,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = match OutreachPageQuery::parse(req.query_string()) {
        Ok(query) => query,
        Err(err) => {
            log::warn!("Ignoring malformed outreach query: {err}");
            OutreachPageQuery::default()
        }
    };
    let mut overlay = session::template_overlay(&session);
    let stored = overlay.clone();

    let data = outreach_service::load_outreach_page(&*repo, &query, &mut overlay).await;
    if overlay != stored {
        if let Err(err) = session::save_template_overlay(&session, &mut overlay) {
            log::warn!("Failed to prune template overlay: {err}");
        }
    }

    let mut context = base_context(&flash_messages, Some(&user), "outreach");
    context.insert("outreach", &data);

    render_template(&tera, "outreach/index.html", &context)
}

#[post("/outreach/send")]
pub async fn send_outreach(
    _user: CurrentUser,
    body: web::Bytes,
    SessionClient(repo): SessionClient,
) -> impl Responder {
    let form = match SendOutreachForm::parse(&body) {
        Ok(form) => form,
        Err(err) => {
            log::warn!("Rejected outreach form: {err}");
            FlashMessage::error("Could not read the outreach form.").send();
            return redirect("/outreach");
        }
    };

    match outreach_service::send_outreach(&*repo, form).await {
        Ok(OutreachOutcome::Sent(count)) => {
            FlashMessage::success(format!("Outreach sent to {count} influencers!")).send();
        }
        Ok(OutreachOutcome::Simulated(count)) => {
            FlashMessage::info(format!("Demo: Outreach sent to {count} influencers!")).send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to send outreach: {err}");
            FlashMessage::error("Failed to send outreach.").send();
        }
    }
    redirect("/outreach")
}

#[post("/templates")]
pub async fn create_template(
    _user: CurrentUser,
    session: Session,
    SessionClient(repo): SessionClient,
    web::Form(form): web::Form<CreateTemplateForm>,
) -> impl Responder {
    let mut overlay = session::template_overlay(&session);

    match outreach_service::create_template(&*repo, form, &mut overlay).await {
        Ok(template) => {
            if let Err(err) = session::save_template_overlay(&session, &mut overlay) {
                log::error!("Failed to remember template {}: {err}", template.id);
                return HttpResponse::InternalServerError().finish();
            }
            if template.id.is_local() {
                FlashMessage::info("Demo: Template created!").send();
            } else {
                FlashMessage::success("Template created successfully!").send();
            }
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to create template: {err}");
            FlashMessage::error("Failed to create template.").send();
        }
    }
    redirect("/outreach")
}

#[post("/templates/{template_id}/delete")]
pub async fn delete_template(
    _user: CurrentUser,
    template_id: web::Path<String>,
    session: Session,
    SessionClient(repo): SessionClient,
) -> impl Responder {
    let template_id = match TemplateId::new(template_id.into_inner()) {
        Ok(id) => id,
        Err(err) => {
            log::warn!("Rejected template deletion: {err}");
            return HttpResponse::BadRequest().finish();
        }
    };

    let mut overlay = session::template_overlay(&session);
    outreach_service::delete_template(&*repo, template_id, &mut overlay).await;

    if let Err(err) = session::save_template_overlay(&session, &mut overlay) {
        log::error!("Failed to remember template deletion: {err}");
        return HttpResponse::InternalServerError().finish();
    }
    FlashMessage::success("Template deleted.").send();
    redirect("/outreach")
}

#[post("/campaigns")]
pub async fn create_campaign(
    _user: CurrentUser,
    SessionClient(repo): SessionClient,
    web::Form(form): web::Form<CreateCampaignForm>,
) -> impl Responder {
    match outreach_service::create_campaign(&*repo, form).await {
        Ok(campaign) => {
            FlashMessage::success(format!("Campaign \"{}\" created.", campaign.name)).send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to create campaign: {err}");
            FlashMessage::error("Failed to create campaign.").send();
        }
    }
    redirect("/outreach")
}
