//! Influencer directory.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::types::InfluencerId;
use crate::filters::{FilterKey, FilterSet};
use crate::forms::influencers::InfluencerFilterQuery;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{OutreachOutcome, influencers as influencers_service};
use crate::session::{CurrentUser, SessionClient};

#[get("/influencers")]
pub async fn show_influencers(
    CurrentUser(user): CurrentUser,
    query: web::Query<InfluencerFilterQuery>,
    SessionClient(repo): SessionClient,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let filters = FilterSet::from(&query.into_inner());
    let data = influencers_service::load_influencers_page(&*repo, filters).await;

    let mut context = base_context(&flash_messages, Some(&user), "influencers");
    context.insert("influencers", &data.influencers);
    context.insert("total", &data.total);
    context.insert("error", &data.error);
    context.insert("search", &data.filters.search());
    for key in FilterKey::ALL {
        context.insert(key.as_str(), &data.filters.get(key).unwrap_or("all"));
    }

    render_template(&tera, "influencers/index.html", &context)
}

#[post("/influencers/{influencer_id}/outreach")]
/// One-click outreach from a directory card.
pub async fn quick_outreach(
    _user: CurrentUser,
    influencer_id: web::Path<String>,
    SessionClient(repo): SessionClient,
) -> impl Responder {
    let influencer_id = match InfluencerId::new(influencer_id.into_inner()) {
        Ok(id) => id,
        Err(err) => {
            log::warn!("Rejected quick outreach: {err}");
            return HttpResponse::BadRequest().finish();
        }
    };

    match influencers_service::quick_outreach(&*repo, influencer_id).await {
        OutreachOutcome::Sent(_) => {
            FlashMessage::success("Outreach message sent successfully!").send();
        }
        OutreachOutcome::Simulated(_) => {
            FlashMessage::info("Outreach message sent! (demo)").send();
        }
    }
    redirect("/influencers")
}
