//! Outreach composer: roster, templates, campaigns and dispatch.

use std::collections::HashMap;

use futures_util::join;

use crate::domain::campaign::{CampaignSummary, NewCampaign};
use crate::domain::outreach::OutreachRequest;
use crate::domain::template::{
    NewTemplate, OutreachTemplate, TemplateBook, TemplateOverlay, render_message,
};
use crate::domain::types::TemplateId;
use crate::dto::outreach::{OutreachPageData, RosterEntry};
use crate::forms::campaigns::CreateCampaignForm;
use crate::forms::outreach::{OutreachPageQuery, SendOutreachForm};
use crate::forms::templates::CreateTemplateForm;
use crate::hooks;
use crate::repository::{
    CampaignReader, CampaignWriter, InfluencerReader, OutreachWriter, TemplateReader,
    TemplateWriter,
};
use crate::services::{OutreachOutcome, ServiceResult};

/// Loads the composer with the selection and template carried in the URL.
///
/// `overlay` holds template edits made in this session that the backend may
/// not reflect yet. Edits a successful fetch already shows are dropped from it.
pub async fn load_outreach_page<R>(
    repo: &R,
    query: &OutreachPageQuery,
    overlay: &mut TemplateOverlay,
) -> OutreachPageData
where
    R: InfluencerReader + TemplateReader + CampaignReader + ?Sized,
{
    let (roster, templates, campaigns) = join!(
        hooks::outreach_roster(repo).settle(),
        hooks::templates(repo).settle(),
        hooks::campaigns(repo).settle()
    );

    if templates.error.is_none() {
        overlay.reconcile(&templates.data);
    }
    let mut book = TemplateBook::new(templates.data);
    book.apply_overlay(overlay);

    let selection = query.selection();
    let active_template = query
        .template_id()
        .filter(|id| book.find(id).is_some());

    let preview = active_template.as_ref().and_then(|id| {
        let template = book.find(id)?;
        let recipient = roster
            .data
            .iter()
            .find(|influencer| selection.contains(&influencer.id))?;
        let topic = recipient
            .recent_content
            .as_deref()
            .unwrap_or(recipient.niche.as_str());
        let values = HashMap::from([
            ("name", recipient.name.as_str()),
            ("niche", recipient.niche.as_str()),
            ("topic", topic),
            ("platform", recipient.platform.as_str()),
        ]);
        Some(render_message(&template.content, &values))
    });

    let roster = roster
        .data
        .into_iter()
        .map(|influencer| RosterEntry {
            selected: selection.contains(&influencer.id),
            influencer,
        })
        .collect();

    OutreachPageData {
        roster,
        selected_ids: selection.iter().map(ToString::to_string).collect(),
        templates: book.into_inner(),
        active_template,
        preview,
        campaigns: campaigns.data,
    }
}

/// Dispatches an outreach batch.
///
/// Invalid forms are rejected. A backend failure is logged and reported as a
/// simulated send so the composer can still be reset.
pub async fn send_outreach<R>(repo: &R, form: SendOutreachForm) -> ServiceResult<OutreachOutcome>
where
    R: OutreachWriter + ?Sized,
{
    let request = OutreachRequest::try_from(form)?;
    let recipients = request.influencer_ids.len();

    match repo.send_outreach(&request).await {
        Ok(_) => Ok(OutreachOutcome::Sent(recipients)),
        Err(err) => {
            log::warn!(
                "Failed to send outreach to {recipients} influencers, reporting it as simulated: {err}"
            );
            Ok(OutreachOutcome::Simulated(recipients))
        }
    }
}

/// Creates a template and records it in the session overlay.
///
/// When the backend rejects the call the draft is kept locally with a
/// generated id, so the template list still grows by one.
pub async fn create_template<R>(
    repo: &R,
    form: CreateTemplateForm,
    overlay: &mut TemplateOverlay,
) -> ServiceResult<OutreachTemplate>
where
    R: TemplateWriter + ?Sized,
{
    let draft = NewTemplate::try_from(form)?;

    let template = match repo.create_template(&draft).await {
        Ok(template) => template,
        Err(err) => {
            log::warn!("Failed to create template, keeping it locally: {err}");
            draft.into_local()
        }
    };

    overlay.record_added(template.clone());
    Ok(template)
}

/// Removes a template. The removal is local even when the backend refuses it.
pub async fn delete_template<R>(repo: &R, id: TemplateId, overlay: &mut TemplateOverlay)
where
    R: TemplateWriter + ?Sized,
{
    if !id.is_local() {
        if let Err(err) = repo.delete_template(&id).await {
            log::warn!("Failed to delete template {id}, removing it locally: {err}");
        }
    }
    overlay.record_removed(id);
}

/// Creates a campaign on the backend. Failures are reported to the user.
pub async fn create_campaign<R>(
    repo: &R,
    form: CreateCampaignForm,
) -> ServiceResult<CampaignSummary>
where
    R: CampaignWriter + ?Sized,
{
    let campaign = NewCampaign::try_from(form)?;

    let created = repo.create_campaign(&campaign).await.map_err(|err| {
        log::error!("Failed to create campaign: {err}");
        err
    })?;

    Ok(created)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::outreach::OutreachReceipt;
    use crate::domain::types::InfluencerId;
    use crate::hooks::fallback;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    fn template_form() -> CreateTemplateForm {
        CreateTemplateForm {
            name: "X".to_string(),
            content: "Y".to_string(),
        }
    }

    fn reading_repo() -> MockRepository {
        let mut repo = MockRepository::new();
        repo.expect_list_outreach_roster()
            .returning(|| Ok(fallback::outreach_roster()));
        repo.expect_list_templates()
            .returning(|| Ok(fallback::templates()));
        repo.expect_list_campaigns()
            .returning(|| Err(RepositoryError::Transport("refused".into())));
        repo
    }

    #[tokio::test]
    async fn failed_create_grows_template_list_by_one() {
        let mut repo = reading_repo();
        repo.expect_create_template()
            .times(1)
            .returning(|_| Err(RepositoryError::from_status(500, "down")));
        let mut overlay = TemplateOverlay::default();

        let created = create_template(&repo, template_form(), &mut overlay)
            .await
            .unwrap();
        let page = load_outreach_page(&repo, &OutreachPageQuery::default(), &mut overlay).await;

        assert!(created.id.is_local());
        assert_eq!(created.used_count, 0);
        assert_eq!(page.templates.len(), fallback::templates().len() + 1);
        assert_eq!(page.templates.last().unwrap(), &created);
    }

    #[tokio::test]
    async fn created_template_is_listed_once() {
        let mut repo = MockRepository::new();
        repo.expect_create_template().returning(|draft| {
            Ok(OutreachTemplate {
                id: TemplateId::from(3u32),
                name: draft.name.to_string(),
                content: draft.content.to_string(),
                used_count: 0,
            })
        });
        repo.expect_list_outreach_roster()
            .returning(|| Ok(Vec::new()));
        repo.expect_list_campaigns().returning(|| Ok(Vec::new()));
        repo.expect_list_templates().returning(|| {
            let mut templates = fallback::templates();
            templates.push(OutreachTemplate {
                id: TemplateId::from(3u32),
                name: "X".to_string(),
                content: "Y".to_string(),
                used_count: 0,
            });
            Ok(templates)
        });
        let mut overlay = TemplateOverlay::default();

        create_template(&repo, template_form(), &mut overlay)
            .await
            .unwrap();
        let page = load_outreach_page(&repo, &OutreachPageQuery::default(), &mut overlay).await;

        assert_eq!(page.templates.len(), 3);
        assert!(overlay.added.is_empty());
    }

    #[tokio::test]
    async fn deleted_template_stays_hidden_when_backend_fails() {
        let mut repo = reading_repo();
        repo.expect_delete_template()
            .withf(|id| id.as_str() == "1")
            .times(1)
            .returning(|_| Err(RepositoryError::Transport("refused".into())));
        let mut overlay = TemplateOverlay::default();

        delete_template(&repo, TemplateId::from(1u32), &mut overlay).await;
        let page = load_outreach_page(&repo, &OutreachPageQuery::default(), &mut overlay).await;

        assert_eq!(page.templates.len(), 1);
        assert_eq!(page.templates[0].id.as_str(), "2");
        assert!(overlay.removed.contains(&TemplateId::from(1u32)));
    }

    #[tokio::test]
    async fn settled_removals_are_forgotten_only_after_a_clean_fetch() {
        let mut overlay = TemplateOverlay::default();
        overlay.record_removed(TemplateId::from(9u32));

        let mut offline = MockRepository::new();
        offline
            .expect_list_outreach_roster()
            .returning(|| Ok(Vec::new()));
        offline
            .expect_list_templates()
            .returning(|| Err(RepositoryError::Transport("refused".into())));
        offline.expect_list_campaigns().returning(|| Ok(Vec::new()));
        load_outreach_page(&offline, &OutreachPageQuery::default(), &mut overlay).await;
        assert!(overlay.removed.contains(&TemplateId::from(9u32)));

        let repo = reading_repo();
        load_outreach_page(&repo, &OutreachPageQuery::default(), &mut overlay).await;
        assert!(overlay.removed.is_empty());
    }

    #[tokio::test]
    async fn local_templates_are_not_deleted_remotely() {
        let mut repo = MockRepository::new();
        repo.expect_delete_template().times(0);
        let mut overlay = TemplateOverlay::default();
        let local = TemplateId::local();

        delete_template(&repo, local.clone(), &mut overlay).await;

        assert!(overlay.removed.contains(&local));
    }

    #[tokio::test]
    async fn page_renders_preview_for_first_selected_influencer() {
        let repo = reading_repo();
        let query = OutreachPageQuery::parse("selected=2&template=1").unwrap();

        let page = load_outreach_page(&repo, &query, &mut TemplateOverlay::default()).await;

        assert_eq!(page.selected_ids, vec!["2".to_string()]);
        assert!(page.roster.iter().any(|entry| entry.selected));
        assert_eq!(
            page.preview.as_deref(),
            Some(
                "Hi Mike Roberts, I loved your recent content about Latest smartphone review! \
                 We'd love to collaborate with you on our new product launch."
            )
        );
        assert_eq!(page.campaigns, fallback::campaigns());
    }

    #[tokio::test]
    async fn send_requires_a_selection() {
        let mut repo = MockRepository::new();
        repo.expect_send_outreach().times(0);
        let form = SendOutreachForm::parse(b"custom_message=Hello").unwrap();

        let result = send_outreach(&repo, form).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[tokio::test]
    async fn failed_send_is_simulated() {
        let mut repo = MockRepository::new();
        repo.expect_send_outreach()
            .withf(|request| {
                request.influencer_ids
                    == vec![InfluencerId::from(1u32), InfluencerId::from(3u32)]
            })
            .times(1)
            .returning(|_| Err(RepositoryError::Timeout("30s".into())));
        let form = SendOutreachForm::parse(b"influencer_ids=3&influencer_ids=1").unwrap();

        let outcome = send_outreach(&repo, form).await.unwrap();

        assert_eq!(outcome, OutreachOutcome::Simulated(2));
    }

    #[tokio::test]
    async fn successful_send_counts_recipients() {
        let mut repo = MockRepository::new();
        repo.expect_send_outreach()
            .returning(|_| Ok(OutreachReceipt { success: true }));
        let form = SendOutreachForm::parse(b"influencer_ids=1").unwrap();

        let outcome = send_outreach(&repo, form).await.unwrap();

        assert_eq!(outcome.recipients(), 1);
        assert_eq!(outcome, OutreachOutcome::Sent(1));
    }

    #[tokio::test]
    async fn campaign_errors_reach_the_caller() {
        let mut repo = MockRepository::new();
        repo.expect_create_campaign()
            .times(1)
            .returning(|_| Err(RepositoryError::from_status(422, "bad dates")));
        let form = CreateCampaignForm {
            name: "Autumn".to_string(),
            budget: None,
            start_date: None,
            end_date: None,
        };

        let result = create_campaign(&repo, form).await;

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}
