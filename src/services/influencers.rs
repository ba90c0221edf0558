//! Influencer directory loader and quick outreach.

use crate::domain::influencer::format_compact;
use crate::domain::outreach::{OutreachRequest, Schedule};
use crate::domain::types::InfluencerId;
use crate::dto::influencers::{InfluencerCard, InfluencersPageData};
use crate::filters::FilterSet;
use crate::hooks;
use crate::repository::{InfluencerReader, OutreachWriter};
use crate::services::OutreachOutcome;

/// Loads the directory and applies `filters` to it.
///
/// This is the one page that shows a fetch failure to the user: the error
/// string is returned next to the fallback list.
pub async fn load_influencers_page<R>(repo: &R, filters: FilterSet) -> InfluencersPageData
where
    R: InfluencerReader + ?Sized,
{
    let snapshot = hooks::influencers(repo).settle().await;

    let influencers = filters
        .visible(&snapshot.data)
        .into_iter()
        .map(|influencer| InfluencerCard {
            followers_display: format_compact(influencer.followers),
            influenced_display: format_compact(influencer.influenced_users),
            influencer: influencer.clone(),
        })
        .collect();

    InfluencersPageData {
        influencers,
        total: snapshot.data.len(),
        filters,
        error: snapshot.error,
    }
}

/// Sends the default outreach message to a single influencer.
///
/// A failed send is logged and reported as simulated; the directory never
/// shows a send error.
pub async fn quick_outreach<R>(repo: &R, influencer_id: InfluencerId) -> OutreachOutcome
where
    R: OutreachWriter + ?Sized,
{
    let request = OutreachRequest {
        influencer_ids: vec![influencer_id],
        template_id: None,
        custom_message: String::new(),
        schedule: Schedule::Now,
    };

    match repo.send_outreach(&request).await {
        Ok(receipt) if receipt.success => OutreachOutcome::Sent(1),
        Ok(_) => {
            log::warn!("Backend did not confirm quick outreach, reporting it as simulated");
            OutreachOutcome::Simulated(1)
        }
        Err(err) => {
            log::warn!("Failed to send quick outreach, reporting it as simulated: {err}");
            OutreachOutcome::Simulated(1)
        }
    }
}
