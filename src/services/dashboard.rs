//! Brand dashboard loader.

use futures_util::join;

use crate::domain::analytics::group_thousands;
use crate::domain::auth::UserProfile;
use crate::domain::campaign::CampaignProgress;
use crate::dto::dashboard::{DashboardPageData, ProgressCard};
use crate::hooks;
use crate::repository::{CampaignReader, CollaborationReader, DashboardReader};

const DEFAULT_NAME: &str = "Team";

/// Time-of-day greeting for a local hour (0-23).
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

/// Visual band of a progress percentage.
pub fn progress_tone(progress: u8) -> &'static str {
    match progress {
        75.. => "high",
        50..=74 => "medium",
        25..=49 => "low",
        _ => "minimal",
    }
}

fn progress_card(campaign: CampaignProgress) -> ProgressCard {
    ProgressCard {
        budget_used: campaign.budget_used_percent(),
        tone: progress_tone(campaign.progress.get()),
        campaign,
    }
}

/// Loads the dashboard aggregate.
///
/// Sections the aggregate leaves out are loaded from their own endpoints,
/// concurrently and with their own fallbacks.
pub async fn load_dashboard_page<R>(
    repo: &R,
    user: Option<&UserProfile>,
    hour: u32,
) -> DashboardPageData
where
    R: DashboardReader + CollaborationReader + CampaignReader + ?Sized,
{
    let mut overview = hooks::dashboard(repo).settle().await.data;

    let current_section = overview.current_collabs.take();
    let previous_section = overview.previous_collabs.take();
    let progress_section = overview.campaign_progress.take();

    let current = async move {
        match current_section {
            Some(list) => list,
            None => hooks::current_collaborations(repo).settle().await.data,
        }
    };
    let previous = async move {
        match previous_section {
            Some(list) => list,
            None => hooks::previous_collaborations(repo).settle().await.data,
        }
    };
    let progress = async move {
        match progress_section {
            Some(list) => list,
            None => hooks::campaign_progress(repo).settle().await.data,
        }
    };
    let (current_collabs, previous_collabs, campaign_progress) = join!(current, previous, progress);

    let user_name = user
        .map(|u| u.name.trim())
        .filter(|name| !name.is_empty())
        .and_then(|name| name.split_whitespace().next())
        .unwrap_or(DEFAULT_NAME)
        .to_string();

    DashboardPageData {
        greeting: greeting(hour).to_string(),
        user_name,
        total_reach_display: group_thousands(overview.stats.total_reach),
        brand: overview.brand,
        stats: overview.stats,
        current_collabs,
        previous_collabs,
        campaign_progress: campaign_progress.into_iter().map(progress_card).collect(),
    }
}

#[cfg(test)]
mod tone_tests {
    use super::*;

    #[test]
    fn greeting_follows_the_clock() {
        assert_eq!(greeting(6), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(17), "Good afternoon");
        assert_eq!(greeting(23), "Good evening");
    }

    #[test]
    fn progress_bands() {
        assert_eq!(progress_tone(100), "high");
        assert_eq!(progress_tone(75), "high");
        assert_eq!(progress_tone(50), "medium");
        assert_eq!(progress_tone(30), "low");
        assert_eq!(progress_tone(0), "minimal");
    }
}
