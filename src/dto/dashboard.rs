use serde::Serialize;

use crate::domain::campaign::CampaignProgress;
use crate::domain::collaboration::{CurrentCollaboration, PreviousCollaboration};
use crate::domain::dashboard::{BrandInfo, DashboardStats};

/// Campaign progress card with precomputed display values.
#[derive(Debug, Serialize)]
pub struct ProgressCard {
    #[serde(flatten)]
    pub campaign: CampaignProgress,
    pub budget_used: f64,
    /// One of `high`, `medium`, `low`, `minimal`.
    pub tone: &'static str,
}

/// Data required to render the brand dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardPageData {
    pub greeting: String,
    pub user_name: String,
    pub brand: BrandInfo,
    pub stats: DashboardStats,
    pub total_reach_display: String,
    pub current_collabs: Vec<CurrentCollaboration>,
    pub previous_collabs: Vec<PreviousCollaboration>,
    pub campaign_progress: Vec<ProgressCard>,
}
