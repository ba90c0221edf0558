//! Aggregate served by `/api/dashboard`.

use serde::{Deserialize, Serialize};

use crate::domain::campaign::CampaignProgress;
use crate::domain::collaboration::{CurrentCollaboration, PreviousCollaboration};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BrandInfo {
    pub name: String,
    pub industry: String,
    pub member_since: String,
}

impl Default for BrandInfo {
    fn default() -> Self {
        Self {
            name: "Your Brand".to_string(),
            industry: String::new(),
            member_since: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_influencers: u64,
    pub active_campaigns: u32,
    pub response_rate: f64,
    pub total_reach: u64,
}

/// Section lists are optional: when the backend leaves one out, the page
/// loads that section from its own endpoint instead.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    #[serde(default)]
    pub brand: BrandInfo,
    #[serde(default)]
    pub stats: DashboardStats,
    #[serde(default)]
    pub current_collabs: Option<Vec<CurrentCollaboration>>,
    #[serde(default)]
    pub previous_collabs: Option<Vec<PreviousCollaboration>>,
    #[serde(default)]
    pub campaign_progress: Option<Vec<CampaignProgress>>,
}
