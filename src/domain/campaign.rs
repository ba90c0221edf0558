//! Campaign records. Status transitions are decided by the backend only.

use serde::{Deserialize, Serialize};

use crate::domain::types::{CampaignId, CampaignStatus, ProgressPercent};

/// Campaign row listed on the outreach page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    pub id: CampaignId,
    pub name: String,
    pub status: CampaignStatus,
    #[serde(default)]
    pub messages_sent: u32,
    #[serde(default)]
    pub responses: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub scheduled_for: Option<String>,
}

/// Progress card rendered on the dashboard.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignProgress {
    pub id: CampaignId,
    pub name: String,
    pub status: CampaignStatus,
    pub progress: ProgressPercent,
    #[serde(default)]
    pub target_influencers: u32,
    #[serde(default)]
    pub current_influencers: u32,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub spent: f64,
}

impl CampaignProgress {
    /// Share of the budget already spent, in percent.
    pub fn budget_used_percent(&self) -> f64 {
        if self.budget <= 0.0 {
            0.0
        } else {
            (self.spent / self.budget * 100.0).min(100.0)
        }
    }
}

/// Body of `GET /api/campaigns`: a bare array or a `{"campaigns": [...]}` envelope.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum CampaignListing {
    Bare(Vec<CampaignSummary>),
    Wrapped { campaigns: Vec<CampaignSummary> },
}

impl From<CampaignListing> for Vec<CampaignSummary> {
    fn from(listing: CampaignListing) -> Self {
        match listing {
            CampaignListing::Bare(campaigns) | CampaignListing::Wrapped { campaigns } => campaigns,
        }
    }
}

/// Payload for `POST /api/campaigns`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub name: String,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_accepts_both_shapes() {
        let record = serde_json::json!({"id": "1", "name": "Summer Skincare", "status": "active"});

        let bare: CampaignListing = serde_json::from_value(serde_json::json!([record.clone()])).unwrap();
        let wrapped: CampaignListing =
            serde_json::from_value(serde_json::json!({ "campaigns": [record] })).unwrap();

        let bare = Vec::<CampaignSummary>::from(bare);
        assert_eq!(bare, Vec::<CampaignSummary>::from(wrapped));
        assert_eq!(bare[0].name, "Summer Skincare");
    }

    #[test]
    fn budget_usage_is_capped_and_safe_on_zero_budget() {
        let mut progress: CampaignProgress = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Summer Collection Launch",
            "status": "active",
            "progress": 75,
            "budget": 5000,
            "spent": 3750
        }))
        .unwrap();
        assert_eq!(progress.budget_used_percent(), 75.0);

        progress.spent = 9000.0;
        assert_eq!(progress.budget_used_percent(), 100.0);

        progress.budget = 0.0;
        assert_eq!(progress.budget_used_percent(), 0.0);
    }
}
