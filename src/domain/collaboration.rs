//! Collaboration records grouped by state.

use serde::{Deserialize, Serialize};

use crate::domain::types::{CampaignStatus, CollaborationId, ProgressPercent};

/// Influencer reference embedded in a collaboration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collaborator {
    pub name: String,
    pub platform: String,
    pub followers: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentCollaboration {
    pub id: CollaborationId,
    pub influencer: Collaborator,
    pub campaign: String,
    pub progress: ProgressPercent,
    #[serde(default)]
    pub deadline: Option<String>,
    pub status: CampaignStatus,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreviousCollaboration {
    pub id: CollaborationId,
    pub influencer: Collaborator,
    pub campaign: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub completed_date: Option<String>,
    #[serde(default)]
    pub engagement: f64,
    #[serde(default)]
    pub roi: f64,
    pub status: CampaignStatus,
}
