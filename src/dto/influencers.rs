use serde::Serialize;

use crate::domain::influencer::InfluencerSummary;
use crate::filters::FilterSet;

/// Influencer card with formatted counters.
#[derive(Debug, Serialize)]
pub struct InfluencerCard {
    #[serde(flatten)]
    pub influencer: InfluencerSummary,
    pub followers_display: String,
    pub influenced_display: String,
}

/// Data required to render the influencer directory.
#[derive(Debug, Serialize)]
pub struct InfluencersPageData {
    pub influencers: Vec<InfluencerCard>,
    /// Size of the unfiltered list.
    pub total: usize,
    pub filters: FilterSet,
    /// Fetch failure shown inline above the (fallback) list.
    pub error: Option<String>,
}
