use serde::Serialize;

use crate::domain::analytics::{AnalyticsReport, AnalyticsSummary, CampaignPerformance};
use crate::domain::types::TimeRange;

/// Campaign row with its ROI band.
#[derive(Debug, Serialize)]
pub struct CampaignRow {
    #[serde(flatten)]
    pub campaign: CampaignPerformance,
    /// One of `good`, `fair`, `poor`.
    pub tone: &'static str,
}

/// Data required to render the analytics page.
#[derive(Debug, Serialize)]
pub struct AnalyticsPageData {
    pub range: TimeRange,
    pub summary: AnalyticsSummary,
    pub report: AnalyticsReport,
    pub campaigns: Vec<CampaignRow>,
    pub top_campaign: Option<CampaignPerformance>,
    pub total_engagement_display: String,
    pub error: Option<String>,
}

/// Downloadable analytics export.
#[derive(Debug)]
pub struct AnalyticsExport {
    pub filename: String,
    pub body: Vec<u8>,
    /// Built locally from demo data because the backend export failed.
    pub simulated: bool,
}
