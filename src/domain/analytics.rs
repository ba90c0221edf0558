//! Analytics payloads.

use serde::{Deserialize, Serialize};

use crate::domain::influencer::format_compact;

/// Headline metrics. Values arrive pre-formatted (`"2.4M"`, `"89%"`).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_influencers: String,
    pub response_rate: String,
    pub total_reach: String,
    pub roi: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_campaigns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_messages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_response_time: Option<String>,
}

/// Time-windowed report served by `/api/analytics?range=`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub overview: AnalyticsOverview,
    #[serde(default)]
    pub campaign_performance: Vec<CampaignPerformance>,
    #[serde(default)]
    pub platform_breakdown: Vec<PlatformBreakdown>,
    #[serde(default)]
    pub engagement_trend: Vec<EngagementPoint>,
    #[serde(default)]
    pub influencer_performance: Vec<InfluencerPerformance>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub total_campaigns: u32,
    pub total_influencers: u32,
    pub total_reach: u64,
    pub total_engagement: u64,
    #[serde(rename = "averageROI")]
    pub average_roi: f64,
    pub response_rate: f64,
    pub conversion_rate: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CampaignPerformance {
    pub name: String,
    pub reach: u64,
    pub engagement: u64,
    pub conversions: u64,
    pub roi: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlatformBreakdown {
    pub platform: String,
    pub campaigns: u32,
    pub reach: u64,
    pub engagement: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EngagementPoint {
    pub date: String,
    pub engagement: u64,
    pub reach: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerPerformance {
    pub name: String,
    pub platform: String,
    pub engagement_rate: f64,
    pub conversions: u64,
    pub roi: f64,
}

impl AnalyticsReport {
    /// Campaign with the highest ROI, if any.
    pub fn top_campaign(&self) -> Option<&CampaignPerformance> {
        self.campaign_performance
            .iter()
            .max_by(|a, b| a.roi.total_cmp(&b.roi))
    }
}

/// Body of `GET /api/analytics`.
///
/// Some backends answer with the headline summary, others with the full
/// report; both reduce to an [`AnalyticsSummary`].
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum AnalyticsPayload {
    Summary(AnalyticsSummary),
    Report(AnalyticsReport),
}

impl From<AnalyticsPayload> for AnalyticsSummary {
    fn from(payload: AnalyticsPayload) -> Self {
        match payload {
            AnalyticsPayload::Summary(summary) => summary,
            AnalyticsPayload::Report(report) => AnalyticsSummary::from(&report.overview),
        }
    }
}

impl From<&AnalyticsOverview> for AnalyticsSummary {
    fn from(overview: &AnalyticsOverview) -> Self {
        Self {
            total_influencers: group_thousands(u64::from(overview.total_influencers)),
            response_rate: format!("{}%", overview.response_rate),
            total_reach: format_compact(overview.total_reach),
            roi: format!("{}x", overview.average_roi),
            active_campaigns: Some(overview.total_campaigns),
            total_messages: None,
            engagement_rate: None,
            avg_response_time: None,
        }
    }
}

/// `1247` becomes `"1,247"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders the per-campaign table of a report as CSV.
pub fn report_to_csv(report: &AnalyticsReport) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["campaign", "reach", "engagement", "conversions", "roi"])?;
    for campaign in &report.campaign_performance {
        writer.write_record([
            campaign.name.clone(),
            campaign.reach.to_string(),
            campaign.engagement.to_string(),
            campaign.conversions.to_string(),
            campaign.roi.to_string(),
        ])?;
    }
    writer.into_inner().map_err(|err| err.into_error().into())
}
