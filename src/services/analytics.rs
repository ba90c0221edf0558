//! Analytics page and export.

use crate::domain::analytics::{AnalyticsSummary, group_thousands, report_to_csv};
use crate::domain::types::TimeRange;
use crate::dto::analytics::{AnalyticsExport, AnalyticsPageData, CampaignRow};
use crate::hooks::{self, fallback};
use crate::repository::AnalyticsReader;
use crate::services::{ServiceError, ServiceResult};

/// ROI band used to colour campaign rows.
pub fn roi_tone(roi: f64) -> &'static str {
    if roi >= 3.0 {
        "good"
    } else if roi >= 2.0 {
        "fair"
    } else {
        "poor"
    }
}

/// Loads the report for `range`. Stat cards are derived from its overview.
pub async fn load_analytics_page<R>(repo: &R, range: TimeRange) -> AnalyticsPageData
where
    R: AnalyticsReader + ?Sized,
{
    let snapshot = hooks::analytics_report(repo, range).settle().await;
    let report = snapshot.data;

    let campaigns = report
        .campaign_performance
        .iter()
        .cloned()
        .map(|campaign| CampaignRow {
            tone: roi_tone(campaign.roi),
            campaign,
        })
        .collect();

    AnalyticsPageData {
        range,
        summary: AnalyticsSummary::from(&report.overview),
        top_campaign: report.top_campaign().cloned(),
        total_engagement_display: group_thousands(report.overview.total_engagement),
        campaigns,
        report,
        error: snapshot.error,
    }
}

/// Produces the CSV export for `range`.
///
/// When the backend export fails the file is rendered locally from the demo
/// report and flagged as simulated.
pub async fn export_analytics<R>(repo: &R, range: TimeRange) -> ServiceResult<AnalyticsExport>
where
    R: AnalyticsReader + ?Sized,
{
    let filename = format!("analytics-{range}.csv");

    match repo.export_analytics(range).await {
        Ok(body) => Ok(AnalyticsExport {
            filename,
            body,
            simulated: false,
        }),
        Err(err) => {
            log::warn!("Failed to export analytics for {range}, exporting demo data: {err}");
            let body = report_to_csv(&fallback::analytics_report()).map_err(|err| {
                log::error!("Failed to render analytics CSV: {err}");
                ServiceError::Internal(err.to_string())
            })?;
            Ok(AnalyticsExport {
                filename,
                body,
                simulated: true,
            })
        }
    }
}

#[cfg(test)]
mod tone_tests {
    use super::*;

    #[test]
    fn roi_bands() {
        assert_eq!(roi_tone(4.8), "good");
        assert_eq!(roi_tone(3.0), "good");
        assert_eq!(roi_tone(2.8), "fair");
        assert_eq!(roi_tone(1.2), "poor");
    }
}
