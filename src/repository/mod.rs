//! Backend resources behind one capability seam.
//!
//! Each resource has a reader and, where the dashboard changes it, a writer
//! trait. [`ResourceClient`] bundles all of them; the running server holds
//! exactly one implementation, chosen at start-up.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::analytics::{AnalyticsReport, AnalyticsSummary};
use crate::domain::auth::{Credentials, LoginResponse};
use crate::domain::campaign::{CampaignProgress, CampaignSummary, NewCampaign};
use crate::domain::collaboration::{CurrentCollaboration, PreviousCollaboration};
use crate::domain::dashboard::DashboardOverview;
use crate::domain::influencer::{InfluencerSummary, OutreachInfluencer};
use crate::domain::notification::Notification;
use crate::domain::outreach::{OutreachReceipt, OutreachRequest};
use crate::domain::template::{NewTemplate, OutreachTemplate};
use crate::domain::testimonial::TestimonialList;
use crate::domain::types::{TemplateId, TimeRange};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod fixtures;
#[cfg(feature = "server")]
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[async_trait]
pub trait AnalyticsReader: Send + Sync {
    async fn get_analytics(&self) -> RepositoryResult<AnalyticsSummary>;
    async fn get_analytics_report(&self, range: TimeRange) -> RepositoryResult<AnalyticsReport>;
    /// CSV export of the report for `range`.
    async fn export_analytics(&self, range: TimeRange) -> RepositoryResult<Vec<u8>>;
}

#[async_trait]
pub trait CampaignReader: Send + Sync {
    async fn list_campaigns(&self) -> RepositoryResult<Vec<CampaignSummary>>;
    async fn list_campaign_progress(&self) -> RepositoryResult<Vec<CampaignProgress>>;
}

#[async_trait]
pub trait CampaignWriter: Send + Sync {
    async fn create_campaign(&self, campaign: &NewCampaign) -> RepositoryResult<CampaignSummary>;
}

#[async_trait]
pub trait InfluencerReader: Send + Sync {
    async fn list_influencers(&self) -> RepositoryResult<Vec<InfluencerSummary>>;
    /// Compact roster shown in the outreach composer.
    async fn list_outreach_roster(&self) -> RepositoryResult<Vec<OutreachInfluencer>>;
}

#[async_trait]
pub trait TemplateReader: Send + Sync {
    async fn list_templates(&self) -> RepositoryResult<Vec<OutreachTemplate>>;
}

#[async_trait]
pub trait TemplateWriter: Send + Sync {
    async fn create_template(&self, template: &NewTemplate) -> RepositoryResult<OutreachTemplate>;
    async fn delete_template(&self, id: &TemplateId) -> RepositoryResult<()>;
}

#[async_trait]
pub trait OutreachWriter: Send + Sync {
    async fn send_outreach(&self, request: &OutreachRequest) -> RepositoryResult<OutreachReceipt>;
}

#[async_trait]
pub trait TestimonialReader: Send + Sync {
    async fn list_testimonials(&self) -> RepositoryResult<TestimonialList>;
}

#[async_trait]
pub trait CollaborationReader: Send + Sync {
    async fn list_current_collaborations(&self) -> RepositoryResult<Vec<CurrentCollaboration>>;
    async fn list_previous_collaborations(&self) -> RepositoryResult<Vec<PreviousCollaboration>>;
}

#[async_trait]
pub trait DashboardReader: Send + Sync {
    async fn get_dashboard(&self) -> RepositoryResult<DashboardOverview>;
}

#[async_trait]
pub trait NotificationReader: Send + Sync {
    async fn list_notifications(&self) -> RepositoryResult<Vec<Notification>>;
}

#[async_trait]
pub trait AuthWriter: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> RepositoryResult<LoginResponse>;
    /// Invalidates `token` on the backend.
    async fn logout(&self, token: &str) -> RepositoryResult<()>;
}

/// Hands out a client that acts on behalf of one session.
pub trait TokenScope {
    /// Client authenticated as `token`; `None` for anonymous calls.
    fn scoped(&self, token: Option<&str>) -> Arc<dyn ResourceClient>;
}

/// Every resource the dashboard talks to.
pub trait ResourceClient:
    AnalyticsReader
    + CampaignReader
    + CampaignWriter
    + InfluencerReader
    + TemplateReader
    + TemplateWriter
    + OutreachWriter
    + TestimonialReader
    + CollaborationReader
    + DashboardReader
    + NotificationReader
    + AuthWriter
    + TokenScope
{
}

impl<T> ResourceClient for T where
    T: AnalyticsReader
        + CampaignReader
        + CampaignWriter
        + InfluencerReader
        + TemplateReader
        + TemplateWriter
        + OutreachWriter
        + TestimonialReader
        + CollaborationReader
        + DashboardReader
        + NotificationReader
        + AuthWriter
        + TokenScope
{
}
