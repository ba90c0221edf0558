//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

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
use crate::repository::{
    AnalyticsReader, AuthWriter, CampaignReader, CampaignWriter, CollaborationReader,
    DashboardReader, InfluencerReader, NotificationReader, OutreachWriter, TemplateReader,
    TemplateWriter, TestimonialReader,
};

mock! {
    pub Repository {}

    #[async_trait]
    impl AnalyticsReader for Repository {
        async fn get_analytics(&self) -> RepositoryResult<AnalyticsSummary>;
        async fn get_analytics_report(&self, range: TimeRange) -> RepositoryResult<AnalyticsReport>;
        async fn export_analytics(&self, range: TimeRange) -> RepositoryResult<Vec<u8>>;
    }

    #[async_trait]
    impl CampaignReader for Repository {
        async fn list_campaigns(&self) -> RepositoryResult<Vec<CampaignSummary>>;
        async fn list_campaign_progress(&self) -> RepositoryResult<Vec<CampaignProgress>>;
    }

    #[async_trait]
    impl CampaignWriter for Repository {
        async fn create_campaign(&self, campaign: &NewCampaign) -> RepositoryResult<CampaignSummary>;
    }

    #[async_trait]
    impl InfluencerReader for Repository {
        async fn list_influencers(&self) -> RepositoryResult<Vec<InfluencerSummary>>;
        async fn list_outreach_roster(&self) -> RepositoryResult<Vec<OutreachInfluencer>>;
    }

    #[async_trait]
    impl TemplateReader for Repository {
        async fn list_templates(&self) -> RepositoryResult<Vec<OutreachTemplate>>;
    }

    #[async_trait]
    impl TemplateWriter for Repository {
        async fn create_template(&self, template: &NewTemplate) -> RepositoryResult<OutreachTemplate>;
        async fn delete_template(&self, id: &TemplateId) -> RepositoryResult<()>;
    }

    #[async_trait]
    impl OutreachWriter for Repository {
        async fn send_outreach(&self, request: &OutreachRequest) -> RepositoryResult<OutreachReceipt>;
    }

    #[async_trait]
    impl TestimonialReader for Repository {
        async fn list_testimonials(&self) -> RepositoryResult<TestimonialList>;
    }

    #[async_trait]
    impl CollaborationReader for Repository {
        async fn list_current_collaborations(&self) -> RepositoryResult<Vec<CurrentCollaboration>>;
        async fn list_previous_collaborations(&self) -> RepositoryResult<Vec<PreviousCollaboration>>;
    }

    #[async_trait]
    impl DashboardReader for Repository {
        async fn get_dashboard(&self) -> RepositoryResult<DashboardOverview>;
    }

    #[async_trait]
    impl NotificationReader for Repository {
        async fn list_notifications(&self) -> RepositoryResult<Vec<Notification>>;
    }

    #[async_trait]
    impl AuthWriter for Repository {
        async fn login(&self, credentials: &Credentials) -> RepositoryResult<LoginResponse>;
        async fn logout(&self, token: &str) -> RepositoryResult<()>;
    }
}
