//! Static backend used in mock mode.
//!
//! Returns hard-coded records shaped exactly like the live responses and
//! performs no I/O. Writes echo the request back.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::analytics::{AnalyticsReport, AnalyticsSummary, report_to_csv};
use crate::domain::auth::{Credentials, LoginResponse, UserProfile};
use crate::domain::campaign::{CampaignProgress, CampaignSummary, NewCampaign};
use crate::domain::collaboration::{CurrentCollaboration, PreviousCollaboration};
use crate::domain::dashboard::{BrandInfo, DashboardOverview, DashboardStats};
use crate::domain::influencer::{InfluencerSummary, OutreachInfluencer};
use crate::domain::notification::Notification;
use crate::domain::outreach::{OutreachReceipt, OutreachRequest};
use crate::domain::template::{NewTemplate, OutreachTemplate};
use crate::domain::testimonial::{Testimonial, TestimonialAuthor, TestimonialList};
use crate::domain::types::{
    Audience, BrandFitScore, CampaignId, CampaignStatus, Category, InfluencerId,
    NotificationId, NotificationKind, Platform, ProductType, ProgressPercent, Rating, TemplateId,
    TestimonialId, TimeRange,
};
use crate::hooks::fallback;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    AnalyticsReader, AuthWriter, CampaignReader, CampaignWriter, CollaborationReader,
    DashboardReader, InfluencerReader, NotificationReader, OutreachWriter, ResourceClient,
    TemplateReader, TemplateWriter, TestimonialReader, TokenScope,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct FixtureRepository;

impl FixtureRepository {
    pub fn new() -> Self {
        Self
    }
}

/// Fixtures ignore credentials.
impl TokenScope for FixtureRepository {
    fn scoped(&self, _token: Option<&str>) -> Arc<dyn ResourceClient> {
        Arc::new(*self)
    }
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

fn timestamp(value: &str) -> RepositoryResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|stamp| stamp.with_timezone(&Utc))
        .map_err(|err| RepositoryError::Unexpected(format!("Bad fixture timestamp: {err}")))
}

#[async_trait]
impl AnalyticsReader for FixtureRepository {
    async fn get_analytics(&self) -> RepositoryResult<AnalyticsSummary> {
        Ok(AnalyticsSummary {
            active_campaigns: Some(12),
            total_messages: Some(845),
            engagement_rate: Some("5.2%".to_string()),
            avg_response_time: Some("6.2h".to_string()),
            ..fallback::analytics()
        })
    }

    async fn get_analytics_report(&self, _range: TimeRange) -> RepositoryResult<AnalyticsReport> {
        Ok(fallback::analytics_report())
    }

    async fn export_analytics(&self, range: TimeRange) -> RepositoryResult<Vec<u8>> {
        let report = self.get_analytics_report(range).await?;
        Ok(report_to_csv(&report)?)
    }
}

#[async_trait]
impl CampaignReader for FixtureRepository {
    async fn list_campaigns(&self) -> RepositoryResult<Vec<CampaignSummary>> {
        Ok(fallback::campaigns())
    }

    async fn list_campaign_progress(&self) -> RepositoryResult<Vec<CampaignProgress>> {
        let summer = CampaignProgress {
            id: CampaignId::from(1u32),
            name: "Summer Collection Launch".to_string(),
            status: CampaignStatus::Active,
            progress: ProgressPercent::clamped(78),
            target_influencers: 24,
            current_influencers: 24,
            start_date: Some("2024-06-01".to_string()),
            end_date: Some("2024-07-15".to_string()),
            budget: 5000.0,
            spent: 3900.0,
        };
        let review = CampaignProgress {
            id: CampaignId::from(2u32),
            name: "Product Review Campaign".to_string(),
            progress: ProgressPercent::clamped(45),
            target_influencers: 18,
            current_influencers: 18,
            start_date: Some("2024-06-15".to_string()),
            end_date: Some("2024-07-30".to_string()),
            budget: 3000.0,
            spent: 1350.0,
            ..summer.clone()
        };

        Ok(vec![summer, review])
    }
}

#[async_trait]
impl CampaignWriter for FixtureRepository {
    async fn create_campaign(&self, campaign: &NewCampaign) -> RepositoryResult<CampaignSummary> {
        Ok(CampaignSummary {
            id: CampaignId::new(fresh_id())?,
            name: campaign.name.clone(),
            status: CampaignStatus::Active,
            messages_sent: 0,
            responses: 0,
            created_at: Some(Utc::now().date_naive().to_string()),
            scheduled_for: campaign.start_date.clone(),
        })
    }
}

#[async_trait]
impl InfluencerReader for FixtureRepository {
    async fn list_influencers(&self) -> RepositoryResult<Vec<InfluencerSummary>> {
        let mut influencers = fallback::influencers();
        influencers.push(InfluencerSummary {
            id: InfluencerId::from(3u32),
            name: "Sarah Wilson".to_string(),
            username: "@sarahwilsonstyle".to_string(),
            platform: Platform::Instagram,
            followers: 89_000,
            engagement: 5.1,
            category: Category::Fashion,
            audience: Audience::Women25To40,
            product_type: ProductType::Apparel,
            previous_collaborations: 1,
            influenced_users: 32_000,
            brand_fit: BrandFitScore::clamped(85),
            location: Some("Los Angeles, USA".to_string()),
            email: Some("sarah@example.com".to_string()),
        });
        Ok(influencers)
    }

    async fn list_outreach_roster(&self) -> RepositoryResult<Vec<OutreachInfluencer>> {
        let influencers = self.list_influencers().await?;
        Ok(influencers.iter().map(OutreachInfluencer::from).collect())
    }
}

#[async_trait]
impl TemplateReader for FixtureRepository {
    async fn list_templates(&self) -> RepositoryResult<Vec<OutreachTemplate>> {
        Ok(fallback::templates())
    }
}

#[async_trait]
impl TemplateWriter for FixtureRepository {
    async fn create_template(&self, template: &NewTemplate) -> RepositoryResult<OutreachTemplate> {
        Ok(OutreachTemplate {
            id: TemplateId::new(fresh_id())?,
            name: template.name.as_str().to_string(),
            content: template.content.as_str().to_string(),
            used_count: 0,
        })
    }

    async fn delete_template(&self, _id: &TemplateId) -> RepositoryResult<()> {
        Ok(())
    }
}

#[async_trait]
impl OutreachWriter for FixtureRepository {
    async fn send_outreach(&self, _request: &OutreachRequest) -> RepositoryResult<OutreachReceipt> {
        Ok(OutreachReceipt { success: true })
    }
}

#[async_trait]
impl TestimonialReader for FixtureRepository {
    async fn list_testimonials(&self) -> RepositoryResult<TestimonialList> {
        let mut list = fallback::testimonials();
        list.testimonials.push(Testimonial {
            id: TestimonialId::from(2u32),
            text: "The AI-powered influencer discovery saved us hundreds of hours. We found \
                   perfect brand matches we never would have discovered manually!"
                .to_string(),
            rating: Rating::clamped(5),
            author: TestimonialAuthor {
                name: "Marcus Rodriguez".to_string(),
                position: "Head of Growth".to_string(),
                company: "StyleHub".to_string(),
            },
            results: vec![
                fallback::highlight("64%", "Time Saved"),
                fallback::highlight("94%", "Brand Fit Score"),
                fallback::highlight("5.2%", "Engagement Rate"),
            ],
        });
        Ok(list)
    }
}

#[async_trait]
impl CollaborationReader for FixtureRepository {
    async fn list_current_collaborations(&self) -> RepositoryResult<Vec<CurrentCollaboration>> {
        Ok(fallback::current_collaborations())
    }

    async fn list_previous_collaborations(&self) -> RepositoryResult<Vec<PreviousCollaboration>> {
        Ok(fallback::previous_collaborations())
    }
}

#[async_trait]
impl DashboardReader for FixtureRepository {
    /// Collaboration sections are left out so the page loads them separately.
    async fn get_dashboard(&self) -> RepositoryResult<DashboardOverview> {
        Ok(DashboardOverview {
            brand: BrandInfo {
                name: "TechStyle Fashion".to_string(),
                industry: "Fashion & Lifestyle".to_string(),
                member_since: "2023".to_string(),
            },
            stats: DashboardStats {
                total_influencers: 1247,
                active_campaigns: 8,
                response_rate: 28.5,
                total_reach: 2_450_000,
            },
            current_collabs: None,
            previous_collabs: None,
            campaign_progress: Some(self.list_campaign_progress().await?),
        })
    }
}

#[async_trait]
impl NotificationReader for FixtureRepository {
    async fn list_notifications(&self) -> RepositoryResult<Vec<Notification>> {
        Ok(vec![
            Notification {
                id: NotificationId::from(1u32),
                kind: NotificationKind::Acceptance,
                title: "Invitation accepted".to_string(),
                message: "Emma Chen accepted your collaboration invitation".to_string(),
                read: false,
                timestamp: timestamp("2024-06-20T10:30:00Z")?,
            },
            Notification {
                id: NotificationId::from(2u32),
                kind: NotificationKind::Collaboration,
                title: "New collaboration".to_string(),
                message: "Mike Roberts joined \"Product Review Campaign\"".to_string(),
                read: false,
                timestamp: timestamp("2024-06-20T09:15:00Z")?,
            },
            Notification {
                id: NotificationId::from(3u32),
                kind: NotificationKind::Collaboration,
                title: "Collaboration completed".to_string(),
                message: "Winter Skincare Routine wrapped up with 3.8x ROI".to_string(),
                read: true,
                timestamp: timestamp("2024-06-18T16:00:00Z")?,
            },
        ])
    }
}

#[async_trait]
impl AuthWriter for FixtureRepository {
    async fn login(&self, credentials: &Credentials) -> RepositoryResult<LoginResponse> {
        Ok(LoginResponse {
            token: fresh_id(),
            user: UserProfile {
                name: "Alex Johnson".to_string(),
                email: credentials.email.as_str().to_string(),
                company: Some("TechStyle Fashion".to_string()),
            },
        })
    }

    async fn logout(&self, _token: &str) -> RepositoryResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Email, TemplateContent, TemplateName};

    #[tokio::test]
    async fn every_read_succeeds() {
        let repo = FixtureRepository::new();

        assert_eq!(repo.get_analytics().await.unwrap().total_messages, Some(845));
        assert_eq!(repo.list_campaigns().await.unwrap().len(), 2);
        assert_eq!(repo.list_campaign_progress().await.unwrap().len(), 2);
        assert_eq!(repo.list_influencers().await.unwrap().len(), 3);
        assert_eq!(repo.list_outreach_roster().await.unwrap().len(), 3);
        assert_eq!(repo.list_templates().await.unwrap().len(), 2);
        assert_eq!(repo.list_testimonials().await.unwrap().testimonials.len(), 2);
        assert_eq!(repo.list_notifications().await.unwrap().len(), 3);
        assert_eq!(repo.list_current_collaborations().await.unwrap().len(), 1);
        assert_eq!(repo.list_previous_collaborations().await.unwrap().len(), 1);

        let dashboard = repo.get_dashboard().await.unwrap();
        assert_eq!(dashboard.brand.name, "TechStyle Fashion");
        assert!(dashboard.current_collabs.is_none());
    }

    #[tokio::test]
    async fn created_template_echoes_request_with_fresh_id() {
        let repo = FixtureRepository::new();
        let draft = NewTemplate::new(
            TemplateName::new("Follow-up").unwrap(),
            TemplateContent::new("Hi {name}, just checking in.").unwrap(),
        );

        let first = repo.create_template(&draft).await.unwrap();
        let second = repo.create_template(&draft).await.unwrap();

        assert_eq!(first.name, "Follow-up");
        assert_eq!(first.used_count, 0);
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn export_is_csv_of_the_report() {
        let repo = FixtureRepository::new();

        let csv = repo.export_analytics(TimeRange::Month).await.unwrap();
        let csv = String::from_utf8(csv).unwrap();

        assert!(csv.starts_with("campaign,reach,engagement,conversions,roi\n"));
        assert_eq!(csv.lines().count(), 5);
    }

    #[tokio::test]
    async fn login_echoes_email() {
        let repo = FixtureRepository::new();
        let credentials = Credentials {
            email: Email::new("Alex@Company.com").unwrap(),
            password: "secret".to_string(),
        };

        let response = repo.login(&credentials).await.unwrap();

        assert_eq!(response.user.email, "alex@company.com");
        assert!(!response.token.is_empty());
    }
}
