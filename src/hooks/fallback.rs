//! Demo records substituted when a fetch fails.
//!
//! Each function is the documented fallback of one hook. They are plain
//! constructors so a hook can rebuild its fallback on every failure.

use crate::domain::analytics::{
    AnalyticsOverview, AnalyticsReport, AnalyticsSummary, CampaignPerformance, EngagementPoint,
    InfluencerPerformance, PlatformBreakdown,
};
use crate::domain::campaign::{CampaignProgress, CampaignSummary};
use crate::domain::collaboration::{Collaborator, CurrentCollaboration, PreviousCollaboration};
use crate::domain::dashboard::{BrandInfo, DashboardOverview, DashboardStats};
use crate::domain::influencer::{InfluencerSummary, OutreachInfluencer};
use crate::domain::notification::Notification;
use crate::domain::template::OutreachTemplate;
use crate::domain::testimonial::{
    ResultHighlight, Testimonial, TestimonialAuthor, TestimonialList,
};
use crate::domain::types::{
    Audience, BrandFitScore, CampaignId, CampaignStatus, Category, CollaborationId, InfluencerId,
    Platform, ProductType, ProgressPercent, Rating, TemplateId, TestimonialId,
};

pub fn analytics() -> AnalyticsSummary {
    AnalyticsSummary {
        total_influencers: "1,247".to_string(),
        response_rate: "89%".to_string(),
        total_reach: "2.4M".to_string(),
        roi: "5.2x".to_string(),
        ..AnalyticsSummary::default()
    }
}

pub fn analytics_report() -> AnalyticsReport {
    let campaign = |name: &str, reach, engagement, conversions, roi| CampaignPerformance {
        name: name.to_string(),
        reach,
        engagement,
        conversions,
        roi,
    };
    let trend = |date: &str, engagement, reach| EngagementPoint {
        date: date.to_string(),
        engagement,
        reach,
    };
    let performer = |name: &str, platform: &str, engagement_rate, conversions, roi| {
        InfluencerPerformance {
            name: name.to_string(),
            platform: platform.to_string(),
            engagement_rate,
            conversions,
            roi,
        }
    };

    AnalyticsReport {
        overview: AnalyticsOverview {
            total_campaigns: 12,
            total_influencers: 45,
            total_reach: 2_500_000,
            total_engagement: 125_000,
            average_roi: 3.8,
            response_rate: 28.5,
            conversion_rate: 12.3,
        },
        campaign_performance: vec![
            campaign("Summer Launch", 450_000, 22_500, 1_250, 4.2),
            campaign("Product Review", 320_000, 16_000, 890, 3.5),
            campaign("Brand Awareness", 280_000, 14_000, 750, 2.8),
            campaign("Holiday Campaign", 510_000, 25_500, 1_420, 4.8),
        ],
        platform_breakdown: vec![
            PlatformBreakdown {
                platform: "Instagram".to_string(),
                campaigns: 8,
                reach: 1_800_000,
                engagement: 90_000,
            },
            PlatformBreakdown {
                platform: "YouTube".to_string(),
                campaigns: 4,
                reach: 700_000,
                engagement: 35_000,
            },
        ],
        engagement_trend: vec![
            trend("2024-06-01", 1_200, 45_000),
            trend("2024-06-08", 1_800, 62_000),
            trend("2024-06-15", 2_500, 89_000),
            trend("2024-06-22", 3_200, 112_000),
            trend("2024-06-29", 2_800, 98_000),
        ],
        influencer_performance: vec![
            performer("Emma Chen", "Instagram", 4.2, 450, 4.5),
            performer("Mike Roberts", "YouTube", 3.8, 320, 3.9),
            performer("Sarah Wilson", "Instagram", 5.1, 280, 4.2),
            performer("Alex Kumar", "YouTube", 3.2, 190, 3.1),
        ],
    }
}

pub fn campaigns() -> Vec<CampaignSummary> {
    vec![
        CampaignSummary {
            id: CampaignId::from(1u32),
            name: "Summer Collection Launch".to_string(),
            status: CampaignStatus::Active,
            messages_sent: 45,
            responses: 12,
            created_at: Some("2024-06-15".to_string()),
            scheduled_for: Some("2024-07-01".to_string()),
        },
        CampaignSummary {
            id: CampaignId::from(2u32),
            name: "Product Review Campaign".to_string(),
            status: CampaignStatus::Completed,
            messages_sent: 30,
            responses: 8,
            created_at: Some("2024-05-20".to_string()),
            scheduled_for: Some("2024-06-01".to_string()),
        },
    ]
}

pub fn campaign_progress() -> Vec<CampaignProgress> {
    vec![CampaignProgress {
        id: CampaignId::from(1u32),
        name: "Summer Collection Launch".to_string(),
        status: CampaignStatus::Active,
        progress: ProgressPercent::clamped(75),
        target_influencers: 50,
        current_influencers: 42,
        start_date: Some("2024-06-01".to_string()),
        end_date: Some("2024-07-15".to_string()),
        budget: 5000.0,
        spent: 3750.0,
    }]
}

pub fn templates() -> Vec<OutreachTemplate> {
    vec![
        OutreachTemplate {
            id: TemplateId::from(1u32),
            name: "Collaboration Proposal".to_string(),
            content: "Hi {name}, I loved your recent content about {topic}! We'd love to \
                      collaborate with you on our new product launch."
                .to_string(),
            used_count: 23,
        },
        OutreachTemplate {
            id: TemplateId::from(2u32),
            name: "Product Review Request".to_string(),
            content: "Hello {name}, Your expertise in {niche} is impressive! Would you be \
                      interested in reviewing our new product?"
                .to_string(),
            used_count: 15,
        },
    ]
}

pub fn influencers() -> Vec<InfluencerSummary> {
    vec![
        InfluencerSummary {
            id: InfluencerId::from(1u32),
            name: "Emma Chen".to_string(),
            username: "@emmachen_beauty".to_string(),
            platform: Platform::Instagram,
            followers: 128_000,
            engagement: 4.2,
            category: Category::Beauty,
            audience: Audience::Women25To40,
            product_type: ProductType::Skincare,
            previous_collaborations: 3,
            influenced_users: 45_000,
            brand_fit: BrandFitScore::clamped(92),
            location: Some("New York, USA".to_string()),
            email: Some("emma@example.com".to_string()),
        },
        InfluencerSummary {
            id: InfluencerId::from(2u32),
            name: "Mike Roberts".to_string(),
            username: "@miketechreviews".to_string(),
            platform: Platform::Youtube,
            followers: 450_000,
            engagement: 3.8,
            category: Category::Technology,
            audience: Audience::Men18To35,
            product_type: ProductType::Gadgets,
            previous_collaborations: 2,
            influenced_users: 125_000,
            brand_fit: BrandFitScore::clamped(88),
            location: Some("San Francisco, USA".to_string()),
            email: Some("mike@example.com".to_string()),
        },
    ]
}

pub fn outreach_roster() -> Vec<OutreachInfluencer> {
    let entry = |id: u32, name: &str, platform, followers: &str, niche: &str, recent: &str| {
        OutreachInfluencer {
            id: InfluencerId::from(id),
            name: name.to_string(),
            platform,
            followers: followers.to_string(),
            niche: niche.to_string(),
            recent_content: Some(recent.to_string()),
        }
    };

    vec![
        entry(
            1,
            "Emma Chen",
            Platform::Instagram,
            "128K",
            "Beauty & Skincare",
            "Summer skincare routine",
        ),
        entry(
            2,
            "Mike Roberts",
            Platform::Youtube,
            "450K",
            "Tech Reviews",
            "Latest smartphone review",
        ),
        entry(
            3,
            "Sarah Wilson",
            Platform::Instagram,
            "89K",
            "Fashion",
            "Summer fashion trends",
        ),
    ]
}

pub fn testimonials() -> TestimonialList {
    TestimonialList {
        testimonials: vec![Testimonial {
            id: TestimonialId::from(1u32),
            text: "Raven transformed our influencer marketing from guesswork to data-driven \
                   success. We saw a 3x increase in campaign ROI within the first month!"
                .to_string(),
            rating: Rating::clamped(5),
            author: TestimonialAuthor {
                name: "Sarah Chen".to_string(),
                position: "Marketing Director".to_string(),
                company: "TechCorp".to_string(),
            },
            results: vec![
                highlight("3x", "ROI Increase"),
                highlight("89%", "Response Rate"),
                highlight("2.4M", "Total Reach"),
            ],
        }],
    }
}

pub(crate) fn highlight(value: &str, label: &str) -> ResultHighlight {
    ResultHighlight {
        value: value.to_string(),
        label: label.to_string(),
    }
}

/// Empty brand record; every section is present and empty.
pub fn dashboard() -> DashboardOverview {
    DashboardOverview {
        brand: BrandInfo {
            name: "Your Brand".to_string(),
            industry: "Fashion".to_string(),
            member_since: "2024".to_string(),
        },
        stats: DashboardStats::default(),
        current_collabs: Some(Vec::new()),
        previous_collabs: Some(Vec::new()),
        campaign_progress: Some(Vec::new()),
    }
}

pub fn current_collaborations() -> Vec<CurrentCollaboration> {
    vec![CurrentCollaboration {
        id: CollaborationId::from(1u32),
        influencer: Collaborator {
            name: "Sarah Wilson".to_string(),
            platform: "Instagram".to_string(),
            followers: "45.2K".to_string(),
        },
        campaign: "Summer Collection Launch".to_string(),
        progress: ProgressPercent::clamped(65),
        deadline: Some("2024-07-15".to_string()),
        status: CampaignStatus::Active,
    }]
}

pub fn previous_collaborations() -> Vec<PreviousCollaboration> {
    vec![PreviousCollaboration {
        id: CollaborationId::from(1u32),
        influencer: Collaborator {
            name: "Emma Chen".to_string(),
            platform: "YouTube".to_string(),
            followers: "128K".to_string(),
        },
        campaign: "Winter Skincare Routine".to_string(),
        duration: Some("2 weeks".to_string()),
        completed_date: Some("2024-06-20".to_string()),
        engagement: 4.2,
        roi: 3.8,
        status: CampaignStatus::Completed,
    }]
}

pub fn notifications() -> Vec<Notification> {
    Vec::new()
}
