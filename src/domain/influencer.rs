//! Influencer records shown in the directory and the outreach composer.

use serde::{Deserialize, Serialize};

use crate::domain::types::{Audience, BrandFitScore, Category, InfluencerId, Platform, ProductType};

/// Directory entry returned by `/api/influencers`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerSummary {
    pub id: InfluencerId,
    pub name: String,
    #[serde(default)]
    pub username: String,
    pub platform: Platform,
    #[serde(default)]
    pub followers: u64,
    /// Engagement rate in percent.
    #[serde(default)]
    pub engagement: f64,
    pub category: Category,
    pub audience: Audience,
    pub product_type: ProductType,
    #[serde(default)]
    pub previous_collaborations: u32,
    #[serde(default)]
    pub influenced_users: u64,
    pub brand_fit: BrandFitScore,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Compact roster entry used when picking outreach recipients.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutreachInfluencer {
    pub id: InfluencerId,
    pub name: String,
    pub platform: Platform,
    /// Pre-formatted follower count such as `128K`.
    pub followers: String,
    pub niche: String,
    #[serde(default)]
    pub recent_content: Option<String>,
}

impl From<&InfluencerSummary> for OutreachInfluencer {
    fn from(influencer: &InfluencerSummary) -> Self {
        Self {
            id: influencer.id.clone(),
            name: influencer.name.clone(),
            platform: influencer.platform.clone(),
            followers: format_compact(influencer.followers),
            niche: capitalize(influencer.category.as_str()),
            recent_content: None,
        }
    }
}

/// Formats a count the way profile cards show it: `89K`, `45.2K`, `2.4M`.
///
/// Rounding happens before the unit is chosen, so `999_950` reads `1M`.
pub fn format_compact(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let tenths = |divisor: f64| (count as f64 / divisor * 10.0).round() / 10.0;
    let (rounded, suffix) = match tenths(1_000.0) {
        thousands if thousands < 1_000.0 => (thousands, "K"),
        _ => (tenths(1_000_000.0), "M"),
    };
    if rounded.fract() == 0.0 {
        format!("{}{suffix}", rounded as u64)
    } else {
        format!("{rounded:.1}{suffix}")
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
