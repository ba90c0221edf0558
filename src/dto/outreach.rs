use serde::Serialize;

use crate::domain::campaign::CampaignSummary;
use crate::domain::influencer::OutreachInfluencer;
use crate::domain::template::OutreachTemplate;
use crate::domain::types::TemplateId;

/// Roster row with its selection state.
#[derive(Debug, Serialize)]
pub struct RosterEntry {
    #[serde(flatten)]
    pub influencer: OutreachInfluencer,
    pub selected: bool,
}

/// Data required to render the outreach composer.
#[derive(Debug, Serialize)]
pub struct OutreachPageData {
    pub roster: Vec<RosterEntry>,
    pub selected_ids: Vec<String>,
    pub templates: Vec<OutreachTemplate>,
    pub active_template: Option<TemplateId>,
    /// Chosen template rendered for the first selected influencer.
    pub preview: Option<String>,
    pub campaigns: Vec<CampaignSummary>,
}
