//! Outreach dispatch payloads.

use serde::{Deserialize, Serialize};

use crate::domain::types::{InfluencerId, TemplateId};

/// When an outreach batch should go out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Schedule {
    #[default]
    Now,
    /// Local date and time joined as `YYYY-MM-DDTHH:MM`.
    At(String),
}

impl Schedule {
    /// Builds a schedule from the composer's date and time inputs.
    ///
    /// Both parts must be present, otherwise the batch is sent immediately.
    pub fn from_parts(date: Option<&str>, time: Option<&str>) -> Self {
        let date = date.map(str::trim).filter(|d| !d.is_empty());
        let time = time.map(str::trim).filter(|t| !t.is_empty());
        match (date, time) {
            (Some(date), Some(time)) => Schedule::At(format!("{date}T{time}")),
            _ => Schedule::Now,
        }
    }
}

impl Serialize for Schedule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Schedule::Now => serializer.serialize_str("now"),
            Schedule::At(when) => serializer.serialize_str(when),
        }
    }
}

/// Body of `POST /api/outreach/send`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutreachRequest {
    pub influencer_ids: Vec<InfluencerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<TemplateId>,
    pub custom_message: String,
    pub schedule: Schedule,
}

/// Backend acknowledgement for an outreach batch.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutreachReceipt {
    #[serde(default)]
    pub success: bool,
}
