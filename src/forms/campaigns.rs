use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::campaign::NewCampaign;
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Campaign draft posted from the outreach page.
pub struct CreateCampaignForm {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub budget: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

fn parse_date(value: Option<String>) -> Result<Option<NaiveDate>, FormError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|err| FormError::Malformed(format!("{raw}: {err}"))),
    }
}

impl TryFrom<CreateCampaignForm> for NewCampaign {
    type Error = FormError;

    fn try_from(form: CreateCampaignForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let name = form.name.trim().to_string();
        if name.is_empty() {
            return Err(FormError::InvalidName);
        }
        let start = parse_date(form.start_date)?;
        let end = parse_date(form.end_date)?;
        if matches!((start, end), (Some(start), Some(end)) if end < start) {
            return Err(FormError::Malformed(
                "end date is before start date".to_string(),
            ));
        }

        Ok(NewCampaign {
            name,
            budget: form.budget,
            start_date: start.map(|d| d.to_string()),
            end_date: end.map(|d| d.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(start: &str, end: &str) -> CreateCampaignForm {
        CreateCampaignForm {
            name: "Autumn Drop".to_string(),
            budget: Some(2500.0),
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
        }
    }

    #[test]
    fn campaign_dates_are_optional() {
        let campaign = NewCampaign::try_from(form("", " ")).unwrap();

        assert_eq!(campaign.start_date, None);
        assert_eq!(campaign.end_date, None);
    }

    #[test]
    fn campaign_end_must_follow_start() {
        assert!(NewCampaign::try_from(form("2024-09-01", "2024-10-01")).is_ok());
        assert!(matches!(
            NewCampaign::try_from(form("2024-09-01", "2024-08-01")),
            Err(FormError::Malformed(_))
        ));
    }
}
