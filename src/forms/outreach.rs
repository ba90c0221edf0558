use serde::Deserialize;
use validator::Validate;

use crate::domain::outreach::{OutreachRequest, Schedule};
use crate::domain::types::{InfluencerId, TemplateId};
use crate::filters::Selection;
use crate::forms::FormError;

/// Query string of the outreach composer.
///
/// The selection lives in the URL as repeated `selected` values; `toggle`
/// flips one id on top of it.
#[derive(Debug, Default, Deserialize)]
pub struct OutreachPageQuery {
    #[serde(default)]
    pub selected: Vec<String>,
    pub toggle: Option<String>,
    pub template: Option<String>,
}

impl OutreachPageQuery {
    pub fn parse(query: &str) -> Result<Self, FormError> {
        serde_html_form::from_str(query).map_err(|err| FormError::Malformed(err.to_string()))
    }

    /// Selected ids after applying `toggle`. Blank ids are ignored.
    pub fn selection(&self) -> Selection {
        let mut selection: Selection = self
            .selected
            .iter()
            .filter_map(|raw| InfluencerId::new(raw.as_str()).ok())
            .collect();
        if let Some(id) = self
            .toggle
            .as_deref()
            .and_then(|raw| InfluencerId::new(raw).ok())
        {
            selection.toggle(id);
        }
        selection
    }

    pub fn template_id(&self) -> Option<TemplateId> {
        self.template
            .as_deref()
            .and_then(|raw| TemplateId::new(raw).ok())
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Outreach batch posted from the composer.
pub struct SendOutreachForm {
    #[serde(default)]
    pub influencer_ids: Vec<String>,
    pub template_id: Option<String>,
    #[serde(default)]
    #[validate(length(max = 5000))]
    pub custom_message: String,
    pub schedule_date: Option<String>,
    pub schedule_time: Option<String>,
}

impl SendOutreachForm {
    /// Parses an urlencoded body with repeated `influencer_ids` fields.
    pub fn parse(body: &[u8]) -> Result<Self, FormError> {
        serde_html_form::from_bytes(body).map_err(|err| FormError::Malformed(err.to_string()))
    }
}

impl TryFrom<SendOutreachForm> for OutreachRequest {
    type Error = FormError;

    fn try_from(form: SendOutreachForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let influencer_ids: Selection = form
            .influencer_ids
            .iter()
            .map(|raw| InfluencerId::new(raw.as_str()))
            .collect::<Result<_, _>>()
            .map_err(|_| FormError::InvalidInfluencerId)?;
        if influencer_ids.is_empty() {
            return Err(FormError::EmptySelection);
        }

        let template_id = match form.template_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(TemplateId::new(raw).map_err(|_| FormError::InvalidTemplateId)?),
        };

        Ok(OutreachRequest {
            influencer_ids: influencer_ids.into_ids(),
            template_id,
            custom_message: form.custom_message.trim().to_string(),
            schedule: Schedule::from_parts(
                form.schedule_date.as_deref(),
                form.schedule_time.as_deref(),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_ids_are_collected() {
        let form = SendOutreachForm::parse(
            b"influencer_ids=1&influencer_ids=3&influencer_ids=1&template_id=2&custom_message=Hi&schedule_date=2024-07-01&schedule_time=10%3A00",
        )
        .unwrap();

        let request = OutreachRequest::try_from(form).unwrap();

        assert_eq!(request.influencer_ids.len(), 2);
        assert_eq!(request.template_id, Some(TemplateId::from(2u32)));
        assert_eq!(request.schedule, Schedule::At("2024-07-01T10:00".to_string()));
    }

    #[test]
    fn empty_selection_is_rejected() {
        let form = SendOutreachForm::parse(b"custom_message=Hi&template_id=").unwrap();

        assert!(matches!(
            OutreachRequest::try_from(form),
            Err(FormError::EmptySelection)
        ));
    }

    #[test]
    fn page_query_toggles_on_top_of_selection() {
        let query = OutreachPageQuery::parse("selected=1&selected=2&toggle=2&template=1").unwrap();

        let selection = query.selection();

        assert_eq!(selection.len(), 1);
        assert!(selection.contains(&InfluencerId::from(1u32)));
        assert_eq!(query.template_id(), Some(TemplateId::from(1u32)));
    }
}
