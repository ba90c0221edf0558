use serde::Deserialize;
use validator::Validate;

use crate::domain::template::NewTemplate;
use crate::domain::types::{TemplateContent, TemplateName};
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// New outreach template posted from the composer.
pub struct CreateTemplateForm {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    /// Bounded so a local draft fits in the session cookie.
    #[validate(length(min = 1, max = 1000))]
    pub content: String,
}

impl TryFrom<CreateTemplateForm> for NewTemplate {
    type Error = FormError;

    fn try_from(form: CreateTemplateForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let name = TemplateName::new(form.name).map_err(|_| FormError::InvalidName)?;
        let content = TemplateContent::new(form.content).map_err(|_| FormError::InvalidContent)?;
        Ok(NewTemplate::new(name, content))
    }
}
