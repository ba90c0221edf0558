//! Form and query definitions backing the dashboard routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod analytics;
pub mod auth;
pub mod campaigns;
pub mod influencers;
pub mod outreach;
pub mod templates;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed form data: {0}")]
    Malformed(String),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid influencer id")]
    InvalidInfluencerId,

    #[error("invalid template id")]
    InvalidTemplateId,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid content")]
    InvalidContent,

    #[error("Please select at least one influencer")]
    EmptySelection,
}
