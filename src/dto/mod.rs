//! DTO modules that bridge services with templates.

pub mod analytics;
pub mod dashboard;
pub mod home;
pub mod influencers;
pub mod notifications;
pub mod outreach;
