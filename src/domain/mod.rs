//! Domain records exchanged with the marketing backend.

pub mod analytics;
pub mod auth;
pub mod campaign;
pub mod collaboration;
pub mod dashboard;
pub mod influencer;
pub mod notification;
pub mod outreach;
pub mod template;
pub mod testimonial;
pub mod types;
