use serde::Serialize;

use crate::domain::analytics::AnalyticsSummary;
use crate::domain::testimonial::Testimonial;
use crate::hooks::HookSnapshot;

/// Data required to render the landing page.
#[derive(Debug, Serialize)]
pub struct HomePageData {
    /// Headline metrics for the hero section.
    pub analytics: HookSnapshot<AnalyticsSummary>,
    pub testimonials: HookSnapshot<Vec<Testimonial>>,
}
