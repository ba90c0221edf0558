//! Landing page loader.

use futures_util::join;

use crate::dto::home::HomePageData;
use crate::hooks;
use crate::repository::{AnalyticsReader, TestimonialReader};

/// Loads headline metrics and testimonials for the landing page.
pub async fn load_home_page<R>(repo: &R) -> HomePageData
where
    R: AnalyticsReader + TestimonialReader + ?Sized,
{
    let (analytics, testimonials) = join!(
        hooks::analytics(repo).settle(),
        hooks::testimonials(repo).settle()
    );

    HomePageData {
        analytics,
        testimonials,
    }
}
