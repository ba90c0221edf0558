//! Fetch-with-fallback state for page data.
//!
//! A [`DataHook`] wraps one resource call. It starts out loading with an empty
//! value, and every settled fetch leaves it with renderable data: the fetched
//! value on success, the resource's documented fallback on failure. Failures
//! never propagate past the hook; they surface only through [`DataHook::error`]
//! and a `warn` log line.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

use crate::domain::analytics::{AnalyticsReport, AnalyticsSummary};
use crate::domain::campaign::{CampaignProgress, CampaignSummary};
use crate::domain::collaboration::{CurrentCollaboration, PreviousCollaboration};
use crate::domain::dashboard::DashboardOverview;
use crate::domain::influencer::{InfluencerSummary, OutreachInfluencer};
use crate::domain::notification::Notification;
use crate::domain::template::OutreachTemplate;
use crate::domain::testimonial::Testimonial;
use crate::domain::types::TimeRange;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AnalyticsReader, CampaignReader, CollaborationReader, DashboardReader, InfluencerReader,
    NotificationReader, TemplateReader, TestimonialReader,
};

pub mod fallback;

pub type HookFuture<'a, T> = Pin<Box<dyn Future<Output = RepositoryResult<T>> + 'a>>;

/// Shared "view is still mounted" flag.
///
/// Clones observe the same flag, so whoever tears the view down can unmount
/// it while a fetch is still in flight.
#[derive(Clone, Debug)]
pub struct MountFlag(Arc<AtomicBool>);

impl MountFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for MountFlag {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HookState {
    Loading,
    Success,
    Error,
}

/// What a template sees of a hook.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct HookSnapshot<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct DataHook<'a, T> {
    name: &'static str,
    fetch: Box<dyn Fn() -> HookFuture<'a, T> + 'a>,
    fallback: fn() -> T,
    state: HookState,
    data: T,
    error: Option<String>,
    mounted: MountFlag,
}

impl<'a, T> DataHook<'a, T>
where
    T: Default,
{
    /// Creates a hook in the loading state with an empty value.
    pub fn new<F, Fut>(name: &'static str, fetch: F, fallback: fn() -> T) -> Self
    where
        F: Fn() -> Fut + 'a,
        Fut: Future<Output = RepositoryResult<T>> + 'a,
    {
        Self {
            name,
            fetch: Box::new(move || -> HookFuture<'a, T> { Box::pin(fetch()) }),
            fallback,
            state: HookState::Loading,
            data: T::default(),
            error: None,
            mounted: MountFlag::new(),
        }
    }

    /// Runs the fetch and settles the hook.
    ///
    /// Results arriving after [`MountFlag::unmount`] are dropped and the hook
    /// is left untouched.
    pub async fn load(&mut self) -> &T {
        self.state = HookState::Loading;
        let outcome = (self.fetch)().await;

        if !self.mounted.is_mounted() {
            log::debug!("Discarding {} result for an unmounted view", self.name);
            return &self.data;
        }

        match outcome {
            Ok(data) => {
                self.data = data;
                self.error = None;
                self.state = HookState::Success;
            }
            Err(err) => {
                log::warn!("Failed to fetch {}, serving fallback data: {err}", self.name);
                self.data = (self.fallback)();
                self.error = Some(err.to_string());
                self.state = HookState::Error;
            }
        }
        &self.data
    }

    /// Re-enters loading and fetches again.
    ///
    /// Page handlers build a fresh hook per request, so for rendered pages a
    /// reload (the "Retry" link next to a fetch error) is the refetch. This is
    /// for callers that keep a hook across several awaits.
    pub async fn refetch(&mut self) -> &T {
        self.load().await
    }

    /// Loads once and hands back the snapshot.
    pub async fn settle(mut self) -> HookSnapshot<T> {
        self.load().await;
        self.into_snapshot()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> HookState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == HookState::Loading
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Ties the hook to a flag owned by the surrounding view.
    pub fn with_mount_flag(mut self, flag: MountFlag) -> Self {
        self.mounted = flag;
        self
    }

    pub fn unmount(&self) {
        self.mounted.unmount();
    }

    pub fn into_snapshot(self) -> HookSnapshot<T> {
        HookSnapshot {
            loading: self.is_loading(),
            data: self.data,
            error: self.error,
        }
    }
}

impl<T> DataHook<'_, T>
where
    T: Default + Clone,
{
    pub fn snapshot(&self) -> HookSnapshot<T> {
        HookSnapshot {
            data: self.data.clone(),
            loading: self.is_loading(),
            error: self.error.clone(),
        }
    }
}

pub fn analytics<R>(repo: &R) -> DataHook<'_, AnalyticsSummary>
where
    R: AnalyticsReader + ?Sized,
{
    DataHook::new("analytics", move || repo.get_analytics(), fallback::analytics)
}

pub fn analytics_report<R>(repo: &R, range: TimeRange) -> DataHook<'_, AnalyticsReport>
where
    R: AnalyticsReader + ?Sized,
{
    DataHook::new(
        "analytics report",
        move || repo.get_analytics_report(range),
        fallback::analytics_report,
    )
}

pub fn campaigns<R>(repo: &R) -> DataHook<'_, Vec<CampaignSummary>>
where
    R: CampaignReader + ?Sized,
{
    DataHook::new("campaigns", move || repo.list_campaigns(), fallback::campaigns)
}

pub fn campaign_progress<R>(repo: &R) -> DataHook<'_, Vec<CampaignProgress>>
where
    R: CampaignReader + ?Sized,
{
    DataHook::new(
        "campaign progress",
        move || repo.list_campaign_progress(),
        fallback::campaign_progress,
    )
}

pub fn templates<R>(repo: &R) -> DataHook<'_, Vec<OutreachTemplate>>
where
    R: TemplateReader + ?Sized,
{
    DataHook::new("templates", move || repo.list_templates(), fallback::templates)
}

pub fn influencers<R>(repo: &R) -> DataHook<'_, Vec<InfluencerSummary>>
where
    R: InfluencerReader + ?Sized,
{
    DataHook::new(
        "influencers",
        move || repo.list_influencers(),
        fallback::influencers,
    )
}

pub fn outreach_roster<R>(repo: &R) -> DataHook<'_, Vec<OutreachInfluencer>>
where
    R: InfluencerReader + ?Sized,
{
    DataHook::new(
        "outreach roster",
        move || repo.list_outreach_roster(),
        fallback::outreach_roster,
    )
}

pub fn testimonials<R>(repo: &R) -> DataHook<'_, Vec<Testimonial>>
where
    R: TestimonialReader + ?Sized,
{
    DataHook::new(
        "testimonials",
        move || async move { repo.list_testimonials().await.map(|list| list.testimonials) },
        || fallback::testimonials().testimonials,
    )
}

pub fn dashboard<R>(repo: &R) -> DataHook<'_, DashboardOverview>
where
    R: DashboardReader + ?Sized,
{
    DataHook::new("dashboard", move || repo.get_dashboard(), fallback::dashboard)
}

pub fn current_collaborations<R>(repo: &R) -> DataHook<'_, Vec<CurrentCollaboration>>
where
    R: CollaborationReader + ?Sized,
{
    DataHook::new(
        "current collaborations",
        move || repo.list_current_collaborations(),
        fallback::current_collaborations,
    )
}

pub fn previous_collaborations<R>(repo: &R) -> DataHook<'_, Vec<PreviousCollaboration>>
where
    R: CollaborationReader + ?Sized,
{
    DataHook::new(
        "previous collaborations",
        move || repo.list_previous_collaborations(),
        fallback::previous_collaborations,
    )
}

pub fn notifications<R>(repo: &R) -> DataHook<'_, Vec<Notification>>
where
    R: NotificationReader + ?Sized,
{
    DataHook::new(
        "notifications",
        move || repo.list_notifications(),
        fallback::notifications,
    )
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::fixtures::FixtureRepository;

    fn offline() -> RepositoryError {
        RepositoryError::Transport("connection refused".to_string())
    }

    #[test]
    fn new_hook_is_loading_with_empty_data() {
        let hook: DataHook<'_, Vec<OutreachTemplate>> =
            DataHook::new("templates", || async { Ok(Vec::new()) }, fallback::templates);

        assert!(hook.is_loading());
        assert!(hook.data().is_empty());
        assert_eq!(hook.error(), None);
    }

    #[tokio::test]
    async fn rejected_analytics_settles_on_documented_fallback() {
        let mut hook = DataHook::new(
            "analytics",
            || async { Err::<AnalyticsSummary, _>(offline()) },
            fallback::analytics,
        );

        hook.load().await;

        assert!(!hook.is_loading());
        assert_eq!(hook.state(), HookState::Error);
        assert!(hook.error().is_some());
        let data = hook.data();
        assert_eq!(data.total_influencers, "1,247");
        assert_eq!(data.response_rate, "89%");
        assert_eq!(data.total_reach, "2.4M");
        assert_eq!(data.roi, "5.2x");
        assert_eq!(data.active_campaigns, None);
    }

    #[tokio::test]
    async fn failing_list_hook_still_exposes_a_list() {
        let mut hook = DataHook::new(
            "notifications",
            || async { Err::<Vec<Notification>, _>(offline()) },
            fallback::notifications,
        );

        let data = hook.load().await;

        assert!(data.is_empty());
        assert!(hook.error().is_some());
    }

    #[tokio::test]
    async fn refetch_replaces_data_and_clears_error() {
        let attempts = Cell::new(0);
        let mut hook = DataHook::new(
            "campaigns",
            || {
                attempts.set(attempts.get() + 1);
                let attempt = attempts.get();
                async move {
                    if attempt == 1 {
                        Err(offline())
                    } else {
                        Ok(Vec::new())
                    }
                }
            },
            fallback::campaigns,
        );

        hook.load().await;
        assert_eq!(hook.data().len(), 2);
        assert!(hook.error().is_some());

        hook.refetch().await;

        assert_eq!(attempts.get(), 2);
        assert!(hook.data().is_empty());
        assert_eq!(hook.error(), None);
        assert_eq!(hook.state(), HookState::Success);
    }

    #[tokio::test]
    async fn result_after_unmount_is_discarded() {
        let flag = MountFlag::new();
        let in_flight = flag.clone();
        let mut hook = DataHook::new(
            "templates",
            move || {
                let in_flight = in_flight.clone();
                async move {
                    in_flight.unmount();
                    Ok(fallback::templates())
                }
            },
            Vec::new,
        )
        .with_mount_flag(flag);

        hook.load().await;

        assert!(hook.data().is_empty());
        assert!(hook.is_loading());
    }

    #[tokio::test]
    async fn unmounted_hook_ignores_failures_too() {
        let mut hook = DataHook::new(
            "analytics",
            || async { Err::<AnalyticsSummary, _>(offline()) },
            fallback::analytics,
        );
        hook.unmount();

        hook.load().await;

        assert_eq!(hook.error(), None);
        assert_eq!(hook.data(), &AnalyticsSummary::default());
    }

    #[tokio::test]
    async fn resource_hooks_settle_against_fixtures() {
        let repo = FixtureRepository::new();

        let testimonials = testimonials(&repo).settle().await;
        let roster = outreach_roster(&repo).settle().await;
        let report = analytics_report(&repo, TimeRange::Week).settle().await;

        assert!(!testimonials.loading);
        assert_eq!(testimonials.data.len(), 2);
        assert_eq!(roster.error, None);
        assert!(!roster.data.is_empty());
        assert_eq!(report.data.campaign_performance.len(), 4);
    }

    #[test]
    fn snapshot_serializes_for_templates() {
        let hook: DataHook<'_, Vec<OutreachTemplate>> =
            DataHook::new("templates", || async { Ok(Vec::new()) }, fallback::templates);

        let value = serde_json::to_value(hook.snapshot()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"data": [], "loading": true, "error": null})
        );
    }
}
