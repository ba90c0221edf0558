//! Live backend client built on `reqwest`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::analytics::{AnalyticsPayload, AnalyticsReport, AnalyticsSummary};
use crate::domain::auth::{Credentials, LoginResponse};
use crate::domain::campaign::{CampaignListing, CampaignProgress, CampaignSummary, NewCampaign};
use crate::domain::collaboration::{CurrentCollaboration, PreviousCollaboration};
use crate::domain::dashboard::DashboardOverview;
use crate::domain::influencer::{InfluencerSummary, OutreachInfluencer};
use crate::domain::notification::Notification;
use crate::domain::outreach::{OutreachReceipt, OutreachRequest};
use crate::domain::template::{NewTemplate, OutreachTemplate};
use crate::domain::testimonial::TestimonialList;
use crate::domain::types::{TemplateId, TimeRange};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    AnalyticsReader, AuthWriter, CampaignReader, CampaignWriter, CollaborationReader,
    DashboardReader, InfluencerReader, NotificationReader, OutreachWriter, ResourceClient,
    TemplateReader, TemplateWriter, TestimonialReader, TokenScope,
};

#[derive(Serialize)]
struct RangeBody {
    range: TimeRange,
}

/// Talks to the backend over HTTP.
///
/// Every call is a single request. Non-success statuses, transport failures
/// and undecodable bodies are returned as [`RepositoryError`]s. A repository
/// bound to a session token sends it as a bearer credential on every call.
#[derive(Clone, Debug)]
pub struct HttpRepository {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpRepository {
    pub fn new(base_url: &str, timeout: Duration) -> RepositoryResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Same connection pool, authenticated as `token`.
    pub fn with_token(&self, token: Option<&str>) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: token.map(str::to_string),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, request: RequestBuilder) -> RepositoryResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        log::debug!("Backend answered {status}: {body}");
        Err(RepositoryError::from_status(status.as_u16(), &body))
    }

    async fn decode<T>(response: Response) -> RepositoryResult<T>
    where
        T: DeserializeOwned + Send,
    {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn get<T>(&self, path: &str) -> RepositoryResult<T>
    where
        T: DeserializeOwned + Send,
    {
        log::debug!("GET {path}");
        let response = self.send(self.request(Method::GET, path)).await?;
        Self::decode(response).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> RepositoryResult<T>
    where
        T: DeserializeOwned + Send,
        Q: Serialize + Sync + ?Sized,
    {
        log::debug!("GET {path} (with query)");
        let response = self
            .send(self.request(Method::GET, path).query(query))
            .await?;
        Self::decode(response).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> RepositoryResult<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync + ?Sized,
    {
        log::debug!("POST {path}");
        let response = self
            .send(self.request(Method::POST, path).json(body))
            .await?;
        Self::decode(response).await
    }

    /// Posts JSON and returns the raw response body, for downloads.
    pub async fn post_bytes<B>(&self, path: &str, body: &B) -> RepositoryResult<Vec<u8>>
    where
        B: Serialize + Sync + ?Sized,
    {
        log::debug!("POST {path} (download)");
        let response = self
            .send(self.request(Method::POST, path).json(body))
            .await?;
        Ok(response.bytes().await?.to_vec())
    }

    pub async fn delete(&self, path: &str) -> RepositoryResult<()> {
        log::debug!("DELETE {path}");
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

impl TokenScope for HttpRepository {
    fn scoped(&self, token: Option<&str>) -> Arc<dyn ResourceClient> {
        Arc::new(self.with_token(token))
    }
}

#[async_trait]
impl AnalyticsReader for HttpRepository {
    async fn get_analytics(&self) -> RepositoryResult<AnalyticsSummary> {
        let payload: AnalyticsPayload = self.get("/api/analytics").await?;
        Ok(payload.into())
    }

    async fn get_analytics_report(&self, range: TimeRange) -> RepositoryResult<AnalyticsReport> {
        self.get_query("/api/analytics", &[("range", range.as_str())])
            .await
    }

    async fn export_analytics(&self, range: TimeRange) -> RepositoryResult<Vec<u8>> {
        self.post_bytes("/api/analytics/export", &RangeBody { range })
            .await
    }
}

#[async_trait]
impl CampaignReader for HttpRepository {
    async fn list_campaigns(&self) -> RepositoryResult<Vec<CampaignSummary>> {
        let listing: CampaignListing = self.get("/api/campaigns").await?;
        Ok(listing.into())
    }

    async fn list_campaign_progress(&self) -> RepositoryResult<Vec<CampaignProgress>> {
        self.get("/api/campaigns/progress").await
    }
}

#[async_trait]
impl CampaignWriter for HttpRepository {
    async fn create_campaign(&self, campaign: &NewCampaign) -> RepositoryResult<CampaignSummary> {
        self.post("/api/campaigns", campaign).await
    }
}

#[async_trait]
impl InfluencerReader for HttpRepository {
    async fn list_influencers(&self) -> RepositoryResult<Vec<InfluencerSummary>> {
        self.get("/api/influencers").await
    }

    async fn list_outreach_roster(&self) -> RepositoryResult<Vec<OutreachInfluencer>> {
        let influencers = self.list_influencers().await?;
        Ok(influencers.iter().map(OutreachInfluencer::from).collect())
    }
}

#[async_trait]
impl TemplateReader for HttpRepository {
    async fn list_templates(&self) -> RepositoryResult<Vec<OutreachTemplate>> {
        self.get("/api/templates").await
    }
}

#[async_trait]
impl TemplateWriter for HttpRepository {
    async fn create_template(&self, template: &NewTemplate) -> RepositoryResult<OutreachTemplate> {
        self.post("/api/templates", template).await
    }

    async fn delete_template(&self, id: &TemplateId) -> RepositoryResult<()> {
        self.delete(&format!("/api/templates/{id}")).await
    }
}

#[async_trait]
impl OutreachWriter for HttpRepository {
    async fn send_outreach(&self, request: &OutreachRequest) -> RepositoryResult<OutreachReceipt> {
        self.post("/api/outreach/send", request).await
    }
}

#[async_trait]
impl TestimonialReader for HttpRepository {
    async fn list_testimonials(&self) -> RepositoryResult<TestimonialList> {
        self.get("/api/testimonials").await
    }
}

#[async_trait]
impl CollaborationReader for HttpRepository {
    async fn list_current_collaborations(&self) -> RepositoryResult<Vec<CurrentCollaboration>> {
        self.get("/api/collaborations/current").await
    }

    async fn list_previous_collaborations(&self) -> RepositoryResult<Vec<PreviousCollaboration>> {
        self.get("/api/collaborations/previous").await
    }
}

#[async_trait]
impl DashboardReader for HttpRepository {
    async fn get_dashboard(&self) -> RepositoryResult<DashboardOverview> {
        self.get("/api/dashboard").await
    }
}

#[async_trait]
impl NotificationReader for HttpRepository {
    async fn list_notifications(&self) -> RepositoryResult<Vec<Notification>> {
        self.get("/api/notifications").await
    }
}

#[async_trait]
impl AuthWriter for HttpRepository {
    async fn login(&self, credentials: &Credentials) -> RepositoryResult<LoginResponse> {
        self.post("/api/auth/login", credentials).await
    }

    async fn logout(&self, token: &str) -> RepositoryResult<()> {
        log::debug!("POST /api/auth/logout");
        self.send(
            self.client
                .post(self.url("/api/auth/logout"))
                .bearer_auth(token),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::header::AUTHORIZATION;
    use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};

    use super::*;

    /// Serves canned backend answers on a random local port.
    async fn stub_backend() -> String {
        let server = HttpServer::new(|| {
            App::new()
                .route(
                    "/api/templates",
                    web::get().to(|| async {
                        HttpResponse::Ok()
                            .content_type("text/html")
                            .body("<html>maintenance</html>")
                    }),
                )
                .route(
                    "/api/influencers",
                    web::get().to(|| async { HttpResponse::NotFound().body("no such resource") }),
                )
                .route(
                    "/api/dashboard",
                    web::get().to(|| async {
                        HttpResponse::InternalServerError().body("database is down")
                    }),
                )
                .route(
                    "/api/notifications",
                    web::get().to(|req: HttpRequest| async move {
                        let authorized = req
                            .headers()
                            .get(AUTHORIZATION)
                            .is_some_and(|value| value == "Bearer session-token");
                        if authorized {
                            HttpResponse::Ok().json(Vec::<Notification>::new())
                        } else {
                            HttpResponse::Unauthorized().finish()
                        }
                    }),
                )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{addr}")
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let repo = HttpRepository::new("http://localhost:5000/", Duration::from_secs(1)).unwrap();

        assert_eq!(repo.base_url(), "http://localhost:5000");
        assert_eq!(repo.url("/api/templates"), "http://localhost:5000/api/templates");
    }

    #[tokio::test]
    async fn unreachable_backend_is_an_error_not_a_panic() {
        let repo = HttpRepository::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();

        let err = repo.list_influencers().await.unwrap_err();

        assert!(matches!(
            err,
            RepositoryError::Transport(_) | RepositoryError::Timeout(_)
        ));
    }

    #[actix_web::test]
    async fn error_status_is_classified() {
        let repo = HttpRepository::new(&stub_backend().await, Duration::from_secs(5)).unwrap();

        let missing = repo.list_influencers().await.unwrap_err();
        let failing = repo.get_dashboard().await.unwrap_err();

        assert_eq!(missing, RepositoryError::NotFound);
        assert_eq!(
            failing,
            RepositoryError::Status {
                status: 500,
                body: "database is down".to_string(),
            }
        );
    }

    #[actix_web::test]
    async fn non_json_body_is_a_decode_error() {
        let repo = HttpRepository::new(&stub_backend().await, Duration::from_secs(5)).unwrap();

        let err = repo.list_templates().await.unwrap_err();

        assert!(matches!(err, RepositoryError::Decode(_)));
    }

    #[actix_web::test]
    async fn session_token_is_sent_as_bearer() {
        let repo = HttpRepository::new(&stub_backend().await, Duration::from_secs(5)).unwrap();

        let anonymous = repo.list_notifications().await.unwrap_err();
        let signed_in = repo
            .scoped(Some("session-token"))
            .list_notifications()
            .await
            .unwrap();

        assert!(anonymous.is_unauthorized());
        assert!(signed_in.is_empty());
    }
}
