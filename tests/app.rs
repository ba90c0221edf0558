//! End-to-end checks against the fixture-backed application.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use raven_dashboard::middleware::RedirectUnauthorized;
use raven_dashboard::repository::ResourceClient;
use raven_dashboard::repository::fixtures::FixtureRepository;
use raven_dashboard::routes;

macro_rules! fixture_app {
    () => {{
        let key = Key::from(&[7u8; 64]);
        let repo: Arc<dyn ResourceClient> = Arc::new(FixtureRepository::new());
        let tera = Tera::new("templates/**/*").expect("templates parse");
        let flash = FlashMessagesFramework::builder(CookieMessageStore::builder(key.clone()).build())
            .build();

        test::init_service(
            App::new()
                .wrap(flash)
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), key)
                        .cookie_secure(false)
                        .build(),
                )
                .service(routes::main::health)
                .service(routes::main::show_home)
                .service(routes::auth::show_login)
                .service(routes::auth::login)
                .service(routes::auth::logout)
                .service(
                    web::scope("")
                        .wrap(RedirectUnauthorized)
                        .service(routes::dashboard::show_dashboard)
                        .service(routes::influencers::show_influencers)
                        .service(routes::outreach::show_outreach)
                        .service(routes::outreach::create_template)
                        .service(routes::analytics::show_analytics)
                        .service(routes::analytics::export_analytics)
                        .service(routes::notifications::show_notifications)
                        .service(routes::notifications::mark_all_notifications_read),
                )
                .app_data(web::Data::new(tera))
                .app_data(web::Data::from(repo)),
        )
        .await
    }};
}

fn cookies_of<B>(resp: &ServiceResponse<B>) -> Vec<Cookie<'static>> {
    resp.response()
        .cookies()
        .map(|cookie| cookie.into_owned())
        .collect()
}

fn merge_cookies<B>(jar: &mut Vec<Cookie<'static>>, resp: &ServiceResponse<B>) {
    for cookie in cookies_of(resp) {
        jar.retain(|kept| kept.name() != cookie.name());
        jar.push(cookie);
    }
}

fn with_cookies(mut req: test::TestRequest, cookies: &[Cookie<'static>]) -> test::TestRequest {
    for cookie in cookies {
        req = req.cookie(cookie.clone());
    }
    req
}

async fn body_text<B: actix_web::body::MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8_lossy(&bytes).into_owned()
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = fixture_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("\"ok\""));
}

#[actix_web::test]
async fn landing_page_is_public() {
    let app = fixture_app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("What brands say"));
}

#[actix_web::test]
async fn anonymous_dashboard_redirects_to_login() {
    let app = fixture_app!();

    let req = test::TestRequest::get().uri("/dashboard").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
}

#[actix_web::test]
async fn signed_in_user_sees_protected_pages() {
    let app = fixture_app!();

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", "alex@techstyle.example"), ("password", "secret")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/dashboard");
    let cookies = cookies_of(&resp);

    let req = with_cookies(test::TestRequest::get().uri("/dashboard"), &cookies).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Alex"));

    for uri in [
        "/influencers?platform=youtube",
        "/outreach",
        "/analytics?range=7d",
        "/notifications",
    ] {
        let req = with_cookies(test::TestRequest::get().uri(uri), &cookies).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    }
}

#[actix_web::test]
async fn rejected_login_returns_to_form() {
    let app = fixture_app!();

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", "not-an-email"), ("password", "secret")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
}

#[actix_web::test]
async fn analytics_export_downloads_csv() {
    let app = fixture_app!();

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", "alex@techstyle.example"), ("password", "secret")])
        .to_request();
    let cookies = cookies_of(&test::call_service(&app, req).await);

    let req = with_cookies(test::TestRequest::post().uri("/analytics/export"), &cookies)
        .set_form([("range", "90d")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("analytics-90d.csv"));
}

#[actix_web::test]
async fn long_templates_keep_the_session_usable() {
    let app = fixture_app!();

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", "alex@techstyle.example"), ("password", "secret")])
        .to_request();
    let mut jar = cookies_of(&test::call_service(&app, req).await);

    let too_long = "a".repeat(4500);
    let req = with_cookies(test::TestRequest::post().uri("/templates"), &jar)
        .set_form([("name", "Too long"), ("content", too_long.as_str())])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    merge_cookies(&mut jar, &resp);

    let content = "a".repeat(1000);
    for name in ["Long 1", "Long 2", "Long 3"] {
        let req = with_cookies(test::TestRequest::post().uri("/templates"), &jar)
            .set_form([("name", name), ("content", content.as_str())])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{name}");
        merge_cookies(&mut jar, &resp);
    }

    let req = with_cookies(test::TestRequest::get().uri("/outreach"), &jar).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Long 3"));
    assert!(!body.contains("Too long"));
}
