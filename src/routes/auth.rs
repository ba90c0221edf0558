//! Sign-in and sign-out.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::auth::LoginForm;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, auth as auth_service};
use crate::session::{AuthSession, SessionClient};

#[get("/login")]
pub async fn show_login(
    auth: AuthSession,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if auth.user().is_some() {
        return redirect("/dashboard");
    }

    let context = base_context(&flash_messages, None, "login");
    render_template(&tera, "auth/login.html", &context)
}

#[post("/login")]
pub async fn login(
    auth: AuthSession,
    SessionClient(repo): SessionClient,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    match auth_service::login(&*repo, form).await {
        Ok(response) => match auth.sign_in(&response) {
            Ok(()) => {
                FlashMessage::success(format!("Welcome back, {}!", response.user.name)).send();
                redirect("/dashboard")
            }
            Err(err) => {
                log::error!("Failed to store session: {err}");
                HttpResponse::InternalServerError().finish()
            }
        },
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Invalid email or password.").send();
            redirect("/login")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to sign in: {err}");
            FlashMessage::error("Sign-in is unavailable right now.").send();
            redirect("/login")
        }
    }
}

#[post("/logout")]
pub async fn logout(auth: AuthSession, SessionClient(repo): SessionClient) -> impl Responder {
    let token = auth.token();
    auth_service::logout(&*repo, token.as_deref()).await;
    auth.sign_out();
    redirect("/")
}
