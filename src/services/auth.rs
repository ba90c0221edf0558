//! Sign-in and sign-out against the backend.

use crate::domain::auth::{Credentials, LoginResponse};
use crate::forms::auth::LoginForm;
use crate::repository::AuthWriter;
use crate::services::ServiceResult;

/// Forwards the credentials and returns the issued token and profile.
pub async fn login<R>(repo: &R, form: LoginForm) -> ServiceResult<LoginResponse>
where
    R: AuthWriter + ?Sized,
{
    let credentials = Credentials::try_from(form)?;

    let response = repo.login(&credentials).await.map_err(|err| {
        log::error!("Failed to sign in {}: {err}", credentials.email);
        err
    })?;

    log::info!("Signed in {}", credentials.email);
    Ok(response)
}

/// Invalidates `token` on the backend.
///
/// The local session is cleared regardless, so a backend failure is only
/// logged.
pub async fn logout<R>(repo: &R, token: Option<&str>)
where
    R: AuthWriter + ?Sized,
{
    let Some(token) = token else {
        return;
    };
    if let Err(err) = repo.logout(token).await {
        log::warn!("Failed to invalidate session token: {err}");
    }
}
