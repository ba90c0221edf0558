//! Cookie session state.
//!
//! [`AuthSession`] is the only reader and writer of the `token` and `user`
//! keys. Handlers needing the signed-in user take a [`CurrentUser`], which
//! rejects anonymous requests with 401 so the redirect middleware can send
//! the browser to `/login`.

use std::collections::BTreeSet;
use std::future::{Ready, ready};
use std::sync::Arc;

use actix_session::{Session, SessionExt};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, error, web};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::auth::{LoginResponse, UserProfile};
use crate::domain::template::TemplateOverlay;
use crate::domain::types::NotificationId;
use crate::repository::{ResourceClient, TokenScope};
use crate::services::{ServiceError, ServiceResult};

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";
const TEMPLATES_KEY: &str = "templates";
const NOTIFICATIONS_READ_KEY: &str = "notifications_read";

/// Share of the 4064-byte session cookie the template overlay may take, as
/// measured once escaped into the cookie payload.
pub const MAX_OVERLAY_BYTES: usize = 2048;

fn read<T: DeserializeOwned>(session: &Session, key: &str) -> ServiceResult<Option<T>> {
    session.get::<T>(key).map_err(|err| {
        log::error!("Failed to read session key {key}: {err}");
        ServiceError::Session(err.to_string())
    })
}

fn write<T: Serialize>(session: &Session, key: &str, value: &T) -> ServiceResult<()> {
    session.insert(key, value).map_err(|err| {
        log::error!("Failed to write session key {key}: {err}");
        ServiceError::Session(err.to_string())
    })
}

/// Owner of the authentication state kept in the session cookie.
pub struct AuthSession {
    session: Session,
}

impl AuthSession {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn sign_in(&self, response: &LoginResponse) -> ServiceResult<()> {
        self.session.renew();
        write(&self.session, TOKEN_KEY, &response.token)?;
        write(&self.session, USER_KEY, &response.user)
    }

    /// Signed-in user, if any. An unreadable profile counts as signed out.
    pub fn user(&self) -> Option<UserProfile> {
        read(&self.session, USER_KEY).ok().flatten()
    }

    pub fn token(&self) -> Option<String> {
        read(&self.session, TOKEN_KEY).ok().flatten()
    }

    /// Drops everything stored for this browser, not only the auth keys.
    pub fn sign_out(&self) {
        self.session.purge();
    }
}

impl FromRequest for AuthSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(AuthSession::new(req.get_session())))
    }
}

/// Profile of the signed-in user; extraction fails with 401 when absent.
pub struct CurrentUser(pub UserProfile);

impl FromRequest for CurrentUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let user = AuthSession::new(req.get_session()).user();
        ready(match user {
            Some(user) => Ok(CurrentUser(user)),
            None => Err(error::ErrorUnauthorized("sign in required")),
        })
    }
}

/// Backend client acting for this browser's session token.
pub struct SessionClient(pub Arc<dyn ResourceClient>);

impl FromRequest for SessionClient {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(repo) = req.app_data::<web::Data<dyn ResourceClient>>() else {
            log::error!("Resource client is not registered as app data");
            return ready(Err(error::ErrorInternalServerError("backend unavailable")));
        };
        let token = AuthSession::new(req.get_session()).token();
        ready(Ok(SessionClient(repo.scoped(token.as_deref()))))
    }
}

pub fn template_overlay(session: &Session) -> TemplateOverlay {
    read(session, TEMPLATES_KEY)
        .ok()
        .flatten()
        .unwrap_or_default()
}

fn stored_len(overlay: &TemplateOverlay) -> ServiceResult<usize> {
    serde_json::to_string(overlay)
        .and_then(|value| serde_json::to_string(&value))
        .map(|escaped| escaped.len())
        .map_err(|err| ServiceError::Internal(err.to_string()))
}

/// Shrinks `overlay` until it fits [`MAX_OVERLAY_BYTES`], oldest edits first.
pub fn fit_template_overlay(overlay: &mut TemplateOverlay) -> ServiceResult<()> {
    while stored_len(overlay)? > MAX_OVERLAY_BYTES {
        if !overlay.drop_oldest() {
            break;
        }
        log::warn!("Template overlay exceeds the session budget, dropped its oldest edit");
    }
    Ok(())
}

/// Stores the overlay, trimming it first so the session cookie stays valid.
pub fn save_template_overlay(session: &Session, overlay: &mut TemplateOverlay) -> ServiceResult<()> {
    fit_template_overlay(overlay)?;
    write(session, TEMPLATES_KEY, overlay)
}

pub fn read_notifications(session: &Session) -> BTreeSet<NotificationId> {
    read(session, NOTIFICATIONS_READ_KEY)
        .ok()
        .flatten()
        .unwrap_or_default()
}

pub fn save_read_notifications(
    session: &Session,
    read_ids: &BTreeSet<NotificationId>,
) -> ServiceResult<()> {
    write(session, NOTIFICATIONS_READ_KEY, read_ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::OutreachTemplate;
    use crate::domain::types::TemplateId;

    fn draft(index: usize, content_len: usize) -> OutreachTemplate {
        OutreachTemplate {
            id: TemplateId::new(format!("local-{index}")).unwrap(),
            name: format!("Draft {index}"),
            content: "\"quoted\" ".repeat(content_len / 10),
            used_count: 0,
        }
    }

    #[test]
    fn oversized_overlay_keeps_the_newest_drafts() {
        let mut overlay = TemplateOverlay::default();
        for index in 0..6 {
            overlay.record_added(draft(index, 1000));
        }

        fit_template_overlay(&mut overlay).unwrap();

        assert!(stored_len(&overlay).unwrap() <= MAX_OVERLAY_BYTES);
        assert!(!overlay.added.is_empty());
        assert_eq!(overlay.added.last().unwrap().id.as_str(), "local-5");
    }

    #[test]
    fn small_overlay_is_left_alone() {
        let mut overlay = TemplateOverlay::default();
        overlay.record_added(draft(1, 100));
        overlay.record_removed(TemplateId::new("4").unwrap());
        let before = overlay.clone();

        fit_template_overlay(&mut overlay).unwrap();

        assert_eq!(overlay, before);
    }
}
