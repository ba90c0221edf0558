use serde::Serialize;

use crate::domain::notification::Notification;

/// Data required to render the notification list.
#[derive(Debug, Serialize)]
pub struct NotificationsPageData {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}
