//! Notification list with session-held read flags.

use std::collections::BTreeSet;

use crate::domain::notification::NotificationCenter;
use crate::domain::types::NotificationId;
use crate::dto::notifications::NotificationsPageData;
use crate::hooks;
use crate::repository::NotificationReader;
use crate::services::{ServiceError, ServiceResult};

async fn load_center<R>(repo: &R, read_ids: &BTreeSet<NotificationId>) -> NotificationCenter
where
    R: NotificationReader + ?Sized,
{
    let snapshot = hooks::notifications(repo).settle().await;
    NotificationCenter::new(snapshot.data, read_ids)
}

fn merged(
    read_ids: &BTreeSet<NotificationId>,
    center: NotificationCenter,
) -> BTreeSet<NotificationId> {
    let mut merged = read_ids.clone();
    merged.extend(center.read_ids());
    merged
}

pub async fn load_notifications_page<R>(
    repo: &R,
    read_ids: &BTreeSet<NotificationId>,
) -> NotificationsPageData
where
    R: NotificationReader + ?Sized,
{
    let center = load_center(repo, read_ids).await;
    NotificationsPageData {
        unread_count: center.unread_count(),
        notifications: center.items().to_vec(),
    }
}

/// Marks one notification read and returns the read ids to store.
///
/// The result always contains every id in `read_ids`.
pub async fn mark_read<R>(
    repo: &R,
    id: &NotificationId,
    read_ids: &BTreeSet<NotificationId>,
) -> ServiceResult<BTreeSet<NotificationId>>
where
    R: NotificationReader + ?Sized,
{
    let mut center = load_center(repo, read_ids).await;
    if !center.mark_read(id) {
        log::warn!("Cannot mark unknown notification {id} as read");
        return Err(ServiceError::NotFound);
    }
    Ok(merged(read_ids, center))
}

/// Marks every listed notification read and returns the read ids to store.
///
/// Ids stored earlier are kept even when the current fetch does not list
/// them, so an offline backend cannot erase read flags.
pub async fn mark_all_read<R>(
    repo: &R,
    read_ids: &BTreeSet<NotificationId>,
) -> BTreeSet<NotificationId>
where
    R: NotificationReader + ?Sized,
{
    let mut center = load_center(repo, read_ids).await;
    center.mark_all_read();
    merged(read_ids, center)
}
