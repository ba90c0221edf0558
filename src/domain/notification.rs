//! Notifications and their client-side read state.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{NotificationId, NotificationKind};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub timestamp: DateTime<Utc>,
}

/// Notification list with locally tracked read flags.
///
/// Reads are never confirmed with the backend; the ids marked read are kept
/// in the session and re-applied to each fresh fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(mut items: Vec<Notification>, read_ids: &BTreeSet<NotificationId>) -> Self {
        for item in &mut items {
            if read_ids.contains(&item.id) {
                item.read = true;
            }
        }
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self { items }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Flips a single notification to read. Returns `false` for unknown ids.
    pub fn mark_read(&mut self, id: &NotificationId) -> bool {
        match self.items.iter_mut().find(|n| &n.id == id) {
            Some(item) => {
                item.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }

    /// Ids currently flagged read, for persisting in the session.
    pub fn read_ids(&self) -> BTreeSet<NotificationId> {
        self.items
            .iter()
            .filter(|n| n.read)
            .map(|n| n.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn notification(id: &str, hour: u32, read: bool) -> Notification {
        Notification {
            id: NotificationId::new(id).unwrap(),
            kind: NotificationKind::Acceptance,
            title: format!("Title {id}"),
            message: "Emma Chen accepted your invitation".to_string(),
            read,
            timestamp: Utc.with_ymd_and_hms(2024, 6, 20, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn mark_all_read_clears_unread_count() {
        let mut center = NotificationCenter::new(
            vec![
                notification("1", 9, false),
                notification("2", 10, true),
                notification("3", 11, false),
            ],
            &BTreeSet::new(),
        );
        assert_eq!(center.unread_count(), 2);

        center.mark_all_read();

        assert_eq!(center.unread_count(), 0);
        assert!(center.items().iter().all(|n| n.read));
    }

    #[test]
    fn stored_read_ids_are_reapplied() {
        let read = BTreeSet::from([NotificationId::new("1").unwrap()]);
        let center = NotificationCenter::new(
            vec![notification("1", 9, false), notification("2", 10, false)],
            &read,
        );

        assert_eq!(center.unread_count(), 1);
        assert_eq!(center.items()[0].id.as_str(), "2");
    }

    #[test]
    fn mark_read_reports_unknown_ids() {
        let mut center =
            NotificationCenter::new(vec![notification("1", 9, false)], &BTreeSet::new());

        assert!(!center.mark_read(&NotificationId::new("7").unwrap()));
        assert!(center.mark_read(&NotificationId::new("1").unwrap()));
        assert_eq!(center.read_ids().len(), 1);
    }

    #[test]
    fn wire_format_uses_type_key() {
        let parsed: Notification = serde_json::from_value(serde_json::json!({
            "id": 4,
            "type": "collaboration",
            "title": "New collaboration",
            "message": "Mike Roberts started a collaboration",
            "timestamp": "2024-06-20T10:30:00Z"
        }))
        .unwrap();

        assert_eq!(parsed.kind, NotificationKind::Collaboration);
        assert!(!parsed.read);
    }
}
