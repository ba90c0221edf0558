use serde::Deserialize;

use crate::domain::types::TimeRange;

/// `range` parameter of the analytics page and export form.
///
/// Unknown values fall back to the default window instead of failing the page.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsRangeQuery {
    pub range: Option<String>,
}

impl AnalyticsRangeQuery {
    pub fn range(&self) -> TimeRange {
        match self.range.as_deref() {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::debug!("Ignoring unknown analytics range {raw}");
                TimeRange::default()
            }),
            None => TimeRange::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_range_uses_default() {
        let query = AnalyticsRangeQuery {
            range: Some("5y".to_string()),
        };

        assert_eq!(query.range(), TimeRange::Month);
    }

    #[test]
    fn known_range_is_kept() {
        let query = AnalyticsRangeQuery {
            range: Some("90d".to_string()),
        };

        assert_eq!(query.range(), TimeRange::Quarter);
    }
}
