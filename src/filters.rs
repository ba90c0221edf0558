//! Filter and selection state for list pages.
//!
//! Both live only in the page URL or form: nothing here is persisted and
//! nothing talks to the backend.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::domain::influencer::InfluencerSummary;
use crate::domain::types::{InfluencerId, TypeConstraintError};

/// Attributes an influencer list can be narrowed by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FilterKey {
    #[serde(rename = "platform")]
    Platform,
    #[serde(rename = "category")]
    Category,
    #[serde(rename = "audience")]
    Audience,
    #[serde(rename = "productType")]
    ProductType,
}

impl FilterKey {
    pub const ALL: [FilterKey; 4] = [
        FilterKey::Platform,
        FilterKey::Category,
        FilterKey::Audience,
        FilterKey::ProductType,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FilterKey::Platform => "platform",
            FilterKey::Category => "category",
            FilterKey::Audience => "audience",
            FilterKey::ProductType => "productType",
        }
    }

    fn value_of(self, influencer: &InfluencerSummary) -> &str {
        match self {
            FilterKey::Platform => influencer.platform.as_str(),
            FilterKey::Category => influencer.category.as_str(),
            FilterKey::Audience => influencer.audience.as_str(),
            FilterKey::ProductType => influencer.product_type.as_str(),
        }
    }
}

impl Display for FilterKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(s.to_string()))
    }
}

/// Selected value per filter key plus an optional free-text search.
///
/// An influencer is visible when every set key matches its value exactly and,
/// if a search term is present, its name, username or category contains the
/// term (case-insensitive).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterSet {
    selected: BTreeMap<FilterKey, String>,
    search: Option<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`. `"all"` or a blank value clears the key.
    pub fn set(&mut self, key: FilterKey, value: &str) {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            self.selected.remove(&key);
        } else {
            self.selected.insert(key, value.to_lowercase());
        }
    }

    #[must_use]
    pub fn with(mut self, key: FilterKey, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn clear(&mut self, key: FilterKey) {
        self.selected.remove(&key);
    }

    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.selected.get(&key).map(String::as_str)
    }

    pub fn set_search(&mut self, term: &str) {
        let term = term.trim();
        self.search = (!term.is_empty()).then(|| term.to_lowercase());
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && self.search.is_none()
    }

    pub fn matches(&self, influencer: &InfluencerSummary) -> bool {
        let by_keys = self
            .selected
            .iter()
            .all(|(key, value)| key.value_of(influencer) == value);

        by_keys
            && self.search.as_deref().is_none_or(|term| {
                influencer.name.to_lowercase().contains(term)
                    || influencer.username.to_lowercase().contains(term)
                    || influencer.category.as_str().contains(term)
            })
    }

    /// The subset of `items` passing every filter, in source order.
    pub fn visible<'a>(&self, items: &'a [InfluencerSummary]) -> Vec<&'a InfluencerSummary> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Influencers picked for an outreach batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Selection(BTreeSet<InfluencerId>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` when absent, removes it when present. Returns whether the id
    /// is selected afterwards.
    pub fn toggle(&mut self, id: InfluencerId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn contains(&self, id: &InfluencerId) -> bool {
        self.0.contains(id)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InfluencerId> {
        self.0.iter()
    }

    pub fn into_ids(self) -> Vec<InfluencerId> {
        self.0.into_iter().collect()
    }
}

impl FromIterator<InfluencerId> for Selection {
    fn from_iter<I: IntoIterator<Item = InfluencerId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
