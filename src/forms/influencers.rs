use serde::Deserialize;

use crate::filters::{FilterKey, FilterSet};

/// Query string of the influencer directory.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerFilterQuery {
    pub search: Option<String>,
    pub platform: Option<String>,
    pub category: Option<String>,
    pub audience: Option<String>,
    pub product_type: Option<String>,
}

impl From<&InfluencerFilterQuery> for FilterSet {
    fn from(query: &InfluencerFilterQuery) -> Self {
        let mut filters = FilterSet::new();
        let pairs = [
            (FilterKey::Platform, &query.platform),
            (FilterKey::Category, &query.category),
            (FilterKey::Audience, &query.audience),
            (FilterKey::ProductType, &query.product_type),
        ];
        for (key, value) in pairs {
            if let Some(value) = value {
                filters.set(key, value);
            }
        }
        if let Some(term) = &query.search {
            filters.set_search(term);
        }
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_maps_onto_filter_set() {
        let query: InfluencerFilterQuery =
            serde_html_form::from_str("platform=youtube&category=all&productType=gadgets&search=mike")
                .unwrap();

        let filters = FilterSet::from(&query);

        assert_eq!(filters.get(FilterKey::Platform), Some("youtube"));
        assert_eq!(filters.get(FilterKey::Category), None);
        assert_eq!(filters.get(FilterKey::ProductType), Some("gadgets"));
        assert_eq!(filters.search(), Some("mike"));
    }
}
