//! Search models.

use crate::query::Params;

/// Default number of search results.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// A query against the public link search index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    /// Free-text query.
    pub query: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Restrict to clicks from these cities (e.g., `us-ca-san francisco`).
    pub cities: Vec<String>,
    /// Restrict to one destination domain.
    pub domain: Option<String>,
    /// ISO language code.
    pub lang: Option<String>,
    /// Result fields to return; sent as one comma-separated value.
    pub fields: Vec<String>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    pub(crate) fn apply(&self, params: &mut Params) {
        params.insert_opt("query", self.query.as_deref());
        params.insert("limit", self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT));
        params.insert_opt("offset", self.offset);
        if !self.cities.is_empty() {
            params.insert("cities", self.cities.join(","));
        }
        params.insert_opt("domain", self.domain.as_deref());
        params.insert_opt("lang", self.lang.as_deref());
        if !self.fields.is_empty() {
            params.insert("fields", self.fields.join(","));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::encode;

    #[test]
    fn test_fields_joined_with_commas() {
        let query = SearchQuery {
            fields: vec!["aggregate_link".into(), "title".into()],
            ..SearchQuery::new("rust")
        };
        let mut params = Params::new();
        query.apply(&mut params);
        assert_eq!(
            encode(&params),
            "query=rust&limit=10&fields=aggregate_link%2Ctitle"
        );
    }

    #[test]
    fn test_empty_lists_omitted() {
        let mut params = Params::new();
        SearchQuery::default().apply(&mut params);
        assert!(!params.contains_key("fields"));
        assert!(!params.contains_key("cities"));
    }
}
