//! Query-State Synchronization
//!
//! Two-way mapping between the URL query string and the list view state
//! (`page`, `query`/`search`, repeated `tags`). Parsing then serializing
//! any state yields the same state.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const PAGE_PARAM: &str = "page";
/// Query key used by the home view
pub const QUERY_PARAM: &str = "query";
/// Query key used by the search view
pub const SEARCH_PARAM: &str = "search";
pub const TAGS_PARAM: &str = "tags";

/// Characters left unescaped in query values (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Selected tag ids.
///
/// Ids are unique and keep their selection order for display, but two
/// selections are equal when they hold the same ids in any order.
#[derive(Debug, Clone, Default, Eq)]
pub struct TagSelection(Vec<String>);

impl PartialEq for TagSelection {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().all(|id| other.contains(id))
    }
}

impl FromIterator<String> for TagSelection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut ids: Vec<String> = Vec::new();
        for id in iter {
            if !id.is_empty() && !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self(ids)
    }
}

impl TagSelection {
    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|t| t == id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Selection with `id` appended (no-op if already selected)
    pub fn with(&self, id: &str) -> Self {
        self.0.iter().cloned().chain(std::iter::once(id.to_string())).collect()
    }

    pub fn without(&self, id: &str) -> Self {
        self.0.iter().filter(|t| *t != id).cloned().collect()
    }
}

/// Free-text query plus selected tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub tags: TagSelection,
}

impl FilterState {
    /// True when the query has non-whitespace content
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

/// Everything a list view derives from its URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// 1-based
    pub page: u32,
    pub filter: FilterState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 1,
            filter: FilterState::default(),
        }
    }
}

impl ViewState {
    /// Parse a query string, with or without the leading `?`.
    ///
    /// `query` wins over `search` when both are present. Invalid or
    /// missing pages become 1; empty and duplicate tag ids are dropped.
    pub fn from_query_string(qs: &str) -> Self {
        let mut page = None;
        let mut query = None;
        let mut search = None;
        let mut tags = Vec::new();

        for (key, value) in parse_pairs(qs) {
            match key.as_str() {
                PAGE_PARAM if page.is_none() => page = Some(parse_page(&value)),
                QUERY_PARAM if query.is_none() => query = Some(value),
                SEARCH_PARAM if search.is_none() => search = Some(value),
                TAGS_PARAM | "tags[]" => tags.push(value),
                _ => {}
            }
        }

        Self {
            page: page.unwrap_or(1),
            filter: FilterState {
                query: query.or(search).unwrap_or_default(),
                tags: tags.into_iter().collect(),
            },
        }
    }

    /// Serialize without the leading `?`. Page 1 and an empty query are omitted.
    pub fn to_query_string(&self, query_key: &str) -> String {
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        let page = self.page.to_string();
        if self.page > 1 {
            pairs.push((PAGE_PARAM, page.as_str()));
        }
        if !self.filter.query.is_empty() {
            pairs.push((query_key, self.filter.query.as_str()));
        }
        for id in self.filter.tags.ids() {
            pairs.push((TAGS_PARAM, id.as_str()));
        }

        pairs
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `path` followed by the serialized state, if any
    pub fn href(&self, path: &str, query_key: &str) -> String {
        let qs = self.to_query_string(query_key);
        if qs.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, qs)
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            filter: self.filter.clone(),
        }
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            page: self.page,
            filter: FilterState {
                query: query.into(),
                tags: self.filter.tags.clone(),
            },
        }
    }

    pub fn with_tags(&self, tags: TagSelection) -> Self {
        Self {
            page: self.page,
            filter: FilterState {
                query: self.filter.query.clone(),
                tags,
            },
        }
    }
}

fn parse_page(value: &str) -> u32 {
    value.trim().parse::<u32>().ok().filter(|p| *p >= 1).unwrap_or(1)
}

fn parse_pairs(qs: &str) -> impl Iterator<Item = (String, String)> + '_ {
    qs.trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (decode(k), decode(v)),
            None => (decode(pair), String::new()),
        })
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(ids: &[&str]) -> TagSelection {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_full_query_string() {
        let state = ViewState::from_query_string("?page=3&query=cotton%20shirts&tags=a1&tags=b2");
        assert_eq!(state.page, 3);
        assert_eq!(state.filter.query, "cotton shirts");
        assert_eq!(state.filter.tags.ids(), &["a1".to_string(), "b2".to_string()]);
    }

    #[test]
    fn test_parse_defaults_and_bad_page() {
        assert_eq!(ViewState::from_query_string(""), ViewState::default());
        assert_eq!(ViewState::from_query_string("page=0").page, 1);
        assert_eq!(ViewState::from_query_string("page=abc").page, 1);
        assert_eq!(ViewState::from_query_string("page=-2").page, 1);
    }

    #[test]
    fn test_search_alias_and_plus_decoding() {
        let state = ViewState::from_query_string("search=red+dress");
        assert_eq!(state.filter.query, "red dress");

        let both = ViewState::from_query_string("search=ignored&query=kept");
        assert_eq!(both.filter.query, "kept");
    }

    #[test]
    fn test_duplicate_and_empty_tags_dropped() {
        let state = ViewState::from_query_string("tags=a&tags=&tags=b&tags=a&tags[]=c");
        assert_eq!(state.filter.tags.ids(), &["a".to_string(), "b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_serialize_omits_defaults() {
        assert_eq!(ViewState::default().to_query_string(QUERY_PARAM), "");
        assert_eq!(ViewState::default().href("/", QUERY_PARAM), "/");
    }

    #[test]
    fn test_serialize_escapes_values() {
        let state = ViewState::default()
            .with_page(2)
            .with_query("a&b=c +")
            .with_tags(tags(&["x/y"]));
        assert_eq!(
            state.to_query_string(SEARCH_PARAM),
            "page=2&search=a%26b%3Dc%20%2B&tags=x%2Fy"
        );
    }

    #[test]
    fn test_round_trip() {
        let states = vec![
            ViewState::default(),
            ViewState::default().with_page(7),
            ViewState::default().with_query("  spaced  "),
            ViewState::default().with_query("كافيه & co").with_tags(tags(&["t1", "t2", "t3"])),
            ViewState::default().with_page(4).with_tags(tags(&["only"])),
        ];
        for state in states {
            for key in [QUERY_PARAM, SEARCH_PARAM] {
                let reparsed = ViewState::from_query_string(&state.to_query_string(key));
                assert_eq!(reparsed, state);
            }
        }
    }

    #[test]
    fn test_selection_is_order_insensitive() {
        assert_eq!(tags(&["a", "b"]), tags(&["b", "a"]));
        assert_ne!(tags(&["a", "b"]), tags(&["a"]));
    }

    #[test]
    fn test_selection_add_remove() {
        let sel = tags(&["a"]).with("b");
        assert_eq!(sel.ids(), &["a".to_string(), "b".to_string()]);
        let sel = sel.without("a");
        assert_eq!(sel.ids(), &["b".to_string()]);
        assert_eq!(sel.with("b").len(), 1);
    }

    #[test]
    fn test_has_query_ignores_whitespace() {
        assert!(!ViewState::default().with_query("   ").filter.has_query());
        assert!(ViewState::default().with_query(" x ").filter.has_query());
    }
}
