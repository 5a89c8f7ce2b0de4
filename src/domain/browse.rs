// src/domain/browse.rs

use crate::domain::filter::{parse_bound, ListingFilter};
use std::collections::HashMap;
use url::form_urlencoded;

/// What the visitor is looking at: the filter plus the current page.
///
/// Every filter mutation goes through this type so the page can be reset
/// to 1; otherwise a narrowed result set could leave the visitor on a page
/// that no longer exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    filter: ListingFilter,
    page: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            filter: ListingFilter::default(),
            page: 1,
        }
    }
}

impl BrowseState {
    /// Reads `q`, `specialization`, `state`, `min_exp`, `max_exp`,
    /// `verified` and `page` from a query string. Blank or unparseable
    /// values are treated as unset.
    pub fn from_query(query: Option<&str>) -> Self {
        let params: HashMap<String, String> = query
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        let text = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let filter = ListingFilter {
            query: text("q").unwrap_or_default(),
            specialization: text("specialization"),
            state: text("state"),
            min_experience: text("min_exp").as_deref().and_then(parse_bound),
            max_experience: text("max_exp").as_deref().and_then(parse_bound),
            verified_only: matches!(
                text("verified").as_deref(),
                Some("on" | "true" | "1")
            ),
        };

        let page = text("page")
            .and_then(|p| p.parse::<usize>().ok())
            .unwrap_or(1);

        // Filters first: setting them resets the page.
        let mut state = Self::default();
        state.update_filter(|f| *f = filter);
        state.go_to(page);
        state
    }

    pub fn filter(&self) -> &ListingFilter {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn clear_filters(&mut self) {
        self.update_filter(ListingFilter::clear);
    }

    pub fn update_filter(&mut self, change: impl FnOnce(&mut ListingFilter)) {
        change(&mut self.filter);
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Query string for this state at `page`; unset criteria are left out.
    pub fn to_query(&self, page: usize) -> String {
        let f = &self.filter;
        let mut out = form_urlencoded::Serializer::new(String::new());

        if !f.query.is_empty() {
            out.append_pair("q", &f.query);
        }
        if let Some(spec) = &f.specialization {
            out.append_pair("specialization", spec);
        }
        if let Some(state) = &f.state {
            out.append_pair("state", state);
        }
        if let Some(min) = f.min_experience {
            out.append_pair("min_exp", &min.to_string());
        }
        if let Some(max) = f.max_experience {
            out.append_pair("max_exp", &max.to_string());
        }
        if f.verified_only {
            out.append_pair("verified", "on");
        }
        if page > 1 {
            out.append_pair("page", &page.to_string());
        }

        out.finish()
    }

    pub fn href(&self, path: &str, page: usize) -> String {
        let query = self.to_query(page);
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }
}
