// src/domain/filter.rs

use crate::domain::listing::ListingRecord;

/// Search and filter criteria for the directory.
/// Unset criteria always pass; set ones are AND-ed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub query: String,
    pub specialization: Option<String>,
    pub state: Option<String>,
    pub min_experience: Option<u32>,
    pub max_experience: Option<u32>,
    pub verified_only: bool,
}

impl ListingFilter {
    /// Filters `records`, lowercasing the query once for the whole pass.
    pub fn apply<'a>(&self, records: &'a [ListingRecord]) -> Vec<&'a ListingRecord> {
        let needle = self.needle();
        records
            .iter()
            .filter(|r| self.matches_with(&needle, r))
            .collect()
    }

    fn needle(&self) -> String {
        self.query.trim().to_lowercase()
    }

    fn matches_with(&self, needle: &str, record: &ListingRecord) -> bool {
        matches_query(needle, record)
            && self
                .specialization
                .as_deref()
                .map_or(true, |spec| record.has_practice_area(spec))
            && self
                .state
                .as_deref()
                .map_or(true, |state| record.state.as_deref() == Some(state))
            && self
                .min_experience
                .map_or(true, |min| record.experience_years >= min)
            && self
                .max_experience
                .map_or(true, |max| record.experience_years <= max)
            && (!self.verified_only || record.is_verified)
    }

    /// Number of set criteria, not counting the text query.
    pub fn active_count(&self) -> usize {
        [
            self.specialization.is_some(),
            self.state.is_some(),
            self.min_experience.is_some(),
            self.max_experience.is_some(),
            self.verified_only,
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// Resets everything except the text query.
    pub fn clear(&mut self) {
        *self = ListingFilter {
            query: std::mem::take(&mut self.query),
            ..Default::default()
        };
    }
}

/// `needle` is already trimmed and lowercased.
fn matches_query(needle: &str, record: &ListingRecord) -> bool {
    if needle.is_empty() {
        return true;
    }

    let hit = |field: &str| field.to_lowercase().contains(needle);

    hit(&record.name)
        || record.practice_areas.iter().any(|a| hit(a))
        || record.city.as_deref().is_some_and(hit)
        || record.state.as_deref().is_some_and(hit)
}

/// Lenient bound parsing: blank or non-numeric input means "no bound".
pub fn parse_bound(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}
