use crate::domain::fallback::{cities, states, SPECIALIZATIONS};
use crate::domain::BrowseState;
use maud::{html, Markup};

const MIN_EXPERIENCE_OPTIONS: &[(u32, &str)] = &[
    (5, "5+ years"),
    (10, "10+ years"),
    (15, "15+ years"),
    (20, "20+ years"),
];

const MAX_EXPERIENCE_OPTIONS: &[(u32, &str)] = &[
    (5, "Up to 5 years"),
    (10, "Up to 10 years"),
    (15, "Up to 15 years"),
    (25, "Up to 25 years"),
];

/// Search box and filter panel. Submitting it never carries `page`, so any
/// change lands back on the first page.
pub fn filter_form(state: &BrowseState) -> Markup {
    let filter = state.filter();
    let active = filter.active_count();
    let clear_href = {
        let mut cleared = state.clone();
        cleared.clear_filters();
        cleared.href("/lawyers", 1)
    };

    html! {
        form class="browse-filters" method="get" action="/lawyers" {
            div class="search-row" {
                label class="sr-only" for="q" { "Search" }
                input
                    type="search"
                    id="q"
                    name="q"
                    value=(filter.query)
                    list="locations"
                    placeholder="Search by name, specialization, or location...";
                datalist id="locations" {
                    @for city in cities() {
                        option value=(city) {}
                    }
                }
                button type="submit" class="primary" {
                    "Filters"
                    @if active > 0 {
                        span class="filter-count" { (active) }
                    }
                }
            }

            fieldset class="filter-panel" {
                legend { "Filters" }

                label for="specialization" { "Specialization" }
                select name="specialization" id="specialization" {
                    option value="" selected[filter.specialization.is_none()] { "All" }
                    @for spec in SPECIALIZATIONS {
                        option value=(spec) selected[filter.specialization.as_deref() == Some(*spec)] { (spec) }
                    }
                }

                label for="state" { "State" }
                select name="state" id="state" {
                    option value="" selected[filter.state.is_none()] { "All States" }
                    @for state in states() {
                        option value=(state) selected[filter.state.as_deref() == Some(state)] { (state) }
                    }
                }

                label for="min_exp" { "Min Experience" }
                (experience_select("min_exp", filter.min_experience, MIN_EXPERIENCE_OPTIONS))

                label for="max_exp" { "Max Experience" }
                (experience_select("max_exp", filter.max_experience, MAX_EXPERIENCE_OPTIONS))

                label class="checkbox" {
                    input type="checkbox" name="verified" value="on" checked[filter.verified_only];
                    span { "Verified Only" }
                }

                @if active > 0 {
                    a class="clear-filters" href=(clear_href) { "Clear all" }
                }
            }
        }
    }
}

fn experience_select(name: &str, current: Option<u32>, options: &[(u32, &str)]) -> Markup {
    html! {
        select name=(name) id=(name) {
            option value="" selected[current.is_none()] { "Any" }
            @for (years, label) in options {
                option value=(years) selected[current == Some(*years)] { (label) }
            }
        }
    }
}
