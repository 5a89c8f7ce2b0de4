use crate::domain::pagination::Page;
use crate::domain::{BrowseState, ListingRecord};
use crate::templates::components::{filter_form, listing_card, pagination_nav};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct BrowseVm<'a> {
    pub state: &'a BrowseState,
    pub page: Page<'a, &'a ListingRecord>,
}

pub fn browse_page(vm: &BrowseVm<'_>) -> Markup {
    desktop_layout(
        "Find a Lawyer",
        html! {
            main class="container" {
                (filter_form(vm.state))

                p class="results-count" {
                    @match vm.page.showing() {
                        Some((first, last)) => {
                            "Showing " (first) "-" (last) " of " (vm.page.total_items) " lawyers"
                        },
                        None => {
                            "Showing 0 of " (vm.page.total_items) " lawyers"
                        },
                    }
                }

                @if vm.page.items.is_empty() {
                    section class="no-results" {
                        h3 { "No lawyers found" }
                        p { "Try a broader search or clear some filters." }
                    }
                } @else {
                    div class="listing-grid" {
                        @for record in vm.page.items {
                            (listing_card(record))
                        }
                    }
                }

                (pagination_nav(vm.state, &vm.page))
            }
        },
    )
}
