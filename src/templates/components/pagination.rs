use crate::domain::pagination::Page;
use crate::domain::BrowseState;
use maud::{html, Markup};

/// Prev / numbered window / next. Hidden when everything fits on one page.
pub fn pagination_nav<T>(state: &BrowseState, page: &Page<'_, T>) -> Markup {
    html! {
        @if page.total_pages > 1 {
            nav class="pagination" aria-label="Pagination" {
                @if page.has_prev() {
                    a class="btn btn-outline" rel="prev" href=(state.href("/lawyers", page.prev())) { "‹" }
                } @else {
                    span class="btn btn-outline disabled" { "‹" }
                }

                @for n in page.window() {
                    @if n == page.current {
                        span class="btn current" aria-current="page" { (n) }
                    } @else {
                        a class="btn btn-outline" href=(state.href("/lawyers", n)) { (n) }
                    }
                }

                @if page.has_next() {
                    a class="btn btn-outline" rel="next" href=(state.href("/lawyers", page.next())) { "›" }
                } @else {
                    span class="btn btn-outline disabled" { "›" }
                }
            }
        }
    }
}
