// templates/pages/home.rs

use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub fn home_page(listing_count: usize) -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="container" {
                h1 { "Find the right lawyer" }

                (card("Browse the directory", html! {
                    p { (listing_count) " lawyers and law firms, searchable by specialization, state and experience." }
                    a class="btn primary" href="/lawyers" { "Find a Lawyer" }
                }))
            }
        },
    )
}
