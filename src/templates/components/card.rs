use crate::domain::ListingRecord;
use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// One result in the browse grid.
pub fn listing_card(record: &ListingRecord) -> Markup {
    html! {
        article class="listing-card" data-id=(record.id) {
            div class="listing-card-head" {
                img class="avatar" src=(record.avatar_url()) alt=(record.name) width="64" height="64";
                @if record.is_verified {
                    span class="badge badge-verified" title="Verified" { "Verified" }
                }
            }

            h3 { (record.name) }
            p class="kind" { (record.kind.label()) }
            @if let Some(spec) = &record.specialization {
                p class="specialization" { (spec) }
            }

            ul class="facts" {
                li { (record.experience_years) " years exp" }
                @let location = record.location();
                @if !location.is_empty() {
                    li { (location) }
                }
            }

            div class="actions" {
                a class="btn btn-outline" href=(format!("/lawyers/{}", record.id)) { "View Profile" }
            }
        }
    }
}
