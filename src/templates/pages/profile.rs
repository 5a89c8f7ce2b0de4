use crate::domain::ListingRecord;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn profile_page(record: &ListingRecord) -> Markup {
    let details = &record.details;

    desktop_layout(
        &record.name,
        html! {
            main class="container profile" {
                section class="card profile-head" {
                    img class="avatar avatar-lg" src=(record.avatar_url()) alt=(record.name) width="128" height="128";
                    div {
                        h1 { (record.name) }
                        p class="kind" {
                            (record.kind.label())
                            @if record.is_verified {
                                " · " span class="badge badge-verified" { "Verified" }
                            }
                        }
                        @let location = record.location();
                        @if !location.is_empty() {
                            p class="location" { (location) }
                        }
                    }
                }

                section class="card" {
                    h3 { "Practice" }
                    @if record.practice_areas.is_empty() {
                        p { "General practice" }
                    } @else {
                        ul class="practice-areas" {
                            @for area in &record.practice_areas {
                                li { (area) }
                            }
                        }
                    }
                    p { strong { (record.experience_years) } " years of experience" }
                    @if let Some(year) = details.established_year {
                        p { "Established " (year) }
                    }
                    @if let Some(rating) = details.rating {
                        p { "Rating: " (format!("{rating:.1}")) " / 5" }
                    }
                    @if let Some(fee) = details.consultation_fee {
                        p { "Consultation fee: ₹" (fee) }
                    }
                }

                @if let Some(description) = &details.description {
                    section class="card" {
                        h3 { "About" }
                        p { (description) }
                    }
                }

                section class="card" {
                    h3 { "Contact" }
                    ul class="contact" {
                        @if let Some(email) = &details.email {
                            li { "Email: " a href=(format!("mailto:{email}")) { (email) } }
                        }
                        @if let Some(phone) = &details.phone {
                            li { "Phone: " (phone) }
                        }
                        @if let Some(website) = &details.website {
                            li { "Website: " (website) }
                        }
                        @if let Some(address) = &details.address {
                            li { "Address: " (address) }
                        }
                    }
                }

                p { a href="/lawyers" { "← Back to the directory" } }
            }
        },
    )
}
