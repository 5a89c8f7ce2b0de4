// src/domain/fallback.rs

use crate::domain::listing::{ListingDetails, ListingKind, ListingRecord};

pub struct Location {
    pub city: &'static str,
    pub state: &'static str,
    pub area: &'static str,
}

pub const SPECIALIZATIONS: &[&str] = &[
    "Criminal Law",
    "Civil Law",
    "Family Law",
    "Property Law",
    "Corporate Law",
    "Tax Law",
    "Labour Law",
    "Consumer Law",
    "Constitutional Law",
    "Intellectual Property",
    "Banking Law",
    "Cyber Law",
    "Immigration Law",
    "Environmental Law",
    "Real Estate Law",
];

pub const LOCATIONS: &[Location] = &[
    Location { city: "New Delhi", state: "Delhi", area: "Connaught Place" },
    Location { city: "New Delhi", state: "Delhi", area: "Saket" },
    Location { city: "New Delhi", state: "Delhi", area: "Dwarka" },
    Location { city: "Mumbai", state: "Maharashtra", area: "Nariman Point" },
    Location { city: "Mumbai", state: "Maharashtra", area: "Bandra" },
    Location { city: "Mumbai", state: "Maharashtra", area: "Andheri" },
    Location { city: "Pune", state: "Maharashtra", area: "Koregaon Park" },
    Location { city: "Bangalore", state: "Karnataka", area: "MG Road" },
    Location { city: "Bangalore", state: "Karnataka", area: "Koramangala" },
    Location { city: "Chennai", state: "Tamil Nadu", area: "T Nagar" },
    Location { city: "Kolkata", state: "West Bengal", area: "Park Street" },
    Location { city: "Hyderabad", state: "Telangana", area: "Banjara Hills" },
    Location { city: "Ahmedabad", state: "Gujarat", area: "CG Road" },
    Location { city: "Lucknow", state: "Uttar Pradesh", area: "Hazratganj" },
    Location { city: "Noida", state: "Uttar Pradesh", area: "Sector 62" },
    Location { city: "Gurgaon", state: "Haryana", area: "Cyber City" },
    Location { city: "Chandigarh", state: "Punjab", area: "Sector 17" },
    Location { city: "Jaipur", state: "Rajasthan", area: "MI Road" },
    Location { city: "Indore", state: "Madhya Pradesh", area: "Vijay Nagar" },
    Location { city: "Kochi", state: "Kerala", area: "MG Road" },
];

const BASE_YEAR: u16 = 2000;
const YEAR_CYCLE: usize = 24;

/// Experience is measured against a fixed year so the dataset never
/// depends on the clock.
const REFERENCE_YEAR: u16 = 2025;

pub const FALLBACK_ID_PREFIX: &str = "dummy_firm_";

/// Builds the demo firm directory shown before (or instead of) live data.
///
/// One firm per specialization. Locations are assigned round-robin and the
/// established year cycles every 24 entries, so the output is the same on
/// every call.
pub fn generate_fallback_firms() -> Vec<ListingRecord> {
    SPECIALIZATIONS
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let location = &LOCATIONS[i % LOCATIONS.len()];
            let established_year = BASE_YEAR + (i % YEAR_CYCLE) as u16;
            let slug: String = spec
                .to_lowercase()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();

            ListingRecord {
                id: format!("{FALLBACK_ID_PREFIX}{}", i + 1),
                kind: ListingKind::Firm,
                name: format!("Dummy {spec} Firm"),
                specialization: Some(spec.to_string()),
                practice_areas: vec![spec.to_string()],
                city: Some(location.city.to_string()),
                state: Some(location.state.to_string()),
                experience_years: u32::from(REFERENCE_YEAR.saturating_sub(established_year)),
                is_verified: false,
                photo_url: None,
                details: ListingDetails {
                    email: Some(format!("contact@dummy.{slug}.com")),
                    phone: Some("+91 9876543210".to_string()),
                    website: Some(format!("www.dummy.{slug}.com")),
                    address: Some(format!("{}, {}", location.area, location.city)),
                    description: Some(format!(
                        "This is a dummy profile for a law firm specializing in {spec}. \
                         Used for demonstration purposes only."
                    )),
                    established_year: Some(established_year),
                    rating: Some(4.5),
                    consultation_fee: Some(2000),
                    featured: i < 3,
                },
            }
        })
        .collect()
}

/// Distinct cities in first-seen order.
pub fn cities() -> Vec<&'static str> {
    distinct(LOCATIONS.iter().map(|l| l.city))
}

/// Distinct states in first-seen order.
pub fn states() -> Vec<&'static str> {
    distinct(LOCATIONS.iter().map(|l| l.state))
}

fn distinct(values: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}
