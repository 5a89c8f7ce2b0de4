use serde::Serialize;
use url::Url;

const AVATAR_BASE: &str = "https://ui-avatars.com/api/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Lawyer,
    Firm,
}

impl ListingKind {
    pub fn label(self) -> &'static str {
        match self {
            ListingKind::Lawyer => "Lawyer",
            ListingKind::Firm => "Law Firm",
        }
    }
}

/// A lawyer or firm as shown in the directory, after normalization.
/// Both the fetched and the fallback records end up in this shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRecord {
    pub id: String,
    pub kind: ListingKind,
    pub name: String,

    // Primary specialization plus the full set it came from.
    pub specialization: Option<String>,
    pub practice_areas: Vec<String>,

    pub city: Option<String>,
    pub state: Option<String>,

    pub experience_years: u32,
    pub is_verified: bool,
    pub photo_url: Option<String>,

    pub details: ListingDetails,
}

/// Profile-only fields. None of these take part in filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListingDetails {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub established_year: Option<u16>,
    pub rating: Option<f32>,
    pub consultation_fee: Option<u32>,
    pub featured: bool,
}

impl ListingRecord {
    /// The stored photo, or a placeholder avatar derived from the name.
    pub fn avatar_url(&self) -> String {
        if let Some(photo) = &self.photo_url {
            return photo.clone();
        }

        match Url::parse_with_params(
            AVATAR_BASE,
            &[
                ("name", self.name.as_str()),
                ("background", "0D8ABC"),
                ("color", "fff"),
            ],
        ) {
            Ok(url) => url.into(),
            Err(_) => AVATAR_BASE.to_string(),
        }
    }

    /// "City, State" with whichever halves are present.
    pub fn location(&self) -> String {
        match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) => format!("{city}, {state}"),
            (Some(one), None) | (None, Some(one)) => one.to_string(),
            (None, None) => String::new(),
        }
    }

    pub fn has_practice_area(&self, area: &str) -> bool {
        self.practice_areas.iter().any(|a| a == area)
    }
}

#[cfg(test)]
pub(crate) fn sample(id: &str, verified: bool) -> ListingRecord {
    ListingRecord {
        id: id.to_string(),
        kind: ListingKind::Lawyer,
        name: format!("Advocate {id}"),
        specialization: Some("Civil Law".to_string()),
        practice_areas: vec!["Civil Law".to_string()],
        city: Some("Pune".to_string()),
        state: Some("Maharashtra".to_string()),
        experience_years: 0,
        is_verified: verified,
        photo_url: None,
        details: ListingDetails::default(),
    }
}
