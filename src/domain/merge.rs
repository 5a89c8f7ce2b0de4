// src/domain/merge.rs

use crate::directory::models::RawRecord;
use crate::domain::listing::{ListingDetails, ListingKind, ListingRecord};
use serde_json::Value;
use std::collections::HashSet;

const UNNAMED: &str = "Unnamed";

/// Shorter "photo" values are placeholders left over from old sign-ups.
const MIN_PHOTO_LEN: usize = 5;

impl ListingRecord {
    /// Maps a fetched record onto the canonical shape.
    ///
    /// Each aliased field resolves in a fixed order, and an empty value
    /// counts as missing so the next alias gets a chance:
    ///
    /// - name: `full_name`, `name`, `firm_name`, then `"Unnamed"`
    /// - experience: `experience_years`, `experience`, then 0
    /// - verified: `is_verified`, `verified`, then false
    /// - photo: `photo` (if longer than 5 chars), `image`
    ///
    /// Returns `None` only when the record has no usable id.
    pub fn from_raw(raw: RawRecord) -> Option<Self> {
        let id = raw.id?.into_string()?;

        let kind = if raw.user_type.as_deref() == Some("law_firm")
            || (raw.firm_name.is_some() && raw.full_name.is_none())
        {
            ListingKind::Firm
        } else {
            ListingKind::Lawyer
        };

        let name = first_present([raw.full_name, raw.name, raw.firm_name])
            .unwrap_or_else(|| UNNAMED.to_string());

        let mut practice_areas: Vec<String> = raw
            .specialization
            .map(|s| s.into_vec())
            .unwrap_or_default()
            .into_iter()
            .chain(raw.practice_areas.unwrap_or_default())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        dedup_in_order(&mut practice_areas);

        let experience_years = raw
            .experience_years
            .as_ref()
            .and_then(parse_years)
            .or_else(|| raw.experience.as_ref().and_then(parse_years))
            .unwrap_or(0);

        let photo_url = raw
            .photo
            .filter(|p| p.len() > MIN_PHOTO_LEN)
            .or_else(|| non_empty(raw.image));

        Some(ListingRecord {
            id,
            kind,
            name,
            specialization: practice_areas.first().cloned(),
            practice_areas,
            city: non_empty(raw.city),
            state: non_empty(raw.state),
            experience_years,
            is_verified: raw.is_verified.or(raw.verified).unwrap_or(false),
            photo_url,
            details: ListingDetails {
                email: raw.email.as_ref().and_then(value_text),
                phone: raw.phone.as_ref().and_then(value_text),
                website: raw.website.as_ref().and_then(value_text),
                address: raw.address.as_ref().and_then(value_text),
                description: raw.bio.as_ref().and_then(value_text),
                established_year: None,
                rating: raw.rating.as_ref().and_then(value_number).map(|r| r as f32),
                consultation_fee: raw
                    .consultation_fee
                    .as_ref()
                    .and_then(value_number)
                    .filter(|fee| *fee >= 0.0)
                    .map(|fee| fee.min(f64::from(u32::MAX)) as u32),
                featured: false,
            },
        })
    }
}

/// Combines fetched records with the fallback set.
///
/// Output order is `fetched ++ fallback`, de-duplicated by id (first
/// occurrence wins), then stably partitioned so verified records lead.
pub fn merge(fetched: Vec<RawRecord>, fallback: &[ListingRecord]) -> Vec<ListingRecord> {
    let mut skipped = 0usize;
    let normalized = fetched.into_iter().filter_map(|raw| {
        let record = ListingRecord::from_raw(raw);
        if record.is_none() {
            skipped += 1;
        }
        record
    });

    let mut seen = HashSet::new();
    let combined: Vec<ListingRecord> = normalized
        .chain(fallback.iter().cloned())
        .filter(|r| seen.insert(r.id.clone()))
        .collect();

    if skipped > 0 {
        tracing::warn!(skipped, "dropped fetched records without an id");
    }

    partition_verified(combined)
}

/// Stable partition: verified records first, relative order kept inside
/// each group.
pub fn partition_verified(records: Vec<ListingRecord>) -> Vec<ListingRecord> {
    let (mut verified, unverified): (Vec<_>, Vec<_>) =
        records.into_iter().partition(|r| r.is_verified);
    verified.extend(unverified);
    verified
}

/// Reads a years value the way a loose form field would be read: numbers
/// are truncated, strings use their leading digits. Zero counts as absent.
fn parse_years(value: &Value) -> Option<u32> {
    let years = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))?,
        Value::String(s) => {
            let s = s.trim();
            let (sign, digits) = match s.strip_prefix('-') {
                Some(rest) => (-1, rest),
                None => (1, s),
            };
            let end = digits
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(digits.len());
            sign * digits[..end].parse::<i64>().ok()?
        }
        _ => return None,
    };

    match years {
        0 => None,
        n if n < 0 => Some(0),
        n => Some(u32::try_from(n).unwrap_or(u32::MAX)),
    }
}

/// Profile text: strings are trimmed, numbers (a phone stored as digits)
/// are printed. Anything else is dropped.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(Some(s.clone())),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numbers pass through; numeric strings are parsed.
fn value_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn first_present<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates.into_iter().find_map(non_empty)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn dedup_in_order(values: &mut Vec<String>) {
    let mut seen = HashSet::new();
    values.retain(|v| seen.insert(v.clone()));
}
