use crate::directory::store::LoadOutcome;
use crate::directory::{ApiClient, Directory};
use crate::tests::utils::{body_string, fallback_directory, get, tax_lawyers, StubBackend};
use serde_json::json;
use std::time::Duration;
use url::Url;

fn directory_with_live(live: serde_json::Value) -> Directory {
    let directory = fallback_directory();
    let outcome = directory.load(&StubBackend(live));
    assert!(matches!(outcome, LoadOutcome::Merged { .. }));
    directory
}

#[test]
fn browse_renders_fallback_firms() {
    let directory = fallback_directory();

    let resp = get(&directory, "/lawyers");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Showing 1-15 of 15 lawyers"));
    assert!(body.contains("Dummy Criminal Law Firm"));
    assert!(body.contains("Dummy Real Estate Law Firm"));
    // Everything fits on one page.
    assert!(!body.contains("aria-label=\"Pagination\""));
}

#[test]
fn specialization_and_min_experience_filter_together() {
    let directory = fallback_directory();

    let body = body_string(get(&directory, "/lawyers?specialization=Tax+Law&min_exp=5"));

    assert!(body.contains("Showing 1-1 of 1 lawyers"));
    assert!(body.contains("Dummy Tax Law Firm"));
    assert!(!body.contains("Dummy Criminal Law Firm"));
}

#[test]
fn text_search_matches_city() {
    let directory = fallback_directory();

    let body = body_string(get(&directory, "/lawyers?q=MUMBAI"));

    assert!(body.contains("Showing 1-3 of 3 lawyers"));
    assert!(body.contains("Dummy Property Law Firm"));
    assert!(body.contains("Dummy Corporate Law Firm"));
    assert!(body.contains("Dummy Tax Law Firm"));
}

#[test]
fn empty_result_is_not_an_error() {
    let directory = fallback_directory();

    let resp = get(&directory, "/lawyers?min_exp=20&max_exp=5");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("No lawyers found"));
    assert!(body.contains("Showing 0 of 0 lawyers"));
}

#[test]
fn pages_slice_twenty_at_a_time() {
    let directory = directory_with_live(tax_lawyers(45));

    let third = body_string(get(&directory, "/lawyers?verified=on&page=3"));
    assert!(third.contains("Showing 41-45 of 45 lawyers"));
    assert!(third.contains("data-id=\"live_44\""));
    assert!(!third.contains("data-id=\"live_39\""));

    let fourth = get(&directory, "/lawyers?verified=on&page=4");
    assert_eq!(fourth.status(), 200);
    assert!(body_string(fourth).contains("No lawyers found"));
}

#[test]
fn pagination_links_keep_filters() {
    let directory = directory_with_live(tax_lawyers(45));

    let body = body_string(get(&directory, "/lawyers?verified=on&page=2"));

    assert!(body.contains("aria-label=\"Pagination\""));
    assert!(body.contains("href=\"/lawyers?verified=on&amp;page=3\""));
    // Page 1 links drop the page parameter.
    assert!(body.contains("href=\"/lawyers?verified=on\""));
    assert!(body.contains("aria-current=\"page\""));
}

#[test]
fn filter_form_never_submits_a_page() {
    let directory = directory_with_live(tax_lawyers(45));

    let body = body_string(get(&directory, "/lawyers?state=Delhi&page=2"));

    assert!(body.contains("action=\"/lawyers\""));
    assert!(!body.contains("name=\"page\""));
}

#[test]
fn search_box_suggests_known_cities() {
    let directory = fallback_directory();

    let body = body_string(get(&directory, "/lawyers"));

    assert!(body.contains("list=\"locations\""));
    assert!(body.contains("<datalist id=\"locations\">"));
    assert!(body.contains("<option value=\"Pune\"></option>"));
}

#[test]
fn live_record_with_odd_profile_types_is_listed() {
    let directory = directory_with_live(json!([
        { "id": "u1", "full_name": "Kavya Nair", "is_verified": true, "consultation_fee": 1500.0 },
        { "id": "u2", "full_name": "Ravi Rao", "phone": 9876543210u64 }
    ]));

    let body = body_string(get(&directory, "/lawyers?q=nair"));
    assert!(body.contains("Kavya Nair"));

    let profile = body_string(get(&directory, "/lawyers/u2"));
    assert!(profile.contains("9876543210"));
}

#[test]
fn verified_live_records_lead_the_listing() {
    let directory = directory_with_live(json!([
        { "id": "u1", "full_name": "Unverified Advocate" },
        { "id": "v1", "full_name": "Verified Advocate", "verified": true }
    ]));

    let body = body_string(get(&directory, "/lawyers"));

    let pos = |id: &str| body.find(&format!("data-id=\"{id}\"")).unwrap();
    assert!(pos("v1") < pos("u1"));
    assert!(pos("u1") < pos("dummy_firm_1"));
    assert!(body.contains("Showing 1-17 of 17 lawyers"));
}

#[test]
fn failed_fetch_serves_the_fallback_page() {
    let baseline = body_string(get(&fallback_directory(), "/lawyers"));

    // Nothing listens on port 1.
    let base = Url::parse("http://127.0.0.1:1/api").unwrap();
    let client = ApiClient::new(&base, Duration::from_secs(2)).unwrap();
    let directory = fallback_directory();

    assert_eq!(directory.load(&client), LoadOutcome::Fallback);

    let after = body_string(get(&directory, "/lawyers"));
    assert_eq!(after, baseline);
}

#[test]
fn home_page_links_to_directory() {
    let directory = fallback_directory();

    let body = body_string(get(&directory, "/"));

    assert!(body.contains("15 lawyers and law firms"));
    assert!(body.contains("href=\"/lawyers\""));
}

#[test]
fn unknown_route_is_404() {
    let directory = fallback_directory();

    let resp = get(&directory, "/cases");
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}
