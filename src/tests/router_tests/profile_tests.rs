use crate::tests::utils::{body_string, fallback_directory, get, StubBackend};
use serde_json::json;

#[test]
fn profile_shows_firm_details() {
    let directory = fallback_directory();

    let resp = get(&directory, "/lawyers/dummy_firm_6");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Dummy Tax Law Firm"));
    assert!(body.contains("contact@dummy.taxlaw.com"));
    assert!(body.contains("Established 2005"));
    assert!(body.contains("Andheri, Mumbai"));
}

#[test]
fn unknown_profile_is_404() {
    let directory = fallback_directory();

    assert_eq!(get(&directory, "/lawyers/nobody").status(), 404);
    assert_eq!(get(&directory, "/lawyers/dummy_firm_1/extra").status(), 404);
}

#[test]
fn live_profile_available_after_load() {
    let directory = fallback_directory();
    assert_eq!(get(&directory, "/lawyers/u42").status(), 404);

    directory.load(&StubBackend(json!([{
        "id": "u42",
        "full_name": "Priya Menon",
        "specialization": "Cyber Law",
        "experience": "9",
        "is_verified": true
    }])));

    let body = body_string(get(&directory, "/lawyers/u42"));
    assert!(body.contains("Priya Menon"));
    assert!(body.contains("Cyber Law"));
    assert!(body.contains("Verified"));
    // No photo on record, so the placeholder avatar is used.
    assert!(body.contains("ui-avatars.com/api/?name=Priya+Menon"));
}
