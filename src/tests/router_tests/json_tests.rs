use crate::tests::utils::{body_string, fallback_directory, get, tax_lawyers, StubBackend};
use serde_json::Value;

fn get_json(directory: &crate::directory::Directory, uri: &str) -> Value {
    let resp = get(directory, uri);
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );
    serde_json::from_str(&body_string(resp)).unwrap()
}

#[test]
fn json_page_reports_fallback_source() {
    let directory = fallback_directory();

    let page = get_json(&directory, "/lawyers.json");

    assert_eq!(page["source"], "fallback");
    assert_eq!(page["total"], 15);
    assert_eq!(page["total_pages"], 1);
    assert_eq!(page["items"][0]["id"], "dummy_firm_1");
    assert_eq!(page["items"][0]["kind"], "firm");
    assert_eq!(page["items"][0]["is_verified"], false);
}

#[test]
fn json_page_follows_filters_and_paging() {
    let directory = fallback_directory();
    directory.load(&StubBackend(tax_lawyers(45)));

    let page = get_json(&directory, "/lawyers.json?verified=on&page=3");

    assert_eq!(page["source"], "merged");
    assert_eq!(page["page"], 3);
    assert_eq!(page["total_pages"], 3);
    assert_eq!(page["total"], 45);
    assert_eq!(page["items"].as_array().unwrap().len(), 5);

    let beyond = get_json(&directory, "/lawyers.json?verified=on&page=4");
    assert_eq!(beyond["items"].as_array().unwrap().len(), 0);
}

#[test]
fn health_check() {
    let directory = fallback_directory();
    let resp = get(&directory, "/health");
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}
