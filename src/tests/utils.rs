use crate::directory::models::RawRecord;
use crate::directory::client::LawyerSource;
use crate::directory::{Directory, FetchError};
use crate::domain::fallback::generate_fallback_firms;
use crate::router::handle;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// A directory serving only the generated fallback firms.
pub fn fallback_directory() -> Directory {
    Directory::new(generate_fallback_firms())
}

/// Backend stub returning a fixed JSON array.
pub struct StubBackend(pub serde_json::Value);

impl LawyerSource for StubBackend {
    fn fetch_lawyers(&self) -> Result<Vec<RawRecord>, FetchError> {
        crate::directory::client::decode_lawyers(&self.0.to_string())
    }
}

/// `count` verified live lawyers, all practising Tax Law in Delhi with
/// `i` years of experience.
pub fn tax_lawyers(count: usize) -> serde_json::Value {
    let records: Vec<_> = (0..count)
        .map(|i| {
            serde_json::json!({
                "id": format!("live_{i}"),
                "full_name": format!("Live Lawyer {i}"),
                "specialization": "Tax Law",
                "city": "New Delhi",
                "state": "Delhi",
                "experience_years": i,
                "is_verified": true
            })
        })
        .collect();
    serde_json::Value::Array(records)
}

pub fn get(directory: &Directory, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    match handle(req, directory) {
        Ok(resp) => resp,
        Err(err) => crate::responses::error_to_response(err),
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
