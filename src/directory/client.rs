// client.rs
use crate::directory::models::RawRecord;
use crate::directory::FetchError;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("lawyer-directory/", env!("CARGO_PKG_VERSION"));

/// Anything that can hand over the raw lawyer list.
pub trait LawyerSource {
    fn fetch_lawyers(&self) -> Result<Vec<RawRecord>, FetchError>;
}

/// Blocking client for the marketplace backend.
pub struct ApiClient {
    client: Client,
    lawyers_url: Url,
}

impl ApiClient {
    pub fn new(api_base: &Url, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            lawyers_url: lawyers_url(api_base)?,
        })
    }

    pub fn lawyers_url(&self) -> &Url {
        &self.lawyers_url
    }
}

impl LawyerSource for ApiClient {
    fn fetch_lawyers(&self) -> Result<Vec<RawRecord>, FetchError> {
        let resp = self
            .client
            .get(self.lawyers_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: text.chars().take(200).collect(),
            });
        }

        decode_lawyers(&text)
    }
}

/// `{base}/lawyers`, whether or not the base ends with a slash.
pub fn lawyers_url(api_base: &Url) -> Result<Url, FetchError> {
    let mut base = api_base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("lawyers")
        .map_err(|e| FetchError::InvalidUrl(e.to_string()))
}

/// Decodes the array element by element so one bad record does not throw
/// away the rest.
pub fn decode_lawyers(body: &str) -> Result<Vec<RawRecord>, FetchError> {
    let data: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let arr = data
        .as_array()
        .ok_or_else(|| FetchError::Decode("expected a JSON array".to_string()))?;

    let mut out = Vec::with_capacity(arr.len());
    for (index, item) in arr.iter().enumerate() {
        match serde_json::from_value::<RawRecord>(item.clone()) {
            Ok(raw) => out.push(raw),
            Err(e) => tracing::warn!(index, error = %e, "skipping malformed lawyer record"),
        }
    }

    Ok(out)
}
