use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{redirect, Client};
use serde_json::{Map, Value};

use crate::config::WeatherConfig;
use crate::constants::ACCEPT_GEO_JSON;
use crate::error::FetchError;

/// HTTP client for the National Weather Service API
///
/// Every request carries the configured User-Agent, `Accept: application/geo+json`
/// and the configured timeout. Idle connections are not pooled, so each call
/// releases its connection once it completes. Redirects are not followed; a
/// 3xx answer is a status failure like any other non-2xx.
#[derive(Debug, Clone)]
pub struct NwsClient {
    http: Client,
    base_url: String,
}

impl NwsClient {
    pub fn new(config: &WeatherConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_GEO_JSON));

        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout())
            .pool_max_idle_per_host(0)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes a GET request and returns the top-level JSON object of the body
    pub async fn fetch_json(&self, url: &str) -> Result<Map<String, Value>, FetchError> {
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                FetchError::MalformedBody(e.to_string())
            } else {
                FetchError::from(e)
            }
        })?;

        match body {
            Value::Object(map) => Ok(map),
            other => Err(FetchError::MalformedBody(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
