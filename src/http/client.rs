use anyhow::{Context, Result, bail};
use log::debug;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Username/key pair sent as HTTP basic auth
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// JSON-over-HTTP client shared by the upstream service clients
#[derive(Debug, Clone)]
pub struct ApiHttpClient {
    client: Client,
    credentials: Option<BasicCredentials>,
}

impl ApiHttpClient {
    pub fn new(user_agent: &str, timeout_secs: u64, credentials: Option<BasicCredentials>) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client, credentials })
    }

    /// GET `url` and decode the body as `T`; non-2xx statuses are errors carrying the body
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);
        let response = self
            .send_get_request(url)
            .await
            .with_context(|| format!("Upstream service unreachable at {}", url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Upstream response from {} was cut short", url))?;

        if !status.is_success() {
            bail!("Upstream service returned status {}: {}", status, body);
        }

        decode_body(&body, url)
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> reqwest::Result<reqwest::Response> {
        let request = self.client.get(url);
        let request = match &self.credentials {
            Some(creds) => request.basic_auth(&creds.username, Some(&creds.password)),
            None => request,
        };
        request.send().await
    }
}

fn decode_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T> {
    serde_json::from_str(body).with_context(|| format!("Unexpected payload from {}", url))
}
