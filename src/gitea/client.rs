//! Authenticated JSON client for the Gitea REST API
use std::fmt::Write as _;

use log::info;
use reqwest::{
    header::{HeaderMap, ACCEPT, CONTENT_LENGTH, CONTENT_TYPE, HOST},
    Request, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::errors::GiteaMigrateError;

/// Response read in full from the forge
struct RawResponse {
    /// HTTP status
    status: StatusCode,

    /// Response body
    body: String,
}

/// Gitea HTTP client
#[derive(Debug, Clone)]
pub(crate) struct GiteaClient {
    /// Base URL of the instance, without trailing slash
    base_url: String,

    /// Basic-auth username
    username: String,

    /// Basic-auth password
    password: String,

    /// Dump every request and response to the log
    debug: bool,

    /// Reqwest client
    client: reqwest::Client,
}

impl GiteaClient {
    /// Create a new client
    pub(crate) fn new(base_url: &Url, username: String, password: String, debug: bool) -> Self {
        Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            username,
            password,
            debug,
            client: reqwest::Client::new(),
        }
    }

    /// Base URL of the instance
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the JSON answer, which must be `200 OK`
    pub(crate) async fn get<O>(&self, path: &str) -> Result<O, GiteaMigrateError>
    where
        O: DeserializeOwned,
    {
        let request = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, "application/json")
            .build()?;
        let response = self.execute(request).await?;
        if response.status != StatusCode::OK {
            return Err(GiteaMigrateError::from_status(response.status));
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// POST `input` as JSON to `path` and decode the answer, which must be `201 Created`
    pub(crate) async fn post<I, O>(&self, path: &str, input: &I) -> Result<O, GiteaMigrateError>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned,
    {
        let body = serde_json::to_vec(input)?;
        let request = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .build()?;
        let response = self.execute(request).await?;
        if response.status != StatusCode::CREATED {
            return Err(GiteaMigrateError::from_status(response.status));
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Send the request and read the whole body, dumping both sides in debug mode
    async fn execute(&self, request: Request) -> Result<RawResponse, GiteaMigrateError> {
        if self.debug {
            info!("*** HTTP {} ***", request.method());
            info!("Request:\n{}", dump_request(&request));
        }
        let response = self.client.execute(request).await?;
        let status = response.status();
        let version = response.version();
        let headers = response.headers().clone();
        let body = response.text().await?;
        if self.debug {
            let mut dump = format!("{version:?} {status}\n");
            write_headers(&mut dump, &headers);
            dump.push('\n');
            dump.push_str(&body);
            info!("Response:\n{dump}");
        }
        Ok(RawResponse { status, body })
    }
}

/// Render a request the way it goes on the wire
fn dump_request(request: &Request) -> String {
    let mut dump = format!(
        "{} {} {:?}\n",
        request.method(),
        request.url(),
        request.version()
    );
    if !request.headers().contains_key(HOST) {
        if let Some(host) = request.url().host_str() {
            match request.url().port() {
                Some(port) => {
                    let _ = writeln!(dump, "host: {host}:{port}");
                }
                None => {
                    let _ = writeln!(dump, "host: {host}");
                }
            }
        }
    }
    write_headers(&mut dump, request.headers());
    let body = request.body().and_then(|body| body.as_bytes());
    if let Some(bytes) = body {
        if !request.headers().contains_key(CONTENT_LENGTH) {
            let _ = writeln!(dump, "content-length: {}", bytes.len());
        }
    }
    dump.push('\n');
    if let Some(bytes) = body {
        dump.push_str(&String::from_utf8_lossy(bytes));
    }
    dump
}

/// Append one `name: value` line per header
fn write_headers(dump: &mut String, headers: &HeaderMap) {
    for (name, value) in headers {
        if value.is_sensitive() {
            let _ = writeln!(dump, "{name}: <redacted>");
        } else {
            let _ = writeln!(
                dump,
                "{name}: {}",
                String::from_utf8_lossy(value.as_bytes())
            );
        }
    }
}
