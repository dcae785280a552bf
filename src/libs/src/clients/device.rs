use std::time::Duration;

use log::debug;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error as ThisError;

use crate::utils::normalization::is_full_uuid;

const DEFAULT_SCHEME: &str = "http://";

#[derive(ThisError, Debug)]
pub enum RemoteError {
    #[error("login required: no api token configured")]
    NotLoggedIn,
    #[error("not authorized{}", with_body(.0))]
    Unauthorized(String),
    #[error("device not found: {uuid}{}", with_body(.body))]
    DeviceNotFound { uuid: String, body: String },
    #[error("device api returned {code}: {body}")]
    Status { code: u16, body: String },
    #[error("request to device api failed: {0}")]
    Network(#[from] reqwest::Error),
}

fn with_body(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

/// Remote capability used by the note command.
#[allow(async_fn_in_trait)]
pub trait DeviceNotes {
    async fn set_note(&self, device_uuid: &str, note: &str) -> Result<(), RemoteError>;
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub target: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct NoteReq<'a> {
    note: &'a str,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, RemoteError> {
        let client = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url(&settings.target),
            token: settings.token.clone().filter(|t| !t.is_empty()),
        })
    }

    pub fn note_url(&self, device_uuid: &str) -> String {
        format!("{}/devices/{}/note", self.base_url, device_uuid)
    }
}

impl DeviceNotes for ApiClient {
    async fn set_note(&self, device_uuid: &str, note: &str) -> Result<(), RemoteError> {
        let token = self.token.as_deref().ok_or(RemoteError::NotLoggedIn)?;
        if !is_full_uuid(device_uuid) {
            debug!("'{device_uuid}' is a short uuid, the server resolves it");
        }

        let url = self.note_url(device_uuid);
        debug!("PUT {url}");
        let resp = self
            .client
            .put(url)
            .bearer_auth(token)
            .json(&NoteReq { note })
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!("could not read {status} response body: {e}");
                String::new()
            }
        };
        Err(status_error(status, device_uuid, body))
    }
}

/// "localhost:5047" -> "http://localhost:5047", scheme kept when present.
pub fn base_url(target: &str) -> String {
    let target = target.trim_end_matches('/');
    if target.contains("://") {
        target.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, target)
    }
}

fn status_error(status: StatusCode, device_uuid: &str, body: String) -> RemoteError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RemoteError::Unauthorized(body),
        StatusCode::NOT_FOUND => RemoteError::DeviceNotFound {
            uuid: device_uuid.to_string(),
            body,
        },
        _ => RemoteError::Status {
            code: status.as_u16(),
            body,
        },
    }
}
