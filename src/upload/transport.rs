use reqwest::blocking::{multipart, Client};

use super::types::{PartBody, TransportResponse, UploadError, UploadRequest};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const PASTE_FILE_NAME: &str = "paste.txt";

/// Sends a multipart POST and hands back status and body, whatever the status.
pub trait Transport: Send + Sync {
    fn post(&self, url: &str, request: &UploadRequest) -> Result<TransportResponse, UploadError>;
}

/// Blocking reqwest client. A client is built per upload since each upload
/// runs on its own short-lived thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport;

impl ReqwestTransport {
    pub fn new() -> Self {
        Self
    }

    fn client() -> Result<Client, UploadError> {
        Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| UploadError::Transport(e.to_string()))
    }

    fn form(request: &UploadRequest) -> multipart::Form {
        request
            .parts
            .iter()
            .fold(multipart::Form::new(), |form, part| match &part.body {
                PartBody::Bytes(bytes) => form.part(
                    part.name,
                    multipart::Part::bytes(bytes.clone()).file_name(PASTE_FILE_NAME),
                ),
                PartBody::Text(text) => form.text(part.name, text.clone()),
            })
    }
}

impl Transport for ReqwestTransport {
    fn post(&self, url: &str, request: &UploadRequest) -> Result<TransportResponse, UploadError> {
        let response = Self::client()?
            .post(url)
            .multipart(Self::form(request))
            .send()
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| UploadError::Transport(format!("Failed to read response: {}", e)))?;

        Ok(TransportResponse { status, body })
    }
}
