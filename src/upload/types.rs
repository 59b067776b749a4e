use thiserror::Error;

/// Result of the most recent upload, as seen by the UI thread.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadOutcome {
    #[default]
    Pending,
    Failed(String),
    Succeeded(String),
}

impl UploadOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, UploadOutcome::Pending)
    }
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("{0}")]
    Transport(String),

    #[error("{body}")]
    Http { status: u16, body: String },

    #[error("no instance url configured")]
    Config,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartBody {
    Bytes(Vec<u8>),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPart {
    pub name: &'static str,
    pub body: PartBody,
}

/// Multipart payload for one upload, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadRequest {
    pub parts: Vec<RequestPart>,
}

impl UploadRequest {
    pub fn push_bytes(&mut self, name: &'static str, bytes: Vec<u8>) {
        self.parts.push(RequestPart {
            name,
            body: PartBody::Bytes(bytes),
        });
    }

    pub fn push_text(&mut self, name: &'static str, text: impl Into<String>) {
        self.parts.push(RequestPart {
            name,
            body: PartBody::Text(text.into()),
        });
    }

    pub fn part(&self, name: &str) -> Option<&PartBody> {
        self.parts
            .iter()
            .find(|part| part.name == name)
            .map(|part| &part.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
