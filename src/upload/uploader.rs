use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use super::history::{HistoryLog, HistorySource, HistoryRow, HistoryViewCache};
use super::outcome::OutcomeSlot;
use super::settings::Settings;
use super::transport::{ReqwestTransport, Transport};
use super::types::{UploadError, UploadOutcome, UploadRequest};

/// Builds the multipart payload for `content` under `settings`.
pub fn build_request(settings: &Settings, content: &str) -> UploadRequest {
    let mut request = UploadRequest::default();
    request.push_bytes("file", content.as_bytes().to_vec());
    if settings.secret {
        request.push_text("secret", "1");
    }
    if let Some(expires) = &settings.expires {
        request.push_text("expires", expires.clone());
    }
    request
}

/// Runs uploads on detached threads and publishes their results.
///
/// Cloning is cheap; clones share the same outcome slot and history log.
#[derive(Clone)]
pub struct Uploader {
    transport: Arc<dyn Transport>,
    outcome: Arc<OutcomeSlot>,
    history: Arc<HistoryLog>,
    in_flight: Arc<AtomicUsize>,
}

impl Default for Uploader {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestTransport::new()))
    }
}

impl Uploader {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            outcome: Arc::new(OutcomeSlot::new()),
            history: Arc::new(HistoryLog::new()),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Starts an upload in the background. Nothing is returned; the result
    /// shows up through [`Uploader::poll_outcome`].
    ///
    /// Overlapping uploads are allowed. Their outcomes overwrite each other and
    /// history entries land in completion order.
    pub fn launch(&self, settings: Settings, content: String) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let uploader = self.clone();
        thread::spawn(move || {
            uploader.run(&settings, &content);
            uploader.in_flight.fetch_sub(1, Ordering::SeqCst);
        });
    }

    /// Performs one upload on the calling thread.
    pub fn run(&self, settings: &Settings, content: &str) {
        match self.attempt(settings, content) {
            Ok(url) => {
                log::info!("uploaded to {}", url);
                // History first: whoever sees the success can find the entry.
                self.history.append(url.clone());
                self.outcome.publish(UploadOutcome::Succeeded(url));
            }
            Err(err) => {
                log::warn!("upload to '{}' failed: {}", settings.instance, err);
                self.outcome.publish(UploadOutcome::Failed(err.to_string()));
            }
        }
    }

    fn attempt(&self, settings: &Settings, content: &str) -> Result<String, UploadError> {
        let instance = settings.instance.as_str();
        if instance.trim().is_empty() {
            return Err(UploadError::Config);
        }

        log::info!("uploading {} bytes to {}", content.len(), instance);
        log::debug!(
            "secret: {}, expires: {}",
            settings.secret,
            settings.expires.as_deref().unwrap_or("no")
        );

        let request = build_request(settings, content);
        let response = self.transport.post(instance, &request)?;
        log::info!("response code: {}", response.status);
        log::debug!("response: {}", response.body);

        if response.is_success() {
            Ok(response.body.trim().to_string())
        } else if response.body.trim().is_empty() {
            Err(UploadError::Http {
                status: response.status,
                body: format!("upload failed with HTTP status {}", response.status),
            })
        } else {
            Err(UploadError::Http {
                status: response.status,
                body: response.body,
            })
        }
    }

    /// Returns a terminal outcome once, then `None` until the next one lands.
    pub fn poll_outcome(&self) -> Option<UploadOutcome> {
        Some(self.outcome.consume()).filter(UploadOutcome::is_terminal)
    }

    pub fn refresh_history<'a>(&self, cache: &'a mut HistoryViewCache) -> &'a [HistoryRow] {
        cache.refresh(&*self.history)
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::types::PartBody;

    #[test]
    fn request_has_file_and_secret_without_expiry() {
        let settings = Settings {
            instance: "https://example.test".to_string(),
            expires: None,
            secret: true,
        };

        let request = build_request(&settings, "hello");

        assert_eq!(
            request.part("file"),
            Some(&PartBody::Bytes(b"hello".to_vec()))
        );
        assert_eq!(
            request.part("secret"),
            Some(&PartBody::Text("1".to_string()))
        );
        assert_eq!(request.part("expires"), None);
        assert_eq!(request.parts.len(), 2);
    }

    #[test]
    fn request_forwards_expiry_verbatim() {
        let settings = Settings {
            instance: "https://example.test".to_string(),
            expires: Some("24".to_string()),
            secret: false,
        };

        let request = build_request(&settings, "");

        assert_eq!(request.part("secret"), None);
        assert_eq!(
            request.part("expires"),
            Some(&PartBody::Text("24".to_string()))
        );
        assert_eq!(request.part("file"), Some(&PartBody::Bytes(Vec::new())));
    }
}
