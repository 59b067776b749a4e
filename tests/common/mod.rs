#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use nullpaste::upload::{Settings, Transport, TransportResponse, UploadError, UploadRequest, Uploader};

type Responder =
    dyn Fn(usize, &UploadRequest) -> Result<TransportResponse, UploadError> + Send + Sync;

/// Transport whose responses come from a closure, recording every call.
pub struct ScriptedTransport {
    respond: Box<Responder>,
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, UploadRequest)>>,
}

impl ScriptedTransport {
    pub fn new<F>(respond: F) -> Arc<Self>
    where
        F: Fn(usize, &UploadRequest) -> Result<TransportResponse, UploadError>
            + Send
            + Sync
            + 'static,
    {
        Arc::new(Self {
            respond: Box::new(respond),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn always(status: u16, body: &str) -> Arc<Self> {
        let body = body.to_string();
        Self::new(move |_, _| Ok(TransportResponse::new(status, body.clone())))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<(String, UploadRequest)> {
        self.seen.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn post(&self, url: &str, request: &UploadRequest) -> Result<TransportResponse, UploadError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((url.to_string(), request.clone()));
        (self.respond)(call, request)
    }
}

pub fn settings(instance: &str) -> Settings {
    Settings {
        instance: instance.to_string(),
        expires: None,
        secret: true,
    }
}

/// Blocks until every launched upload has finished.
pub fn wait_idle(uploader: &Uploader) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while uploader.in_flight() > 0 {
        assert!(Instant::now() < deadline, "uploads did not finish in time");
        thread::sleep(Duration::from_millis(5));
    }
}
