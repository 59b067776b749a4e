mod history;
mod outcome;
mod settings;
mod transport;
mod types;
mod uploader;

pub use history::{
    copy_payload, HistoryLog, HistoryRow, HistorySource, HistoryViewCache, COPY_ACTION_PREFIX,
};
pub use outcome::OutcomeSlot;
pub use settings::Settings;
pub use transport::{ReqwestTransport, Transport};
pub use types::{PartBody, RequestPart, TransportResponse, UploadError, UploadOutcome, UploadRequest};
pub use uploader::{build_request, Uploader};
