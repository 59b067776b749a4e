//! Upload history shared between upload threads and the UI.
//!
//! [`HistoryLog`] is the append-only record written by uploads.
//! [`HistoryViewCache`] keeps the rows the UI draws and only touches the log
//! again once it has grown.

use std::sync::{Mutex, PoisonError};

/// Prefix of the per-row copy action id.
pub const COPY_ACTION_PREFIX: &str = "copy##";

/// Read access needed to project a history log.
pub trait HistorySource {
    fn len(&self) -> usize;

    /// Entries from `offset` to the end, in insertion order.
    fn snapshot_from(&self, offset: usize) -> Vec<String>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result URLs of successful uploads, in completion order.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Mutex<Vec<String>>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, url: String) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url);
    }
}

impl HistorySource for HistoryLog {
    fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn snapshot_from(&self, offset: usize) -> Vec<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(offset..).map(<[String]>::to_vec).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub url: String,
    pub copy_action_id: String,
}

impl HistoryRow {
    pub fn new(url: String) -> Self {
        let copy_action_id = format!("{COPY_ACTION_PREFIX}{url}");
        Self {
            url,
            copy_action_id,
        }
    }
}

/// Text a copy action copies to the clipboard.
pub fn copy_payload(action_id: &str) -> Option<&str> {
    action_id.strip_prefix(COPY_ACTION_PREFIX)
}

/// Display rows for a [`HistorySource`], rebuilt only when it grows.
///
/// Identical URLs produce identical action ids. Both rows copy the same text,
/// so they are kept as separate rows rather than merged.
#[derive(Debug, Default)]
pub struct HistoryViewCache {
    last_seen_len: usize,
    rows: Vec<HistoryRow>,
}

impl HistoryViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh<S: HistorySource + ?Sized>(&mut self, source: &S) -> &[HistoryRow] {
        if source.len() <= self.last_seen_len {
            return &self.rows;
        }

        // The log never shrinks or reorders, so only the tail needs projecting.
        let fresh = source.snapshot_from(self.last_seen_len);
        self.last_seen_len += fresh.len();
        self.rows.extend(fresh.into_iter().map(HistoryRow::new));
        log::debug!("history view rebuilt with {} rows", self.rows.len());
        &self.rows
    }

    pub fn rows(&self) -> &[HistoryRow] {
        &self.rows
    }
}
