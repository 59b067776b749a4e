use std::mem;
use std::sync::{Mutex, PoisonError};

use super::types::UploadOutcome;

/// Hand-off slot between upload threads and the UI thread.
#[derive(Debug, Default)]
pub struct OutcomeSlot {
    state: Mutex<UploadOutcome>,
}

impl OutcomeSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites whatever is stored. Last write wins.
    pub fn publish(&self, outcome: UploadOutcome) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        *state = outcome;
    }

    /// Returns the stored outcome, resetting it to `Pending` if it was terminal.
    pub fn consume(&self) -> UploadOutcome {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.is_terminal() {
            mem::take(&mut *state)
        } else {
            UploadOutcome::Pending
        }
    }
}
