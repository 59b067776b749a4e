mod state;
mod ui;

use std::time::Duration;

use crate::upload::Uploader;
use eframe::{egui, App};
pub use state::{Notice, Tab, UiState};

/// How often to repaint while uploads run, so their outcome shows up promptly.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct NullPaste {
    state: UiState,
    uploader: Uploader,
}

impl NullPaste {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        log::info!("Initializing nullpaste");
        Self::with_uploader(Uploader::default())
    }

    pub fn with_uploader(uploader: Uploader) -> Self {
        Self {
            state: UiState::new(),
            uploader,
        }
    }

    pub fn start_upload(&mut self) {
        self.state.apply_expires_text();
        log::debug!("launching upload to {}", self.state.settings.instance);
        self.uploader
            .launch(self.state.settings.clone(), self.state.upload_text.clone());
    }

    /// Picks up a finished upload, if any. Called once per frame.
    pub fn update_state(&mut self, ctx: &egui::Context) {
        // Read before polling: a run publishes before it stops counting as
        // in flight, so a zero here means its outcome is already visible.
        let busy = self.uploader.in_flight() > 0;

        if let Some(notice) = self.uploader.poll_outcome().and_then(Notice::from_outcome) {
            log::debug!("showing notice: {}", notice.title());
            self.state.notice = Some(notice);
            ctx.request_repaint();
        }

        if busy {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut UiState {
        &mut self.state
    }

    pub fn dismiss_notice(&mut self) {
        self.state.notice = None;
    }
}

impl App for NullPaste {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
