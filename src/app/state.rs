use crate::upload::{HistoryViewCache, Settings, UploadOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Upload,
    History,
    Settings,
}

/// Popup shown for one finished upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Failed(String),
    Succeeded(String),
}

impl Notice {
    pub fn from_outcome(outcome: UploadOutcome) -> Option<Self> {
        match outcome {
            UploadOutcome::Pending => None,
            UploadOutcome::Failed(message) => Some(Notice::Failed(message)),
            UploadOutcome::Succeeded(url) => Some(Notice::Succeeded(url)),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Notice::Failed(_) => "upload failed",
            Notice::Succeeded(_) => "uploaded successfully",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Failed(message) => message,
            Notice::Succeeded(url) => url,
        }
    }
}

/// Everything the UI thread owns.
#[derive(Default)]
pub struct UiState {
    pub tab: Tab,
    pub settings: Settings,
    pub upload_text: String,
    pub expires_text: String,
    pub notice: Option<Notice>,
    pub history_view: HistoryViewCache,
}

impl UiState {
    pub fn new() -> Self {
        let settings = Settings::default();
        Self {
            expires_text: settings.expires_input(),
            settings,
            ..Self::default()
        }
    }

    pub fn apply_expires_text(&mut self) {
        self.settings.set_expires_input(&self.expires_text);
    }
}
