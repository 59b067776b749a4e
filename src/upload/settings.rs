use derivative::Derivative;

/// Where and how pastes are uploaded.
///
/// Owned by the UI thread. Each upload receives its own copy, so edits made
/// while a request is in flight only affect later uploads.
#[derive(Derivative, Clone, PartialEq, Eq)]
#[derivative(Debug, Default)]
pub struct Settings {
    #[derivative(Default(value = "String::from(\"https://0x0.st\")"))]
    pub instance: String,
    /// Lifetime in hours, forwarded verbatim.
    pub expires: Option<String>,
    #[derivative(Default(value = "true"))]
    pub secret: bool,
}

impl Settings {
    /// Applies the text of the expiry field. Blank input or `no` clears it.
    pub fn set_expires_input(&mut self, input: &str) {
        let input = input.trim();
        self.expires = if input.is_empty() || input.eq_ignore_ascii_case("no") {
            None
        } else {
            Some(input.to_string())
        };
    }

    pub fn expires_input(&self) -> String {
        self.expires.clone().unwrap_or_else(|| "no".to_string())
    }
}
