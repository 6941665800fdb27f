//! Temporary "Loading..." state for action buttons.
use crate::constants::LOADING_LABEL;
use serde::{Deserialize, Serialize};

/// Button label plus a disabled flag. `begin` swaps in the loading label and
/// `finish` puts the original back; the caller owns the re-enable timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingButton {
    label: String,
    original: Option<String>,
}

impl LoadingButton {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            original: None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.original.is_some()
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.is_loading()
    }

    /// Repeated calls keep the first remembered label.
    pub fn begin(&mut self) {
        if self.original.is_none() {
            let original = std::mem::replace(&mut self.label, LOADING_LABEL.to_string());
            self.original = Some(original);
        }
    }

    pub fn finish(&mut self) {
        if let Some(original) = self.original.take() {
            self.label = original;
        }
    }
}
