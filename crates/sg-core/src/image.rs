//! Per-image load state with placeholder fallback

use serde::{Deserialize, Serialize};

/// Shown in place of any image that failed to load
pub const DEFAULT_PLACEHOLDER: &str = "/assets/images/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageStatus {
    Loading,
    Loaded,
    Errored,
}

/// Load state of one image element.
///
/// `Errored` is terminal for the current source: only [`ImageState::set_src`]
/// with a different source leaves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageState {
    src: String,
    status: ImageStatus,
}

impl ImageState {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            status: ImageStatus::Loading,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn status(&self) -> ImageStatus {
        self.status
    }

    pub fn is_errored(&self) -> bool {
        self.status == ImageStatus::Errored
    }

    pub fn on_load(&mut self) {
        if self.status == ImageStatus::Loading {
            self.status = ImageStatus::Loaded;
        }
    }

    /// Returns true on the transition into `Errored`
    pub fn on_error(&mut self) -> bool {
        let changed = self.status != ImageStatus::Errored;
        self.status = ImageStatus::Errored;
        changed
    }

    /// Point at a new source; the same source keeps its current state
    pub fn set_src(&mut self, src: impl Into<String>) {
        let src = src.into();
        if src != self.src {
            self.src = src;
            self.status = ImageStatus::Loading;
        }
    }

    /// What the `<img>` element should actually display
    pub fn display_src<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.is_errored() {
            placeholder
        } else {
            &self.src
        }
    }
}
