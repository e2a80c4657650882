//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Transparency level of a fully opaque window.
pub const OPAQUE: i32 = 255;

/// Window appearance and behavior settings.
///
/// `transparency` is kept exactly as supplied; it is clamped into
/// `0..=255` only when handed to the native layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Create the window with a transparent background.
    pub transparent: bool,
    /// Let pointer input pass through to whatever is behind the window.
    pub click_through: bool,
    /// Window alpha, 255 = fully opaque.
    pub transparency: i32,
    /// Inject the `window.Nebulabun` bridge script after creation.
    pub bridge: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Nebulabun App".into(),
            width: 800,
            height: 600,
            transparent: false,
            click_through: false,
            transparency: OPAQUE,
            bridge: true,
        }
    }
}

impl WindowConfig {
    /// Whether the window must be created with transparency enabled.
    ///
    /// Click-through and partial alpha both need a layered window, so any
    /// of the three settings turns it on.
    pub fn effective_transparent(&self) -> bool {
        self.transparent || self.click_through || self.transparency < OPAQUE
    }

    /// Put the default back for a zero width or height.
    ///
    /// Returns `true` when anything was replaced.
    pub fn replace_zero_dimensions(&mut self) -> bool {
        let defaults = Self::default();
        let mut replaced = false;
        if self.width == 0 {
            self.width = defaults.width;
            replaced = true;
        }
        if self.height == 0 {
            self.height = defaults.height;
            replaced = true;
        }
        replaced
    }
}

// =============================================================================
// Tests
// =============================================================================
