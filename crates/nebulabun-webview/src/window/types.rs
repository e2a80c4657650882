use std::path::PathBuf;

use nebulabun_native::WindowHandle;

/// What the window displays. Exactly one source is loaded per window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// An inline HTML document.
    Html(String),
    Url(String),
    /// A local HTML file, read by the native side.
    File(PathBuf),
}

impl ContentSource {
    /// Human-readable label used in logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Html(_) => "HTML content",
            Self::Url(_) => "URL",
            Self::File(_) => "HTML file",
        }
    }
}

/// Lifecycle of a single-use window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    /// No native window yet.
    Unstarted,
    /// Window created; the message loop may or may not have been entered.
    Running(WindowHandle),
    /// Close requested, creation failed, or the message loop returned.
    Closed,
}
