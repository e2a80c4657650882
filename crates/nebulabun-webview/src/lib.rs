//! Window facade over the native WebView library.
//!
//! Provides:
//! - `NebulabunWindow`, a single-use window driven through its lifecycle
//!   (create → apply settings → load content → blocking message loop)
//! - lifecycle hooks for window creation and close
//! - the injected `window.Nebulabun` bridge script and selector helpers

pub mod bridge;
pub mod events;
pub mod window;

pub use events::{WindowEvent, WindowEvents};
pub use nebulabun_config::WindowConfig;
pub use window::{ContentSource, NebulabunWindow, WindowState};
