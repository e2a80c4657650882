//! Native library location settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where to find the native WebView library.
///
/// When `library` is unset the launcher falls back to the bundled build
/// output below the working directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeConfig {
    pub library: Option<PathBuf>,
}
