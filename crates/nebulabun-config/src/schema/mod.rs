//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod native;
mod window;

pub use native::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Top-level config file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NebulabunConfig {
    pub window: WindowConfig,
    pub native: NativeConfig,
}
