//! Nebulabun configuration.
//!
//! Window defaults and the native library location can be supplied in a
//! TOML file. Every section uses serde defaults, so partial files (or no
//! file at all) work out of the box. Command-line flags are layered on top
//! by the binary.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{NativeConfig, NebulabunConfig, WindowConfig, OPAQUE};

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json<T: serde::Serialize>(config: &T) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
