use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures at the boundary with the native WebView library.
#[derive(Debug, thiserror::Error)]
pub enum NativeError {
    #[error("native library not found: {0}")]
    LibraryNotFound(PathBuf),

    #[error("failed to load native library {path}: {reason}")]
    LoadFailed { path: PathBuf, reason: String },

    #[error("native library is missing symbol `{symbol}`: {reason}")]
    MissingSymbol { symbol: &'static str, reason: String },

    #[error("{arg} contains an interior NUL byte")]
    InteriorNul { arg: &'static str },

    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("native call `{0}` reported failure")]
    CallFailed(&'static str),

    #[error("failed to unload native library: {0}")]
    UnloadFailed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("failed to create window: {0}")]
    CreationFailed(NativeError),

    #[error("failed to load {kind}: {error}")]
    ContentLoadFailed {
        kind: &'static str,
        error: NativeError,
    },

    #[error("window has already been started")]
    AlreadyStarted,

    #[error("window is not running")]
    NotRunning,

    #[error(transparent)]
    Native(#[from] NativeError),
}

#[derive(Debug, thiserror::Error)]
pub enum NebulabunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Native(#[from] NativeError),

    #[error(transparent)]
    Window(#[from] WindowError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("window.width = 0".into());
        assert_eq!(err.to_string(), "config validation error: window.width = 0");
    }

    #[test]
    fn native_error_display() {
        let err = NativeError::CallFailed("navigate_to_url");
        assert_eq!(err.to_string(), "native call `navigate_to_url` reported failure");

        let err = NativeError::InteriorNul { arg: "title" };
        assert_eq!(err.to_string(), "title contains an interior NUL byte");

        let err = NativeError::MissingSymbol {
            symbol: "run_message_loop",
            reason: "undefined symbol".into(),
        };
        assert_eq!(
            err.to_string(),
            "native library is missing symbol `run_message_loop`: undefined symbol"
        );
    }

    #[test]
    fn window_error_display() {
        let err = WindowError::CreationFailed(NativeError::CallFailed("create_webview_window"));
        assert_eq!(
            err.to_string(),
            "failed to create window: native call `create_webview_window` reported failure"
        );

        let err = WindowError::ContentLoadFailed {
            kind: "URL",
            error: NativeError::CallFailed("navigate_to_url"),
        };
        assert!(err.to_string().starts_with("failed to load URL"));

        assert_eq!(WindowError::NotRunning.to_string(), "window is not running");
    }

    #[test]
    fn nebulabun_error_from_window() {
        let err: NebulabunError = WindowError::AlreadyStarted.into();
        assert!(matches!(err, NebulabunError::Window(_)));
        assert_eq!(err.to_string(), "window has already been started");
    }

    #[test]
    fn nebulabun_error_from_native() {
        let err: NebulabunError = NativeError::LibraryNotFound(PathBuf::from("/opt/x.so")).into();
        assert!(matches!(err, NebulabunError::Native(_)));
        assert!(err.to_string().contains("/opt/x.so"));
    }

    #[test]
    fn nebulabun_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: NebulabunError = io_err.into();
        assert!(matches!(err, NebulabunError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn file_not_found_display() {
        let err = NebulabunError::FileNotFound(PathBuf::from("/tmp/app.html"));
        assert_eq!(err.to_string(), "file not found: /tmp/app.html");
    }
}
