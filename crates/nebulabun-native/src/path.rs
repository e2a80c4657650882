//! Native library path resolution.
//!
//! The library is built into `app/zig/zig-out/bin/` below the directory
//! the launcher is started from, unless an explicit path is configured.

use std::path::{Path, PathBuf};

/// File stem of the native library (no `lib` prefix on any platform).
pub const LIBRARY_STEM: &str = "nebulabun_webview";

/// Platform shared-library extension.
pub fn library_extension() -> &'static str {
    if cfg!(target_os = "windows") {
        "dll"
    } else if cfg!(target_os = "macos") {
        "dylib"
    } else {
        "so"
    }
}

pub fn library_file_name() -> String {
    format!("{LIBRARY_STEM}.{}", library_extension())
}

/// Location of the bundled build output below `base`.
pub fn bundled_library_path(base: &Path) -> PathBuf {
    base.join("app")
        .join("zig")
        .join("zig-out")
        .join("bin")
        .join(library_file_name())
}

/// The configured path if any, else the bundled path below the working
/// directory.
pub fn resolve_library_path(configured: Option<&Path>) -> PathBuf {
    match configured {
        Some(path) => path.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            bundled_library_path(&cwd)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_matches_platform() {
        let ext = library_extension();
        #[cfg(target_os = "windows")]
        assert_eq!(ext, "dll");
        #[cfg(target_os = "macos")]
        assert_eq!(ext, "dylib");
        #[cfg(all(unix, not(target_os = "macos")))]
        assert_eq!(ext, "so");
        assert!(library_file_name().ends_with(ext));
    }

    #[test]
    fn file_name_has_no_lib_prefix() {
        assert!(library_file_name().starts_with("nebulabun_webview."));
    }

    #[test]
    fn bundled_path_layout() {
        let path = bundled_library_path(Path::new("/work"));
        let expected = Path::new("/work/app/zig/zig-out/bin").join(library_file_name());
        assert_eq!(path, expected);
    }

    #[test]
    fn configured_path_wins() {
        let configured = Path::new("/opt/custom/webview.so");
        assert_eq!(resolve_library_path(Some(configured)), configured);
    }

    #[test]
    fn default_is_below_working_directory() {
        let resolved = resolve_library_path(None);
        let cwd = std::env::current_dir().unwrap();
        assert!(resolved.starts_with(cwd));
        assert!(resolved.ends_with(library_file_name()));
    }
}
