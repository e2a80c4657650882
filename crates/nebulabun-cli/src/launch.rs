//! Launch sequence: settings → content → native library → window.

use std::path::{Path, PathBuf};

use nebulabun_common::{NebulabunError, Result};
use nebulabun_config::{config_to_json, WindowConfig};
use nebulabun_native::{resolve_library_path, NativeLibrary};
use nebulabun_webview::{ContentSource, NebulabunWindow};
use tracing::{debug, info, warn};

use crate::cli::Args;
use crate::default_page::DEFAULT_HTML;

/// Which content the window opens with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchMode {
    File(PathBuf),
    Url(String),
    DefaultPage,
}

impl LaunchMode {
    pub fn into_content(self) -> ContentSource {
        match self {
            Self::File(path) => ContentSource::File(path),
            Self::Url(url) => ContentSource::Url(url),
            Self::DefaultPage => ContentSource::Html(DEFAULT_HTML.to_string()),
        }
    }
}

/// Pick the content source: file, then URL, then the default page.
///
/// A file must exist; it is resolved against `cwd` when relative.
pub fn resolve_mode(args: &Args, cwd: &Path) -> Result<LaunchMode> {
    if let Some(file) = &args.file {
        let path = if file.is_absolute() {
            file.clone()
        } else {
            cwd.join(file)
        };
        if !path.exists() {
            return Err(NebulabunError::FileNotFound(path));
        }
        if args.url.is_some() {
            debug!("--file given, ignoring --url");
        }
        return Ok(LaunchMode::File(path));
    }
    if let Some(url) = &args.url {
        return Ok(LaunchMode::Url(url.clone()));
    }
    Ok(LaunchMode::DefaultPage)
}

/// URLs served from this machine only work if a server is already up.
pub fn is_local_url(url: &str) -> bool {
    url.starts_with("http://localhost") || url.starts_with("http://127.0.0.1")
}

/// Config file values with the command-line flags layered on top.
pub fn effective_window_config(args: &Args, base: WindowConfig) -> WindowConfig {
    let mut config = base;
    args.apply_to(&mut config);
    config
}

fn log_settings(config: &WindowConfig) {
    info!("Starting Nebulabun...");
    info!("Title: {}", config.title);
    info!("Size: {}x{}", config.width, config.height);
    if config.transparent || config.transparency < nebulabun_config::OPAQUE {
        info!("Transparent window: on (transparency: {})", config.transparency);
    }
    if config.click_through {
        info!("Click-through: on");
    }
}

fn log_mode(mode: &LaunchMode) {
    match mode {
        LaunchMode::File(path) => info!("Opening HTML file: {}", path.display()),
        LaunchMode::Url(url) => {
            info!("Opening URL: {url}");
            if is_local_url(url) {
                warn!(
                    "{url} is a local URL; the server on that port must already be running or the page will fail with connection refused"
                );
            }
        }
        LaunchMode::DefaultPage => info!("Showing default content"),
    }
}

/// Run the launcher and return the process exit code.
pub fn run(args: Args) -> Result<i32> {
    if args.debug {
        debug!(?args, "parsed arguments");
    }

    let file_config = nebulabun_config::toml_loader::load(args.config.as_deref())?;
    let window_config = effective_window_config(&args, file_config.window);

    let cwd = std::env::current_dir()?;
    let mode = resolve_mode(&args, &cwd)?;

    log_settings(&window_config);

    let library_path =
        resolve_library_path(args.library.as_deref().or(file_config.native.library.as_deref()));
    if args.debug {
        info!("Native library: {}", library_path.display());
        info!("Settings: {}", config_to_json(&window_config));
    }

    log_mode(&mode);

    let library = NativeLibrary::load(&library_path)?;
    if args.debug {
        info!("Loaded native library from {}", library.path().display());
    }
    let mut window = NebulabunWindow::new(library, window_config);
    let exit_code = window.start(mode.into_content())?;

    info!("Application exited");
    if let Err(e) = window.into_surface().unload() {
        warn!("{e}");
    }
    Ok(exit_code)
}
