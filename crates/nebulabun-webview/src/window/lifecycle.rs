use std::path::PathBuf;

use nebulabun_common::{NativeError, WindowError};
use nebulabun_config::OPAQUE;
use nebulabun_native::{marshal, NativeSurface, WindowHandle};
use tracing::{debug, error, info, warn};

use crate::bridge;
use crate::events::WindowEvent;

use super::types::{ContentSource, WindowState};
use super::NebulabunWindow;

impl<S: NativeSurface> NebulabunWindow<S> {
    /// Open the window with inline HTML and block until it closes.
    pub fn start_with_html(&mut self, html: impl Into<String>) -> Result<i32, WindowError> {
        self.start(ContentSource::Html(html.into()))
    }

    /// Open the window on a URL and block until it closes.
    pub fn start_with_url(&mut self, url: impl Into<String>) -> Result<i32, WindowError> {
        self.start(ContentSource::Url(url.into()))
    }

    /// Open the window on a local HTML file and block until it closes.
    pub fn start_with_file(&mut self, path: impl Into<PathBuf>) -> Result<i32, WindowError> {
        self.start(ContentSource::File(path.into()))
    }

    /// `open` followed by `run`. Returns the message loop's exit code.
    pub fn start(&mut self, content: ContentSource) -> Result<i32, WindowError> {
        self.open(content)?;
        self.run()
    }

    /// Create the window, apply settings and load `content`, without
    /// entering the message loop.
    ///
    /// On creation failure no further native call is made. On load failure
    /// the window is closed again and the facade ends up `Closed`.
    /// Selectors recorded before this call are applied once the content
    /// has loaded.
    pub fn open(&mut self, content: ContentSource) -> Result<WindowHandle, WindowError> {
        if self.state != WindowState::Unstarted {
            return Err(WindowError::AlreadyStarted);
        }

        let transparent = self.config.effective_transparent();
        info!(
            title = %self.config.title,
            width = self.config.width,
            height = self.config.height,
            transparent,
            "creating window"
        );

        let handle = match self.surface.create_window(
            &self.config.title,
            self.config.width,
            self.config.height,
            transparent,
        ) {
            Ok(handle) => handle,
            Err(e) => {
                error!(error = %e, "window creation failed");
                self.state = WindowState::Closed;
                return Err(WindowError::CreationFailed(e));
            }
        };

        self.state = WindowState::Running(handle);
        self.apply_initial_settings();
        self.events.emit(WindowEvent::Created(handle));

        if self.config.bridge {
            self.inject_bridge();
        }

        if let Err(error) = self.load_content(&content) {
            error!(kind = content.kind(), error = %error, "content load failed, closing window");
            if let Err(e) = self.surface.close_window() {
                warn!(error = %e, "close after failed load also failed");
            }
            self.mark_closed();
            return Err(WindowError::ContentLoadFailed {
                kind: content.kind(),
                error,
            });
        }

        self.apply_registered_selectors();

        info!(%handle, kind = content.kind(), "window ready");
        Ok(handle)
    }

    /// Block in the native message loop until the window closes.
    pub fn run(&mut self) -> Result<i32, WindowError> {
        self.require_running()?;
        debug!("entering message loop");
        let code = self.surface.run_message_loop();
        info!(exit_code = code, "message loop exited");
        self.mark_closed();
        Ok(code)
    }

    /// Ask the native side to close the window.
    pub fn close(&mut self) -> Result<(), WindowError> {
        self.require_running()?;
        self.surface.close_window()?;
        self.mark_closed();
        Ok(())
    }

    fn apply_initial_settings(&mut self) {
        let alpha = marshal::clamp_alpha(self.config.transparency);
        if i32::from(alpha) != OPAQUE {
            if let Err(e) = self.surface.set_window_transparency(alpha) {
                warn!(alpha, error = %e, "failed to apply transparency");
            }
        }
        if self.config.click_through {
            if let Err(e) = self.surface.set_click_through(true) {
                warn!(error = %e, "failed to enable click-through");
            }
        }
    }

    fn inject_bridge(&self) {
        match self.surface.execute_javascript(bridge::BRIDGE_SCRIPT) {
            Ok(()) => debug!("bridge script injected"),
            Err(e) => warn!(error = %e, "failed to inject bridge script"),
        }
    }

    /// Mark elements for selectors registered before the window existed.
    ///
    /// Runs against the loaded document; loading replaces the page.
    fn apply_registered_selectors(&self) {
        let scripts = self
            .draggable
            .iter()
            .map(|s| bridge::mark_draggable_script(s))
            .chain(self.clickable.iter().map(|s| bridge::mark_clickable_script(s)));
        for script in scripts {
            if let Err(e) = self.surface.execute_javascript(&script) {
                warn!(error = %e, "failed to apply element selector");
            }
        }
    }

    fn load_content(&self, content: &ContentSource) -> Result<(), NativeError> {
        match content {
            ContentSource::Html(html) => {
                debug!(len = html.len(), "loading HTML content");
                self.surface.set_html_content(html)
            }
            ContentSource::Url(url) => {
                debug!(%url, "navigating");
                self.surface.navigate_to_url(url)
            }
            ContentSource::File(path) => {
                debug!(path = %path.display(), "loading HTML file");
                self.surface.load_html_file(path)
            }
        }
    }

    pub(super) fn mark_closed(&mut self) {
        if self.state != WindowState::Closed {
            self.state = WindowState::Closed;
            self.events.emit(WindowEvent::Closed);
        }
    }
}
