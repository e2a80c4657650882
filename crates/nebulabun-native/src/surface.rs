use std::path::Path;

use nebulabun_common::NativeError;

use crate::handle::WindowHandle;

/// The capabilities the native WebView library provides.
///
/// Every call is synchronous and blocks the calling thread until the native
/// side returns. Text arguments are marshaled by the implementation; an
/// argument that cannot be marshaled fails without reaching the library.
pub trait NativeSurface {
    /// Create the window. `Err` when the native side returns a zero handle.
    fn create_window(
        &self,
        title: &str,
        width: u32,
        height: u32,
        transparent: bool,
    ) -> Result<WindowHandle, NativeError>;

    /// Render an inline HTML document.
    fn set_html_content(&self, html: &str) -> Result<(), NativeError>;

    fn navigate_to_url(&self, url: &str) -> Result<(), NativeError>;

    /// Have the native side read and render a local HTML file.
    fn load_html_file(&self, path: &Path) -> Result<(), NativeError>;

    /// Run a script in the page. No script value comes back.
    fn execute_javascript(&self, script: &str) -> Result<(), NativeError>;

    fn set_window_transparency(&self, alpha: u8) -> Result<(), NativeError>;

    fn set_click_through(&self, enabled: bool) -> Result<(), NativeError>;

    /// Request native teardown of the window.
    fn close_window(&self) -> Result<(), NativeError>;

    /// Pump native UI events until the window closes, then return the
    /// native exit code.
    fn run_message_loop(&self) -> i32;
}

impl<S: NativeSurface + ?Sized> NativeSurface for &S {
    fn create_window(
        &self,
        title: &str,
        width: u32,
        height: u32,
        transparent: bool,
    ) -> Result<WindowHandle, NativeError> {
        (**self).create_window(title, width, height, transparent)
    }

    fn set_html_content(&self, html: &str) -> Result<(), NativeError> {
        (**self).set_html_content(html)
    }

    fn navigate_to_url(&self, url: &str) -> Result<(), NativeError> {
        (**self).navigate_to_url(url)
    }

    fn load_html_file(&self, path: &Path) -> Result<(), NativeError> {
        (**self).load_html_file(path)
    }

    fn execute_javascript(&self, script: &str) -> Result<(), NativeError> {
        (**self).execute_javascript(script)
    }

    fn set_window_transparency(&self, alpha: u8) -> Result<(), NativeError> {
        (**self).set_window_transparency(alpha)
    }

    fn set_click_through(&self, enabled: bool) -> Result<(), NativeError> {
        (**self).set_click_through(enabled)
    }

    fn close_window(&self) -> Result<(), NativeError> {
        (**self).close_window()
    }

    fn run_message_loop(&self) -> i32 {
        (**self).run_message_loop()
    }
}
