//! `libloading` adapter for the native WebView library.

use std::ffi::CString;
use std::marker::PhantomData;
use std::os::raw::{c_char, c_int};
use std::path::{Path, PathBuf};

use libloading::Library;
use nebulabun_common::NativeError;
use tracing::{debug, info};

use crate::handle::WindowHandle;
use crate::marshal;
use crate::surface::NativeSurface;

type CreateWindowFn = unsafe extern "C" fn(*const c_char, c_int, c_int, c_int) -> c_int;
type TextFn = unsafe extern "C" fn(*const c_char) -> c_int;
type IntFn = unsafe extern "C" fn(c_int) -> c_int;
type NullaryFn = unsafe extern "C" fn() -> c_int;

/// Entry points resolved once at load time.
struct Symbols {
    create_webview_window: CreateWindowFn,
    set_html_content: TextFn,
    navigate_to_url: TextFn,
    execute_javascript: TextFn,
    set_window_transparency: IntFn,
    set_click_through: IntFn,
    close_window: NullaryFn,
    run_message_loop: NullaryFn,
    load_html_file: TextFn,
}

impl Symbols {
    /// # Safety
    ///
    /// The library must export each symbol with the C signature declared by
    /// the corresponding field type.
    unsafe fn resolve(library: &Library) -> Result<Self, NativeError> {
        Ok(Self {
            create_webview_window: symbol(library, "create_webview_window")?,
            set_html_content: symbol(library, "set_html_content")?,
            navigate_to_url: symbol(library, "navigate_to_url")?,
            execute_javascript: symbol(library, "execute_javascript")?,
            set_window_transparency: symbol(library, "set_window_transparency")?,
            set_click_through: symbol(library, "set_click_through")?,
            close_window: symbol(library, "close_window")?,
            run_message_loop: symbol(library, "run_message_loop")?,
            load_html_file: symbol(library, "load_html_file")?,
        })
    }
}

unsafe fn symbol<T: Copy>(library: &Library, name: &'static str) -> Result<T, NativeError> {
    library
        .get::<T>(name.as_bytes())
        .map(|sym| *sym)
        .map_err(|e| NativeError::MissingSymbol {
            symbol: name,
            reason: e.to_string(),
        })
}

/// A loaded native WebView library.
///
/// Resolved function pointers stay valid for as long as `library` is held,
/// which is the lifetime of this value. The native side keeps its window in
/// thread-affine state, so the adapter is neither `Send` nor `Sync`: every
/// call, including the message loop, happens on the loading thread.
pub struct NativeLibrary {
    symbols: Symbols,
    library: Library,
    path: PathBuf,
    _thread_bound: PhantomData<*const ()>,
}

impl NativeLibrary {
    /// Load the library at `path` and resolve every entry point.
    pub fn load(path: &Path) -> Result<Self, NativeError> {
        if !path.exists() {
            return Err(NativeError::LibraryNotFound(path.to_path_buf()));
        }

        // SAFETY: loading runs the library's initializers. The library is
        // the launcher's own native companion, built for this purpose.
        let library = unsafe { Library::new(path) }.map_err(|e| NativeError::LoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        // SAFETY: the field types of `Symbols` mirror the exported C ABI.
        let symbols = unsafe { Symbols::resolve(&library)? };

        info!(path = %path.display(), "native library loaded");
        Ok(Self {
            symbols,
            library,
            path: path.to_path_buf(),
            _thread_bound: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unload the library. Any window it owns must already be closed.
    pub fn unload(self) -> Result<(), NativeError> {
        let Self { library, path, .. } = self;
        library
            .close()
            .map_err(|e| NativeError::UnloadFailed(e.to_string()))?;
        debug!(path = %path.display(), "native library unloaded");
        Ok(())
    }

    fn call_text(
        &self,
        name: &'static str,
        function: TextFn,
        arg: CString,
    ) -> Result<(), NativeError> {
        debug!(function = name, len = arg.as_bytes().len(), "native call");
        // SAFETY: `arg` is NUL-terminated and outlives the call.
        let code = unsafe { function(arg.as_ptr()) };
        marshal::decode_status(name, code)
    }
}

impl NativeSurface for NativeLibrary {
    fn create_window(
        &self,
        title: &str,
        width: u32,
        height: u32,
        transparent: bool,
    ) -> Result<WindowHandle, NativeError> {
        let title = marshal::to_c_string("title", title)?;
        debug!(width, height, transparent, "native call: create_webview_window");
        // SAFETY: `title` is NUL-terminated and outlives the call.
        let raw = unsafe {
            (self.symbols.create_webview_window)(
                title.as_ptr(),
                marshal::dimension(width),
                marshal::dimension(height),
                marshal::flag(transparent),
            )
        };
        WindowHandle::from_raw(raw).ok_or(NativeError::CallFailed("create_webview_window"))
    }

    fn set_html_content(&self, html: &str) -> Result<(), NativeError> {
        let html = marshal::to_c_string("html", html)?;
        self.call_text("set_html_content", self.symbols.set_html_content, html)
    }

    fn navigate_to_url(&self, url: &str) -> Result<(), NativeError> {
        let url = marshal::to_c_string("url", url)?;
        self.call_text("navigate_to_url", self.symbols.navigate_to_url, url)
    }

    fn load_html_file(&self, path: &Path) -> Result<(), NativeError> {
        let path = marshal::path_to_c_string("path", path)?;
        self.call_text("load_html_file", self.symbols.load_html_file, path)
    }

    fn execute_javascript(&self, script: &str) -> Result<(), NativeError> {
        let script = marshal::to_c_string("script", script)?;
        self.call_text("execute_javascript", self.symbols.execute_javascript, script)
    }

    fn set_window_transparency(&self, alpha: u8) -> Result<(), NativeError> {
        debug!(alpha, "native call: set_window_transparency");
        // SAFETY: plain integer argument.
        let code = unsafe { (self.symbols.set_window_transparency)(c_int::from(alpha)) };
        marshal::decode_status("set_window_transparency", code)
    }

    fn set_click_through(&self, enabled: bool) -> Result<(), NativeError> {
        debug!(enabled, "native call: set_click_through");
        // SAFETY: plain integer argument.
        let code = unsafe { (self.symbols.set_click_through)(marshal::flag(enabled)) };
        marshal::decode_status("set_click_through", code)
    }

    fn close_window(&self) -> Result<(), NativeError> {
        debug!("native call: close_window");
        // SAFETY: no arguments.
        let code = unsafe { (self.symbols.close_window)() };
        marshal::decode_status("close_window", code)
    }

    fn run_message_loop(&self) -> i32 {
        debug!("native call: run_message_loop");
        // SAFETY: no arguments; blocks until the native window closes.
        unsafe { (self.symbols.run_message_loop)() }
    }
}
