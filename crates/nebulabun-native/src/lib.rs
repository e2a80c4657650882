//! Binding to the native WebView library.
//!
//! The library is an external C-ABI shared object that owns all window
//! creation, rendering and event handling. This crate provides:
//! - `NativeSurface`, one method per native entry point
//! - `NativeLibrary`, the `libloading` adapter implementing it
//! - argument marshaling and result decoding (`marshal`)
//! - default library path resolution (`path`)

pub mod handle;
pub mod library;
pub mod marshal;
pub mod path;
pub mod surface;

pub use handle::WindowHandle;
pub use library::NativeLibrary;
pub use path::{bundled_library_path, library_file_name, resolve_library_path};
pub use surface::NativeSurface;
