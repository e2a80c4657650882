use std::fmt;
use std::num::NonZeroI32;

/// Opaque identifier of a live native window.
///
/// The native creation call returns `0` on failure, so a handle is always
/// non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(NonZeroI32);

impl WindowHandle {
    /// Wrap a raw native result. Returns `None` for the failure value `0`.
    pub fn from_raw(raw: i32) -> Option<Self> {
        NonZeroI32::new(raw).map(Self)
    }

    pub fn get(self) -> i32 {
        self.0.get()
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0.get())
    }
}
