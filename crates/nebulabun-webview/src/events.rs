//! Window lifecycle events and the hooks registered for them.
//!
//! Only events the launcher itself can observe are modeled: the native
//! library exposes no callback for navigation or title changes.

use nebulabun_native::WindowHandle;
use tracing::debug;

/// Lifecycle events driven by the window facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The native window exists and initial settings have been applied.
    Created(WindowHandle),
    /// The window was closed, explicitly or by the message loop returning.
    Closed,
}

type CreatedHook = Box<dyn FnMut(WindowHandle)>;
type ClosedHook = Box<dyn FnMut()>;

/// Optional callbacks, each invoked synchronously once per occurrence.
#[derive(Default)]
pub struct WindowEvents {
    on_created: Option<CreatedHook>,
    on_closed: Option<ClosedHook>,
}

impl WindowEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the window-created hook, replacing any previous one.
    pub fn on_window_created(&mut self, hook: impl FnMut(WindowHandle) + 'static) -> &mut Self {
        self.on_created = Some(Box::new(hook));
        self
    }

    /// Register the window-closed hook, replacing any previous one.
    pub fn on_window_closed(&mut self, hook: impl FnMut() + 'static) -> &mut Self {
        self.on_closed = Some(Box::new(hook));
        self
    }

    /// Take over every hook set in `other`; hooks `other` lacks are kept.
    pub fn merge(&mut self, other: WindowEvents) {
        if other.on_created.is_some() {
            self.on_created = other.on_created;
        }
        if other.on_closed.is_some() {
            self.on_closed = other.on_closed;
        }
    }

    /// Dispatch an event to its hook, if one is registered.
    pub fn emit(&mut self, event: WindowEvent) {
        debug!(?event, "window event");
        match event {
            WindowEvent::Created(handle) => {
                if let Some(hook) = self.on_created.as_mut() {
                    hook(handle);
                }
            }
            WindowEvent::Closed => {
                if let Some(hook) = self.on_closed.as_mut() {
                    hook();
                }
            }
        }
    }
}

impl std::fmt::Debug for WindowEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowEvents")
            .field("on_created", &self.on_created.is_some())
            .field("on_closed", &self.on_closed.is_some())
            .finish()
    }
}
