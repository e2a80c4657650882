//! Single-window facade.
//!
//! `NebulabunWindow` owns a `NativeSurface`, the window configuration and
//! the window's lifecycle state. A facade drives exactly one window:
//! `Unstarted → Running → Closed`, with no way back out of `Closed`.

use nebulabun_common::WindowError;
use nebulabun_config::WindowConfig;
use nebulabun_native::{NativeSurface, WindowHandle};

use crate::events::WindowEvents;

mod lifecycle;
mod runtime;
mod types;


pub use types::{ContentSource, WindowState};

/// The current window, driven through the native surface `S`.
pub struct NebulabunWindow<S: NativeSurface> {
    surface: S,
    config: WindowConfig,
    state: WindowState,
    events: WindowEvents,
    /// Selectors registered through `add_draggable_element`, in order.
    draggable: Vec<String>,
    /// Selectors registered through `add_clickable_element`, in order.
    clickable: Vec<String>,
}

impl<S: NativeSurface> NebulabunWindow<S> {
    pub fn new(surface: S, config: WindowConfig) -> Self {
        Self {
            surface,
            config,
            state: WindowState::Unstarted,
            events: WindowEvents::new(),
            draggable: Vec::new(),
            clickable: Vec::new(),
        }
    }

    /// A window with the default configuration (800×600, opaque).
    pub fn with_defaults(surface: S) -> Self {
        Self::new(surface, WindowConfig::default())
    }

    /// The configuration as supplied, plus any runtime changes.
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    /// The live handle while running.
    pub fn handle(&self) -> Option<WindowHandle> {
        match self.state {
            WindowState::Running(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Give back the surface adapter, e.g. to unload the library.
    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn events_mut(&mut self) -> &mut WindowEvents {
        &mut self.events
    }

    /// Merge `events` into the registered hooks.
    pub fn set_event_handlers(&mut self, events: WindowEvents) {
        self.events.merge(events);
    }

    pub fn draggable_selectors(&self) -> &[String] {
        &self.draggable
    }

    pub fn clickable_selectors(&self) -> &[String] {
        &self.clickable
    }

    fn require_running(&self) -> Result<WindowHandle, WindowError> {
        self.handle().ok_or(WindowError::NotRunning)
    }
}

impl<S: NativeSurface> std::fmt::Debug for NebulabunWindow<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NebulabunWindow")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("events", &self.events)
            .field("draggable", &self.draggable)
            .field("clickable", &self.clickable)
            .finish_non_exhaustive()
    }
}
