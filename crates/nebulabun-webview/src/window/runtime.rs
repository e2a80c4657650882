//! Calls that act on a running window.

use nebulabun_common::WindowError;
use nebulabun_native::{marshal, NativeSurface};
use tracing::debug;

use crate::bridge;

use super::NebulabunWindow;

impl<S: NativeSurface> NebulabunWindow<S> {
    /// Change the window alpha. Out-of-range levels are clamped.
    pub fn set_transparency(&mut self, level: i32) -> Result<(), WindowError> {
        self.require_running()?;
        let alpha = marshal::clamp_alpha(level);
        self.surface.set_window_transparency(alpha)?;
        self.config.transparency = i32::from(alpha);
        Ok(())
    }

    pub fn set_click_through(&mut self, enabled: bool) -> Result<(), WindowError> {
        self.require_running()?;
        self.surface.set_click_through(enabled)?;
        self.config.click_through = enabled;
        Ok(())
    }

    /// Run a script in the page.
    pub fn execute_script(&self, script: &str) -> Result<(), WindowError> {
        self.require_running()?;
        self.surface.execute_javascript(script)?;
        Ok(())
    }

    /// Mark elements matching `selector` as drag handles.
    ///
    /// Before the window exists the selector is only recorded; it is applied
    /// right after the bridge script on creation.
    pub fn add_draggable_element(&mut self, selector: impl Into<String>) -> Result<(), WindowError> {
        let selector = selector.into();
        let script = bridge::mark_draggable_script(&selector);
        self.draggable.push(selector);
        self.apply_if_running(&script)
    }

    /// Mark elements matching `selector` as clickable. Recorded the same way
    /// as draggable selectors.
    pub fn add_clickable_element(&mut self, selector: impl Into<String>) -> Result<(), WindowError> {
        let selector = selector.into();
        let script = bridge::mark_clickable_script(&selector);
        self.clickable.push(selector);
        self.apply_if_running(&script)
    }

    fn apply_if_running(&self, script: &str) -> Result<(), WindowError> {
        if self.handle().is_none() {
            debug!("window not running, selector deferred");
            return Ok(());
        }
        self.surface.execute_javascript(script)?;
        Ok(())
    }
}
