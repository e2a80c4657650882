//! Script bridge between the page and the native host.
//!
//! Messages from the page are posted through `window.external.invoke` as a
//! JSON string `{ kind, payload }`. The bridge script wires `.draggable`
//! elements to drag notifications and `.clickable` elements to click
//! notifications, and installs the global `window.Nebulabun` API.

/// CSS class that marks an element as a window drag handle.
pub const DRAGGABLE_CLASS: &str = "draggable";

/// CSS class that marks an element as reporting clicks to the host.
pub const CLICKABLE_CLASS: &str = "clickable";

/// Bridge script pushed into the page once after window creation.
pub const BRIDGE_SCRIPT: &str = r#"
(function() {
    function notify(kind, payload) {
        if (window.external && typeof window.external.invoke === 'function') {
            window.external.invoke(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        }
    }

    function enableDragging(selector) {
        document.querySelectorAll(selector).forEach(function(element) {
            element.style.cursor = 'move';
            element.addEventListener('mousedown', function() {
                notify('start_drag');
            });
        });
    }

    function enableClicking(selector) {
        document.querySelectorAll(selector).forEach(function(element) {
            element.addEventListener('click', function() {
                notify('element_clicked', {
                    selector: selector,
                    elementId: element.id,
                    className: element.className
                });
            });
        });
    }

    enableDragging('.draggable');
    enableClicking('.clickable');

    window.Nebulabun = {
        setTransparency: function(alpha) {
            notify('set_transparency', alpha);
        },
        setClickThrough: function(enabled) {
            notify('set_click_through', !!enabled);
        },
        closeWindow: function() {
            notify('close_window');
        },
        executeScript: function(script) {
            return (0, eval)(script);
        }
    };

    console.log('Nebulabun initialized');
})();
"#;

/// Script that adds `class` (and optional inline style) to every element
/// matching `selector`.
///
/// The selector is embedded as a JSON string literal, so quotes or
/// backslashes in it cannot escape the call.
fn mark_elements_script(selector: &str, class: &str, cursor: Option<&str>) -> String {
    let selector_js = serde_json::to_string(selector).unwrap_or_else(|_| "\"\"".to_string());
    let class_js = serde_json::to_string(class).unwrap_or_else(|_| "\"\"".to_string());
    let cursor_stmt = cursor
        .map(|c| format!("element.style.cursor = {}; ", serde_json::Value::from(c)))
        .unwrap_or_default();
    format!(
        "document.querySelectorAll({selector_js}).forEach(function(element) {{ {cursor_stmt}element.classList.add({class_js}); }});"
    )
}

/// Script that marks elements matching `selector` as drag handles.
pub fn mark_draggable_script(selector: &str) -> String {
    mark_elements_script(selector, DRAGGABLE_CLASS, Some("move"))
}

/// Script that marks elements matching `selector` as clickable.
pub fn mark_clickable_script(selector: &str) -> String {
    mark_elements_script(selector, CLICKABLE_CLASS, None)
}
