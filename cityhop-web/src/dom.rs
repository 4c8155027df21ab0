use web_sys::{Document, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Surface a blocking message to the user. Outside the browser this is a
/// no-op; callers log the condition themselves.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = window().alert_with_message(message);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}
