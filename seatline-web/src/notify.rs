//! Browser collaborators injected into the booking controller.
use seatline_core::{NotificationSink, ScrollLock};

/// Reports soft warnings through `window.alert` and the live region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertNotifier;

impl NotificationSink for AlertNotifier {
    fn notify(&self, message: &str) {
        log::warn!("{message}");
        #[cfg(target_arch = "wasm32")]
        {
            crate::a11y::set_status(message);
            crate::dom::alert(message);
        }
    }
}

/// Toggles `overflow` on `<body>` while the confirmation modal is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BodyScrollLock;

impl ScrollLock for BodyScrollLock {
    fn set_locked(&self, locked: bool) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(err) = crate::dom::set_body_scroll_locked(locked) {
                crate::dom::console_error(&crate::dom::js_error_message(&err));
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = locked;
    }
}
