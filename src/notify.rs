//! User Notifications
//!
//! Blocking alert and confirm prompts.

pub trait Notifier {
    fn alert(&self, message: &str);

    /// Ask the user to confirm. Returns false when declined.
    fn confirm(&self, message: &str) -> bool;
}

/// `window.alert` / `window.confirm`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
