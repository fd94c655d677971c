/// Blocking user-facing messages
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Uses `window.alert`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }
}
