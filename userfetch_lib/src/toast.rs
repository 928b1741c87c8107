//! Toast-style notifications rendered to the terminal.

use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

/// Where toasts are anchored. Descriptive only for the terminal renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPosition {
    TopCenter,
    BottomCenter,
}

/// Display options, set once at startup.
#[derive(Debug, Clone)]
pub struct ToastOptions {
    pub position: ToastPosition,
    /// How long a toast stays visible. Recorded but not animated by the
    /// terminal renderer.
    pub timeout: Duration,
    /// Suppress a toast identical to the previous one.
    pub prevent_duplicates: bool,
    /// Maximum number of toasts visible at once.
    pub max_opened: usize,
    pub close_button: bool,
    pub progress_bar: bool,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            position: ToastPosition::TopCenter,
            timeout: Duration::from_secs(50),
            prevent_duplicates: true,
            max_opened: 1,
            close_button: true,
            progress_bar: true,
        }
    }
}

/// Sink for user-facing notifications. Displaying is fire-and-forget: no
/// acknowledgment, no queueing beyond duplicate suppression.
pub trait Notify: Send + Sync {
    /// Shows an error toast.
    fn error(&self, message: &str, title: &str);
}

/// Renders toasts as banners on stderr.
pub struct ConsoleToast {
    options: ToastOptions,
    /// Last message shown, for duplicate suppression.
    last: Mutex<Option<String>>,
}

impl ConsoleToast {
    pub fn new(options: ToastOptions) -> Self {
        Self {
            options,
            last: Mutex::new(None),
        }
    }

    pub fn options(&self) -> &ToastOptions {
        &self.options
    }

    /// Applies duplicate suppression and records `message` as the most
    /// recent toast. Returns whether the toast should be rendered.
    fn admit(&self, message: &str) -> bool {
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        if self.options.prevent_duplicates && last.as_deref() == Some(message) {
            return false;
        }
        *last = Some(message.to_string());
        true
    }
}

impl Notify for ConsoleToast {
    fn error(&self, message: &str, title: &str) {
        if !self.admit(message) {
            return;
        }
        let header = if title.is_empty() { "error" } else { title };
        let mut out = std::io::stderr().lock();
        let _ = writeln!(out, "== toast [{}] ==", header);
        let _ = writeln!(out, "   {}", message);
    }
}
