//! Terminal sink for uncaught errors: log, classify, notify.

use std::sync::OnceLock;

use userfetch_api::Error;

use crate::classify::classify;
use crate::connectivity::ConnectivityProbe;
use crate::toast::Notify;

type NotifierFactory = Box<dyn Fn() -> Box<dyn Notify> + Send + Sync>;

/// Catch-all error handler. Every error not recovered elsewhere terminates
/// here: it is logged, classified, and surfaced as exactly one toast. The
/// handler never re-throws and keeps no per-error state.
pub struct GlobalErrorHandler {
    probe: Box<dyn ConnectivityProbe + Send + Sync>,
    /// The notifier is built on first use rather than at construction, so
    /// the handler can be wired up before the notification layer exists.
    factory: NotifierFactory,
    notifier: OnceLock<Box<dyn Notify>>,
}

impl GlobalErrorHandler {
    pub fn new(
        probe: Box<dyn ConnectivityProbe + Send + Sync>,
        factory: impl Fn() -> Box<dyn Notify> + Send + Sync + 'static,
    ) -> Self {
        Self {
            probe,
            factory: Box::new(factory),
            notifier: OnceLock::new(),
        }
    }

    fn notifier(&self) -> &dyn Notify {
        self.notifier.get_or_init(|| (self.factory)()).as_ref()
    }

    /// Handles an API error: logs the raw status and body, classifies it,
    /// and shows one toast carrying the classified message.
    pub fn handle(&self, error: &Error) {
        match error {
            Error::HttpStatus { status, body } => {
                tracing::error!("Error code {}, body was: {}", status, body);
            }
            Error::RequestFailed => {
                tracing::error!("Error without status: {}", error);
            }
        }
        let class = classify(self.probe.is_online(), error.status());
        let message = class.message();
        tracing::info!("{}", message);
        self.notifier().error(message, "");
    }
}
