//! Centralized error handling for the userfetch demo.
//!
//! Wraps the `userfetch_api` client with the pieces the demo wires
//! together at startup: error classification, a connectivity probe, the
//! global error handler, and toast-style notifications.

pub mod classify;
pub mod connectivity;
pub mod handler;
pub mod toast;

pub use userfetch_api;

pub use classify::{classify, ErrorClass};
pub use connectivity::{ConnectivityProbe, FixedProbe, SystemProbe};
pub use handler::GlobalErrorHandler;
pub use toast::{ConsoleToast, Notify, ToastOptions, ToastPosition};
