//! Server-side services

pub mod notify;

pub use notify::{BrevoNotifier, NoopNotifier, Notifier, NotifyError};
