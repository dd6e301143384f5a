/*
[INPUT]:  Session events (login, registration, logout, expiry)
[OUTPUT]: Toast-style notifications on a channel for the host UI
[POS]:    Auth layer - user-visible feedback stream
[UPDATE]: When notification wording or levels change
*/

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, info, warn};

/// Toasts kept for a host that has not drained the channel yet
pub const NOTIFICATION_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Fan-in point for notifications. The receiver can be taken exactly once.
///
/// The channel is bounded: until the host drains it, at most
/// [`NOTIFICATION_CAPACITY`] toasts are kept and later ones are dropped
/// after being logged. Once the receiver is dropped every toast is dropped.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::Sender<Notification>,
    rx: Arc<Mutex<Option<mpsc::Receiver<Notification>>>>,
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(NOTIFICATION_CAPACITY);
        Self {
            tx,
            rx: Arc::new(Mutex::new(Some(rx))),
        }
    }

    pub fn take_receiver(&self) -> Option<mpsc::Receiver<Notification>> {
        self.rx.lock().unwrap_or_else(PoisonError::into_inner).take()
    }

    pub fn success(&self, message: &str) {
        self.send(NotificationLevel::Success, message);
    }

    pub fn info(&self, message: &str) {
        self.send(NotificationLevel::Info, message);
    }

    pub fn error(&self, message: &str) {
        self.send(NotificationLevel::Error, message);
    }

    fn send(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Error => warn!(toast = message, "notification"),
            _ => info!(toast = message, "notification"),
        }

        let notification = Notification {
            level,
            message: message.to_string(),
        };
        match self.tx.try_send(notification) {
            Ok(()) => {}
            Err(TrySendError::Full(dropped)) => {
                debug!(toast = %dropped.message, "notification queue full, dropping")
            }
            Err(TrySendError::Closed(_)) => {}
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
