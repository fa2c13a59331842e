//! Cross-document notification channel.

use crate::messages::HostMessage;
use crate::origin::Origin;
use std::cell::{Cell, RefCell};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChannelError {
    #[error("Invalid origin: {0}")]
    InvalidOrigin(String),

    #[error("Failed to serialize message: {0}")]
    Serialize(String),

    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// Origin-scoped, fire-and-forget delivery from an embedded document to its host.
pub trait NotificationChannel {
    /// Whether a hosting context exists to receive messages.
    fn host_attached(&self) -> bool;

    /// Deliver `message` only if the host's origin equals `target_origin`.
    /// A mismatch is a silent drop, not an error.
    fn send(&self, target_origin: &Origin, message: &HostMessage) -> Result<(), ChannelError>;
}

/// In-process channel with an optional in-memory host.
///
/// Useful for running trinkets headless and for observing exactly what a
/// host would receive.
#[derive(Debug, Default)]
pub struct InProcessChannel {
    host_origin: Option<Origin>,
    inbox: RefCell<Vec<HostMessage>>,
    attempts: Cell<usize>,
}

impl InProcessChannel {
    /// No hosting context: the trinket is running top-level.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Hosted by a document at `origin`.
    pub fn hosted_at(origin: Origin) -> Self {
        Self {
            host_origin: Some(origin),
            ..Self::default()
        }
    }

    /// Messages the host has received, in order.
    pub fn delivered(&self) -> Vec<HostMessage> {
        self.inbox.borrow().clone()
    }

    /// Number of `send` calls, delivered or dropped.
    pub fn attempts(&self) -> usize {
        self.attempts.get()
    }
}

impl NotificationChannel for InProcessChannel {
    fn host_attached(&self) -> bool {
        self.host_origin.is_some()
    }

    fn send(&self, target_origin: &Origin, message: &HostMessage) -> Result<(), ChannelError> {
        self.attempts.set(self.attempts.get() + 1);
        match &self.host_origin {
            Some(host) if host.matches(target_origin) => {
                self.inbox.borrow_mut().push(message.clone());
            }
            Some(host) => {
                log::debug!("dropping message for {target_origin}: host is {host}");
            }
            None => {}
        }
        Ok(())
    }
}

impl<C: NotificationChannel + ?Sized> NotificationChannel for &C {
    fn host_attached(&self) -> bool {
        (**self).host_attached()
    }

    fn send(&self, target_origin: &Origin, message: &HostMessage) -> Result<(), ChannelError> {
        (**self).send(target_origin, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin(s: &str) -> Origin {
        Origin::parse(s).unwrap()
    }

    #[test]
    fn detached_channel_has_no_host() {
        let channel = InProcessChannel::detached();
        assert!(!channel.host_attached());
        assert_eq!(channel.attempts(), 0);
    }

    #[test]
    fn same_origin_is_delivered() {
        let channel = InProcessChannel::hosted_at(origin("https://host.test"));
        channel
            .send(&origin("https://host.test"), &HostMessage::log("info", "hi"))
            .unwrap();
        assert_eq!(channel.delivered(), vec![HostMessage::log("info", "hi")]);
    }

    #[test]
    fn other_origin_is_dropped_silently() {
        let channel = InProcessChannel::hosted_at(origin("https://host.test"));
        let result = channel.send(&origin("https://evil.test"), &HostMessage::log("info", "hi"));
        assert!(result.is_ok());
        assert!(channel.delivered().is_empty());
        assert_eq!(channel.attempts(), 1);
    }
}
