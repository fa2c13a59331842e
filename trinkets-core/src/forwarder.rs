//! Relays log calls from an embedded trinket to its hosting document.

use crate::channel::NotificationChannel;
use crate::config::ForwarderConfig;
use crate::messages::{HostMessage, LogLevel};
use crate::origin::Origin;

/// Forwards leveled log lines to the host through `C`.
///
/// Every message targets the trinket's own origin, so only a same-origin
/// host can receive it. Nothing is ever reported back to the caller.
#[derive(Debug)]
pub struct LogForwarder<C> {
    channel: C,
    own_origin: Option<Origin>,
}

impl<C: NotificationChannel> LogForwarder<C> {
    /// `own_origin` is the embedded document's origin, e.g. `location.origin`.
    /// An unparseable or opaque origin disables delivery.
    pub fn new(channel: C, own_origin: &str) -> Self {
        let own_origin = match Origin::parse(own_origin) {
            Ok(origin) if origin.is_opaque() => {
                log::warn!("log forwarding disabled: opaque origin {own_origin}");
                None
            }
            Ok(origin) => Some(origin),
            Err(e) => {
                log::warn!("log forwarding disabled: {e}");
                None
            }
        };
        Self {
            channel,
            own_origin,
        }
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Send `message` at `level` to the host. `level` is not validated.
    pub fn emit(&self, level: &str, message: &str) {
        if !self.channel.host_attached() {
            return;
        }
        let Some(origin) = &self.own_origin else {
            return;
        };
        let notification = HostMessage::log(level, message);
        if let Err(e) = self.channel.send(origin, &notification) {
            log::warn!("failed to forward {level} message to host: {e}");
        }
    }

    pub fn emit_level(&self, level: LogLevel, message: &str) {
        self.emit(level.as_str(), message);
    }

    pub fn info(&self, message: &str) {
        self.emit_level(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.emit_level(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.emit_level(LogLevel::Error, message);
    }

    /// Log the local load line and tell the host the trinket is ready.
    pub fn announce_ready(&self, config: &ForwarderConfig) {
        log::info!("{}", config.loaded_message);
        self.info(config.ready_message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::InProcessChannel;
    use crate::config::TRINKET_CONFIG;

    const SELF_ORIGIN: &str = "https://trinkets.test";

    fn hosted(origin: &str) -> InProcessChannel {
        InProcessChannel::hosted_at(Origin::parse(origin).unwrap())
    }

    #[test]
    fn no_host_means_no_attempt() {
        let forwarder = LogForwarder::new(InProcessChannel::detached(), SELF_ORIGIN);
        forwarder.emit("error", "nobody listening");
        assert_eq!(forwarder.channel().attempts(), 0);
    }

    #[test]
    fn same_origin_host_receives_exactly_one_message() {
        let forwarder = LogForwarder::new(hosted(SELF_ORIGIN), SELF_ORIGIN);
        forwarder.emit("info", "ready");
        assert_eq!(
            forwarder.channel().delivered(),
            vec![HostMessage::log("info", "ready")]
        );
    }

    #[test]
    fn cross_origin_host_receives_nothing() {
        let forwarder = LogForwarder::new(hosted("https://other.test"), SELF_ORIGIN);
        forwarder.warn("should not leak");
        assert_eq!(forwarder.channel().attempts(), 1);
        assert!(forwarder.channel().delivered().is_empty());
    }

    #[test]
    fn unparseable_own_origin_never_sends() {
        let forwarder = LogForwarder::new(hosted(SELF_ORIGIN), "null");
        forwarder.info("opaque document");
        assert_eq!(forwarder.channel().attempts(), 0);
    }

    #[test]
    fn opaque_own_origin_never_sends() {
        let forwarder = LogForwarder::new(hosted(SELF_ORIGIN), "file://");
        forwarder.info("local file");
        assert_eq!(forwarder.channel().attempts(), 0);
        assert!(forwarder.channel().delivered().is_empty());
    }

    #[test]
    fn ready_announcement_is_a_single_info_message() {
        let forwarder = LogForwarder::new(hosted(SELF_ORIGIN), SELF_ORIGIN);
        forwarder.announce_ready(&TRINKET_CONFIG);
        assert_eq!(
            forwarder.channel().delivered(),
            vec![HostMessage::log("info", TRINKET_CONFIG.ready_message)]
        );
    }

    #[test]
    fn ready_announcement_without_host_is_silent() {
        let forwarder = LogForwarder::new(InProcessChannel::detached(), SELF_ORIGIN);
        forwarder.announce_ready(&TRINKET_CONFIG);
        assert_eq!(forwarder.channel().attempts(), 0);
    }

    #[test]
    fn level_helpers_use_conventional_names() {
        let forwarder = LogForwarder::new(hosted(SELF_ORIGIN), SELF_ORIGIN);
        forwarder.info("a");
        forwarder.warn("b");
        forwarder.error("c");
        let levels: Vec<_> = forwarder
            .channel()
            .delivered()
            .into_iter()
            .map(|HostMessage::Log { level, .. }| level)
            .collect();
        assert_eq!(levels, vec!["info", "warn", "error"]);
    }
}
