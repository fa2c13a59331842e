//! Embedded trinket: forwards log lines to the hosting document.

use trinkets_core::{LogForwarder, TRINKET_CONFIG};
use wasm_bindgen::prelude::*;

use crate::error::UiError;
use crate::frame_channel::{current_origin, ParentFrameChannel};

/// Forwarder bound to the current window's parent and origin.
pub fn parent_forwarder() -> LogForwarder<ParentFrameChannel> {
    let origin = current_origin().unwrap_or_default();
    LogForwarder::new(ParentFrameChannel::for_current_window(), &origin)
}

/// Send a leveled message to the host. Silently does nothing without one.
pub fn log_to_host(level: &str, message: &str) {
    parent_forwarder().emit(level, message);
}

fn announce_ready() {
    parent_forwarder().announce_ready(&TRINKET_CONFIG);
}

/// Announce readiness once the document has been parsed.
///
/// The module may load after `DOMContentLoaded` has already fired, in which
/// case the announcement goes out immediately.
pub fn install_ready_announcement() -> Result<(), UiError> {
    let document = web_sys::window()
        .ok_or(UiError::NoWindow)?
        .document()
        .ok_or(UiError::NoDocument)?;

    if document.ready_state() != "loading" {
        announce_ready();
        return Ok(());
    }

    let on_loaded = Closure::once(move |_: web_sys::Event| announce_ready());
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_loaded.as_ref().unchecked_ref())?;
    on_loaded.forget();
    Ok(())
}
