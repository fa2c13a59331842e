use gloo_utils::format::JsValueSerdeExt;
use trinkets_core::{ChannelError, HostMessage, NotificationChannel, Origin};
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Delivers host messages to `window.parent` via `postMessage`.
///
/// The browser enforces the target origin: a parent at any other origin
/// never sees the message.
pub struct ParentFrameChannel {
    parent: Option<Window>,
}

impl ParentFrameChannel {
    /// Channel for the current window. A top-level window is its own parent
    /// and therefore has no host.
    pub fn for_current_window() -> Self {
        let parent = web_sys::window().and_then(|window| {
            let parent = window.parent().ok().flatten()?;
            let is_self = js_sys::Object::is(&parent, &window);
            (!is_self).then_some(parent)
        });
        Self { parent }
    }
}

impl NotificationChannel for ParentFrameChannel {
    fn host_attached(&self) -> bool {
        self.parent.is_some()
    }

    fn send(&self, target_origin: &Origin, message: &HostMessage) -> Result<(), ChannelError> {
        let Some(parent) = &self.parent else {
            return Ok(());
        };
        let payload =
            JsValue::from_serde(message).map_err(|e| ChannelError::Serialize(e.to_string()))?;
        parent
            .post_message(&payload, &target_origin.serialize())
            .map_err(|e| ChannelError::Delivery(format!("{e:?}")))
    }
}

/// `location.origin` of the current document, if there is one.
pub fn current_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
