pub mod canvas_surface;
pub mod error;
pub mod field_app;
pub mod frame_channel;
pub mod random;
pub mod trinket;

pub use canvas_surface::{find_canvas, get_2d_context, CanvasSurface};
pub use error::UiError;
pub use field_app::{mount_field, FieldApp};
pub use frame_channel::ParentFrameChannel;
pub use random::MathRandom;

use trinkets_core::{default_config, get_config};
use wasm_bindgen::prelude::*;

fn init_runtime() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

/// Start the grassy field on the page's `trinketCanvas`.
#[wasm_bindgen]
pub fn start_grassy_field() -> Result<(), JsValue> {
    init_runtime();
    mount_field(default_config())?;
    Ok(())
}

/// Start a field by configuration id.
#[wasm_bindgen]
pub fn start_field(config_id: &str) -> Result<(), JsValue> {
    init_runtime();
    let config =
        get_config(config_id).ok_or_else(|| UiError::UnknownConfig(config_id.to_string()))?;
    mount_field(config)?;
    Ok(())
}

/// Start the embedded trinket and announce readiness to the host.
#[wasm_bindgen]
pub fn start_trinket() -> Result<(), JsValue> {
    init_runtime();
    trinket::install_ready_announcement()?;
    Ok(())
}

/// Forward a log line to the hosting document (`info`, `warn` or `error` by convention).
#[wasm_bindgen]
pub fn log_trinket_message(level: &str, message: &str) {
    trinket::log_to_host(level, message);
}
