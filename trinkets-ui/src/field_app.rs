//! Wires the field renderer to the page: window resize and canvas clicks.

use std::cell::RefCell;
use std::rc::Rc;
use trinkets_core::{FieldConfig, FieldRenderer};
use wasm_bindgen::prelude::*;
use web_sys::{MouseEvent, Window};

use crate::canvas_surface::{find_canvas, CanvasSurface};
use crate::error::UiError;
use crate::random::MathRandom;

/// Renderer plus the canvas it owns.
pub struct FieldApp {
    renderer: FieldRenderer,
    surface: CanvasSurface,
    rng: MathRandom,
}

impl FieldApp {
    pub fn new(config: &'static FieldConfig, surface: CanvasSurface) -> Self {
        Self {
            renderer: FieldRenderer::new(config),
            surface,
            rng: MathRandom,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer
            .resize(&mut self.surface, width, height, &mut self.rng);
    }

    pub fn click(&mut self, client_x: f64, client_y: f64) {
        let (x, y) = self.surface.client_to_canvas(client_x, client_y);
        self.renderer
            .stamp_flower(&mut self.surface, x, y, &mut self.rng);
    }
}

/// Current viewport size in CSS pixels.
fn viewport_size(window: &Window) -> (u32, u32) {
    let dimension = |v: Result<JsValue, JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .map(|v| v.max(0.0) as u32)
            .unwrap_or(0)
    };
    (
        dimension(window.inner_width()),
        dimension(window.inner_height()),
    )
}

/// Paint the field once and keep it in sync with the viewport and clicks.
pub fn mount_field(config: &'static FieldConfig) -> Result<Rc<RefCell<FieldApp>>, UiError> {
    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    let canvas = find_canvas(config.canvas_id)?;
    let app = Rc::new(RefCell::new(FieldApp::new(config, CanvasSurface::new(canvas.clone())?)));

    let (width, height) = viewport_size(&window);
    app.borrow_mut().resize(width, height);
    log::info!("{} mounted at {}x{}", config.display_name, width, height);

    let resize_app = Rc::clone(&app);
    let on_resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let (width, height) = viewport_size(&window);
        resize_app.borrow_mut().resize(width, height);
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    let click_app = Rc::clone(&app);
    let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
        click_app
            .borrow_mut()
            .click(f64::from(e.client_x()), f64::from(e.client_y()));
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(app)
}
