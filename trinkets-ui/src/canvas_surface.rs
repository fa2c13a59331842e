use trinkets_core::{Block, DrawSurface};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::UiError;

/// Get 2D rendering context from canvas.
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, UiError> {
    canvas
        .get_context("2d")?
        .ok_or(UiError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| UiError::NoContext)
}

/// Look up a canvas element by DOM id.
pub fn find_canvas(canvas_id: &str) -> Result<HtmlCanvasElement, UiError> {
    let document = web_sys::window()
        .ok_or(UiError::NoWindow)?
        .document()
        .ok_or(UiError::NoDocument)?;
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| UiError::MissingCanvas(canvas_id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| UiError::MissingCanvas(canvas_id.to_string()))
}

/// A `<canvas>` painted through its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, UiError> {
        let ctx = get_2d_context(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    /// Convert viewport (client) coordinates to canvas coordinates.
    pub fn client_to_canvas(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        let rect = self.canvas.get_bounding_client_rect();
        (client_x - rect.left(), client_y - rect.top())
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) {
        // Setting either dimension resets the bitmap, even to the same value.
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn fill_block(&mut self, block: &Block) {
        self.ctx.set_fill_style_str(&block.color.to_css());
        self.ctx.fill_rect(block.x, block.y, block.size, block.size);
    }
}
