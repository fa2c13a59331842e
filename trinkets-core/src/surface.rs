//! Drawing surface abstraction and an in-memory raster implementation.

use crate::grid::Block;

/// A 2D raster target the field renderer paints into.
///
/// Implementations never fail: out-of-bounds drawing is clipped.
pub trait DrawSurface {
    /// Current `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);

    /// Reset to exactly `width × height`, discarding all previous drawing.
    fn resize(&mut self, width: u32, height: u32);

    /// Fill a solid square, clipped to the surface bounds.
    fn fill_block(&mut self, block: &Block);
}

/// RGBA8 pixel buffer. A cleared pixel is fully transparent black.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        let mut surface = Self::default();
        surface.resize(width, height);
        surface
    }

    /// Pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(px)
    }

    /// Raw row-major RGBA bytes, suitable for `ImageData`.
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }
}

/// Pixel index range `[start, end)` covered by the span `[origin, origin + size)`,
/// sampling at pixel centres and clipped to `[0, limit)`.
fn covered_range(origin: f64, size: f64, limit: u32) -> (u32, u32) {
    let start = (origin - 0.5).ceil().max(0.0);
    let end = (origin + size - 0.5).ceil().clamp(0.0, f64::from(limit));
    if start >= end {
        return (0, 0);
    }
    (start as u32, end as u32)
}

impl DrawSurface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width as usize * height as usize * 4, 0);
    }

    fn fill_block(&mut self, block: &Block) {
        if !block.intersects(self.width, self.height) {
            return;
        }
        let (x0, x1) = covered_range(block.x, block.size, self.width);
        let (y0, y1) = covered_range(block.y, block.size, self.height);
        let rgba = block.color.to_rgba();
        let stride = self.width as usize * 4;
        for y in y0..y1 {
            let row = y as usize * stride;
            for x in x0..x1 {
                let idx = row + x as usize * 4;
                self.pixels[idx..idx + 4].copy_from_slice(&rgba);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::grid::GridPoint;

    const RED: Color = Color::from_hex(0xFF0000);

    #[test]
    fn new_surface_is_transparent() {
        let surface = RasterSurface::new(4, 3);
        assert_eq!(surface.size(), (4, 3));
        assert_eq!(surface.as_rgba().len(), 4 * 3 * 4);
        assert!(surface.as_rgba().iter().all(|&b| b == 0));
    }

    #[test]
    fn fill_covers_exact_cell() {
        let mut surface = RasterSurface::new(30, 30);
        surface.fill_block(&Block::at_cell(10, 10, 10, RED));
        assert_eq!(surface.pixel(10, 10), Some(RED.to_rgba()));
        assert_eq!(surface.pixel(19, 19), Some(RED.to_rgba()));
        assert_eq!(surface.pixel(9, 10), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(20, 19), Some([0, 0, 0, 0]));
    }

    #[test]
    fn fill_clips_at_edges() {
        let mut surface = RasterSurface::new(15, 15);
        surface.fill_block(&Block::at_cell(10, 10, 10, RED));
        assert_eq!(surface.pixel(14, 14), Some(RED.to_rgba()));
        assert_eq!(surface.pixel(15, 15), None);

        // Centred on the origin: only the bottom-right quadrant is visible.
        surface.fill_block(&Block::centered_on(GridPoint::new(0, 0), 10, RED));
        assert_eq!(surface.pixel(4, 4), Some(RED.to_rgba()));
        assert_eq!(surface.pixel(5, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn fully_outside_block_is_ignored() {
        let mut surface = RasterSurface::new(10, 10);
        surface.fill_block(&Block::at_cell(50, 50, 10, RED));
        surface.fill_block(&Block::centered_on(GridPoint::new(-20, -20), 10, RED));
        assert!(surface.as_rgba().iter().all(|&b| b == 0));
    }

    #[test]
    fn resize_clears_previous_drawing() {
        let mut surface = RasterSurface::new(10, 10);
        surface.fill_block(&Block::at_cell(0, 0, 10, RED));
        surface.resize(10, 10);
        assert!(surface.as_rgba().iter().all(|&b| b == 0));
    }

    #[test]
    fn zero_sized_surface_accepts_draws() {
        let mut surface = RasterSurface::new(0, 0);
        surface.fill_block(&Block::at_cell(0, 0, 10, RED));
        assert!(surface.as_rgba().is_empty());
        assert_eq!(surface.pixel(0, 0), None);
    }
}
