//! Block grid geometry.

use crate::color::Color;

/// Integer point in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snap a pointer position down to the nearest multiple of `block_size`.
///
/// Non-finite input snaps to the origin.
pub fn snap_to_grid(x: f64, y: f64, block_size: u32) -> GridPoint {
    let size = f64::from(block_size.max(1));
    let snap = |v: f64| -> i32 {
        if !v.is_finite() {
            return 0;
        }
        ((v / size).floor() * size) as i32
    };
    GridPoint::new(snap(x), snap(y))
}

/// A filled axis-aligned square. `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Block {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Color,
}

impl Block {
    /// Block whose top-left corner sits on a grid cell.
    pub fn at_cell(x: u32, y: u32, block_size: u32, color: Color) -> Self {
        Self {
            x: f64::from(x),
            y: f64::from(y),
            size: f64::from(block_size),
            color,
        }
    }

    /// Block centred on `center`.
    pub fn centered_on(center: GridPoint, block_size: u32, color: Color) -> Self {
        let half = f64::from(block_size) / 2.0;
        Self {
            x: f64::from(center.x) - half,
            y: f64::from(center.y) - half,
            size: f64::from(block_size),
            color,
        }
    }

    /// True when any part of the block overlaps a `width × height` surface.
    pub fn intersects(&self, width: u32, height: u32) -> bool {
        self.x < f64::from(width)
            && self.y < f64::from(height)
            && self.x + self.size > 0.0
            && self.y + self.size > 0.0
    }
}

/// Top-left corners of every background cell, row-major from the origin.
///
/// Edge cells may extend past the surface; the surface clips them.
pub fn cell_origins(width: u32, height: u32, block_size: u32) -> impl Iterator<Item = (u32, u32)> {
    let step = block_size.max(1) as usize;
    (0..height)
        .step_by(step)
        .flat_map(move |y| (0..width).step_by(step).map(move |x| (x, y)))
}
