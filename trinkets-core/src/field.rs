//! Grassy field renderer: randomized block background plus click-stamped flowers.

use crate::color::Color;
use crate::config::FieldConfig;
use crate::grid::{cell_origins, snap_to_grid, Block, GridPoint};
use crate::random::IndexSource;
use crate::surface::DrawSurface;
use std::f64::consts::TAU;

/// A flower generated by a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flower {
    /// Snapped click position
    pub center: GridPoint,
    pub petal_count: u8,
    pub center_color: Color,
    pub petal_color: Color,
}

impl Flower {
    /// Petal centres, evenly spaced starting due east and turning towards +y.
    ///
    /// Petal `i` sits at `center + round(b·cos θ), round(b·sin θ)` with
    /// `θ = 2πi / petal_count`.
    pub fn petal_centers(&self, block_size: u32) -> impl Iterator<Item = GridPoint> + '_ {
        let radius = f64::from(block_size);
        let count = self.petal_count;
        (0..count).map(move |i| {
            let angle = f64::from(i) / f64::from(count) * TAU;
            let dx = (radius * angle.cos()).round() as i32;
            let dy = (radius * angle.sin()).round() as i32;
            self.center.offset(dx, dy)
        })
    }

    /// Blocks in draw order: the centre first, then each petal by index.
    pub fn blocks(&self, block_size: u32) -> Vec<Block> {
        let mut blocks = Vec::with_capacity(usize::from(self.petal_count) + 1);
        blocks.push(Block::centered_on(self.center, block_size, self.center_color));
        blocks.extend(
            self.petal_centers(block_size)
                .map(|p| Block::centered_on(p, block_size, self.petal_color)),
        );
        blocks
    }
}

/// Paints the field onto an explicitly passed surface.
///
/// Holds no drawing state of its own; the surface is write-only from here.
#[derive(Clone, Copy, Debug)]
pub struct FieldRenderer {
    config: &'static FieldConfig,
}

impl FieldRenderer {
    pub fn new(config: &'static FieldConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'static FieldConfig {
        self.config
    }

    /// Reset the surface to the new viewport size and repaint the background.
    pub fn resize<S, R>(&self, surface: &mut S, width: u32, height: u32, rng: &mut R)
    where
        S: DrawSurface + ?Sized,
        R: IndexSource + ?Sized,
    {
        log::debug!("{}: resize to {}x{}", self.config.display_name, width, height);
        surface.resize(width, height);
        self.paint_background(surface, rng);
    }

    /// Tile the whole surface with independently coloured grass blocks.
    pub fn paint_background<S, R>(&self, surface: &mut S, rng: &mut R)
    where
        S: DrawSurface + ?Sized,
        R: IndexSource + ?Sized,
    {
        let (width, height) = surface.size();
        let size = self.config.block_size;
        for (x, y) in cell_origins(width, height, size) {
            let shade = self.config.grass.pick(rng);
            surface.fill_block(&Block::at_cell(x, y, size, shade));
        }
    }

    /// Generate a flower at the snapped click position without drawing it.
    ///
    /// Draw order from `rng`: petal count, centre colour, petal colour.
    pub fn grow_flower<R>(&self, x: f64, y: f64, rng: &mut R) -> Flower
    where
        R: IndexSource + ?Sized,
    {
        let choices = self.config.petal_choices();
        let petal_count = self.config.min_petals + rng.next_index(choices) as u8;
        let center_color = self.config.flowers.pick(rng);
        let petal_color = self.config.flowers.pick(rng);
        Flower {
            center: snap_to_grid(x, y, self.config.block_size),
            petal_count,
            center_color,
            petal_color,
        }
    }

    /// Stamp a flower at a click position and return what was drawn.
    pub fn stamp_flower<S, R>(&self, surface: &mut S, x: f64, y: f64, rng: &mut R) -> Flower
    where
        S: DrawSurface + ?Sized,
        R: IndexSource + ?Sized,
    {
        let flower = self.grow_flower(x, y, rng);
        for block in flower.blocks(self.config.block_size) {
            surface.fill_block(&block);
        }
        log::debug!(
            "flower at ({}, {}) with {} petals",
            flower.center.x,
            flower.center.y,
            flower.petal_count
        );
        flower
    }
}
