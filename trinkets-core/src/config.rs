//! Trinket configuration registry.
//!
//! Field configurations are static; the browser entry points look them up
//! by id.

use crate::color::{Palette, FLOWER_COLORS, GRASS_SHADES};

/// Configuration for a pixelated field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    /// Unique identifier used by `start_field`
    pub id: &'static str,
    /// Human-readable name for logs
    pub display_name: &'static str,
    /// DOM id of the canvas element to paint into
    pub canvas_id: &'static str,
    /// Edge length in pixels of every block, background and flower alike
    pub block_size: u32,
    /// Background shades
    pub grass: Palette,
    /// Flower centre and petal colours
    pub flowers: Palette,
    /// Smallest petal count (inclusive)
    pub min_petals: u8,
    /// Largest petal count (inclusive)
    pub max_petals: u8,
}

impl FieldConfig {
    /// Number of distinct petal counts a flower can have.
    pub fn petal_choices(&self) -> usize {
        usize::from(self.max_petals.saturating_sub(self.min_petals)) + 1
    }
}

/// Registry of available field configurations.
pub static FIELD_CONFIGS: &[FieldConfig] = &[FieldConfig {
    id: "grassy-field",
    display_name: "Grassy Field",
    canvas_id: "trinketCanvas",
    block_size: 10,
    grass: GRASS_SHADES,
    flowers: FLOWER_COLORS,
    min_petals: 3,
    max_petals: 5,
}];

/// Look up a field configuration by ID.
pub fn get_config(id: &str) -> Option<&'static FieldConfig> {
    FIELD_CONFIGS.iter().find(|c| c.id == id)
}

/// Get the default field configuration.
pub fn default_config() -> &'static FieldConfig {
    &FIELD_CONFIGS[0]
}

/// Configuration for the embedded log-forwarding trinket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForwarderConfig {
    /// Announced to the host once the document has loaded
    pub ready_message: &'static str,
    /// Written to the local console at the same time
    pub loaded_message: &'static str,
}

pub static TRINKET_CONFIG: ForwarderConfig = ForwarderConfig {
    ready_message: "My first trinket has loaded and is ready!",
    loaded_message: "Trinket script loaded!",
};
