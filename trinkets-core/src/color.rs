//! Colours and fixed palettes.

use crate::random::IndexSource;
use std::fmt;

/// 24-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// CSS form, e.g. `#4CAF50`.
    pub fn to_css(self) -> String {
        self.to_string()
    }

    /// Opaque RGBA bytes.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Ordered, non-empty list of selectable colours.
///
/// Duplicate entries are allowed and weight the uniform pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [Color],
}

impl Palette {
    /// Panics (at compile time when used in a `const`/`static`) on an empty list.
    pub const fn new(colors: &'static [Color]) -> Self {
        assert!(!colors.is_empty(), "palette must not be empty");
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &'static [Color] {
        self.colors
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Uniform random pick, independent of any previous pick.
    pub fn pick<R: IndexSource + ?Sized>(&self, rng: &mut R) -> Color {
        let index = rng.next_index(self.colors.len());
        self.colors[index.min(self.colors.len() - 1)]
    }
}

const GRASS: &[Color] = &[
    Color::from_hex(0x4CAF50),
    Color::from_hex(0x66BB6A),
    Color::from_hex(0x81C784),
    Color::from_hex(0xA5D6A7),
    Color::from_hex(0xC8E6C9),
    Color::from_hex(0x388E3C),
    Color::from_hex(0x43A047),
    Color::from_hex(0x4CAF50),
    Color::from_hex(0x66BB6A),
    Color::from_hex(0x81C784),
];

const FLOWERS: &[Color] = &[
    // Yellows/oranges
    Color::from_hex(0xFFEB3B),
    Color::from_hex(0xFFC107),
    Color::from_hex(0xFF9800),
    Color::from_hex(0xFF5722),
    // Pinks/reds
    Color::from_hex(0xE91E63),
    Color::from_hex(0xD81B60),
    Color::from_hex(0xC2185B),
    Color::from_hex(0xAD1457),
    // Purples
    Color::from_hex(0x9C27B0),
    Color::from_hex(0x8E24AA),
    Color::from_hex(0x7B1FA2),
    Color::from_hex(0x6A1B9A),
    // Blues
    Color::from_hex(0x2196F3),
    Color::from_hex(0x1976D2),
    Color::from_hex(0x1565C0),
    Color::from_hex(0x0D47A1),
];

pub const GRASS_SHADES: Palette = Palette::new(GRASS);
pub const FLOWER_COLORS: Palette = Palette::new(FLOWERS);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn from_hex_splits_channels() {
        let c = Color::from_hex(0x4CAF50);
        assert_eq!((c.r, c.g, c.b), (0x4C, 0xAF, 0x50));
    }

    #[test]
    fn css_form_is_uppercase_hex() {
        assert_eq!(Color::from_hex(0x0D47A1).to_css(), "#0D47A1");
        assert_eq!(Color::from_hex(0x000000).to_css(), "#000000");
    }

    #[test]
    fn default_palette_sizes() {
        assert_eq!(GRASS_SHADES.len(), 10);
        assert_eq!(FLOWER_COLORS.len(), 16);
    }

    #[test]
    fn pick_always_returns_palette_member() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(FLOWER_COLORS.contains(FLOWER_COLORS.pick(&mut rng)));
        }
    }

    struct PastTheEnd;

    impl IndexSource for PastTheEnd {
        fn next_index(&mut self, len: usize) -> usize {
            len + 3
        }
    }

    #[test]
    fn pick_clamps_out_of_range_index_to_last_colour() {
        let last = *FLOWER_COLORS.colors().last().unwrap();
        assert_eq!(FLOWER_COLORS.pick(&mut PastTheEnd), last);
    }

    #[test]
    fn pick_reaches_every_distinct_colour() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            seen.insert(GRASS_SHADES.pick(&mut rng));
        }
        // 10 entries, 7 distinct shades
        assert_eq!(seen.len(), 7);
    }
}
