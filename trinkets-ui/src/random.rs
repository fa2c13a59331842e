use trinkets_core::IndexSource;

/// Index source backed by the browser's `Math.random()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl IndexSource for MathRandom {
    fn next_index(&mut self, len: usize) -> usize {
        (js_sys::Math::random() * len as f64).floor() as usize
    }
}
