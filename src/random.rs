/// Uniform source in `[0, 1)` used to seed the canvas scenes.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// The browser's `Math.random`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[cfg(test)]
pub(crate) use fixture::Sequence;
