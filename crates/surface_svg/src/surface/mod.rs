//! Height functions sampled by the renderer.
//!
//! - Define custom surfaces by implementing [`HeightField`], or pass any
//!   `Fn(f64, f64) -> f64` closure.
//! - Ready-made surfaces live in [`catalog`].
//! - Look surfaces up by name with [`SurfaceRegistry`].
use mint::Vector2;

pub mod catalog;
pub mod registry;

pub use catalog::{eggbox, moguls, pole, ripple, saddle, sinc};
pub use registry::SurfaceRegistry;

/// Trait for surfaces `z = f(x, y)` over domain coordinates.
///
/// Implementations must be pure. A non-finite return value (infinite or NaN) marks the
/// surface as undefined at that point; cells touching such a point are left out of the
/// rendering.
pub trait HeightField: Send + Sync {
    fn height(&self, p: Vector2<f64>) -> f64;
}

impl<F> HeightField for F
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    #[inline]
    fn height(&self, p: Vector2<f64>) -> f64 {
        self(p.x, p.y)
    }
}
