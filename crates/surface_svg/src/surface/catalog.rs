//! Built-in surfaces.
//!
//! Every surface here is a plain function, so it can be passed wherever a
//! [`crate::surface::HeightField`] is expected. Amplitudes are tuned for the default
//! grid (`xyrange = 30`, `zscale = 256`).

/// Concentric ripples, `sin(r) / 10` with `r` the distance from the origin.
///
/// This is the default surface.
pub fn ripple(x: f64, y: f64) -> f64 {
    let r = x.hypot(y);
    r.sin() / 10.0
}

/// `sin(r) / r`. Undefined (NaN) at the origin.
pub fn sinc(x: f64, y: f64) -> f64 {
    let r = x.hypot(y);
    r.sin() / r
}

/// Regular bumps and dips along both axes.
pub fn eggbox(x: f64, y: f64) -> f64 {
    0.1 * (x.sin() + y.sin())
}

/// Checkerboard of rounded humps with twice the wavelength of [`eggbox`].
pub fn moguls(x: f64, y: f64) -> f64 {
    0.1 * (x / 2.0).sin() * (y / 2.0).sin()
}

/// Hyperbolic paraboloid rising along x and falling along y.
pub fn saddle(x: f64, y: f64) -> f64 {
    (x * x - y * y) / 1500.0
}

/// `1 / r`, a pole at the origin where the height is infinite.
pub fn pole(x: f64, y: f64) -> f64 {
    1.0 / x.hypot(y)
}

/// Names and functions of every built-in surface, in a stable order.
pub fn builtins() -> [(&'static str, fn(f64, f64) -> f64); 6] {
    [
        ("ripple", ripple),
        ("sinc", sinc),
        ("eggbox", eggbox),
        ("moguls", moguls),
        ("saddle", saddle),
        ("pole", pole),
    ]
}
