//! Corner evaluation: grid index to projected, colored canvas point.
use glam::DVec2;

use crate::mesh::GridSpec;
use crate::surface::HeightField;
use crate::svg::{ColorScheme, HexColor};

/// Result of evaluating one grid corner.
///
/// A surface that is undefined at the corner yields [`Corner::Invalid`]; this is an
/// expected outcome, not an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Corner {
    Valid {
        /// Domain coordinates of the corner.
        domain: DVec2,
        /// Surface height at the corner.
        z: f64,
        /// Projected canvas position.
        device: DVec2,
        /// Fill color derived from `z`.
        color: HexColor,
    },
    Invalid {
        /// Domain coordinates of the corner.
        domain: DVec2,
        /// The non-finite height that was sampled.
        z: f64,
    },
}

impl Corner {
    pub fn is_valid(&self) -> bool {
        matches!(self, Corner::Valid { .. })
    }

    pub fn domain(&self) -> DVec2 {
        match *self {
            Corner::Valid { domain, .. } | Corner::Invalid { domain, .. } => domain,
        }
    }

    pub fn z(&self) -> f64 {
        match *self {
            Corner::Valid { z, .. } | Corner::Invalid { z, .. } => z,
        }
    }

    /// Canvas position, or `None` for an invalid corner.
    pub fn device(&self) -> Option<DVec2> {
        match *self {
            Corner::Valid { device, .. } => Some(device),
            Corner::Invalid { .. } => None,
        }
    }

    /// Fill color, or `None` for an invalid corner.
    pub fn color(&self) -> Option<HexColor> {
        match *self {
            Corner::Valid { color, .. } => Some(color),
            Corner::Invalid { .. } => None,
        }
    }
}

/// Evaluates corners of a grid against a height field.
///
/// Every call is self-contained: the result depends only on the indices, the spec,
/// the field, and the color scheme.
#[derive(Clone, Copy)]
pub struct CornerEvaluator<'a> {
    spec: &'a GridSpec,
    field: &'a dyn HeightField,
    scheme: ColorScheme,
}

impl<'a> CornerEvaluator<'a> {
    pub fn new(spec: &'a GridSpec, field: &'a dyn HeightField, scheme: ColorScheme) -> Self {
        Self {
            spec,
            field,
            scheme,
        }
    }

    pub fn spec(&self) -> &'a GridSpec {
        self.spec
    }

    /// Evaluates the corner at indices `(i, j)`, each in `[0, cells]`.
    pub fn corner(&self, i: u32, j: u32) -> Corner {
        let domain = self.spec.index_to_domain(i, j);
        let z = self.field.height(domain.into());
        if !z.is_finite() {
            return Corner::Invalid { domain, z };
        }
        Corner::Valid {
            domain,
            z,
            device: self.spec.project(domain, z),
            color: self.scheme.color(z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{pole, ripple, sinc};

    fn spec() -> GridSpec {
        GridSpec::default().with_cells(10).with_xyrange(10.0)
    }

    #[test]
    fn evaluation_is_deterministic() {
        let spec = GridSpec::default();
        let eval = CornerEvaluator::new(&spec, &ripple, ColorScheme::Legacy);
        for (i, j) in [(0, 0), (17, 93), (100, 100), (50, 3)] {
            assert_eq!(eval.corner(i, j), eval.corner(i, j));
        }
    }

    #[test]
    fn center_corner_sits_at_domain_origin() {
        let spec = spec();
        let eval = CornerEvaluator::new(&spec, &ripple, ColorScheme::Legacy);
        let corner = eval.corner(5, 5);
        assert_eq!(corner.domain(), DVec2::ZERO);
        assert_eq!(corner.z(), 0.0);
        assert_eq!(corner.device(), Some(DVec2::new(600.0, 320.0)));
        assert_eq!(corner.color(), Some(HexColor::BLACK));
    }

    #[test]
    fn valid_corner_matches_projection_formulas() {
        let spec = spec();
        let eval = CornerEvaluator::new(&spec, &ripple, ColorScheme::Legacy);
        let corner = eval.corner(8, 3);
        let p = spec.index_to_domain(8, 3);
        assert!((p - DVec2::new(3.0, -2.0)).length() < 1e-12);
        let (x, y) = (p.x, p.y);
        let z = ripple(x, y);
        let sx = 600.0 + (x - y) * spec.cos_angle() * spec.xyscale();
        let sy = 320.0 + (x + y) * spec.sin_angle() * spec.xyscale() - z * spec.zscale();
        let device = corner.device().expect("valid corner");
        assert!((device.x - sx).abs() < 1e-9);
        assert!((device.y - sy).abs() < 1e-9);
        assert_eq!(corner.color(), Some(crate::svg::legacy_color(z)));
    }

    #[test]
    fn infinite_and_nan_heights_are_invalid() {
        let spec = spec();
        let at_pole = CornerEvaluator::new(&spec, &pole, ColorScheme::Legacy).corner(5, 5);
        assert!(!at_pole.is_valid());
        assert!(at_pole.z().is_infinite());
        assert_eq!(at_pole.device(), None);

        let at_sinc = CornerEvaluator::new(&spec, &sinc, ColorScheme::Legacy).corner(5, 5);
        assert!(!at_sinc.is_valid());
        assert!(at_sinc.z().is_nan());
        assert_eq!(at_sinc.color(), None);
    }

    #[test]
    fn color_scheme_is_applied() {
        let spec = spec();
        let scheme = ColorScheme::HeightRamp {
            min: -1.0,
            max: 1.0,
        };
        let flat_high = |_x: f64, _y: f64| 2.0;
        let eval = CornerEvaluator::new(&spec, &flat_high, scheme);
        assert_eq!(
            eval.corner(0, 0).color().map(|c| c.to_string()),
            Some("#ff0000".to_string())
        );
    }
}
