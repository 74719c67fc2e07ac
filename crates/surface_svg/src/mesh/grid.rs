//! Grid configuration and the isometric projection.
//!
//! [`GridSpec`] fixes how cell indices map to domain coordinates and how domain
//! points map to device (canvas) coordinates. Derived values (`xyscale` and the
//! sine/cosine of the projection angle) are recomputed by every setter that affects
//! them, so a spec is always internally consistent.
use std::f64::consts::FRAC_PI_6;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Plain, serializable grid parameters. Convert into a [`GridSpec`] to render.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParams {
    /// Number of cells along each axis.
    pub cells: u32,
    /// Width of the sampled domain; it spans `[-xyrange / 2, xyrange / 2]` on both axes.
    pub xyrange: f64,
    /// Canvas width in device units.
    pub width: u32,
    /// Canvas height in device units.
    pub height: u32,
    /// Device units per unit of height.
    pub zscale: f64,
    /// Angle of the x and y axes against the horizontal, in radians.
    pub angle: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            cells: 100,
            xyrange: 30.0,
            width: 1200,
            height: 640,
            zscale: 640.0 * 0.4,
            angle: FRAC_PI_6,
        }
    }
}

/// Immutable grid and projection configuration.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "GridParams", into = "GridParams")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    params: GridParams,
    xyscale: f64,
    sin_angle: f64,
    cos_angle: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::from(GridParams::default())
    }
}

impl From<GridParams> for GridSpec {
    fn from(params: GridParams) -> Self {
        let (sin_angle, cos_angle) = params.angle.sin_cos();
        Self {
            params,
            xyscale: params.width as f64 / 2.0 / params.xyrange,
            sin_angle,
            cos_angle,
        }
    }
}

impl From<GridSpec> for GridParams {
    fn from(spec: GridSpec) -> Self {
        spec.params
    }
}

impl GridSpec {
    /// Creates a spec from parameters without validating them.
    pub fn new(params: GridParams) -> Self {
        Self::from(params)
    }

    /// Creates a spec from parameters, returning an error if they are invalid.
    pub fn try_new(params: GridParams) -> Result<Self> {
        let spec = Self::from(params);
        spec.validate()?;
        Ok(spec)
    }

    /// Sets the number of cells per axis.
    pub fn with_cells(mut self, cells: u32) -> Self {
        self.params.cells = cells;
        self
    }

    /// Sets the domain range and re-derives `xyscale`.
    pub fn with_xyrange(self, xyrange: f64) -> Self {
        Self::from(GridParams {
            xyrange,
            ..self.params
        })
    }

    /// Sets the canvas size and re-derives `xyscale`. `zscale` is left unchanged.
    pub fn with_canvas(self, width: u32, height: u32) -> Self {
        Self::from(GridParams {
            width,
            height,
            ..self.params
        })
    }

    /// Sets the vertical scale.
    pub fn with_zscale(mut self, zscale: f64) -> Self {
        self.params.zscale = zscale;
        self
    }

    /// Sets the projection angle in radians and re-derives its sine and cosine.
    pub fn with_angle(self, angle: f64) -> Self {
        Self::from(GridParams {
            angle,
            ..self.params
        })
    }

    /// Validates the spec, returning an error if it cannot produce a drawing.
    ///
    /// Zero cells is valid and yields an empty drawing.
    pub fn validate(&self) -> Result<()> {
        let p = &self.params;
        if p.width == 0 || p.height == 0 {
            return Err(Error::InvalidConfig(
                "width and height must be > 0".into(),
            ));
        }
        if !p.xyrange.is_finite() || p.xyrange <= 0.0 {
            return Err(Error::InvalidConfig(
                "xyrange must be finite and > 0".into(),
            ));
        }
        if !p.zscale.is_finite() {
            return Err(Error::InvalidConfig("zscale must be finite".into()));
        }
        if !p.angle.is_finite() {
            return Err(Error::InvalidConfig("angle must be finite".into()));
        }
        Ok(())
    }

    pub fn params(&self) -> GridParams {
        self.params
    }

    pub fn cells(&self) -> u32 {
        self.params.cells
    }

    pub fn xyrange(&self) -> f64 {
        self.params.xyrange
    }

    pub fn width(&self) -> u32 {
        self.params.width
    }

    pub fn height(&self) -> u32 {
        self.params.height
    }

    pub fn zscale(&self) -> f64 {
        self.params.zscale
    }

    pub fn angle(&self) -> f64 {
        self.params.angle
    }

    /// Device units per domain unit, `width / 2 / xyrange`.
    pub fn xyscale(&self) -> f64 {
        self.xyscale
    }

    pub fn sin_angle(&self) -> f64 {
        self.sin_angle
    }

    pub fn cos_angle(&self) -> f64 {
        self.cos_angle
    }

    /// Total number of cells, `cells * cells`.
    pub fn cell_count(&self) -> usize {
        let n = self.params.cells as usize;
        n * n
    }

    /// Maps a corner index in `[0, cells]` to domain coordinates.
    ///
    /// Index `cells / 2` on both axes maps to the origin when `cells` is even.
    pub fn index_to_domain(&self, i: u32, j: u32) -> DVec2 {
        let n = self.params.cells as f64;
        let r = self.params.xyrange;
        DVec2::new(r * (i as f64 / n - 0.5), r * (j as f64 / n - 0.5))
    }

    /// Maps domain coordinates back to fractional corner indices.
    pub fn domain_to_index(&self, p: DVec2) -> DVec2 {
        let n = self.params.cells as f64;
        (p / self.params.xyrange + 0.5) * n
    }

    /// Projects a domain point at height `z` isometrically onto the canvas.
    pub fn project(&self, p: DVec2, z: f64) -> DVec2 {
        let half_w = self.params.width as f64 / 2.0;
        let half_h = self.params.height as f64 / 2.0;
        DVec2::new(
            half_w + (p.x - p.y) * self.cos_angle * self.xyscale,
            half_h + (p.x + p.y) * self.sin_angle * self.xyscale - z * self.params.zscale,
        )
    }

    /// Inverts [`GridSpec::project`] for a device point known to lie at height `z`.
    pub fn unproject(&self, device: DVec2, z: f64) -> DVec2 {
        let half_w = self.params.width as f64 / 2.0;
        let half_h = self.params.height as f64 / 2.0;
        let diff = (device.x - half_w) / (self.cos_angle * self.xyscale);
        let sum = (device.y - half_h + z * self.params.zscale) / (self.sin_angle * self.xyscale);
        DVec2::new((sum + diff) * 0.5, (sum - diff) * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_spec() -> GridSpec {
        GridSpec::default()
            .with_cells(4)
            .with_xyrange(2.0)
            .with_canvas(100, 100)
    }

    #[test]
    fn defaults_match_classic_surface_plot() {
        let spec = GridSpec::default();
        assert_eq!(spec.cells(), 100);
        assert_eq!(spec.xyrange(), 30.0);
        assert_eq!((spec.width(), spec.height()), (1200, 640));
        assert_eq!(spec.zscale(), 256.0);
        assert_eq!(spec.xyscale(), 20.0);
        assert!((spec.sin_angle() - 0.5).abs() < 1e-12);
        assert!((spec.cos_angle() - 3f64.sqrt() / 2.0).abs() < 1e-12);
        assert_eq!(spec.cell_count(), 10_000);
    }

    #[test]
    fn setters_rederive_scale_and_trig() {
        let spec = small_spec();
        assert_eq!(spec.xyscale(), 25.0);

        let spec = spec.with_angle(0.0);
        assert_eq!(spec.sin_angle(), 0.0);
        assert_eq!(spec.cos_angle(), 1.0);
    }

    #[test]
    fn center_index_maps_to_origin() {
        let spec = small_spec();
        assert_eq!(spec.index_to_domain(2, 2), DVec2::ZERO);
        assert_eq!(spec.index_to_domain(0, 0), DVec2::new(-1.0, -1.0));
        assert_eq!(spec.index_to_domain(4, 4), DVec2::new(1.0, 1.0));
    }

    #[test]
    fn domain_index_roundtrip() {
        let spec = small_spec();
        let p = spec.index_to_domain(3, 1);
        assert_eq!(spec.domain_to_index(p), DVec2::new(3.0, 1.0));
    }

    #[test]
    fn origin_projects_to_canvas_center_lifted_by_height() {
        let spec = small_spec();
        assert_eq!(spec.project(DVec2::ZERO, 0.0), DVec2::new(50.0, 50.0));
        assert_eq!(
            spec.project(DVec2::ZERO, 0.5),
            DVec2::new(50.0, 50.0 - 0.5 * spec.zscale())
        );
    }

    #[test]
    fn unproject_inverts_project() {
        let spec = GridSpec::default();
        let p = DVec2::new(3.5, -7.25);
        let device = spec.project(p, 0.3);
        let back = spec.unproject(device, 0.3);
        assert!((back - p).length() < 1e-9);
    }

    #[test]
    fn validate_rejects_degenerate_specs() {
        assert!(GridSpec::default().validate().is_ok());
        assert!(GridSpec::default().with_cells(0).validate().is_ok());
        assert!(GridSpec::default().with_canvas(0, 10).validate().is_err());
        assert!(GridSpec::default().with_xyrange(0.0).validate().is_err());
        assert!(GridSpec::default().with_xyrange(f64::NAN).validate().is_err());
        assert!(GridSpec::default()
            .with_zscale(f64::INFINITY)
            .validate()
            .is_err());
        assert!(GridSpec::try_new(GridParams {
            angle: f64::NAN,
            ..GridParams::default()
        })
        .is_err());
    }
}
