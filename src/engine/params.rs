//! Mesh generation parameters and their JS buffer layout.

use crate::error::ParamsError;

/// Distance between neighbouring grid points, in display units.
pub const POINT_SPACING: f64 = 40.0;

/// Jitter amplitude as a fraction of the spacing.
pub const JITTER_WEIGHT: f64 = 0.25;

/// Upper bound of the random z offset of mesh points.
pub const MAX_ELEVATION: f64 = 15.0;

/// Most grid cells along either axis of a frame.
pub const MAX_CELLS_PER_SIDE: usize = 512;

/// Parameters for building the jittered point grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshParams {
    /// Grid spacing; also the margin added on every side of the viewport.
    pub spacing: f64,
    /// x/y jitter is uniform in `[-spacing * jitter_weight, spacing * jitter_weight]`.
    /// Must stay below 0.5 so neighbouring points can never meet.
    pub jitter_weight: f64,
    /// z is uniform in `[0, max_elevation]`. Not used for projection.
    pub max_elevation: f64,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            spacing: POINT_SPACING,
            jitter_weight: JITTER_WEIGHT,
            max_elevation: MAX_ELEVATION,
        }
    }
}

impl MeshParams {
    /// Maximum x/y displacement of a grid point.
    pub fn fuzz(&self) -> f64 {
        self.spacing * self.jitter_weight
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        check_positive("spacing", self.spacing)?;
        if !(0.0..0.5).contains(&self.jitter_weight) {
            return Err(ParamsError::JitterWeight(self.jitter_weight));
        }
        check_non_negative("max_elevation", self.max_elevation)
    }
}

pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<(), ParamsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamsError::NotPositive { name, value })
    }
}

pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<(), ParamsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ParamsError::Negative { name, value })
    }
}

/// Build MeshParams from a flat f64 array.
///
/// Layout: [spacing, jitter_weight, max_elevation]. Missing trailing values
/// keep their defaults; an empty buffer gives the defaults.
pub fn mesh_params_from_buffer(data: &[f64]) -> Result<MeshParams, ParamsError> {
    let mut params = MeshParams::default();

    if let Some(&spacing) = data.first() {
        params.spacing = spacing;
    }
    if let Some(&jitter_weight) = data.get(1) {
        params.jitter_weight = jitter_weight;
    }
    if let Some(&max_elevation) = data.get(2) {
        params.max_elevation = max_elevation;
    }

    params.validate()?;
    Ok(params)
}
