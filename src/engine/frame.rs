//! Frame builder: jittered point grid, triangulation and the light list.
//!
//! A frame covers one viewport size. Its mesh is generated once on
//! construction; afterwards only lights can be added. A resize means building
//! a new frame.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, instrument};

use super::light::Light;
use super::params::{MeshParams, MAX_CELLS_PER_SIDE};
use super::polygon::Polygon;
use crate::error::ParamsError;
use crate::lighting::shading::{self, ShadingParams};
use crate::math::color::Color;
use crate::math::utils;
use crate::math::vector::Vector;

/// Grid points indexed as `grid[row][column]`.
pub type PointGrid = Vec<Vec<Vector>>;

/// The generated mesh plus its lights.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Viewport height plus the margin on both sides.
    height: f64,
    /// Viewport width plus the margin on both sides.
    width: f64,
    params: MeshParams,
    polygons: Vec<Polygon>,
    lights: Vec<Light>,
}

impl Frame {
    /// Build a frame with default parameters and an entropy-seeded jitter.
    pub fn new(height: f64, width: f64) -> Self {
        Self::with_rng(height, width, &mut StdRng::from_entropy())
    }

    /// Build a frame whose jitter is fully determined by `seed`.
    pub fn seeded(height: f64, width: f64, seed: u64) -> Self {
        Self::with_rng(height, width, &mut StdRng::seed_from_u64(seed))
    }

    /// Build a frame with default parameters, drawing jitter from `rng`.
    ///
    /// Each side is cut to [`MAX_CELLS_PER_SIDE`] cells.
    pub fn with_rng<R: Rng + ?Sized>(height: f64, width: f64, rng: &mut R) -> Self {
        let params = MeshParams::default();
        let limit = MAX_CELLS_PER_SIDE as f64 * params.spacing;
        let height = expanded_extent(height, params.spacing).min(limit);
        let width = expanded_extent(width, params.spacing).min(limit);
        Self::build(height, width, params, rng)
    }

    /// Build a frame with custom parameters, drawing jitter from `rng`.
    ///
    /// Fails if either side would need more than [`MAX_CELLS_PER_SIDE`] cells.
    pub fn with_params<R: Rng + ?Sized>(
        height: f64,
        width: f64,
        params: MeshParams,
        rng: &mut R,
    ) -> Result<Self, ParamsError> {
        params.validate()?;

        let height = expanded_extent(height, params.spacing);
        let width = expanded_extent(width, params.spacing);
        let cells_x = (width / params.spacing).ceil();
        let cells_y = (height / params.spacing).ceil();
        let limit = MAX_CELLS_PER_SIDE as f64;
        if cells_x > limit || cells_y > limit {
            return Err(ParamsError::GridTooLarge { cells_x, cells_y, limit: MAX_CELLS_PER_SIDE });
        }

        Ok(Self::build(height, width, params, rng))
    }

    /// `height` and `width` already include the margin.
    #[instrument(level = "debug", skip(rng))]
    fn build<R: Rng + ?Sized>(height: f64, width: f64, params: MeshParams, rng: &mut R) -> Self {
        let mut frame = Self {
            height,
            width,
            params,
            polygons: Vec::new(),
            lights: Vec::new(),
        };

        let grid = frame.generate_point_array(rng);
        frame.polygons = triangulate(&grid);

        debug!(
            num_x = frame.num_x(),
            num_y = frame.num_y(),
            polygons = frame.polygons.len(),
            "generated mesh"
        );
        frame
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn params(&self) -> &MeshParams {
        &self.params
    }

    /// x of the first grid column, one spacing left of the viewport.
    pub fn base_x(&self) -> f64 {
        -self.params.spacing
    }

    /// y of the first grid row, one spacing above the viewport.
    pub fn base_y(&self) -> f64 {
        -self.params.spacing
    }

    /// Number of grid cells across; the grid has `num_x + 1` columns.
    pub fn num_x(&self) -> usize {
        (self.width / self.params.spacing).ceil() as usize
    }

    /// Number of grid cells down; the grid has `num_y + 1` rows.
    pub fn num_y(&self) -> usize {
        (self.height / self.params.spacing).ceil() as usize
    }

    /// Polygons in draw order.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Regular grid with every point displaced at random.
    ///
    /// x and y move by at most [`MeshParams::fuzz`], z is drawn from
    /// `[0, max_elevation]`.
    pub fn generate_point_array<R: Rng + ?Sized>(&self, rng: &mut R) -> PointGrid {
        let spacing = self.params.spacing;
        let fuzz = self.params.fuzz();
        let mut grid = Vec::with_capacity(self.num_y() + 1);

        for y in 0..=self.num_y() {
            let mut row = Vec::with_capacity(self.num_x() + 1);
            for x in 0..=self.num_x() {
                let fuzzy_x = x as f64 * spacing + self.base_x() + utils::symmetric_offset(rng, fuzz);
                let fuzzy_y = y as f64 * spacing + self.base_y() + utils::symmetric_offset(rng, fuzz);
                let fuzzy_z = utils::upto(rng, self.params.max_elevation);
                row.push(Vector::new(fuzzy_x, fuzzy_y, fuzzy_z));
            }
            grid.push(row);
        }

        grid
    }

    /// Register a light with colour `(r, g, b)` at `(x, y, z)`.
    pub fn add_light(&mut self, r: f64, g: f64, b: f64, x: f64, y: f64, z: f64) -> &Light {
        let light = Light::new(Color::new(r, g, b), Vector::new(x, y, z));
        debug!(?light, count = self.lights.len() + 1, "added light");
        self.lights.push(light);
        &self.lights[self.lights.len() - 1]
    }

    /// Largest distance between any two lights, 0 with fewer than two.
    pub fn max_light_dist(&self) -> f64 {
        self.lights
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                self.lights[i + 1..]
                    .iter()
                    .map(move |b| a.position().dist(b.position()))
            })
            .fold(0.0, f64::max)
    }

    /// Summed light on one polygon. Black when there are no lights.
    pub fn polygon_mix_color(&self, polygon: &Polygon, params: &ShadingParams) -> Color {
        shading::polygon_mix_color(polygon, &self.lights, params)
    }

    /// Colour of every polygon, in draw order.
    pub fn colors(&self, params: &ShadingParams) -> Vec<Color> {
        shading::shade_polygons(&self.polygons, &self.lights, params)
    }
}

/// Split every grid cell into two triangles.
///
/// For the cell whose top-right corner is `p = grid[y][x]` with `pr` to its
/// left, `pt` below it and `pd` below-left, emits `(p, pr, pd)` then
/// `(p, pt, pd)`. Cells are visited row by row, left to right. The last
/// column is never used as `p`.
pub fn triangulate(grid: &[Vec<Vector>]) -> Vec<Polygon> {
    let mut polygons = Vec::new();

    for rows in grid.windows(2) {
        let (row, next) = (&rows[0], &rows[1]);
        let columns = row.len().min(next.len());

        for x in 1..columns.saturating_sub(1) {
            let p = row[x];
            let pr = row[x - 1];
            let pt = next[x];
            let pd = next[x - 1];

            polygons.push(Polygon::new(p, pr, pd));
            polygons.push(Polygon::new(p, pt, pd));
        }
    }

    polygons
}

/// Viewport size plus one spacing of margin on both sides.
///
/// Sizes that are negative or not finite count as empty.
fn expanded_extent(v: f64, spacing: f64) -> f64 {
    let v = if v.is_finite() && v > 0.0 { v } else { 0.0 };
    v + 2.0 * spacing
}
