use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

pub mod engine;
pub mod error;
pub mod lighting;
pub mod math;
pub mod render;

pub use engine::frame::Frame;
pub use engine::light::Light;
pub use engine::params::MeshParams;
pub use engine::polygon::Polygon;
pub use lighting::shading::ShadingParams;
pub use math::color::Color;
pub use math::vector::Vector;
pub use render::sink::DrawingSink;

use engine::params::mesh_params_from_buffer;
use lighting::shading::shading_params_from_buffer;
use rand::{rngs::StdRng, SeedableRng};
use render::canvas::CanvasSink;

/// Values per polygon in [`MeshScene::triangles`].
pub const TRIANGLE_STRIDE: usize = 9;

/// Initialize the WASM module (call once from JS).
///
/// Routes panics and tracing events to the browser console. Debug builds log
/// at `DEBUG`, release builds at `INFO`.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_family = "wasm")]
    {
        #[cfg(debug_assertions)]
        const MAX_TRACING_LEVEL: tracing::Level = tracing::Level::DEBUG;
        #[cfg(not(debug_assertions))]
        const MAX_TRACING_LEVEL: tracing::Level = tracing::Level::INFO;

        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default_with_config(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(MAX_TRACING_LEVEL)
                .build(),
        );
    }
}

/// A frame plus the shading parameters used to draw it.
///
/// Build one per viewport size; on resize, drop it and build a new one.
#[wasm_bindgen]
pub struct MeshScene {
    frame: Frame,
    shading: ShadingParams,
}

#[wasm_bindgen]
impl MeshScene {
    /// Mesh covering a `width` × `height` viewport with random jitter.
    #[wasm_bindgen(constructor)]
    pub fn new(height: f64, width: f64) -> MeshScene {
        Self::from_frame(Frame::new(height, width))
    }

    /// Same as the constructor, but the jitter is fixed by `seed`.
    pub fn seeded(height: f64, width: f64, seed: u32) -> MeshScene {
        Self::from_frame(Frame::seeded(height, width, seed as u64))
    }

    /// Build with custom parameters.
    ///
    /// `mesh_params` — Float64Array [spacing, jitter_weight, max_elevation]
    /// `shading_params` — Float64Array [max_dist, drop_off, ambient_floor, line_width, bg_r, bg_g, bg_b]
    /// Either may be empty or short; missing values keep their defaults.
    #[wasm_bindgen(js_name = withParams)]
    pub fn with_params(
        height: f64,
        width: f64,
        mesh_params: &[f64],
        shading_params: &[f64],
        seed: Option<u32>,
    ) -> Result<MeshScene, JsValue> {
        let mesh = mesh_params_from_buffer(mesh_params)?;
        let shading = shading_params_from_buffer(shading_params)?;

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed as u64),
            None => StdRng::from_entropy(),
        };
        let frame = Frame::with_params(height, width, mesh, &mut rng)?;
        Ok(MeshScene { frame, shading })
    }

    /// Register a light with colour `(r, g, b)` at `(x, y, z)`. Returns the new light count.
    #[wasm_bindgen(js_name = addLight)]
    pub fn add_light(&mut self, r: f64, g: f64, b: f64, x: f64, y: f64, z: f64) -> usize {
        self.frame.add_light(r, g, b, x, y, z);
        self.frame.lights().len()
    }

    /// Replace the background colour with a `#rrggbb` string.
    #[wasm_bindgen(js_name = setBackground)]
    pub fn set_background(&mut self, hex: &str) -> Result<(), JsValue> {
        self.shading.background = Color::from_hex(hex)?;
        Ok(())
    }

    /// Paint the background and every shaded triangle onto `ctx`.
    ///
    /// Does not change the scene; call again on every redraw.
    #[wasm_bindgen(js_name = drawOnCanvas)]
    pub fn draw_on_canvas(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        render::draw::draw_frame(&self.frame, &self.shading, &mut CanvasSink::new(ctx))?;
        Ok(())
    }

    /// Shaded triangles for hosts that rasterize themselves.
    ///
    /// Layout: for each polygon in draw order [ax, ay, bx, by, cx, cy, r, g, b],
    /// channels rounded and clamped to [0, 250].
    pub fn triangles(&self) -> Vec<f64> {
        let polygons = self.frame.polygons();
        let mut out = Vec::with_capacity(polygons.len() * TRIANGLE_STRIDE);

        for (polygon, color) in polygons.iter().zip(self.frame.colors(&self.shading)) {
            let [a, b, c] = polygon.vertices();
            let [r, g, bl] = color.channels();
            out.extend_from_slice(&[a.x, a.y, b.x, b.y, c.x, c.y]);
            out.extend_from_slice(&[r as f64, g as f64, bl as f64]);
        }

        out
    }

    #[wasm_bindgen(js_name = polygonCount)]
    pub fn polygon_count(&self) -> usize {
        self.frame.polygons().len()
    }

    #[wasm_bindgen(js_name = lightCount)]
    pub fn light_count(&self) -> usize {
        self.frame.lights().len()
    }

    /// Largest distance between two lights.
    #[wasm_bindgen(js_name = maxLightDist)]
    pub fn max_light_dist(&self) -> f64 {
        self.frame.max_light_dist()
    }

    /// Mesh width including the margin.
    pub fn width(&self) -> f64 {
        self.frame.width()
    }

    /// Mesh height including the margin.
    pub fn height(&self) -> f64 {
        self.frame.height()
    }
}

impl MeshScene {
    pub fn from_frame(frame: Frame) -> Self {
        Self { frame, shading: ShadingParams::default() }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn shading(&self) -> &ShadingParams {
        &self.shading
    }

    /// Draw onto any sink, for hosts that are not a browser canvas.
    pub fn draw_on<S: DrawingSink + ?Sized>(&self, sink: &mut S) -> Result<(), error::SinkError> {
        render::draw::draw_frame(&self.frame, &self.shading, sink)
    }
}
