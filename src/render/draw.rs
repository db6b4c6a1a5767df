//! Hands a shaded frame to a drawing sink.

use tracing::instrument;

use super::sink::DrawingSink;
use crate::engine::frame::Frame;
use crate::engine::polygon::Polygon;
use crate::error::SinkError;
use crate::lighting::shading::ShadingParams;
use crate::math::color::Color;

/// Draw the background and then every polygon of `frame`, in mesh order.
///
/// Reads the frame only, so repeated calls emit the same commands.
#[instrument(level = "debug", skip_all, fields(polygons = frame.polygons().len(), lights = frame.lights().len()))]
pub fn draw_frame<S: DrawingSink + ?Sized>(
    frame: &Frame,
    params: &ShadingParams,
    sink: &mut S,
) -> Result<(), SinkError> {
    sink.fill_background(&params.background.to_hex())?;

    for (polygon, color) in frame.polygons().iter().zip(frame.colors(params)) {
        draw_polygon(polygon, color, params.line_width, sink)?;
    }
    Ok(())
}

/// Fill and outline one triangle in a single colour.
pub fn draw_polygon<S: DrawingSink + ?Sized>(
    polygon: &Polygon,
    color: Color,
    line_width: f64,
    sink: &mut S,
) -> Result<(), SinkError> {
    let hex = color.to_hex();

    sink.begin_path()?;
    sink.move_to(polygon.a.x, polygon.a.y)?;
    sink.line_to(polygon.b.x, polygon.b.y)?;
    sink.line_to(polygon.c.x, polygon.c.y)?;
    sink.close_path()?;
    sink.fill(&hex)?;
    sink.stroke(&hex, line_width)
}
