//! Per-polygon shading.
//!
//! Every light contributes a colour to every polygon, scaled by a linear
//! distance falloff and by the angle between the polygon normal and the
//! direction to the light. Contributions are summed channel-wise. There are no
//! shadows and no occlusion between polygons.

use tracing::trace;

use crate::engine::light::Light;
use crate::engine::params::{check_non_negative, check_positive};
use crate::engine::polygon::Polygon;
use crate::error::ParamsError;
use crate::math::color::Color;

/// Distance at which a light stops contributing.
pub const MAX_LIGHT_DIST: f64 = 1500.0;

/// Multiplier applied after the distance falloff.
pub const COLOR_DIST_DROP_OFF: f64 = 3.0;

/// Share of a light a polygon facing away from it still receives.
pub const AMBIENT_FLOOR: f64 = 0.25;

/// Stroke width of the triangle outlines.
pub const LINE_WIDTH: f64 = 2.0;

/// Shading and drawing parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadingParams {
    /// Lights further than this from a polygon centre contribute nothing.
    pub max_dist: f64,
    /// Brightness multiplier on top of the falloff.
    pub drop_off: f64,
    /// Angle term at grazing incidence; rises linearly with cos(angle) to 1.
    pub ambient_floor: f64,
    /// Outline stroke width.
    pub line_width: f64,
    /// Canvas colour behind the mesh.
    pub background: Color,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            max_dist: MAX_LIGHT_DIST,
            drop_off: COLOR_DIST_DROP_OFF,
            ambient_floor: AMBIENT_FLOOR,
            line_width: LINE_WIDTH,
            background: Color::BLACK,
        }
    }
}

impl ShadingParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        check_positive("max_dist", self.max_dist)?;
        check_non_negative("drop_off", self.drop_off)?;
        check_non_negative("ambient_floor", self.ambient_floor)?;
        check_non_negative("line_width", self.line_width)
    }

    /// Angle term: `ambient_floor` when `cos_angle` is 0, exactly 1 when it is 1.
    #[inline]
    pub fn angle_factor(&self, cos_angle: f64) -> f64 {
        self.ambient_floor + cos_angle * (1.0 - self.ambient_floor)
    }
}

/// Contribution of one light to one polygon.
pub fn polygon_color_part(polygon: &Polygon, light: &Light, params: &ShadingParams) -> Color {
    let center = polygon.center();

    let rel_dist = light.position().dist(center) / params.max_dist;
    let color = light.color().mult((1.0 - rel_dist).max(0.0) * params.drop_off);

    let angle = polygon
        .orthogonal()
        .angle_between(light.position().sub(center))
        .abs();
    color.mult(params.angle_factor(angle.cos()))
}

/// Sum of all light contributions on a polygon, black without lights.
pub fn polygon_mix_color(polygon: &Polygon, lights: &[Light], params: &ShadingParams) -> Color {
    lights
        .iter()
        .map(|light| polygon_color_part(polygon, light, params))
        .fold(Color::BLACK, |acc, part| acc.add(part))
}

/// Colours for a list of polygons, same order.
pub fn shade_polygons(polygons: &[Polygon], lights: &[Light], params: &ShadingParams) -> Vec<Color> {
    polygons
        .iter()
        .map(|polygon| {
            let color = polygon_mix_color(polygon, lights, params);
            trace!(?polygon, ?color, "shaded polygon");
            color
        })
        .collect()
}

/// Build ShadingParams from a flat f64 array.
///
/// Layout: [max_dist, drop_off, ambient_floor, line_width, bg_r, bg_g, bg_b].
/// Missing trailing values keep their defaults; the background is only read
/// when all three channels are present.
pub fn shading_params_from_buffer(data: &[f64]) -> Result<ShadingParams, ParamsError> {
    let mut params = ShadingParams::default();

    if let Some(&max_dist) = data.first() {
        params.max_dist = max_dist;
    }
    if let Some(&drop_off) = data.get(1) {
        params.drop_off = drop_off;
    }
    if let Some(&ambient_floor) = data.get(2) {
        params.ambient_floor = ambient_floor;
    }
    if let Some(&line_width) = data.get(3) {
        params.line_width = line_width;
    }
    if let Some(&[r, g, b]) = data.get(4..7).and_then(|s| <&[f64; 3]>::try_from(s).ok()) {
        params.background = Color::new(r, g, b);
    }

    params.validate()?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vector::Vector;

    fn flat() -> Polygon {
        Polygon::new(
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(30.0, 0.0, 0.0),
            Vector::new(0.0, 30.0, 0.0),
        )
    }

    fn assert_color_eq(a: Color, b: Color) {
        assert!((a.x - b.x).abs() < 1e-9, "{a:?} != {b:?}");
        assert!((a.y - b.y).abs() < 1e-9, "{a:?} != {b:?}");
        assert!((a.z - b.z).abs() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn test_light_beyond_max_dist_contributes_nothing() {
        let params = ShadingParams::default();
        let center = flat().center();
        for d in [1500.0, 1500.5, 4000.0] {
            let light = Light::new(Color::new(255.0, 255.0, 255.0), center.add(Vector::new(0.0, 0.0, d)));
            let part = polygon_color_part(&flat(), &light, &params);
            assert!(part.len() < 1e-9, "distance {d}: {part:?}");
        }
    }

    #[test]
    fn test_light_along_normal_has_full_angle_term() {
        let params = ShadingParams::default();
        let polygon = Polygon::new(
            Vector::new(3.0, 1.0, 4.0),
            Vector::new(41.0, 5.0, 9.0),
            Vector::new(2.0, 36.0, 5.0),
        );
        let normal = polygon.orthogonal();
        let offset = normal.mult(300.0 / normal.len());
        let light = Light::new(Color::new(100.0, 50.0, 20.0), polygon.center().add(offset));

        let falloff = (1.0 - 300.0 / 1500.0) * 3.0;
        let expected = Color::new(100.0, 50.0, 20.0).mult(falloff);
        assert_color_eq(polygon_color_part(&polygon, &light, &params), expected);
    }

    #[test]
    fn test_light_in_plane_gets_ambient_floor() {
        let params = ShadingParams::default();
        let polygon = flat();
        let center = polygon.center();
        let light = Light::new(Color::new(200.0, 200.0, 200.0), center.add(Vector::new(750.0, 0.0, 0.0)));

        let expected = Color::new(200.0, 200.0, 200.0).mult(0.5 * 3.0 * 0.25);
        assert_color_eq(polygon_color_part(&polygon, &light, &params), expected);
    }

    #[test]
    fn test_light_on_center_is_neutral() {
        let params = ShadingParams::default();
        let polygon = flat();
        let light = Light::new(Color::new(100.0, 0.0, 0.0), polygon.center());
        // Zero direction: treated as perpendicular, so only the floor remains
        assert_color_eq(
            polygon_color_part(&polygon, &light, &params),
            Color::new(100.0 * 3.0 * 0.25, 0.0, 0.0),
        );
    }

    #[test]
    fn test_mix_without_lights_is_black() {
        assert_eq!(polygon_mix_color(&flat(), &[], &ShadingParams::default()), Color::BLACK);
    }

    #[test]
    fn test_mix_sums_parts() {
        let params = ShadingParams::default();
        let polygon = flat();
        let lights = [
            Light::new(Color::new(0.0, 100.0, 100.0), Vector::new(10.0, 10.0, 50.0)),
            Light::new(Color::new(100.0, 0.0, 100.0), Vector::new(400.0, 300.0, 50.0)),
        ];
        let expected = polygon_color_part(&polygon, &lights[0], &params)
            .add(polygon_color_part(&polygon, &lights[1], &params));
        assert_color_eq(polygon_mix_color(&polygon, &lights, &params), expected);

        let reversed = [lights[1], lights[0]];
        assert_color_eq(polygon_mix_color(&polygon, &reversed, &params), expected);
    }

    #[test]
    fn test_shade_polygons_keeps_order() {
        let params = ShadingParams::default();
        let near = flat();
        let far = Polygon::new(
            Vector::new(1000.0, 0.0, 0.0),
            Vector::new(1030.0, 0.0, 0.0),
            Vector::new(1000.0, 30.0, 0.0),
        );
        let lights = [Light::new(Color::new(255.0, 0.0, 0.0), Vector::ZERO)];
        let colors = shade_polygons(&[near, far], &lights, &params);
        assert_eq!(colors.len(), 2);
        assert!(colors[0].r() > colors[1].r());
    }

    #[test]
    fn test_angle_factor() {
        let params = ShadingParams::default();
        assert!((params.angle_factor(1.0) - 1.0).abs() < 1e-12);
        assert!((params.angle_factor(0.0) - 0.25).abs() < 1e-12);
        assert!((params.angle_factor(0.5) - 0.625).abs() < 1e-12);
    }

    #[test]
    fn test_from_buffer() {
        assert_eq!(shading_params_from_buffer(&[]), Ok(ShadingParams::default()));

        let p = shading_params_from_buffer(&[1000.0, 2.0]).unwrap();
        assert_eq!(p.max_dist, 1000.0);
        assert_eq!(p.drop_off, 2.0);
        assert_eq!(p.ambient_floor, AMBIENT_FLOOR);

        let p = shading_params_from_buffer(&[1000.0, 2.0, 0.1, 1.0, 10.0, 20.0, 30.0]).unwrap();
        assert_eq!(p.background, Color::new(10.0, 20.0, 30.0));
        assert_eq!(p.line_width, 1.0);

        // Incomplete background is ignored
        let p = shading_params_from_buffer(&[1000.0, 2.0, 0.1, 1.0, 10.0]).unwrap();
        assert_eq!(p.background, Color::BLACK);
    }

    #[test]
    fn test_from_buffer_rejects_bad_values() {
        assert!(matches!(
            shading_params_from_buffer(&[0.0]),
            Err(ParamsError::NotPositive { name: "max_dist", .. })
        ));
        assert!(matches!(
            shading_params_from_buffer(&[1500.0, f64::NAN]),
            Err(ParamsError::Negative { name: "drop_off", .. })
        ));
    }
}
