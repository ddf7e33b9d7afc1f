use bevy::prelude::*;

use crate::settings::PlacementSettings;

/// Viewport dimensions and camera fov the placement is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub width: f32,
    pub height: f32,
    pub fov_degrees: f32,
}

/// Scale and resting position for the model before pointer-driven offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub scale: f32,
    pub position: Vec3,
    pub visible_width: f32,
    pub visible_height: f32,
}

/// Height of the view frustum slice at `distance` from the camera.
pub fn visible_height(fov_degrees: f32, distance: f32) -> f32 {
    let fov = fov_degrees.to_radians();
    2.0 * (fov / 2.0).tan() * distance
}

/// Piecewise scale rule. Tier bounds are exclusive, so a dimension sitting
/// exactly on a bound takes the next tier's factor.
pub fn scale_for_dimension(smallest_dimension: f32, settings: &PlacementSettings) -> f32 {
    let factor = settings
        .tiers
        .iter()
        .find(|tier| smallest_dimension < tier.below)
        .map_or(settings.fallback_factor, |tier| tier.factor);

    (smallest_dimension * factor).min(settings.max_scale)
}

/// Compute the model's uniform scale and base position.
///
/// Returns `None` for a collapsed viewport (minimised window, hidden canvas);
/// callers keep whatever placement they had.
pub fn compute_placement(
    metrics: &ViewportMetrics,
    camera_distance: f32,
    settings: &PlacementSettings,
) -> Option<Placement> {
    if metrics.width <= 0.0 || metrics.height <= 0.0 {
        return None;
    }

    let aspect = metrics.width / metrics.height;
    let visible_height = visible_height(metrics.fov_degrees, camera_distance);
    let visible_width = visible_height * aspect;
    let smallest_dimension = visible_width.min(visible_height);

    let scale = scale_for_dimension(smallest_dimension, settings);
    let y = settings.base_y - scale * settings.scale_drop;

    Some(Placement {
        scale,
        position: Vec3::new(0.0, y, 0.0),
        visible_width,
        visible_height,
    })
}
