use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::responsive::{Placement, ViewportMetrics, compute_placement};
use crate::engine::loading::model_loader::BatteryModel;
use crate::engine::scene::camera::ViewerCamera;
use crate::settings::ViewerSettings;

/// Latest placement, or `None` until the viewport first has a size.
#[derive(Resource, Debug, Default)]
pub struct BasePlacement {
    pub placement: Option<Placement>,
}

impl BasePlacement {
    /// Resting position for the orientation controller to offset from.
    pub fn position(&self) -> Vec3 {
        self.placement.map_or(Vec3::ZERO, |placement| placement.position)
    }
}

/// Recompute placement when the window size, camera fov or settings
/// change, and apply the new scale to the model.
pub fn update_base_placement(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<&Projection, With<ViewerCamera>>,
    settings: Res<ViewerSettings>,
    mut base: ResMut<BasePlacement>,
    mut models: Query<&mut Transform, With<BatteryModel>>,
    mut last_metrics: Local<Option<ViewportMetrics>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let fov_degrees = match cameras.single() {
        Ok(Projection::Perspective(perspective)) => perspective.fov.to_degrees(),
        _ => settings.camera.fov_degrees,
    };
    let metrics = ViewportMetrics {
        width: window.width(),
        height: window.height(),
        fov_degrees,
    };

    if *last_metrics == Some(metrics) && !settings.is_changed() {
        return;
    }
    *last_metrics = Some(metrics);

    let Some(placement) = compute_placement(&metrics, settings.camera.distance, &settings.placement)
    else {
        debug!("Viewport collapsed, keeping previous placement");
        return;
    };

    debug!(
        "Placement for {}x{}: scale {:.3}, y {:.3}",
        metrics.width, metrics.height, placement.scale, placement.position.y
    );
    base.placement = Some(placement);

    for mut transform in &mut models {
        transform.scale = Vec3::splat(placement.scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::window::WindowResolution;

    fn placement_app(width: f32, height: f32) -> App {
        let mut app = App::new();
        app.init_resource::<ViewerSettings>()
            .init_resource::<BasePlacement>()
            .add_systems(Update, update_base_placement);

        app.world_mut().spawn((
            Window {
                resolution: WindowResolution::new(width, height),
                ..default()
            },
            PrimaryWindow,
        ));
        app.world_mut().spawn((
            ViewerCamera,
            Projection::Perspective(PerspectiveProjection {
                fov: 75.0_f32.to_radians(),
                ..default()
            }),
        ));
        app.world_mut().spawn((BatteryModel, Transform::default()));
        app
    }

    fn model_scale(app: &mut App) -> Vec3 {
        app.world_mut()
            .query_filtered::<&Transform, With<BatteryModel>>()
            .single(app.world())
            .unwrap()
            .scale
    }

    #[test]
    fn model_is_scaled_for_window() {
        let mut app = placement_app(1920.0, 1080.0);
        app.update();

        let placement = app.world().resource::<BasePlacement>().placement.unwrap();
        assert!((placement.scale - 1.2277).abs() < 1e-3);
        assert_eq!(model_scale(&mut app), Vec3::splat(placement.scale));
    }

    #[test]
    fn resize_recomputes_placement() {
        let mut app = placement_app(1920.0, 1080.0);
        app.update();
        let wide = app.world().resource::<BasePlacement>().placement.unwrap();

        let mut window = app
            .world_mut()
            .query_filtered::<&mut Window, With<PrimaryWindow>>()
            .single_mut(app.world_mut())
            .unwrap();
        window.resolution.set(390.0, 844.0);
        app.update();

        let narrow = app.world().resource::<BasePlacement>().placement.unwrap();
        assert!(narrow.scale < wide.scale);
        assert!(narrow.position.y > wide.position.y);
        assert_eq!(model_scale(&mut app), Vec3::splat(narrow.scale));
    }

    #[test]
    fn position_defaults_to_origin_before_first_placement() {
        assert_eq!(BasePlacement::default().position(), Vec3::ZERO);
    }
}
