use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;
use constants::camera::CAMERA_POSITION;

use crate::settings::{CameraSettings, ViewerSettings};

#[derive(Component)]
pub struct ViewerCamera;

/// Perspective camera on +Z looking at the origin. The clear colour is
/// fully transparent so the page behind the canvas shows through.
pub fn spawn_camera(commands: &mut Commands, settings: &CameraSettings) {
    commands.spawn((
        Name::new("Viewer Camera"),
        ViewerCamera,
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: settings.fov_degrees.to_radians(),
            ..default()
        }),
        Msaa::Sample4,
        camera_transform(settings),
    ));
}

fn camera_transform(settings: &CameraSettings) -> Transform {
    Transform::from_translation(CAMERA_POSITION.normalize() * settings.distance)
        .looking_at(Vec3::ZERO, Vec3::Y)
}

/// Re-apply fov and distance after settings are swapped in.
pub fn apply_camera_settings(
    settings: Res<ViewerSettings>,
    mut cameras: Query<(&mut Projection, &mut Transform), With<ViewerCamera>>,
) {
    for (mut projection, mut transform) in &mut cameras {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.fov = settings.camera.fov_degrees.to_radians();
        }
        *transform = camera_transform(&settings.camera);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_sits_at_distance_on_z() {
        let transform = camera_transform(&CameraSettings::default());
        assert!((transform.translation - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-6);
        assert!((transform.forward().as_vec3() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn settings_change_moves_camera_and_fov() {
        let mut app = App::new();
        app.init_resource::<ViewerSettings>()
            .add_systems(Startup, |mut commands: Commands| {
                spawn_camera(&mut commands, &CameraSettings::default());
            })
            .add_systems(Update, apply_camera_settings);
        app.update();

        {
            let mut settings = app.world_mut().resource_mut::<ViewerSettings>();
            settings.camera.distance = 8.0;
            settings.camera.fov_degrees = 50.0;
        }
        app.update();

        let (projection, transform) = app
            .world_mut()
            .query_filtered::<(&Projection, &Transform), With<ViewerCamera>>()
            .single(app.world())
            .unwrap();
        let Projection::Perspective(perspective) = projection else {
            panic!("expected perspective projection");
        };
        assert!((perspective.fov - 50.0_f32.to_radians()).abs() < 1e-6);
        assert!((transform.translation.z - 8.0).abs() < 1e-5);
    }
}
