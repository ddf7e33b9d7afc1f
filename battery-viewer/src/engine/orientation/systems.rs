use bevy::prelude::*;

use super::controller::OrientationController;
use crate::engine::loading::model_loader::BatteryModel;
use crate::engine::placement::systems::BasePlacement;
use crate::input::pointer::PointerState;
use crate::settings::ViewerSettings;

/// Advance the controller one frame and write its rotation and pivot-
/// adjusted position onto the model. Scale is owned by placement.
pub fn drive_model_orientation(
    mut controller: ResMut<OrientationController>,
    pointer: Res<PointerState>,
    base: Res<BasePlacement>,
    settings: Res<ViewerSettings>,
    mut models: Query<&mut Transform, With<BatteryModel>>,
) {
    let model_transform =
        controller.tick(pointer.normalized, base.position(), &settings.orientation);

    for mut transform in &mut models {
        transform.translation = model_transform.position;
        transform.rotation = model_transform.quat();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::placement::responsive::Placement;

    fn orientation_app() -> App {
        let mut app = App::new();
        app.init_resource::<OrientationController>()
            .init_resource::<PointerState>()
            .init_resource::<ViewerSettings>()
            .insert_resource(BasePlacement {
                placement: Some(Placement {
                    scale: 1.2,
                    position: Vec3::new(0.0, -1.46, 0.0),
                    visible_width: 13.6,
                    visible_height: 7.7,
                }),
            })
            .add_systems(Update, drive_model_orientation);
        app.world_mut()
            .spawn((BatteryModel, Transform::from_scale(Vec3::splat(1.2))));
        app
    }

    fn model_transform(app: &mut App) -> Transform {
        *app.world_mut()
            .query_filtered::<&Transform, With<BatteryModel>>()
            .single(app.world())
            .unwrap()
    }

    #[test]
    fn centred_pointer_rests_on_base_position() {
        let mut app = orientation_app();
        app.update();

        let transform = model_transform(&mut app);
        assert_eq!(transform.translation, Vec3::new(0.0, -1.46, 0.0));
        assert_eq!(transform.rotation, Quat::IDENTITY);
        assert_eq!(transform.scale, Vec3::splat(1.2));
    }

    #[test]
    fn hover_turns_model_toward_pointer() {
        let mut app = orientation_app();
        app.world_mut().resource_mut::<PointerState>().normalized = Vec2::new(1.0, 0.0);
        for _ in 0..30 {
            app.update();
        }

        let transform = model_transform(&mut app);
        let (_, yaw, _) = transform.rotation.to_euler(EulerRot::XYZ);
        assert!(yaw > 0.0 && yaw < 0.2);
        // No pitch, so no pivot shift.
        assert!((transform.translation.y - (-1.46)).abs() < 1e-6);
    }
}
