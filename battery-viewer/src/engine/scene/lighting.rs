use std::f32::consts::PI;

use bevy::prelude::*;
use constants::render_settings::{
    AMBIENT_BRIGHTNESS_PER_UNIT, AMBIENT_INTENSITY, POINT_LIGHT_RANGE, POINT_LIGHTS,
};

/// Uniform ambient fill for the whole scene.
pub fn ambient_light() -> AmbientLight {
    AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_INTENSITY * AMBIENT_BRIGHTNESS_PER_UNIT,
        ..default()
    }
}

/// Bevy point lights take lumens; an isotropic source emits 4π lumens per
/// candela.
pub fn candela_to_lumens(candela: f32) -> f32 {
    candela * 4.0 * PI
}

pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(ambient_light());

    for (index, light) in POINT_LIGHTS.iter().enumerate() {
        commands.spawn((
            Name::new(format!("Point Light {}", index)),
            PointLight {
                color: light.colour,
                intensity: candela_to_lumens(light.candela),
                range: POINT_LIGHT_RANGE,
                ..default()
            },
            Transform::from_translation(light.position),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lumens_conversion() {
        assert!((candela_to_lumens(1.0) - 12.566_371).abs() < 1e-4);
        assert_eq!(candela_to_lumens(0.0), 0.0);
    }

    #[test]
    fn spawns_ambient_and_both_point_lights() {
        let mut app = App::new();
        app.add_systems(Startup, |mut commands: Commands| spawn_lighting(&mut commands));
        app.update();

        let ambient = app.world().resource::<AmbientLight>();
        assert_eq!(ambient.brightness, 500.0);

        let mut lights: Vec<(PointLight, Transform)> = app
            .world_mut()
            .query::<(&PointLight, &Transform)>()
            .iter(app.world())
            .map(|(light, transform)| (light.clone(), *transform))
            .collect();
        lights.sort_by(|a, b| b.0.intensity.total_cmp(&a.0.intensity));

        assert_eq!(lights.len(), 2);
        assert_eq!(lights[0].1.translation, Vec3::new(-10.0, 10.0, -10.0));
        assert_eq!(lights[1].1.translation, Vec3::new(-3.0, 4.0, 6.0));
        assert!((lights[0].0.intensity - 1950.0 * 4.0 * PI).abs() < 1e-2);
    }
}
