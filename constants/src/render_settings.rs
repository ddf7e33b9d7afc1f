use bevy::color::Color;
use bevy::math::Vec3;

/// Ambient fill, as the unitless intensity the scene was lit with.
pub const AMBIENT_INTENSITY: f32 = 5.0;

/// Bevy ambient brightness per unit of ambient intensity.
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 100.0;

pub struct PointLightInfo {
    pub position: Vec3,
    /// Luminous intensity in candela.
    pub candela: f32,
    pub colour: Color,
}

/// Key light from behind and above, plus a cool fill from the front.
pub const POINT_LIGHTS: &[PointLightInfo] = &[
    PointLightInfo {
        position: Vec3::new(-10.0, 10.0, -10.0),
        candela: 1950.0,
        colour: Color::WHITE,
    },
    PointLightInfo {
        position: Vec3::new(-3.0, 4.0, 6.0),
        candela: 300.0,
        // css "lightblue"
        colour: Color::srgb(0.678, 0.847, 0.902),
    },
];

/// Range of each point light in world units.
pub const POINT_LIGHT_RANGE: f32 = 50.0;
