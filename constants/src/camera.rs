use bevy::math::Vec3;

/// Camera sits on the +Z axis looking back at the origin.
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);

/// Distance from the camera to the model's plane (z = 0).
pub const CAMERA_DISTANCE: f32 = 5.0;

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
