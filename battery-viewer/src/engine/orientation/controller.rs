use bevy::prelude::*;

use crate::settings::OrientationSettings;

/// Which input currently owns the model's rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OrientationMode {
    /// Rotation eases toward a target derived from the cursor.
    #[default]
    Following,
    /// Rotation tracks the drag 1:1; `last_screen` is the previous pointer
    /// position in pixels.
    Dragging { last_screen: Vec2 },
}

/// Transform the controller wants applied this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelTransform {
    pub position: Vec3,
    /// Euler angles in radians, XYZ order.
    pub rotation: Vec3,
}

impl ModelTransform {
    pub fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}

/// Two-state orientation machine driven once per frame.
///
/// `baseline` is the resting rotation hover deflection is added to; drags
/// write straight into it. `rotation` is what was last rendered.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct OrientationController {
    mode: OrientationMode,
    baseline: Vec3,
    rotation: Vec3,
}

impl OrientationController {
    pub fn mode(&self) -> OrientationMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, OrientationMode::Dragging { .. })
    }

    pub fn baseline(&self) -> Vec3 {
        self.baseline
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Begin a drag. The rendered rotation becomes the new baseline so a
    /// drag started mid-ease does not jump.
    pub fn pointer_down(&mut self, screen: Vec2) {
        self.baseline = self.rotation;
        self.mode = OrientationMode::Dragging {
            last_screen: screen,
        };
    }

    /// Feed a pointer position while dragging. Ignored while following.
    pub fn drag_to(&mut self, screen: Vec2, settings: &OrientationSettings) {
        let OrientationMode::Dragging { last_screen } = self.mode else {
            return;
        };

        let delta = screen - last_screen;
        self.baseline.y += delta.x * settings.drag_radians_per_pixel;
        self.baseline.x += delta.y * settings.drag_radians_per_pixel;
        self.mode = OrientationMode::Dragging {
            last_screen: screen,
        };
    }

    /// End a drag. The dragged baseline stays as the hover baseline.
    pub fn pointer_up(&mut self) {
        self.mode = OrientationMode::Following;
    }

    /// Rotation the hover state eases toward for a normalised pointer.
    pub fn hover_target(&self, pointer: Vec2, settings: &OrientationSettings) -> Vec3 {
        Vec3::new(
            self.baseline.x + pointer.y * settings.hover_pitch_gain,
            self.baseline.y + pointer.x * settings.hover_yaw_gain,
            self.baseline.z,
        )
    }

    /// Advance one frame and return the transform to render.
    pub fn tick(
        &mut self,
        pointer: Vec2,
        base_position: Vec3,
        settings: &OrientationSettings,
    ) -> ModelTransform {
        self.rotation = match self.mode {
            OrientationMode::Dragging { .. } => self.baseline,
            OrientationMode::Following => {
                let target = self.hover_target(pointer, settings);
                self.rotation + (target - self.rotation) * settings.easing
            }
        };

        ModelTransform {
            position: base_position + pivot_offset(self.rotation.x, settings.pivot_offset),
            rotation: self.rotation,
        }
    }
}

/// Offset that keeps pitch visually anchored `pivot` units above the origin.
/// Only `y` and `z` move; `y` is never negative.
pub fn pivot_offset(pitch: f32, pivot: f32) -> Vec3 {
    Vec3::new(0.0, (1.0 - pitch.cos()) * pivot, -pitch.sin() * pivot)
}
