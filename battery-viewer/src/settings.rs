use bevy::prelude::*;
use constants::{camera, orientation, path, placement};
use serde::{Deserialize, Serialize};

/// Runtime configuration for the viewer.
///
/// Loaded from `viewer.settings.json` as a JSON asset. Any field left out of
/// the file keeps its default from the `constants` crate.
#[derive(Resource, Asset, TypePath, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub model_path: String,
    pub camera: CameraSettings,
    pub placement: PlacementSettings,
    pub orientation: OrientationSettings,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            model_path: path::MODEL_ASSET_PATH.to_string(),
            camera: CameraSettings::default(),
            placement: PlacementSettings::default(),
            orientation: OrientationSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Distance from the camera to the model plane.
    pub distance: f32,
    pub fov_degrees: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            distance: camera::CAMERA_DISTANCE,
            fov_degrees: camera::CAMERA_FOV_DEGREES,
        }
    }
}

/// One step of the piecewise scale rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTier {
    /// Exclusive upper bound on the smallest visible dimension.
    pub below: f32,
    pub factor: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSettings {
    /// Checked in order; the first tier whose bound exceeds the dimension wins.
    pub tiers: Vec<ScaleTier>,
    pub fallback_factor: f32,
    pub max_scale: f32,
    pub base_y: f32,
    pub scale_drop: f32,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            tiers: placement::SCALE_TIERS
                .iter()
                .map(|&(below, factor)| ScaleTier { below, factor })
                .collect(),
            fallback_factor: placement::SCALE_FALLBACK_FACTOR,
            max_scale: placement::MAX_MODEL_SCALE,
            base_y: placement::BASE_Y_OFFSET,
            scale_drop: placement::SCALE_Y_DROP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationSettings {
    pub hover_yaw_gain: f32,
    pub hover_pitch_gain: f32,
    /// Lerp factor per frame, expected in (0, 1).
    pub easing: f32,
    pub drag_radians_per_pixel: f32,
    pub pivot_offset: f32,
}

impl Default for OrientationSettings {
    fn default() -> Self {
        Self {
            hover_yaw_gain: orientation::HOVER_YAW_GAIN,
            hover_pitch_gain: orientation::HOVER_PITCH_GAIN,
            easing: orientation::HOVER_EASING,
            drag_radians_per_pixel: orientation::DRAG_RADIANS_PER_PIXEL,
            pivot_offset: orientation::PIVOT_OFFSET,
        }
    }
}

impl ViewerSettings {
    /// Clamp values that would break the controller into a usable range.
    pub fn sanitised(mut self) -> Self {
        if !(self.orientation.easing > 0.0 && self.orientation.easing < 1.0) {
            warn!(
                "Easing {} outside (0, 1), using {}",
                self.orientation.easing,
                orientation::HOVER_EASING
            );
            self.orientation.easing = orientation::HOVER_EASING;
        }
        if !(self.camera.fov_degrees > 0.0 && self.camera.fov_degrees < 180.0) {
            warn!(
                "Field of view {} outside (0, 180), using {}",
                self.camera.fov_degrees,
                camera::CAMERA_FOV_DEGREES
            );
            self.camera.fov_degrees = camera::CAMERA_FOV_DEGREES;
        }
        if !(self.camera.distance.is_finite() && self.camera.distance > 0.0) {
            warn!(
                "Camera distance {} must be positive, using {}",
                self.camera.distance,
                camera::CAMERA_DISTANCE
            );
            self.camera.distance = camera::CAMERA_DISTANCE;
        }
        self.placement = self.placement.sanitised();
        self
    }
}

impl PlacementSettings {
    /// The scale cap can be lowered but never raised above the default.
    /// Tiers with non-finite values are dropped and the rest ordered by
    /// bound, so the first match is always the tightest.
    pub fn sanitised(mut self) -> Self {
        if !(self.max_scale.is_finite()
            && self.max_scale > 0.0
            && self.max_scale <= placement::MAX_MODEL_SCALE)
        {
            warn!(
                "Scale cap {} outside (0, {}], using {}",
                self.max_scale,
                placement::MAX_MODEL_SCALE,
                placement::MAX_MODEL_SCALE
            );
            self.max_scale = placement::MAX_MODEL_SCALE;
        }
        if !(self.fallback_factor.is_finite() && self.fallback_factor > 0.0) {
            warn!(
                "Fallback factor {} must be positive, using {}",
                self.fallback_factor,
                placement::SCALE_FALLBACK_FACTOR
            );
            self.fallback_factor = placement::SCALE_FALLBACK_FACTOR;
        }

        let tier_count = self.tiers.len();
        self.tiers
            .retain(|tier| tier.below.is_finite() && tier.factor.is_finite() && tier.factor > 0.0);
        if self.tiers.len() != tier_count {
            warn!(
                "Dropped {} scale tiers with invalid values",
                tier_count - self.tiers.len()
            );
        }
        self.tiers.sort_by(|a, b| a.below.total_cmp(&b.below));

        if !self.base_y.is_finite() {
            self.base_y = placement::BASE_Y_OFFSET;
        }
        if !self.scale_drop.is_finite() {
            self.scale_drop = placement::SCALE_Y_DROP;
        }
        self
    }
}
