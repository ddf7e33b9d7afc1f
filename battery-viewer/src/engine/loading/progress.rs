use bevy::prelude::*;

#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub settings_resolved: bool,
    pub model_spawned: bool,
    pub scene_ready: bool,
    pub materials_normalized: bool,
    pub model_failed: bool,
}
