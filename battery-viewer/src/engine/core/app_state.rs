use bevy::prelude::*;

use crate::engine::loading::model_loader::BatteryModel;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Reveal the model and start interaction once its materials are patched.
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
    mut models: Query<&mut Visibility, With<BatteryModel>>,
) {
    if !loading_progress.materials_normalized {
        return;
    }

    for mut visibility in &mut models {
        *visibility = Visibility::Inherited;
    }
    info!("→ Battery ready, transitioning to Running state");
    next_state.set(AppState::Running);
}
