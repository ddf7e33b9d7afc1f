use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::path::SETTINGS_ASSET_PATH;

use crate::engine::loading::progress::LoadingProgress;
use crate::error::ViewerError;
use crate::settings::ViewerSettings;

#[derive(Resource, Default)]
pub struct SettingsLoader {
    handle: Option<Handle<ViewerSettings>>,
}

// Start the loading process
pub fn start_loading(mut settings_loader: ResMut<SettingsLoader>, asset_server: Res<AssetServer>) {
    settings_loader.handle = Some(asset_server.load(SETTINGS_ASSET_PATH));
}

/// Swap in the loaded settings, or keep the defaults if the file is
/// missing or malformed.
pub fn resolve_settings(
    mut loading_progress: ResMut<LoadingProgress>,
    settings_loader: Res<SettingsLoader>,
    settings_assets: Res<Assets<ViewerSettings>>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
) {
    if loading_progress.settings_resolved {
        return;
    }

    let Some(ref handle) = settings_loader.handle else {
        return;
    };

    if let Some(settings) = settings_assets.get(handle) {
        info!("✓ Viewer settings loaded from {}", SETTINGS_ASSET_PATH);
        commands.insert_resource(settings.clone().sanitised());
        loading_progress.settings_resolved = true;
    } else if let LoadState::Failed(err) = asset_server.load_state(handle) {
        let error = ViewerError::SettingsLoad {
            path: SETTINGS_ASSET_PATH.to_string(),
            reason: err.to_string(),
        };
        warn!("{}, using defaults", error);
        loading_progress.settings_resolved = true;
    }
}
