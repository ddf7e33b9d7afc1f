use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::model_loader::{report_model_load_failure, spawn_battery_model};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::settings_loader::{SettingsLoader, resolve_settings, start_loading};
use crate::engine::materials::apply::normalize_model_materials;
use crate::engine::orientation::systems::drive_model_orientation;
use crate::engine::placement::systems::{BasePlacement, update_base_placement};
use crate::engine::scene::camera::{apply_camera_settings, spawn_camera};
use crate::engine::scene::lighting::spawn_lighting;
use crate::input::{PointerInputPlugin, PointerInputSet};
use crate::settings::ViewerSettings;

/// Everything the viewer adds on top of Bevy's default plugins.
pub struct BatteryViewerPlugin;

impl Plugin for BatteryViewerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(JsonAssetPlugin::<ViewerSettings>::new(&["settings.json"]))
            .add_plugins(PointerInputPlugin)
            .init_state::<AppState>();

        app.init_resource::<ViewerSettings>()
            .init_resource::<LoadingProgress>()
            .init_resource::<SettingsLoader>()
            .init_resource::<BasePlacement>();

        app.add_systems(Startup, (setup, start_loading).chain())
            .add_systems(
                Update,
                (
                    resolve_settings,
                    spawn_battery_model,
                    report_model_load_failure,
                    normalize_model_materials,
                    transition_to_running,
                )
                    .chain()
                    .run_if(in_state(AppState::Loading)),
            )
            .add_systems(
                Update,
                apply_camera_settings.run_if(resource_changed::<ViewerSettings>),
            )
            .add_systems(
                Update,
                (update_base_placement, drive_model_orientation)
                    .chain()
                    .after(PointerInputSet)
                    .run_if(in_state(AppState::Running)),
            );
    }
}

pub fn create_app() -> App {
    let mut app = App::new();
    app.add_plugins(create_default_plugins())
        .add_plugins(BatteryViewerPlugin);
    app
}

fn setup(mut commands: Commands, settings: Res<ViewerSettings>) {
    spawn_lighting(&mut commands);
    spawn_camera(&mut commands, &settings.camera);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
