use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

use crate::engine::loading::progress::LoadingProgress;
use crate::error::ViewerError;
use crate::settings::ViewerSettings;

/// Root of the spawned battery scene. The only entity whose transform the
/// viewer drives.
#[derive(Component)]
pub struct BatteryModel;

/// Handles kept alive for the lifetime of the model.
#[derive(Resource)]
pub struct ModelHandles {
    pub path: String,
    pub gltf: Handle<Gltf>,
    pub scene: Handle<Scene>,
}

/// Spawn the first scene of the configured glTF once settings are known.
/// The model stays hidden until its materials have been normalised.
pub fn spawn_battery_model(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
    settings: Res<ViewerSettings>,
) {
    if !loading_progress.settings_resolved || loading_progress.model_spawned {
        return;
    }

    let path = settings.model_path.clone();
    let gltf = asset_server.load(path.clone());
    let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(path.clone()));
    info!("Loading battery model: {}", path);

    commands
        .spawn((
            Name::new("Battery"),
            BatteryModel,
            SceneRoot(scene.clone()),
            Transform::default(),
            Visibility::Hidden,
        ))
        .observe(mark_scene_ready);

    commands.insert_resource(ModelHandles { path, gltf, scene });
    loading_progress.model_spawned = true;
}

fn mark_scene_ready(_trigger: Trigger<SceneInstanceReady>, mut loading_progress: ResMut<LoadingProgress>) {
    info!("✓ Battery scene instantiated");
    loading_progress.scene_ready = true;
}

/// Log a failed model load once. The viewer then stays in `Loading` and
/// renders an empty canvas.
pub fn report_model_load_failure(
    mut loading_progress: ResMut<LoadingProgress>,
    handles: Option<Res<ModelHandles>>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.model_failed {
        return;
    }
    let Some(handles) = handles else {
        return;
    };

    if let LoadState::Failed(err) = asset_server.load_state(&handles.gltf) {
        let error = ViewerError::ModelLoad {
            path: handles.path.clone(),
            reason: err.to_string(),
        };
        error!("{}", error);
        loading_progress.model_failed = true;
    }
}
