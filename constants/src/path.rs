/// glTF binary holding the battery model, relative to the asset root.
pub const MODEL_ASSET_PATH: &str = "models/battery.glb";

/// Optional JSON overrides for the viewer, relative to the asset root.
pub const SETTINGS_ASSET_PATH: &str = "viewer.settings.json";

/// Canvas the viewer binds to on web builds.
pub const CANVAS_SELECTOR: &str = "#battery-viewer";
