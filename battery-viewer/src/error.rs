use thiserror::Error;

/// Failures the viewer reports while bringing the model on screen.
///
/// None of these are fatal: settings fall back to defaults and a missing
/// model leaves the canvas empty.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to load viewer settings from '{path}': {reason}")]
    SettingsLoad { path: String, reason: String },

    #[error("failed to load battery model from '{path}': {reason}")]
    ModelLoad { path: String, reason: String },
}
