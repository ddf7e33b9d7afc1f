//! Loading pipeline from settings through to a ready, normalised model.

/// Loading progress flags the state transition waits on.
pub mod progress;

/// glTF scene spawning, readiness tracking and load-failure reporting.
pub mod model_loader;

/// Optional JSON settings asset with fallback to defaults.
pub mod settings_loader;
