//! Application setup and state management.
//!
//! Builds the Bevy app, configures the window for native and WASM targets,
//! and moves from loading to running once the model is ready.

/// App construction and the viewer plugin.
pub mod app_setup;

/// Loading/Running state and the transition between them.
pub mod app_state;

/// Platform-specific window configuration.
pub mod window_config;
