//! Interactive battery model viewer.
//!
//! Loads a glTF battery, normalises its materials, sizes it to the viewport
//! and rotates it from pointer input. Everything is wired through
//! [`BatteryViewerPlugin`]; the binary in `main.rs` only adds Bevy's default
//! plugins around it.

pub mod engine;
pub mod error;
pub mod input;
pub mod settings;

pub use engine::core::app_setup::{BatteryViewerPlugin, create_app};
pub use error::ViewerError;
pub use settings::ViewerSettings;
