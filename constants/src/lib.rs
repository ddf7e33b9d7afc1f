//! Shared tunables for the battery viewer.
//!
//! Every value here is a default: the viewer reads its live configuration
//! from `viewer.settings.json` and falls back to these when a field is absent.

pub mod camera;
pub mod material;
pub mod orientation;
pub mod path;
pub mod placement;
pub mod render_settings;
