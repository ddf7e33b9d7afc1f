//! Material normalisation for the loaded battery.
//!
//! The rules live in [`normalizer`] as pure functions over
//! [`descriptor::MeshDescriptor`]s; [`apply`] bridges them to Bevy's
//! `StandardMaterial` assets on the spawned scene.

pub mod apply;
pub mod descriptor;
pub mod normalizer;
