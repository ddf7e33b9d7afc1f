//! Camera and lighting for the viewer scene.

pub mod camera;
pub mod lighting;
