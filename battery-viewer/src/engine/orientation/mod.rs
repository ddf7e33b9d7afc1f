//! Hover-follow and drag rotation of the model.

pub mod controller;
pub mod systems;
