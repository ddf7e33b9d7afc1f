//! Viewport-responsive scale and resting position for the model.

pub mod responsive;
pub mod systems;
