//! Pointer input for the orientation controller.
//!
//! Native builds read Bevy's window cursor and mouse buttons; web builds
//! listen on the page's global pointer stream. Both produce the same
//! [`pointer::PointerInput`] events.

use bevy::prelude::*;

pub mod pointer;

#[cfg(not(target_arch = "wasm32"))]
pub mod window_input;

#[cfg(target_arch = "wasm32")]
pub mod dom_listener;

use crate::engine::orientation::controller::OrientationController;
use pointer::{PointerInput, PointerState, apply_pointer_input};

/// System set for everything that turns raw input into pointer state.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointerInputSet;

pub struct PointerInputPlugin;

impl Plugin for PointerInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PointerInput>()
            .init_resource::<PointerState>()
            .init_resource::<OrientationController>();

        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(
            Update,
            (window_input::read_window_pointer, apply_pointer_input)
                .chain()
                .in_set(PointerInputSet),
        );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, dom_listener::install_dom_pointer_listeners)
            .add_systems(
                Update,
                (dom_listener::drain_dom_pointer_queue, apply_pointer_input)
                    .chain()
                    .in_set(PointerInputSet),
            );
    }
}
