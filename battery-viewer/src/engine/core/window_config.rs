use bevy::prelude::*;
use bevy::window::{CompositeAlphaMode, PresentMode};

#[cfg(target_arch = "wasm32")]
use constants::path::CANVAS_SELECTOR;

/// Primary window for the viewer. On the web it binds to the page's
/// canvas and leaves pointer events to the page.
pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some(CANVAS_SELECTOR.into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            transparent: true,
            composite_alpha_mode: CompositeAlphaMode::PreMultiplied,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Battery Viewer".into(),
            transparent: true,
            composite_alpha_mode: CompositeAlphaMode::Auto,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
