use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::pointer::{PointerInput, PointerPhase};

/// Translate the primary window's cursor and left button into
/// [`PointerInput`] events on native builds.
pub fn read_window_pointer(
    mut cursor_moved: EventReader<CursorMoved>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer_events: EventWriter<PointerInput>,
    mut last_position: Local<Vec2>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let viewport = Vec2::new(window.width(), window.height());

    for cursor in cursor_moved.read() {
        *last_position = cursor.position;
        pointer_events.write(PointerInput {
            phase: PointerPhase::Moved,
            position: cursor.position,
            viewport,
        });
    }

    // A release can arrive after the cursor has left the window.
    let position = window.cursor_position().unwrap_or(*last_position);

    if mouse_button.just_pressed(MouseButton::Left) {
        pointer_events.write(PointerInput {
            phase: PointerPhase::Pressed,
            position,
            viewport,
        });
    }

    if mouse_button.just_released(MouseButton::Left) {
        pointer_events.write(PointerInput {
            phase: PointerPhase::Released,
            position,
            viewport,
        });
    }
}
