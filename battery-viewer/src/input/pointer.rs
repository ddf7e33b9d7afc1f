use bevy::prelude::*;

use crate::engine::orientation::controller::OrientationController;
use crate::settings::ViewerSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Moved,
    Pressed,
    Released,
}

/// Pointer event from whichever source the platform provides.
///
/// `position` is in pixels from the top-left of `viewport`.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub phase: PointerPhase,
    pub position: Vec2,
    pub viewport: Vec2,
}

/// Latest cursor position in normalised device coordinates, y up.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub normalized: Vec2,
}

/// DOM pointer events the web build listens for.
pub const DOM_POINTER_EVENTS: [&str; 4] = ["pointermove", "pointerdown", "pointerup", "pointercancel"];

/// Phase for a DOM pointer event, or `None` if it should be ignored.
///
/// Only the primary button starts or ends a drag. A cancelled pointer (a
/// touch taken over by scrolling) never gets a `pointerup`, so it ends the
/// drag whatever its button.
pub fn dom_pointer_phase(event_type: &str, button: i16) -> Option<PointerPhase> {
    match event_type {
        "pointermove" => Some(PointerPhase::Moved),
        "pointerdown" if button == 0 => Some(PointerPhase::Pressed),
        "pointerup" if button == 0 => Some(PointerPhase::Released),
        "pointercancel" => Some(PointerPhase::Released),
        _ => None,
    }
}

/// Map a pixel position to [-1, 1] on both axes with +y pointing up.
pub fn normalize_pointer(position: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }

    let x = position.x / viewport.x * 2.0 - 1.0;
    let y = -(position.y / viewport.y * 2.0 - 1.0);
    Some(Vec2::new(x, y).clamp(Vec2::NEG_ONE, Vec2::ONE))
}

/// Fold this frame's pointer events into the pointer state and the
/// orientation controller. Later events overwrite earlier ones; drag deltas
/// still add up because each move is measured from the previous one.
pub fn apply_pointer_input(
    mut events: EventReader<PointerInput>,
    mut pointer: ResMut<PointerState>,
    mut controller: ResMut<OrientationController>,
    settings: Res<ViewerSettings>,
) {
    for event in events.read() {
        if let Some(normalized) = normalize_pointer(event.position, event.viewport) {
            pointer.normalized = normalized;
        }

        match event.phase {
            PointerPhase::Moved => controller.drag_to(event.position, &settings.orientation),
            PointerPhase::Pressed => {
                controller.pointer_down(event.position);
                debug!("Drag started at {:?}", event.position);
            }
            PointerPhase::Released => {
                if controller.is_dragging() {
                    controller.pointer_up();
                    debug!("Drag ended, baseline {:?}", controller.baseline());
                }
            }
        }
    }
}
