use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{PointerEvent, Window, window};

use super::pointer::{DOM_POINTER_EVENTS, PointerInput, dom_pointer_phase};

/// Events pushed by the DOM callbacks, drained once per frame.
#[derive(Resource, Clone, Default)]
pub struct DomPointerQueue(Arc<Mutex<Vec<PointerInput>>>);

/// Listeners registered on the global `window`. Dropping this unregisters
/// them, which happens when the app's world is torn down.
pub struct DomPointerListeners {
    window: Window,
    listeners: Vec<(&'static str, Closure<dyn FnMut(PointerEvent)>)>,
}

impl Drop for DomPointerListeners {
    fn drop(&mut self) {
        for (event_type, closure) in &self.listeners {
            if let Err(e) = self.window.remove_event_listener_with_callback(
                event_type,
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
            ) {
                warn!("Failed to remove {} listener: {:?}", event_type, e);
            }
        }
    }
}

/// Subscribe to pointer events on the whole page rather than the canvas,
/// so the model follows the cursor anywhere in the document.
pub fn install_dom_pointer_listeners(world: &mut World) {
    let Some(window) = window() else {
        error!("Window object not available, pointer input disabled");
        return;
    };

    let queue = DomPointerQueue::default();
    let mut listeners = Vec::with_capacity(DOM_POINTER_EVENTS.len());

    for event_type in DOM_POINTER_EVENTS {
        let queue = queue.0.clone();
        let target = window.clone();

        let closure = Closure::wrap(Box::new(move |event: PointerEvent| {
            let Some(phase) = dom_pointer_phase(event_type, event.button()) else {
                return;
            };
            let Some(viewport) = viewport_size(&target) else {
                return;
            };
            if let Ok(mut queue) = queue.lock() {
                queue.push(PointerInput {
                    phase,
                    position: Vec2::new(event.client_x() as f32, event.client_y() as f32),
                    viewport,
                });
            }
        }) as Box<dyn FnMut(PointerEvent)>);

        match window.add_event_listener_with_callback(
            event_type,
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
        ) {
            Ok(()) => listeners.push((event_type, closure)),
            Err(e) => error!("Failed to register {} listener: {:?}", event_type, e),
        }
    }

    info!("Registered {} DOM pointer listeners", listeners.len());
    world.insert_resource(queue);
    world.insert_non_send_resource(DomPointerListeners { window, listeners });
}

fn viewport_size(window: &Window) -> Option<Vec2> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Vec2::new(width as f32, height as f32))
}

/// Move queued DOM events into Bevy's event stream.
pub fn drain_dom_pointer_queue(
    queue: Option<Res<DomPointerQueue>>,
    mut pointer_events: EventWriter<PointerInput>,
) {
    let Some(queue) = queue else {
        return;
    };

    let events = if let Ok(mut pending) = queue.0.lock() {
        std::mem::take(&mut *pending)
    } else {
        Vec::new()
    };

    pointer_events.write_batch(events);
}
