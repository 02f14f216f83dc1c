use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::reveal_state;

const REVEAL_EVENTS: [&str; 2] = ["scroll", "resize"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
}

/// Scroll position and viewport height, re-read on every scroll and resize.
#[hook]
pub fn use_page_metrics() -> PageMetrics {
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    PageMetrics { scroll_y, viewport_height }
}

/// Becomes true the first time `node` scrolls into view and stays true.
///
/// Listeners are only attached while the node is still hidden; the
/// component is not re-rendered by scrolling once it has been revealed.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);
    let deps = *revealed;

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |already| {
                let window = web_sys::window();
                let listener = match window.as_ref() {
                    Some(window) if !*already => {
                        let window_clone = window.clone();
                        let check = move || {
                            let top = node.cast::<Element>().map(|el| el.get_bounding_client_rect().top());
                            let viewport_height = window_clone
                                .inner_height()
                                .ok()
                                .and_then(|h| h.as_f64())
                                .unwrap_or(0.0);
                            if reveal_state(false, top, viewport_height) {
                                revealed.set(true);
                            }
                        };
                        // Content already on screen at mount
                        check();

                        let callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                        for event in REVEAL_EVENTS {
                            if let Err(e) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
                                log::warn!("Could not attach reveal {} listener: {:?}", event, e);
                            }
                        }
                        Some(callback)
                    }
                    _ => None,
                };

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        for event in REVEAL_EVENTS {
                            let _ = window.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
                        }
                    }
                }
            },
            deps,
        );
    }

    *revealed
}
