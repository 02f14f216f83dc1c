use yew::prelude::*;

use crate::animation::back_to_top_visible;
use crate::components::scroll_progress::scoped_class;
use crate::hooks::use_page_metrics;

const BUTTON_CSS: &str = r#"
    position: fixed;
    right: 1.5rem;
    bottom: 1.5rem;
    width: 44px;
    height: 44px;
    border-radius: 50%;
    border: 1px solid rgba(255, 255, 255, 0.15);
    background: rgba(20, 20, 30, 0.85);
    color: #fff;
    font-size: 1.2rem;
    cursor: pointer;
    opacity: 0;
    transform: translateY(12px);
    transition: opacity 0.3s ease, transform 0.3s ease;
    pointer-events: none;
    z-index: 150;

    &.shown {
        opacity: 1;
        transform: translateY(0);
        pointer-events: auto;
    }
"#;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let metrics = use_page_metrics();
    let shown = back_to_top_visible(metrics.scroll_y, metrics.viewport_height);

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <button
            class={classes!("back-to-top", scoped_class(BUTTON_CSS), shown.then_some("shown"))}
            aria-label="Back to top"
            aria-hidden={(!shown).to_string()}
            {onclick}
        >
            {"↑"}
        </button>
    }
}
