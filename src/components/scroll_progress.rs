use stylist::Style;
use yew::prelude::*;

use crate::animation::scroll_progress;
use crate::hooks::use_page_metrics;

const BAR_CSS: &str = r#"
    position: fixed;
    top: 0;
    left: 0;
    height: 3px;
    z-index: 200;
    background: linear-gradient(90deg, #7c5cff, #22d3ee);
    transform-origin: left center;
    pointer-events: none;
"#;

fn document_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0)
}

/// Builds a generated class for static component styles.
pub fn scoped_class(css: &'static str) -> Classes {
    match Style::new(css) {
        Ok(style) => style.into(),
        Err(e) => {
            log::warn!("Failed to build component style: {}", e);
            Classes::new()
        }
    }
}

#[function_component(ScrollProgress)]
pub fn scroll_progress_bar() -> Html {
    let metrics = use_page_metrics();
    let progress = scroll_progress(metrics.scroll_y, document_height(), metrics.viewport_height);

    html! {
        <div
            class={classes!("scroll-progress", scoped_class(BAR_CSS))}
            style={format!("width: {:.2}%;", progress * 100.0)}
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={format!("{:.0}", progress * 100.0)}
        />
    }
}
