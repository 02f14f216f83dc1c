use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::NAV_SCROLLED_AT;
use crate::config;
use crate::content::BRAND;

const LINKS: &[(&str, &str)] = &[
    ("#mission", "Mission"),
    ("#founders", "Founders"),
    ("#process", "Process"),
    ("#faq", "FAQ"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = window.as_ref().map(|window| {
                let window_clone = window.clone();
                let callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > NAV_SCROLLED_AT);
                }) as Box<dyn FnMut()>);

                if let Err(e) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                    log::warn!("Could not attach nav scroll listener: {:?}", e);
                }
                callback
            });

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation still has to happen, so no prevent_default here
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let booking_url = config::booking_url();

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#top" class="nav-logo" onclick={close_menu.clone()}>{BRAND}</a>

                <a href={booking_url} target="_blank" rel="noreferrer" class="nav-demo">{"Request Demo"}</a>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    aria-label="Toggle navigation"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <a href="#contact" class="nav-cta" onclick={close_menu.clone()}>{"Book a call"}</a>
                    <a href={booking_url} target="_blank" rel="noreferrer" class="nav-demo-mobile" onclick={close_menu.clone()}>
                        {"Request Demo"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1.2rem 2rem;
                    transition: background 0.3s ease, padding 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(12, 12, 20, 0.85);
                    backdrop-filter: blur(10px);
                    padding: 0.7rem 2rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.06);
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: #fff;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 1.8rem;
                    align-items: center;
                }
                .nav-link {
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                    font-size: 0.95rem;
                }
                .nav-link:hover {
                    color: #fff;
                }
                .nav-cta {
                    padding: 0.55rem 1.1rem;
                    border-radius: 999px;
                    background: #7c5cff;
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                }
                .nav-demo,
                .nav-demo-mobile {
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(124, 92, 255, 0.6);
                    color: #c4b5fd;
                    text-decoration: none;
                    font-size: 0.9rem;
                }
                .nav-demo {
                    margin-left: auto;
                    margin-right: 1.8rem;
                }
                .nav-demo-mobile {
                    display: none;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.4rem;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .burger-menu.open span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }
                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }
                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(12, 12, 20, 0.97);
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                    .nav-demo {
                        display: none;
                    }
                    .nav-demo-mobile {
                        display: inline-block;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
