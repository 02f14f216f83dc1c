use log::info;
use yew::prelude::*;

mod animation;
mod config;
mod content;
mod hooks;
mod contact {
    pub mod form;
    pub mod relay;
    pub mod section;
}
mod components {
    pub mod back_to_top;
    pub mod background;
    pub mod counter;
    pub mod footer;
    pub mod nav;
    pub mod reveal;
    pub mod scroll_progress;
    pub mod word_carousel;
}
mod pages {
    pub mod faq;
    pub mod founders;
    pub mod hero;
    pub mod home;
    pub mod mission;
    pub mod process;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application, relay endpoint {}", config::relay_endpoint());
    yew::Renderer::<App>::new().render();
}
