use yew::prelude::*;

use crate::components::{
    back_to_top::BackToTop, background::BackgroundGrid, footer::Footer, nav::Nav, scroll_progress::ScrollProgress,
};
use crate::contact::section::ContactSection;
use crate::content::{LANDMARK_SELECTORS, SECTION_IDS};
use crate::pages::{faq::Faq, founders::Founders, hero::Hero, mission::Mission, process::Process};

/// Entries of `names` for which `present` finds nothing.
fn missing<'a>(names: &[&'a str], present: impl Fn(&str) -> bool) -> Vec<&'a str> {
    names.iter().copied().filter(|name| !present(*name)).collect()
}

/// Warns about any section or decorative layer the rendered page lacks.
fn check_landmarks() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    for id in missing(SECTION_IDS, |id| document.get_element_by_id(id).is_some()) {
        log::warn!("Landing page is missing section #{}", id);
    }
    for selector in missing(LANDMARK_SELECTORS, |sel| document.query_selector(sel).ok().flatten().is_some()) {
        log::warn!("Landing page is missing {}", selector);
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Start at the top on first load, not at a restored scroll offset
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            check_landmarks();
            || ()
        },
        (),
    );

    html! {
        <>
            <BackgroundGrid />
            <ScrollProgress />
            <Nav />
            <main class="landing-page">
                <Hero />
                <Mission />
                <Founders />
                <Process />
                <Faq />
                <ContactSection />
            </main>
            <Footer />
            <BackToTop />
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    background: #0c0c14;
                    color: #ffffff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    line-height: 1.6;
                }
                *, *::before, *::after {
                    box-sizing: border-box;
                }
                .landing-page {
                    position: relative;
                    z-index: 1;
                    overflow-x: hidden;
                }
                .landing-page > section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                    scroll-margin-top: 60px;
                }
                .landing-page > section.hero {
                    max-width: none;
                }
                .landing-page h2 {
                    font-size: clamp(1.8rem, 4vw, 2.6rem);
                    line-height: 1.2;
                    margin: 0 0 1rem;
                    background: linear-gradient(45deg, #fff, #a78bfa);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .section-lead {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 1.1rem;
                    max-width: 640px;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.7s ease-out, transform 0.7s ease-out;
                }
                .reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                @media (prefers-reduced-motion: reduce) {
                    .reveal {
                        opacity: 1;
                        transform: none;
                        transition: none;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_absent_sections() {
        let rendered = ["top", "mission", "faq", "contact"];
        let absent = missing(SECTION_IDS, |id| rendered.contains(&id));
        assert_eq!(absent, vec!["founders", "process"]);
    }

    #[test]
    fn complete_page_reports_nothing() {
        assert!(missing(SECTION_IDS, |_| true).is_empty());
        assert_eq!(missing(LANDMARK_SELECTORS, |_| false), LANDMARK_SELECTORS.to_vec());
    }
}
