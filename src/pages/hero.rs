use yew::prelude::*;

use crate::animation::hero_opacity;
use crate::components::background::SoundWave;
use crate::components::word_carousel::WordCarousel;
use crate::config;
use crate::content::HERO_WORDS;
use crate::hooks::use_page_metrics;

#[function_component(Hero)]
pub fn hero() -> Html {
    let metrics = use_page_metrics();
    let opacity = hero_opacity(metrics.scroll_y, metrics.viewport_height);

    html! {
        <section id="top" class="hero">
            <div class="hero-inner" style={format!("opacity: {:.3}; transform: translateY({:.1}px);", opacity, (1.0 - opacity) * 40.0)}>
                <p class="hero-eyebrow">{"Voice AI agents for busy businesses"}</p>
                <h1>
                    {"Your new "}
                    <span data-testid="hero-keyword-strip">
                        <WordCarousel words={HERO_WORDS} />
                    </span>
                    <br />
                    {"never misses a call."}
                </h1>
                <p class="hero-subtitle">
                    {"We design, build and run natural sounding phone agents that answer, book and qualify around the clock, so your team only talks to customers who are ready."}
                </p>
                <div class="hero-actions">
                    <a href="#contact" class="hero-cta">{"Book a discovery call"}</a>
                    <a href="#process" class="hero-secondary">{"See how it works"}</a>
                    <a href={config::booking_url()} target="_blank" rel="noreferrer" class="hero-secondary">
                        {"Request Demo"}
                    </a>
                </div>
            </div>
            <div class="hero-wave">
                <SoundWave />
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    overflow: hidden;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 8rem 2rem 4rem;
                    text-align: center;
                    background: radial-gradient(circle at 50% 20%, rgba(124, 92, 255, 0.25), transparent 60%);
                }
                .hero-wave {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 4rem;
                    opacity: 0.8;
                    pointer-events: none;
                }
                .sound-wave {
                    display: block;
                    width: 100%;
                    max-width: 1100px;
                    height: 160px;
                    margin: 0 auto;
                }
                .sound-wave.narrow {
                    max-width: 560px;
                }
                .hero-inner {
                    position: relative;
                    z-index: 1;
                    max-width: 860px;
                    will-change: opacity, transform;
                }
                .hero-eyebrow {
                    text-transform: uppercase;
                    letter-spacing: 0.18em;
                    font-size: 0.8rem;
                    color: #a78bfa;
                    margin-bottom: 1.2rem;
                }
                .hero h1 {
                    font-size: clamp(2.4rem, 6vw, 4.2rem);
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }
                .word-carousel {
                    display: inline-block;
                    min-width: 6ch;
                }
                .carousel-word {
                    display: inline-block;
                    background: linear-gradient(45deg, #7c5cff, #22d3ee);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    animation: wordIn 0.5s ease-out;
                }
                @keyframes wordIn {
                    from { opacity: 0; transform: translateY(0.4em); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .hero-subtitle {
                    font-size: 1.15rem;
                    color: rgba(255, 255, 255, 0.75);
                    margin: 0 auto 2.5rem;
                    max-width: 640px;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .hero-cta {
                    padding: 0.9rem 1.8rem;
                    border-radius: 999px;
                    background: #7c5cff;
                    color: #fff;
                    font-weight: 600;
                    text-decoration: none;
                }
                .hero-secondary {
                    padding: 0.9rem 1.8rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.25);
                    color: #fff;
                    text-decoration: none;
                }
                "#}
            </style>
        </section>
    }
}
