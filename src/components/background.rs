use yew::prelude::*;

const WAVE_FRAMES: [&str; 4] = [
    "M0,100 C200,20 400,180 600,100 C800,20 1000,180 1200,100 C1350,40 1440,140 1440,140",
    "M0,120 C200,40 400,160 600,120 C800,40 1000,160 1200,120 C1350,60 1440,120 1440,120",
    "M0,90 C200,10 400,190 600,90 C800,10 1000,190 1200,90 C1350,30 1440,150 1440,150",
    "M0,100 C200,20 400,180 600,100 C800,20 1000,180 1200,100 C1350,40 1440,140 1440,140",
];

/// Keyframe list for the SVG `<animate values>` attribute. Closes the loop on the first frame.
fn wave_values() -> String {
    WAVE_FRAMES.join(";")
}

/// Faint fixed grid behind the whole page.
#[function_component(BackgroundGrid)]
pub fn background_grid() -> Html {
    html! {
        <div class="bg-grid" data-testid="bg-grid" aria-hidden="true">
            <svg width="100%" height="100%" xmlns="http://www.w3.org/2000/svg">
                <defs>
                    <pattern id="grid" width="40" height="40" patternUnits="userSpaceOnUse">
                        <path d="M 40 0 L 0 0 0 40" fill="none" stroke="currentColor" stroke-width="0.5" />
                    </pattern>
                </defs>
                <rect width="100%" height="100%" fill="url(#grid)" />
            </svg>
            <style>
                {r#"
                .bg-grid {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    pointer-events: none;
                    opacity: 0.08;
                    color: #a78bfa;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SoundWaveProps {
    #[prop_or(true)]
    pub wide: bool,
}

/// Looping sound-wave line drawn under the hero.
#[function_component(SoundWave)]
pub fn sound_wave(props: &SoundWaveProps) -> Html {
    html! {
        <svg
            class={classes!("sound-wave", (!props.wide).then_some("narrow"))}
            viewBox="0 0 1440 200"
            preserveAspectRatio="none"
            aria-hidden="true"
        >
            <defs>
                <linearGradient id="waveGrad" x1="0" x2="1" y1="0" y2="0">
                    <stop offset="0%" stop-color="#7c5cff" />
                    <stop offset="100%" stop-color="#22d3ee" />
                </linearGradient>
            </defs>
            <path d={WAVE_FRAMES[0]} fill="none" stroke="url(#waveGrad)" stroke-width="3">
                <animate attributeName="d" dur="6s" repeatCount="indefinite" values={wave_values()} />
            </path>
        </svg>
    }
}
