use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::PROCESS;

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="process" class="process">
            <Reveal>
                <h2>{"From first call to live agent"}</h2>
                <p class="section-lead">{"A short, hands-on process. You stay focused on the business."}</p>
            </Reveal>
            <ol class="steps-grid">
                { for PROCESS.iter().enumerate().map(|(i, step)| html! {
                    <li class="step">
                        <Reveal>
                            <span class="step-number">{format!("{:02}", i + 1)}</span>
                            <h3>{step.title}</h3>
                            <p>{step.body}</p>
                        </Reveal>
                    </li>
                }) }
            </ol>
            <style>
                {r#"
                .steps-grid {
                    list-style: none;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                    margin-top: 3rem;
                    padding: 0;
                }
                .step {
                    padding: 1.8rem;
                    border-left: 2px solid #7c5cff;
                    background: rgba(255, 255, 255, 0.03);
                    border-radius: 0 12px 12px 0;
                }
                .step-number {
                    font-size: 0.85rem;
                    color: #22d3ee;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                }
                .step h3 {
                    margin: 0.6rem 0;
                }
                .step p {
                    color: rgba(255, 255, 255, 0.7);
                }
                "#}
            </style>
        </section>
    }
}
