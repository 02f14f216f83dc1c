use yew::prelude::*;

use crate::components::counter::Counter;
use crate::content::{PILLARS, STATS, STATS_SOURCE};
use crate::hooks::use_reveal;

#[function_component(Mission)]
pub fn mission() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <section id="mission" class="mission">
            <div ref={node} class={classes!("reveal", visible.then_some("visible"))}>
                <h2>{"Every missed call is a missed customer"}</h2>
                <p class="section-lead">
                    {"Our mission is simple: no business should lose work because nobody picked up the phone."}
                </p>
                <div class="stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat">
                            <Counter target={stat.value} suffix={stat.suffix} active={visible} />
                            <p class="stat-label">{stat.label}</p>
                        </div>
                    }) }
                </div>
                <p class="stats-source">{STATS_SOURCE}</p>
                <div class="pillars-grid">
                    { for PILLARS.iter().map(|pillar| html! {
                        <div class="pillar-card">
                            <div class="pillar-icon" aria-hidden="true">{pillar.icon}</div>
                            <h3>{pillar.title}</h3>
                            <p>{pillar.body}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1.5rem;
                    margin-top: 3rem;
                }
                .stat {
                    padding: 2rem 1.5rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    text-align: center;
                }
                .counter {
                    display: block;
                    font-size: 2.6rem;
                    font-weight: 700;
                    font-variant-numeric: tabular-nums;
                    color: #fff;
                }
                .stats-source {
                    margin: 0.8rem 0 0;
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.45);
                    text-align: center;
                }
                .pillars-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                    margin-top: 3rem;
                }
                .pillar-card {
                    padding: 1.8rem 1.5rem;
                    border-radius: 16px;
                    border: 1px solid rgba(124, 92, 255, 0.25);
                    background: rgba(124, 92, 255, 0.05);
                    text-align: center;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .pillar-card:hover {
                    transform: scale(1.03);
                    box-shadow: 0 0 30px rgba(34, 211, 238, 0.3);
                }
                .pillar-icon {
                    width: 48px;
                    height: 48px;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(124, 92, 255, 0.2);
                    color: #a78bfa;
                    font-size: 1.3rem;
                }
                .stat-label {
                    margin-top: 0.6rem;
                    color: rgba(255, 255, 255, 0.65);
                    font-size: 0.95rem;
                }
                "#}
            </style>
        </section>
    }
}
