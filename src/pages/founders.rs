use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::FOUNDERS;

#[function_component(Founders)]
pub fn founders() -> Html {
    html! {
        <section id="founders" class="founders">
            <Reveal>
                <h2>{"Built by operators, not just engineers"}</h2>
                <p class="section-lead">{"We have answered the phones ourselves. Now we build the agents we wished we had."}</p>
            </Reveal>
            <div class="founders-grid">
                { for FOUNDERS.iter().map(|founder| html! {
                    <Reveal class="founder-card">
                        <div class="founder-avatar" aria-hidden="true">{founder.initials()}</div>
                        <h3>{founder.name}</h3>
                        <p class="founder-role">{founder.role}</p>
                        <p>{founder.bio}</p>
                    </Reveal>
                }) }
            </div>
            <style>
                {r#"
                .founders-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                    margin-top: 3rem;
                }
                .founder-card {
                    padding: 2rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                }
                .founder-avatar {
                    width: 72px;
                    height: 72px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    font-weight: 700;
                    background: linear-gradient(135deg, #7c5cff, #22d3ee);
                    margin-bottom: 1rem;
                }
                .founder-role {
                    color: #a78bfa;
                    font-size: 0.9rem;
                    margin-bottom: 0.8rem;
                }
                "#}
            </style>
        </section>
    }
}
