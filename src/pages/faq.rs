use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::FAQS;

/// Clicking the open question closes it; clicking another one moves the focus there.
fn toggled(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", if props.is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq-section">
            <Reveal>
                <h2>{"Frequently Asked Questions"}</h2>
                <p class="section-lead">{"The things business owners ask us on the first call."}</p>
            </Reveal>
            <div class="faq-list">
                { for FAQS.iter().enumerate().map(|(i, item)| {
                    let on_toggle = {
                        let open = open.clone();
                        Callback::from(move |_: ()| open.set(toggled(*open, i)))
                    };
                    html! {
                        <FaqItem
                            question={item.question}
                            answer={item.answer}
                            is_open={*open == Some(i)}
                            {on_toggle}
                        />
                    }
                }) }
            </div>
            <style>
                {r#"
                .faq-list {
                    max-width: 760px;
                    margin: 3rem auto 0;
                }
                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.3rem 0;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                }
                .toggle-icon {
                    font-size: 1.4rem;
                    color: #a78bfa;
                    margin-left: 1rem;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.35s ease;
                    color: rgba(255, 255, 255, 0.7);
                }
                .faq-item.open .faq-answer {
                    max-height: 400px;
                    padding-bottom: 1.3rem;
                }
                "#}
            </style>
        </section>
    }
}
