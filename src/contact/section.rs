use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::form::{ContactAction, ContactSubmission, Field, InFlight, SubmissionState};
use crate::contact::relay::{self, HttpRelay};

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let submission = use_reducer(ContactSubmission::default);
    let client = use_memo(|_| HttpRelay::new(config::relay_endpoint()), ());
    let in_flight = use_memo(|_| InFlight::default(), ());

    let on_input = |field: Field| {
        let dispatcher = submission.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(ContactAction::Edit(field, input.value()));
        })
    };

    let on_message = {
        let dispatcher = submission.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(ContactAction::Edit(Field::Message, input.value()));
        })
    };

    let onsubmit = {
        let submission = submission.clone();
        let client = client.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !submission.submit_enabled() {
                return;
            }
            let Some(guard) = InFlight::acquire(&in_flight) else {
                log::debug!("Ignoring submit while a send is in flight");
                return;
            };

            let form = submission.form().clone();
            let dispatcher = submission.dispatcher();
            let client = client.clone();
            dispatcher.dispatch(ContactAction::Begin);
            spawn_local(async move {
                let outcome = relay::submit(client.as_ref(), &form).await;
                dispatcher.dispatch(ContactAction::Finish(outcome));
                drop(guard);
            });
        })
    };

    let form = submission.form();
    let busy = submission.state().is_submitting();
    let email = config::contact_email();

    let feedback = if *submission.state() == SubmissionState::Sent {
        html! {
            <p class="form-feedback form-success" role="status">
                {"Thanks! Your message is on its way. We'll get back to you within one business day."}
            </p>
        }
    } else if let Some(reason) = submission.state().failure_reason() {
        html! {
            <p class="form-feedback form-error" role="alert">
                {reason.to_string()}{" "}
                <a href={format!("mailto:{}", email)}>{email}</a>
            </p>
        }
    } else {
        html! {}
    };

    html! {
        <section id="contact" class="contact-section">
            <div class="contact-grid">
                <div class="contact-copy">
                    <h2>{"Let's talk about your calls"}</h2>
                    <p class="section-lead">
                        {"Tell us a little about your business and we'll set up a 30 minute discovery call."}
                    </p>
                    <p class="contact-direct">
                        {"Prefer email? "}
                        <a href={format!("mailto:{}", email)}>{email}</a>
                    </p>
                </div>

                <form class="contact-form" {onsubmit}>
                    <label>
                        <span>{"Name"}</span>
                        <input
                            type="text"
                            name="name"
                            autocomplete="name"
                            required={true}
                            value={form.name.clone()}
                            oninput={on_input(Field::Name)}
                        />
                    </label>
                    <label>
                        <span>{"Email"}</span>
                        <input
                            type="email"
                            name="email"
                            autocomplete="email"
                            required={true}
                            value={form.email.clone()}
                            oninput={on_input(Field::Email)}
                        />
                    </label>
                    <label>
                        <span>{"Company"}</span>
                        <input
                            type="text"
                            name="company"
                            autocomplete="organization"
                            value={form.company.clone()}
                            oninput={on_input(Field::Company)}
                        />
                    </label>
                    <label>
                        <span>{"Message"}</span>
                        <textarea
                            name="message"
                            rows="5"
                            value={form.message.clone()}
                            oninput={on_message}
                        />
                    </label>
                    <button
                        type="submit"
                        class={classes!("submit-button", busy.then_some("busy"))}
                        disabled={!submission.submit_enabled()}
                        aria-busy={busy.to_string()}
                    >
                        if busy {
                            <span class="loading-spinner"></span>{" Sending..."}
                        } else {
                            {"Send message"}
                        }
                    </button>
                    {feedback}
                </form>
            </div>
            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1.2fr;
                    gap: 3rem;
                    align-items: start;
                }
                .contact-direct a,
                .form-error a {
                    color: #a78bfa;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.1rem;
                    padding: 2.2rem;
                    border-radius: 16px;
                    background: rgba(30, 30, 40, 0.7);
                    border: 1px solid rgba(124, 92, 255, 0.15);
                }
                .contact-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.75);
                }
                .contact-form input,
                .contact-form textarea {
                    padding: 0.8rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    background: rgba(0, 0, 0, 0.3);
                    color: #fff;
                    font: inherit;
                }
                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: #7c5cff;
                }
                .submit-button {
                    padding: 0.9rem;
                    border-radius: 999px;
                    border: none;
                    background: #7c5cff;
                    color: #fff;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .submit-button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                .loading-spinner {
                    display: inline-block;
                    width: 14px;
                    height: 14px;
                    border: 2px solid rgba(255,255,255,.3);
                    border-radius: 50%;
                    border-top-color: #fff;
                    animation: spin 1s ease-in-out infinite;
                    vertical-align: middle;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .form-feedback {
                    margin: 0;
                    padding: 0.9rem 1rem;
                    border-radius: 8px;
                    font-size: 0.95rem;
                }
                .form-success {
                    background: rgba(34, 197, 94, 0.12);
                    color: #86efac;
                }
                .form-error {
                    background: rgba(239, 68, 68, 0.12);
                    color: #fca5a5;
                }
                @media (max-width: 768px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                    .contact-form {
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
