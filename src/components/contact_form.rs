use gloo_timers::future::TimeoutFuture;
use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::relay::{self, ContactMessage};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl FormStatus {
    /// Transient states fall back to `Idle` after this long.
    pub fn revert_after_ms(self) -> Option<u32> {
        match self {
            FormStatus::Success => Some(5_000),
            FormStatus::Error => Some(4_000),
            FormStatus::Idle | FormStatus::Loading => None,
        }
    }

    pub fn inputs_disabled(self) -> bool {
        self == FormStatus::Loading
    }

    pub fn submit_disabled(self) -> bool {
        matches!(self, FormStatus::Loading | FormStatus::Success)
    }

    pub fn label(self) -> &'static str {
        match self {
            FormStatus::Idle => "Send Message",
            FormStatus::Loading => "Sending...",
            FormStatus::Success => "Message Sent!",
            FormStatus::Error => "Failed. Try again.",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FormStatus::Idle => "➤",
            FormStatus::Loading => "◌",
            FormStatus::Success => "✓",
            FormStatus::Error => "!",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            FormStatus::Idle => "idle",
            FormStatus::Loading => "loading",
            FormStatus::Success => "success",
            FormStatus::Error => "error",
        }
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(|| FormStatus::Idle);
    // Bumped on every submit so a stale revert timer cannot reset a newer
    // submission.
    let generation = use_mut_ref(|| 0u32);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let status = status.clone();
        let generation = generation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if (*status).submit_disabled() {
                return;
            }
            status.set(FormStatus::Loading);

            let current = {
                let mut generation = generation.borrow_mut();
                *generation = generation.wrapping_add(1);
                *generation
            };
            let contact = ContactMessage {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let status = status.clone();
            let generation = generation.clone();
            spawn_local(async move {
                let outcome = match relay::submit(&contact).await {
                    Ok(()) => {
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                        FormStatus::Success
                    }
                    Err(err) => {
                        warn!("Contact form submission failed: {}", err);
                        FormStatus::Error
                    }
                };
                status.set(outcome);

                if let Some(delay) = outcome.revert_after_ms() {
                    TimeoutFuture::new(delay).await;
                    if *generation.borrow() == current {
                        status.set(FormStatus::Idle);
                    }
                }
            });
        })
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let current = *status;

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <style>
                {r#"
                    .contact-form {
                        width: 100%;
                        max-width: 36rem;
                        margin: 0 auto;
                        text-align: left;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-form label {
                        display: block;
                        color: #a3a3a3;
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin-bottom: 0.5rem;
                        letter-spacing: 0.025em;
                        text-transform: uppercase;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 1rem 1.25rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: #fff;
                        font: inherit;
                        outline: none;
                        transition: all 0.3s;
                    }
                    .contact-form textarea { resize: none; }
                    .contact-form input:hover,
                    .contact-form textarea:hover { border-color: rgba(255, 255, 255, 0.2); }
                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        border-color: rgba(168, 85, 247, 0.6);
                        background: rgba(255, 255, 255, 0.06);
                        box-shadow: 0 0 25px -5px rgba(168, 85, 247, 0.25);
                    }
                    .contact-form input:disabled,
                    .contact-form textarea:disabled { opacity: 0.5; cursor: not-allowed; }
                    .contact-submit {
                        width: 100%;
                        padding: 1.25rem;
                        border-radius: 1rem;
                        font-weight: 700;
                        font-size: 1.125rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        border: 1px solid transparent;
                        transition: all 0.5s, transform 0.2s;
                    }
                    .contact-submit.idle {
                        background: #fff;
                        color: #000;
                        box-shadow: 0 0 50px -15px rgba(255, 255, 255, 0.3);
                    }
                    .contact-submit.idle:hover { transform: scale(1.02); }
                    .contact-submit.idle:active { transform: scale(0.98); }
                    .contact-submit.loading { background: #fff; color: #000; opacity: 0.7; }
                    .contact-submit.success {
                        background: linear-gradient(135deg, rgba(16,185,129,0.2), rgba(52,211,153,0.15));
                        color: #34d399;
                        border-color: rgba(52,211,153,0.3);
                    }
                    .contact-submit.error {
                        background: linear-gradient(135deg, rgba(239,68,68,0.2), rgba(248,113,113,0.15));
                        color: #f87171;
                        border-color: rgba(248,113,113,0.3);
                    }
                    .contact-submit:disabled { cursor: not-allowed; }
                    .contact-status {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        animation: status-in 0.3s ease-out;
                    }
                    .contact-submit.loading .status-icon {
                        display: inline-block;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes status-in {
                        from { opacity: 0; transform: translateY(10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                "#}
            </style>
            <div>
                <label for="contact-name">{"Name"}</label>
                <input
                    id="contact-name"
                    type="text"
                    required=true
                    value={(*name).clone()}
                    oninput={on_name}
                    disabled={current.inputs_disabled()}
                    placeholder="Your name"
                />
            </div>
            <div>
                <label for="contact-email">{"Email"}</label>
                <input
                    id="contact-email"
                    type="email"
                    required=true
                    value={(*email).clone()}
                    oninput={on_email}
                    disabled={current.inputs_disabled()}
                    placeholder="you@example.com"
                />
            </div>
            <div>
                <label for="contact-message">{"Message"}</label>
                <textarea
                    id="contact-message"
                    required=true
                    rows="5"
                    value={(*message).clone()}
                    oninput={on_message}
                    disabled={current.inputs_disabled()}
                    placeholder="Tell me about your project..."
                />
            </div>
            <button
                type="submit"
                class={classes!("contact-submit", "cursor-hover", current.class())}
                disabled={current.submit_disabled()}
            >
                <span key={current.class()} class="contact-status">
                    <span class="status-icon">{ current.icon() }</span>
                    { current.label() }
                </span>
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revert_delays() {
        assert_eq!(FormStatus::Success.revert_after_ms(), Some(5_000));
        assert_eq!(FormStatus::Error.revert_after_ms(), Some(4_000));
        assert_eq!(FormStatus::Idle.revert_after_ms(), None);
        assert_eq!(FormStatus::Loading.revert_after_ms(), None);
    }

    #[test]
    fn test_submit_is_blocked_while_busy_or_done() {
        assert!(!FormStatus::Idle.submit_disabled());
        assert!(FormStatus::Loading.submit_disabled());
        assert!(FormStatus::Success.submit_disabled());
        // A failed send can be retried straight away.
        assert!(!FormStatus::Error.submit_disabled());
    }

    #[test]
    fn test_only_loading_locks_inputs() {
        assert!(FormStatus::Loading.inputs_disabled());
        assert!(!FormStatus::Error.inputs_disabled());
        assert!(!FormStatus::Success.inputs_disabled());
    }
}
