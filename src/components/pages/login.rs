//! Login screen.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::auth;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/pages/login.module.css");

/// Email/password login form.
///
/// Validation runs client-side before the request goes out; API
/// rejections surface inline under the form. While a login is in flight
/// the submit button is disabled and re-labelled.
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let email_ref = NodeRef::<leptos::html::Input>::new();

    // Focus the email field on mount
    Effect::new(move || {
        if let Some(input) = email_ref.get() {
            let _ = input.focus();
        }
    });

    let read_input = |ev: &ev::Event| -> Option<String> {
        let target = ev.target()?;
        Some(target.unchecked_into::<web_sys::HtmlInputElement>().value())
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        busy.set(true);

        spawn_local(async move {
            let result = auth::login(&email.get_untracked(), &password.get_untracked()).await;
            busy.set(false);
            match result {
                Ok(response) => {
                    ctx.establish_session(response);
                    AppRoute::Overview.push();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class=css::screen>
            <div class=css::card>
                <div class=css::logoRow>
                    <span class=css::logoMark>"✦"</span>
                    <span class=css::logoText>{APP_NAME}</span>
                </div>
                <h1 class=css::heading>"Sign in"</h1>
                <p class=css::subheading>"Monitor and control your services."</p>

                <form class=css::form on:submit=handle_submit>
                    <label class=css::label>"Email"</label>
                    <input
                        node_ref=email_ref
                        type="email"
                        class=css::input
                        autocomplete="email"
                        spellcheck="false"
                        prop:value=email
                        on:input=move |ev| {
                            if let Some(value) = read_input(&ev) {
                                set_email.set(value);
                            }
                        }
                    />

                    <label class=css::label>"Password"</label>
                    <div class=css::passwordField>
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            class=css::input
                            autocomplete="current-password"
                            prop:value=password
                            on:input=move |ev| {
                                if let Some(value) = read_input(&ev) {
                                    set_password.set(value);
                                }
                            }
                        />
                        <button
                            type="button"
                            class=css::eyeButton
                            title=move || {
                                if show_password.get() { "Hide password" } else { "Show password" }
                            }
                            on:click=move |_| show_password.update(|s| *s = !*s)
                        >
                            {move || {
                                if show_password.get() {
                                    view! { <Icon icon=ic::EYE_OFF /> }.into_any()
                                } else {
                                    view! { <Icon icon=ic::EYE /> }.into_any()
                                }
                            }}
                        </button>
                    </div>

                    {move || error.get().map(|message| view! {
                        <p class=css::error>{message}</p>
                    })}

                    <button type="submit" class=css::submit disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
