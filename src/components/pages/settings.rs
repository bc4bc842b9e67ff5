//! Account settings page.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_VERSION;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Minimal account page: who is signed in, which build is running, and
/// the sign-out button.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let email = Signal::derive(move || {
        ctx.auth
            .with(|a| a.email().unwrap_or("unknown").to_string())
    });

    view! {
        <main class=css::page>
            <h1 class=css::pageHeading>"Settings"</h1>

            <div class=css::panel>
                <dl class=css::facts>
                    <dt>"Account"</dt>
                    <dd>{email}</dd>
                    <dt>"Dashboard version"</dt>
                    <dd class=css::mono>{APP_VERSION}</dd>
                </dl>
            </div>

            <div class=css::section>
                <button class=css::dangerButton on:click=move |_| ctx.sign_out()>
                    <Icon icon=ic::SIGN_OUT />
                    "Sign out"
                </button>
            </div>
        </main>
    }
}
