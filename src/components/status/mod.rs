//! Floating status bar.
//!
//! Fixed, centered navigation bar shown on authenticated pages: back
//! button, logo, current page label, LIVE indicator, and the account
//! menu.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Floating navigation/status bar.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (> 640px) | Back label, logo text, LIVE badge, avatar |
/// | Mobile (< 640px) | Icons only; the LIVE badge is hidden |
#[component]
pub fn StatusBar(route: Memo<AppRoute>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let is_home = Memo::new(move |_| route.get() == AppRoute::Overview);
    let initials = Signal::derive(move || ctx.auth.with(|a| a.initials()));
    let account_label = Signal::derive(move || {
        ctx.auth
            .with(|a| a.email().unwrap_or("My Account").to_string())
    });
    let link = ctx.link;

    let menu_open = RwSignal::new(false);

    let badge_class = move || {
        if link.get().is_live() {
            stylance::classes!(css::badge, css::badgeLive)
        } else {
            stylance::classes!(css::badge, css::badgeOffline)
        }
    };
    let danger_class = stylance::classes!(css::menuItem, css::menuDanger);

    view! {
        <header class=css::bar>
            <div class=css::inner>
                // Back to overview (hidden on the overview itself)
                <Show when=move || !is_home.get()>
                    <button
                        class=css::backButton
                        title="Back to overview"
                        on:click=move |_| AppRoute::Overview.push()
                    >
                        <Icon icon=ic::ARROW_LEFT />
                        <span class=css::backLabel>"Home"</span>
                    </button>
                    <div class=css::divider></div>
                </Show>

                // Logo
                <button class=css::logo on:click=move |_| AppRoute::Overview.push()>
                    <span class=css::logoMark>"✦"</span>
                    <span class=css::logoText>{APP_NAME}</span>
                </button>

                // Current page
                {move || route.get().title().map(|title| view! {
                    <span class=css::crumbSep>"/"</span>
                    <span class=css::pageTitle>{title}</span>
                })}

                <div class=css::spacer></div>

                // LIVE indicator
                <div class=badge_class>
                    <span class=css::badgeDot></span>
                    <span class=css::badgeLabel>{move || link.get().label()}</span>
                </div>

                // Account menu
                <div class=css::menuWrapper>
                    <button
                        class=css::avatar
                        title=account_label
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {initials}
                        <Show when=move || link.get().is_live()>
                            <span class=css::avatarDot></span>
                        </Show>
                    </button>

                    <Show when=move || menu_open.get()>
                        <div class=css::menu>
                            <div class=css::menuLabel>{account_label}</div>
                            <button
                                class=css::menuItem
                                on:click=move |_| {
                                    menu_open.set(false);
                                    AppRoute::Settings.push();
                                }
                            >
                                <Icon icon=ic::SETTINGS />
                                "Settings"
                            </button>
                            <button
                                class=danger_class.clone()
                                on:click=move |_| {
                                    menu_open.set(false);
                                    ctx.sign_out();
                                }
                            >
                                <Icon icon=ic::SIGN_OUT />
                                "Sign out"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
