//! Application router component.
//!
//! Handles URL-based routing with hash history. Uses native hashchange
//! events so browser back/forward buttons work without a router crate.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the rendered page derives from `#/path`
//! - **Guards run in a Memo**: guests resolve to Login, signed-in users skip it
//! - **Guard redirects replace**: they never add history entries, so the
//!   back button is never trapped on a redirect

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::pages::{
    LoginPage, NotFoundPage, OverviewPage, ServiceDetailPage, SettingsPage,
};
use crate::components::status::StatusBar;
use crate::models::AppRoute;

/// Main application router.
///
/// Route structure:
/// - `#/login` → Login (guests only)
/// - `#/` → Service overview
/// - `#/services/<id>` → Service detail
/// - `#/settings` → Settings
/// - anything else → 404
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Auth guards
    let resolved = Memo::new(move |_| {
        let requested = route.get();
        let signed_in = ctx.auth.with(|a| a.is_signed_in());
        match requested {
            r if !signed_in && r.requires_auth() => AppRoute::Login,
            AppRoute::Login if signed_in => AppRoute::Overview,
            r => r,
        }
    });

    // Keep the URL in line with guard decisions. replaceState doesn't
    // fire hashchange, so the route signal is updated by hand.
    Effect::new(move || {
        let resolved_route = resolved.get();
        if resolved_route != route.get_untracked() {
            resolved_route.replace();
            route.set(resolved_route);
        }
    });

    // Login and 404 are full-screen; everything else gets the bar
    let show_chrome = Memo::new(move |_| {
        !matches!(
            resolved.get(),
            AppRoute::Login | AppRoute::NotFound { .. }
        )
    });

    view! {
        <Show when=move || show_chrome.get()>
            <StatusBar route=resolved />
        </Show>

        {move || match resolved.get() {
            AppRoute::Login => view! { <LoginPage /> }.into_any(),
            AppRoute::Overview => view! { <OverviewPage /> }.into_any(),
            AppRoute::Service { id } => view! { <ServiceDetailPage id=id /> }.into_any(),
            AppRoute::Settings => view! { <SettingsPage /> }.into_any(),
            AppRoute::NotFound { path } => view! { <NotFoundPage path=path /> }.into_any(),
        }}
    }
}
