//! 404 page for unknown hashes.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::AppRoute;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Full-screen 404 card with back/home escapes.
#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <div class=css::centerScreen>
            <div class=css::notFoundCard>
                <h1 class=css::notFoundNumeral>"404"</h1>
                <span class=css::notFoundIcon><Icon icon=ic::SEARCH /></span>
                <h2 class=css::notFoundTitle>"Page not found"</h2>
                <p class=css::notFoundText>
                    "Nothing lives at "
                    <span class=css::mono>{format!("#/{}", path)}</span>
                    ". It may have been moved or never existed."
                </p>
                <div class=css::controls>
                    <button class=css::ghostButton on:click=move |_| dom::history_back()>
                        <Icon icon=ic::ARROW_LEFT />
                        "Go back"
                    </button>
                    <button
                        class=css::primaryButton
                        on:click=move |_| AppRoute::Overview.push()
                    >
                        <Icon icon=ic::HOME />
                        "Go home"
                    </button>
                </div>
            </div>
        </div>
    }
}
