//! Service overview grid, the dashboard landing page.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::core::error::ApiError;
use crate::core::services;
use crate::models::{AppRoute, Service, ServiceStatus};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

pub(super) fn status_pill_class(status: ServiceStatus) -> String {
    let modifier = match status {
        ServiceStatus::Up => css::pillUp,
        ServiceStatus::Down => css::pillDown,
        ServiceStatus::Degraded => css::pillDegraded,
        ServiceStatus::Unknown => css::pillUnknown,
    };
    stylance::classes!(css::pill, modifier)
}

/// Landing page listing every monitored service.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let services = RwSignal::new(None::<Result<Vec<Service>, ApiError>>);
    spawn_local(async move {
        let bearer = ctx.access_token.get_untracked();
        services.set(Some(services::fetch_services(bearer.as_deref()).await));
    });

    let grid = move |list: Vec<Service>| {
        list.into_iter()
            .map(|service| {
                let target = AppRoute::Service {
                    id: service.id.clone(),
                };
                let pill = status_pill_class(service.status);
                view! {
                    <button class=css::card on:click=move |_| target.push()>
                        <div class=css::cardHead>
                            <span class=css::cardName>{service.name.clone()}</span>
                            <span class=pill>
                                {service.status.label()}
                            </span>
                        </div>
                        <div class=css::cardAddress>{service.address()}</div>
                        <div class=css::cardFoot>
                            {if service.agent_connected {
                                "agent connected"
                            } else {
                                "agent offline"
                            }}
                        </div>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <main class=css::page>
            <h1 class=css::pageHeading>"Services"</h1>
            <p class=css::pageSubheading>"Everything NanoNet is watching right now."</p>

            {move || match services.get() {
                None => view! {
                    <p class=css::loading>"Loading services..."</p>
                }
                .into_any(),
                Some(Ok(list)) if list.is_empty() => view! {
                    <p class=css::emptyNote>
                        "No services registered yet. Add one through the agent CLI to see it here."
                    </p>
                }
                .into_any(),
                Some(Ok(list)) => view! {
                    <div class=css::grid>{grid(list)}</div>
                }
                .into_any(),
                Some(Err(e)) => view! {
                    <p class=css::errorBanner>{format!("Could not load services: {}", e)}</p>
                }
                .into_any(),
            }}
        </main>
    }
}
