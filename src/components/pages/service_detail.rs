//! Single-service page: facts, control buttons, command history.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::overview::status_pill_class;
use crate::app::AppContext;
use crate::components::command::{CommandButton, CommandHistory};
use crate::core::error::ApiError;
use crate::core::{commands, services};
use crate::models::{CommandKind, Service};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Detail page for one service, keyed by its backend id.
///
/// Hosts the confirmation-gated restart/stop controls; a command button
/// reports busy while its kind has a queued record for this service, so
/// double dispatch is blocked without extra bookkeeping.
#[component]
pub fn ServiceDetailPage(id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let service = RwSignal::new(None::<Result<Service, ApiError>>);
    {
        let id = id.clone();
        spawn_local(async move {
            let bearer = ctx.access_token.get_untracked();
            service.set(Some(services::fetch_service(&id, bearer.as_deref()).await));
        });
    }

    let controllable = Signal::derive(move || {
        service.with(|s| matches!(s, Some(Ok(svc)) if svc.controllable()))
    });

    let busy_for = |ctx: AppContext, id: String, kind: CommandKind| {
        Signal::derive(move || {
            ctx.commands.with(|log| {
                log.for_service(&id)
                    .iter()
                    .any(|r| r.kind == kind && r.status.is_pending())
            })
        })
    };
    let restart_busy = busy_for(ctx, id.clone(), CommandKind::Restart);
    let stop_busy = busy_for(ctx, id.clone(), CommandKind::Stop);

    let on_restart = {
        let id = id.clone();
        Callback::new(move |_: ()| commands::dispatch(ctx, &id, CommandKind::Restart))
    };
    let on_stop = {
        let id = id.clone();
        Callback::new(move |_: ()| commands::dispatch(ctx, &id, CommandKind::Stop))
    };

    let history = {
        let id = id.clone();
        Signal::derive(move || ctx.commands.with(|log| log.for_service(&id)))
    };

    let facts = move || match service.get() {
        None => view! { <p class=css::loading>"Loading service..."</p> }.into_any(),
        Some(Err(e)) => view! {
            <p class=css::errorBanner>{format!("Could not load service: {}", e)}</p>
        }
        .into_any(),
        Some(Ok(svc)) => {
            let pill = status_pill_class(svc.status);
            view! {
                <div class=css::panel>
                    <div class=css::cardHead>
                        <span class=css::cardName>{svc.name.clone()}</span>
                        <span class=pill>{svc.status.label()}</span>
                    </div>
                    <dl class=css::facts>
                        <dt>"Address"</dt>
                        <dd class=css::mono>{svc.address()}</dd>
                        <dt>"Health endpoint"</dt>
                        <dd class=css::mono>{svc.health_endpoint.clone()}</dd>
                        <dt>"Poll interval"</dt>
                        <dd>{format!("{}s", svc.poll_interval_sec)}</dd>
                        <dt>"Agent"</dt>
                        <dd>{if svc.agent_connected { "connected" } else { "offline" }}</dd>
                    </dl>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <main class=css::page>
            {facts}

            <section class=css::section>
                <h2 class=css::sectionHeading>"Controls"</h2>
                {move || (!controllable.get()).then(|| view! {
                    <p class=css::hint>
                        "The on-host agent is offline; commands would go nowhere."
                    </p>
                })}
                <div class=css::controls>
                    <CommandButton
                        kind=CommandKind::Restart
                        on_execute=on_restart
                        disabled=Signal::derive(move || !controllable.get())
                        busy=restart_busy
                    />
                    <CommandButton
                        kind=CommandKind::Stop
                        on_execute=on_stop
                        disabled=Signal::derive(move || !controllable.get())
                        busy=stop_busy
                    />
                </div>
            </section>

            <section class=css::section>
                <h2 class=css::sectionHeading>"Command history"</h2>
                <CommandHistory entries=history />
            </section>
        </main>
    }
}
