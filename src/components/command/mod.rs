//! Confirmation-gated service controls.
//!
//! [`CommandButton`] is the two-step trigger for destructive actions;
//! [`CommandHistory`] renders the feed of what was dispatched.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::COMMAND_ID_PREVIEW_LEN;
use crate::models::{CommandKind, CommandRecord, CommandStatus};
use crate::utils::format::{format_clock, format_duration, short_id};

stylance::import_crate_style!(css, "src/components/command/command.module.css");

// ============================================================================
// Command Button
// ============================================================================

/// Two-step control for a destructive service action.
///
/// First click arms the control and swaps the trigger for a confirmation
/// panel; only the panel's confirm button fires `on_execute`. Cancel (or
/// unmounting) disarms without firing, so a single click can never reach
/// the destructive path.
#[component]
pub fn CommandButton(
    kind: CommandKind,
    on_execute: Callback<()>,
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(into, optional)] busy: Signal<bool>,
) -> impl IntoView {
    let confirming = RwSignal::new(false);

    let trigger_class = match kind {
        CommandKind::Restart => stylance::classes!(css::trigger, css::triggerRestart),
        CommandKind::Stop => stylance::classes!(css::trigger, css::triggerStop),
    };
    let confirm_class = match kind {
        CommandKind::Restart => stylance::classes!(css::confirmButton, css::triggerRestart),
        CommandKind::Stop => stylance::classes!(css::confirmButton, css::triggerStop),
    };
    let kind_icon = match kind {
        CommandKind::Restart => ic::RESTART,
        CommandKind::Stop => ic::STOP,
    };

    let action_icon = move || {
        if busy.get() {
            view! { <span class=css::spin><Icon icon=ic::SPINNER /></span> }.into_any()
        } else {
            view! { <Icon icon=kind_icon /> }.into_any()
        }
    };

    move || {
        if confirming.get() {
            view! {
                <div class=css::confirmCard>
                    <p class=css::confirmText>{kind.confirm_text()}</p>
                    <div class=css::confirmActions>
                        <button
                            class=confirm_class.clone()
                            disabled=move || busy.get()
                            on:click=move |_| {
                                confirming.set(false);
                                on_execute.run(());
                            }
                        >
                            {action_icon}
                            "Confirm"
                        </button>
                        <button
                            class=css::cancelButton
                            on:click=move |_| confirming.set(false)
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=trigger_class.clone()
                    disabled=move || disabled.get() || busy.get()
                    on:click=move |_| confirming.set(true)
                >
                    {action_icon}
                    {kind.label()}
                </button>
            }
            .into_any()
        }
    }
}

// ============================================================================
// Command History
// ============================================================================

fn status_icon(status: CommandStatus) -> icondata::Icon {
    match status {
        CommandStatus::Queued => ic::SPINNER,
        CommandStatus::Succeeded => ic::SUCCEEDED,
        CommandStatus::Failed | CommandStatus::TimedOut => ic::FAILED,
    }
}

fn status_class(status: CommandStatus) -> &'static str {
    match status {
        CommandStatus::Queued => css::statusQueued,
        CommandStatus::Succeeded => css::statusSucceeded,
        CommandStatus::Failed => css::statusFailed,
        CommandStatus::TimedOut => css::statusTimedOut,
    }
}

/// Feed of dispatched commands, newest first.
#[component]
pub fn CommandHistory(#[prop(into)] entries: Signal<Vec<CommandRecord>>) -> impl IntoView {
    let rows = move || {
        entries
            .get()
            .into_iter()
            .map(|record| {
                let kind_icon = match record.kind {
                    CommandKind::Restart => ic::RESTART,
                    CommandKind::Stop => ic::STOP,
                };
                let icon_class = if record.status.is_pending() {
                    stylance::classes!(css::statusIcon, css::spin)
                } else {
                    css::statusIcon.to_string()
                };
                let badge_class = stylance::classes!(css::rowStatus, status_class(record.status));
                view! {
                    <div class=css::row>
                        <span class=css::rowKindIcon><Icon icon=kind_icon /></span>
                        <div class=css::rowBody>
                            <div class=css::rowHead>
                                <span class=css::rowKind>{record.kind.label()}</span>
                                <span class=badge_class>
                                    <span class=icon_class>
                                        <Icon icon=status_icon(record.status) />
                                    </span>
                                    {record.status.label()}
                                </span>
                            </div>
                            <div class=css::rowMeta>
                                {format_clock(record.queued_at_ms)}
                                {record
                                    .duration_ms
                                    .map(|d| format!(" ({})", format_duration(d)))}
                            </div>
                        </div>
                        <span class=css::rowId>
                            {short_id(&record.command_id, COMMAND_ID_PREVIEW_LEN).to_string()}
                        </span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class=css::feed>
            {move || {
                if entries.with(|e| e.is_empty()) {
                    view! {
                        <div class=css::empty>
                            <span class=css::emptyIcon><Icon icon=ic::CLOCK /></span>
                            <p class=css::emptyTitle>"No commands yet"</p>
                            <p class=css::emptyHint>
                                "Restart or stop commands dispatched against this service will show up here."
                            </p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <div class=css::rows>{rows}</div> }.into_any()
                }
            }}
        </div>
    }
}
