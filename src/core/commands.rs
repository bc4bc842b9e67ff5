//! Control command dispatch.
//!
//! A dispatch immediately lands in the feed as `Queued`, then resolves in
//! place once the API answers. The feed never blocks the UI; failures are
//! recorded, not thrown.

use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::core::error::ApiError;
use crate::core::http;
use crate::models::{CommandKind, CommandRecord, CommandStatus};

static COMMAND_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Client-generated command identifier, unique per page load.
fn next_command_id() -> String {
    let seq = COMMAND_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("cmd-{:x}-{:04}", js_sys::Date::now() as u64, seq)
}

#[derive(Serialize)]
struct CommandRequest<'a> {
    action: &'a str,
    command_id: &'a str,
}

/// Queue a restart/stop command against a service and resolve its feed
/// record when the API answers.
pub fn dispatch(ctx: AppContext, service_id: &str, kind: CommandKind) {
    let command_id = next_command_id();
    let queued_at = js_sys::Date::now();

    let record = CommandRecord::queued(&command_id, service_id, kind, queued_at);
    let record_id = record.id;
    ctx.commands.update(|log| log.push(record));

    let service_id = service_id.to_string();
    spawn_local(async move {
        let bearer = ctx.access_token.get_untracked();
        let path = format!("/services/{}/commands", service_id);
        let request = CommandRequest {
            action: kind.as_str(),
            command_id: &command_id,
        };

        let result = http::post_accepted(&path, &request, bearer.as_deref()).await;
        let duration = js_sys::Date::now() - queued_at;

        let status = match result {
            Ok(()) => CommandStatus::Succeeded,
            Err(ApiError::Timeout) => CommandStatus::TimedOut,
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("command {} against {} failed: {}", kind.as_str(), service_id, e)
                        .into(),
                );
                CommandStatus::Failed
            }
        };

        ctx.commands
            .update(|log| log.resolve(record_id, status, duration));
    });
}
