//! Gateway heartbeat for the LIVE indicator.

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::HEARTBEAT_INTERVAL_MS;
use crate::core::http;
use crate::models::LinkStatus;

/// Start polling the gateway health endpoint for the lifetime of the app.
pub fn start(link: RwSignal<LinkStatus>) {
    spawn_local(async move {
        loop {
            let status = match http::get_ok("/health").await {
                Ok(()) => LinkStatus::Live,
                Err(_) => LinkStatus::Offline,
            };
            if link.get_untracked() != status {
                link.set(status);
            }
            sleep(Duration::from_millis(u64::from(HEARTBEAT_INTERVAL_MS))).await;
        }
    });
}
