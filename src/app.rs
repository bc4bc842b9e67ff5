//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::components::background::ParticleBackground;
use crate::config::MAX_COMMAND_FEED;
use crate::core::{auth, link};
use crate::models::{AppRoute, AuthState, CommandLog, LinkStatus, Session};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The [`AppContext`] separates concerns into independent domains:
/// - **Auth state**: Who is signed in, plus the in-memory access token
/// - **Link state**: Gateway reachability for the LIVE indicator
/// - **Command feed**: Bounded history of dispatched control commands
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Authentication session state.
    pub auth: RwSignal<AuthState>,

    /// Access token, memory only. localStorage would expose it to XSS;
    /// a reload re-obtains it through the refresh token.
    pub access_token: RwSignal<Option<String>>,

    /// Gateway reachability.
    pub link: RwSignal<LinkStatus>,

    /// Command history feed (bounded by `MAX_COMMAND_FEED`).
    pub commands: RwSignal<CommandLog>,
}

impl AppContext {
    /// Creates a new application context with default state.
    pub fn new() -> Self {
        Self {
            auth: RwSignal::new(AuthState::SignedOut),
            access_token: RwSignal::new(None),
            link: RwSignal::new(LinkStatus::Offline),
            commands: RwSignal::new(CommandLog::new(MAX_COMMAND_FEED)),
        }
    }

    /// Adopt a fresh login: persist the session and expose the tokens.
    pub fn establish_session(&self, response: auth::AuthResponse) {
        let session = Session {
            user: response.user.clone(),
            refresh_token: response.tokens.refresh_token,
        };
        auth::save_session(&session);
        self.access_token.set(Some(response.tokens.access_token));
        self.auth.set(AuthState::SignedIn {
            user: response.user,
        });
    }

    /// Restore a persisted session, then refresh its tokens in the
    /// background. The user is treated as signed in right away so the
    /// dashboard renders without a flash of the login screen.
    pub fn restore_session(&self) {
        let Some(session) = auth::load_session() else {
            return;
        };
        self.auth.set(AuthState::SignedIn {
            user: session.user.clone(),
        });

        let ctx = *self;
        spawn_local(async move {
            match auth::refresh(&session.refresh_token).await {
                Ok(tokens) => {
                    auth::save_session(&Session {
                        user: session.user,
                        refresh_token: tokens.refresh_token,
                    });
                    ctx.access_token.set(Some(tokens.access_token));
                }
                Err(e) if matches!(e.status(), Some(401 | 403)) => {
                    // The gateway no longer recognizes this session
                    auth::clear_session();
                    ctx.access_token.set(None);
                    ctx.auth.set(AuthState::SignedOut);
                    AppRoute::Login.replace();
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("token refresh failed: {}", e).into());
                }
            }
        });
    }

    /// Sign out: best-effort server logout, then local teardown.
    pub fn sign_out(&self) {
        let token = self.access_token.get_untracked();
        spawn_local(async move {
            auth::logout(token.as_deref()).await;
        });

        auth::clear_session();
        self.access_token.set(None);
        self.auth.set(AuthState::SignedOut);
        AppRoute::Login.push();
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Restores a persisted session and starts the gateway heartbeat
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the particle background beneath the router
#[component]
pub fn App() -> impl IntoView {
    // Create and provide application context
    let ctx = AppContext::new();
    provide_context(ctx);

    ctx.restore_session();
    link::start(ctx.link);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f0f7ff;
                    color: #3b4563;
                    font-family: 'Quicksand', sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #f43f5e; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #7c8db5; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #ffffff;
                            border: 1px solid rgba(57, 197, 187, 0.15);
                            padding: 1rem;
                            border-radius: 8px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #7c8db5;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #f43f5e;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #39c5bb;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 8px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <ParticleBackground />
            <AppRouter />
        </ErrorBoundary>
    }
}
