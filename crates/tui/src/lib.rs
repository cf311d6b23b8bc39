//! # Fleetdesk Console
//!
//! Terminal front end for car-rental administration. The console composes a
//! role-gated sidebar, a top bar with the signed-in identity, and a content
//! area that dispatches to one of eight pages (dashboard, bookings, fleet,
//! users, drivers, payments, maintenance, reports).
//!
//! ## Architecture
//!
//! The shell follows a message/effect loop: input events become `Msg`
//! values routed through the central `App` state machine, which answers with
//! effects the runtime performs (session logout, hand-off to the sign-in
//! boundary). Rendering is component-based; each UI region implements the
//! shared `Component` trait.
//!
//! Authentication lives outside this crate: the caller injects a
//! [`SessionProvider`] and receives a [`ShellOutcome`] describing how the
//! run ended.

mod app;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use fleetdesk_session::SessionProvider;
use fleetdesk_types::{Section, ShellOutcome};

/// Options controlling a console run.
#[derive(Debug, Clone, Default)]
pub struct ShellOptions {
    /// Section shown when the console opens.
    pub initial_section: Section,
    /// Preferred theme name; terminal capability may override it.
    pub theme: Option<String>,
}

/// Runs the console until the user quits or the session boundary takes over.
///
/// Performs a single session lookup at startup: an absent or unauthorized
/// profile ends the run with [`ShellOutcome::RedirectToLogin`] without
/// rendering any console content. Terminal state (raw mode, alternate
/// screen) is restored before this function returns.
pub async fn run(session: Arc<dyn SessionProvider>, options: ShellOptions) -> Result<ShellOutcome> {
    ui::runtime::run_shell(session, options).await
}
