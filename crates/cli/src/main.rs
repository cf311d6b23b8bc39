use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use fleetdesk_session::{FileSessionStore, SessionProvider, StaticSession};
use fleetdesk_tui::ShellOptions;
use fleetdesk_types::{Profile, Role, Section, ShellOutcome};

/// Fleetdesk: the car-rental administration console.
///
/// Reads the platform session established by the sign-in flow and opens the
/// admin console for authorized profiles. Without a usable session it points
/// at the sign-in boundary and exits.
#[derive(Debug, Parser)]
#[command(name = "fleetdesk", version, about = "Car-rental administration console")]
struct Args {
    /// Section to open first (dashboard, bookings, fleet, users, drivers,
    /// payments, maintenance, reports)
    #[arg(long)]
    section: Option<String>,

    /// Color theme (slate, ansi)
    #[arg(long)]
    theme: Option<String>,

    /// Run against an in-memory demo session instead of the stored one
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let initial_section = args
        .section
        .as_deref()
        .map(resolve_section)
        .unwrap_or_default();

    let session: Arc<dyn SessionProvider> = if args.demo {
        Arc::new(StaticSession::new(Some(demo_profile())))
    } else {
        Arc::new(FileSessionStore::new())
    };

    let options = ShellOptions {
        initial_section,
        theme: args.theme,
    };
    match fleetdesk_tui::run(session, options).await? {
        ShellOutcome::RedirectToLogin => {
            eprintln!("No authorized session. Sign in at /login, then relaunch the console.");
            std::process::exit(1);
        }
        ShellOutcome::Quit => Ok(()),
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Maps a section id from the command line, falling back to the dashboard
/// for anything unrecognized.
fn resolve_section(id: &str) -> Section {
    match Section::from_id(id) {
        Some(section) => section,
        None => {
            warn!(section = id, "Unknown section id; opening the dashboard");
            Section::default()
        }
    }
}

/// Super-admin profile used by `--demo` runs.
fn demo_profile() -> Profile {
    Profile {
        first_name: "Avery".into(),
        last_name: "Quinn".into(),
        email: "avery@fleetdesk.example".into(),
        role: Role::SuperAdmin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_section_ids_resolve() {
        assert_eq!(resolve_section("payments"), Section::Payments);
        assert_eq!(resolve_section("users"), Section::Users);
    }

    #[test]
    fn unknown_section_ids_fall_back_to_the_dashboard() {
        assert_eq!(resolve_section("billing"), Section::Dashboard);
        assert_eq!(resolve_section(""), Section::Dashboard);
    }

    #[test]
    fn demo_profile_is_console_authorized() {
        assert!(demo_profile().role.may_use_console());
    }
}
