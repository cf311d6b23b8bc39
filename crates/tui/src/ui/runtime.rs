//! Runtime: terminal lifecycle and the shell event loop.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode,
//!   mouse capture).
//! - Resolve the session once at startup and feed the result into the state
//!   machine before anything interactive renders.
//! - Drive a single `tokio::select!` loop over input, ticks, and Ctrl+C.
//! - Execute the effects an update yields (best-effort logout, hand-off to
//!   the sign-in boundary).
//!
//! Input is read on a dedicated OS thread that blocks on
//! `crossterm::event::read()` and forwards events over a channel; keeping the
//! blocking read off the async runtime makes event delivery reliable across
//! terminals.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::warn;

use fleetdesk_session::SessionProvider;
use fleetdesk_types::{Effect, Msg, NavTarget, ShellOutcome};

use crate::ShellOptions;
use crate::app::App;
use crate::ui::shell::ShellView;
use crate::ui::theme;

/// Terminals narrower than this many columns start with the sidebar
/// collapsed. Evaluated once at startup; resizes do not re-evaluate it.
pub(crate) const AUTO_COLLAPSE_WIDTH: u16 = 100;

/// Spawn a dedicated thread that blocks on terminal input and forwards
/// events over a Tokio channel.
fn spawn_input_reader() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(100);
    std::thread::spawn(move || {
        loop {
            match event::read() {
                Ok(terminal_event) => {
                    if sender.blocking_send(terminal_event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!(%error, "Failed to read terminal event");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    shell: &mut ShellView,
) -> Result<()> {
    terminal.draw(|frame| shell.render(frame, frame.area(), app))?;
    Ok(())
}

/// Performs pending effects. Returns the outcome that ends the run, if any.
fn run_effects(session: &dyn SessionProvider, effects: &mut Vec<Effect>) -> Option<ShellOutcome> {
    let mut outcome = None;
    for effect in effects.drain(..) {
        match effect {
            Effect::Logout => {
                if let Err(error) = session.logout() {
                    warn!(%error, "Logout failed; continuing to sign-in");
                }
            }
            Effect::Navigate(NavTarget::Login) => {
                outcome = Some(ShellOutcome::RedirectToLogin);
            }
        }
    }
    outcome
}

/// Entry point for the console runtime: resolves the session, sets up the
/// terminal, runs the event loop, and restores the terminal on exit.
pub async fn run_shell(session: Arc<dyn SessionProvider>, options: ShellOptions) -> Result<ShellOutcome> {
    let loaded_theme = theme::load(options.theme.as_deref());
    let mut app = App::new(loaded_theme, options.initial_section);
    let mut shell = ShellView::new();

    // Single authorization check per run; a failed lookup reads as absent.
    let mut effects = app.update(Msg::SessionResolved(session.current_user()));

    // One-shot narrow-terminal check.
    if let Ok((width, _)) = crossterm::terminal::size()
        && width < AUTO_COLLAPSE_WIDTH
    {
        app.sidebar.open = false;
    }

    let mut input_receiver = spawn_input_reader();
    let mut terminal = setup_terminal()?;

    let mut ticker = time::interval(Duration::from_millis(250));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(&mut terminal, &mut app, &mut shell)?;

    let outcome = loop {
        // An unauthorized resolution exits here, after the placeholder frame.
        if !effects.is_empty()
            && let Some(outcome) = run_effects(session.as_ref(), &mut effects)
        {
            break outcome;
        }

        let mut needs_render = false;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                match maybe_event {
                    Some(Event::Key(key))
                        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) =>
                    {
                        break ShellOutcome::Quit;
                    }
                    Some(terminal_event) => {
                        effects.extend(shell.handle_event(&mut app, terminal_event));
                        needs_render = true;
                    }
                    // Input channel closed; shut down cleanly.
                    None => break ShellOutcome::Quit,
                }
            }
            _ = ticker.tick() => {
                effects.extend(app.update(Msg::Tick));
                needs_render = !effects.is_empty();
            }
            _ = signal::ctrl_c() => break ShellOutcome::Quit,
        }

        if needs_render {
            render(&mut terminal, &mut app, &mut shell)?;
        }
    };

    cleanup_terminal(&mut terminal)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetdesk_session::StaticSession;
    use fleetdesk_types::{Profile, Role};

    fn profile() -> Profile {
        Profile {
            first_name: "Avery".into(),
            last_name: "Quinn".into(),
            email: "avery@fleetdesk.example".into(),
            role: Role::Admin,
        }
    }

    #[test]
    fn logout_effect_invokes_the_provider_once_and_redirects() {
        let session = StaticSession::new(Some(profile()));
        let mut effects = vec![Effect::Logout, Effect::Navigate(NavTarget::Login)];

        let outcome = run_effects(&session, &mut effects);

        assert_eq!(outcome, Some(ShellOutcome::RedirectToLogin));
        assert_eq!(session.logout_count(), 1);
        assert!(effects.is_empty());
    }

    #[test]
    fn navigation_without_logout_leaves_the_session_alone() {
        let session = StaticSession::new(Some(profile()));
        let mut effects = vec![Effect::Navigate(NavTarget::Login)];

        let outcome = run_effects(&session, &mut effects);

        assert_eq!(outcome, Some(ShellOutcome::RedirectToLogin));
        assert_eq!(session.logout_count(), 0);
        assert_eq!(session.current_user(), Some(profile()));
    }

    #[test]
    fn no_effects_means_the_run_continues() {
        let session = StaticSession::new(Some(profile()));
        assert_eq!(run_effects(&session, &mut Vec::new()), None);
    }
}
