//! Application state and logic for the Fleetdesk console.
//!
//! This module contains the shell's central state container and its update
//! function. All state mutation happens here in response to [`Msg`] values;
//! the UI layer only reads state and reports messages, and the runtime
//! performs whatever [`Effect`]s an update yields.

use ratatui::layout::Rect;

use fleetdesk_types::{Effect, MenuItem, Msg, NavTarget, Profile, Section, menu_for};

use crate::ui::theme::Theme;

/// Lifecycle of a console run.
///
/// The shell starts in `Loading` until the startup session lookup resolves.
/// An unauthorized resolution never reaches `Ready`: the update yields the
/// login navigation effect and the shell stays on its loading placeholder
/// for the transient frame before the runtime hands control back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
}

/// Sidebar view state: expansion, keyboard cursor, and the hit areas
/// recorded by the last render for mouse dispatch.
#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    /// Expanded (icons + labels + identity) vs. collapsed (icons only).
    pub open: bool,
    /// Keyboard highlight within the menu; independent of the active section.
    pub cursor: usize,
    /// Last rendered area of the brand control.
    pub brand_area: Rect,
    /// Last rendered row areas, index-aligned with the derived menu.
    pub item_areas: Vec<Rect>,
}

/// Top bar hit areas recorded by the last render. Cleared whenever the bar
/// renders nothing (no signed-in user), so stale areas can't swallow clicks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopBarState {
    pub toggle_area: Rect,
    pub logout_area: Rect,
}

/// The central state container for one console run.
pub struct App {
    /// Where the shell is in its lifecycle.
    pub phase: Phase,
    /// Profile resolved at startup; set once, never reset.
    pub user: Option<Profile>,
    /// Section whose page currently fills the content area.
    pub active_section: Section,
    /// Sidebar expansion and cursor state.
    pub sidebar: SidebarState,
    /// Top bar hit areas.
    pub top_bar: TopBarState,
    /// Active color theme.
    pub theme: Box<dyn Theme>,
}

impl App {
    pub fn new(theme: Box<dyn Theme>, initial_section: Section) -> Self {
        Self {
            phase: Phase::default(),
            user: None,
            active_section: initial_section,
            sidebar: SidebarState {
                open: true,
                ..SidebarState::default()
            },
            top_bar: TopBarState::default(),
            theme,
        }
    }

    /// Navigation menu for the current profile. Recomputed on every call so
    /// it always matches the resolved role.
    pub fn menu(&self) -> Vec<MenuItem> {
        menu_for(self.user.as_ref())
    }

    /// Processes a message and returns the effects the runtime must perform.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::SessionResolved(resolved) => match resolved {
                Some(profile) if profile.role.may_use_console() => {
                    self.user = Some(profile);
                    self.phase = Phase::Ready;
                    self.sync_cursor();
                }
                // No session, unusable session, and wrong role all read the
                // same: hand control to the sign-in boundary.
                _ => return vec![Effect::Navigate(NavTarget::Login)],
            },
            Msg::SelectSection(section) if self.phase == Phase::Ready => {
                self.select_section(section);
            }
            Msg::ToggleSidebar if self.phase == Phase::Ready => {
                self.sidebar.open = !self.sidebar.open;
            }
            Msg::SidebarCursor(delta) if self.phase == Phase::Ready => {
                let len = self.menu().len() as isize;
                if len > 0 {
                    let cursor = self.sidebar.cursor as isize + delta;
                    self.sidebar.cursor = cursor.clamp(0, len - 1) as usize;
                }
            }
            Msg::SidebarActivate if self.phase == Phase::Ready => {
                if let Some(item) = self.menu().get(self.sidebar.cursor).copied() {
                    self.select_section(item.section);
                }
            }
            Msg::LogoutRequested if self.phase == Phase::Ready => {
                return vec![Effect::Logout, Effect::Navigate(NavTarget::Login)];
            }
            Msg::Tick | Msg::Resize(_, _) => {}
            // Interaction messages arriving before the session resolves are
            // dropped; nothing interactive is on screen yet.
            _ => {}
        }
        Vec::new()
    }

    fn select_section(&mut self, section: Section) {
        self.active_section = section;
        self.sync_cursor();
    }

    /// Aligns the keyboard cursor with the active section when that section
    /// has a menu entry (sections like Drivers have none; the cursor stays).
    fn sync_cursor(&mut self) {
        if let Some(index) = self.menu().iter().position(|m| m.section == self.active_section) {
            self.sidebar.cursor = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::SlateTheme;
    use fleetdesk_types::Role;

    fn profile(role: Role) -> Profile {
        Profile {
            first_name: "Avery".into(),
            last_name: "Quinn".into(),
            email: "avery@fleetdesk.example".into(),
            role,
        }
    }

    fn app() -> App {
        App::new(Box::new(SlateTheme::default()), Section::Dashboard)
    }

    fn ready_app(role: Role) -> App {
        let mut app = app();
        let effects = app.update(Msg::SessionResolved(Some(profile(role))));
        assert!(effects.is_empty());
        app
    }

    #[test]
    fn absent_session_redirects_to_login() {
        let mut app = app();
        let effects = app.update(Msg::SessionResolved(None));
        assert_eq!(effects, vec![Effect::Navigate(NavTarget::Login)]);
        assert_eq!(app.phase, Phase::Loading);
        assert!(app.user.is_none());
    }

    #[test]
    fn unprivileged_roles_redirect_to_login() {
        for role in [Role::Agent, Role::Customer] {
            let mut app = app();
            let effects = app.update(Msg::SessionResolved(Some(profile(role))));
            assert_eq!(effects, vec![Effect::Navigate(NavTarget::Login)]);
            assert_eq!(app.phase, Phase::Loading);
        }
    }

    #[test]
    fn admin_and_super_admin_reach_ready() {
        for role in [Role::Admin, Role::SuperAdmin] {
            let app = ready_app(role);
            assert_eq!(app.phase, Phase::Ready);
            assert_eq!(app.user.as_ref().map(|u| u.role), Some(role));
        }
    }

    #[test]
    fn sidebar_toggle_is_idempotent_and_keeps_the_section() {
        let mut app = ready_app(Role::Admin);
        app.update(Msg::SelectSection(Section::Payments));
        let open_before = app.sidebar.open;

        app.update(Msg::ToggleSidebar);
        assert_ne!(app.sidebar.open, open_before);
        app.update(Msg::ToggleSidebar);
        assert_eq!(app.sidebar.open, open_before);
        assert_eq!(app.active_section, Section::Payments);
    }

    #[test]
    fn selecting_a_section_moves_the_cursor_with_it() {
        let mut app = ready_app(Role::SuperAdmin);
        app.update(Msg::SelectSection(Section::Users));
        assert_eq!(app.active_section, Section::Users);
        assert_eq!(app.sidebar.cursor, 3);
    }

    #[test]
    fn cursor_movement_clamps_to_the_menu() {
        let mut app = ready_app(Role::Admin);
        app.update(Msg::SidebarCursor(-3));
        assert_eq!(app.sidebar.cursor, 0);
        app.update(Msg::SidebarCursor(99));
        assert_eq!(app.sidebar.cursor, app.menu().len() - 1);
    }

    #[test]
    fn activating_the_cursor_selects_its_entry() {
        let mut app = ready_app(Role::Admin);
        app.update(Msg::SidebarCursor(1));
        app.update(Msg::SidebarActivate);
        assert_eq!(app.active_section, Section::Bookings);
    }

    #[test]
    fn logout_requests_the_provider_call_then_the_redirect() {
        let mut app = ready_app(Role::Admin);
        let effects = app.update(Msg::LogoutRequested);
        assert_eq!(effects, vec![Effect::Logout, Effect::Navigate(NavTarget::Login)]);
    }

    #[test]
    fn interaction_before_resolution_is_ignored() {
        let mut app = app();
        assert!(app.update(Msg::SelectSection(Section::Fleet)).is_empty());
        assert!(app.update(Msg::LogoutRequested).is_empty());
        assert_eq!(app.active_section, Section::Dashboard);
        assert_eq!(app.phase, Phase::Loading);
    }

    #[test]
    fn drivers_section_activates_without_a_menu_entry() {
        let mut app = ready_app(Role::SuperAdmin);
        let cursor_before = app.sidebar.cursor;
        app.update(Msg::SelectSection(Section::Drivers));
        assert_eq!(app.active_section, Section::Drivers);
        assert_eq!(app.sidebar.cursor, cursor_before);
    }
}
