//! Shared type definitions for the Fleetdesk console.
//!
//! This crate holds the domain model consumed across the workspace (profiles,
//! roles, console sections, the navigation menu) together with the message and
//! effect protocol exchanged between the shell state machine and its runtime.

use heck::ToTitleCase;
use serde::{Deserialize, Serialize};

/// Access tier attached to an authenticated profile.
///
/// The wire encoding uses the camelCase identifiers of the surrounding
/// rental platform (`"superAdmin"`, `"admin"`, ...). Only the two admin
/// tiers may use this console; the remaining tiers exist so profiles from
/// the shared session state always deserialize cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Full platform access, including user administration.
    #[serde(rename = "superAdmin")]
    SuperAdmin,
    /// Day-to-day console access without user administration.
    #[serde(rename = "admin")]
    Admin,
    /// Rental desk staff; no console access.
    #[serde(rename = "agent")]
    Agent,
    /// End customer; no console access.
    #[serde(rename = "customer")]
    Customer,
}

impl Role {
    /// Stable wire identifier for this role.
    pub fn id(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "superAdmin",
            Role::Admin => "admin",
            Role::Agent => "agent",
            Role::Customer => "customer",
        }
    }

    /// Whether this role is allowed into the admin console at all.
    pub fn may_use_console(&self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }

    /// Human-readable form of the role id ("superAdmin" -> "Super Admin").
    pub fn display_name(&self) -> String {
        self.id().to_title_case()
    }
}

/// Authenticated user record as supplied by the session provider.
///
/// The console reads this record and never mutates it; ownership stays with
/// the session layer of the surrounding platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl Profile {
    /// Full display name, with surrounding whitespace trimmed when either
    /// name part is empty.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Badge initial: the first character of the first name verbatim, the
    /// uppercased first character of the email when the first name is empty,
    /// and a placeholder when both are missing.
    pub fn initial(&self) -> String {
        if let Some(c) = self.first_name.chars().next() {
            return c.to_string();
        }
        match self.email.chars().next() {
            Some(c) => c.to_uppercase().to_string(),
            None => "?".to_string(),
        }
    }
}

/// One navigable region of the console.
///
/// The set is closed: dispatching a section to its page is an exhaustive
/// match, so an unmapped section cannot exist past the id-parsing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Bookings,
    Fleet,
    Users,
    Drivers,
    Payments,
    Maintenance,
    Reports,
}

impl Section {
    /// All sections, in their canonical order.
    pub const ALL: [Section; 8] = [
        Section::Dashboard,
        Section::Bookings,
        Section::Fleet,
        Section::Users,
        Section::Drivers,
        Section::Payments,
        Section::Maintenance,
        Section::Reports,
    ];

    /// Stable string identifier used at external boundaries (CLI flags).
    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Bookings => "bookings",
            Section::Fleet => "fleet",
            Section::Users => "users",
            Section::Drivers => "drivers",
            Section::Payments => "payments",
            Section::Maintenance => "maintenance",
            Section::Reports => "reports",
        }
    }

    /// Heading shown in the content header and sidebar.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Bookings => "Bookings",
            Section::Fleet => "Fleet Management",
            Section::Users => "Users",
            Section::Drivers => "Driver Profiles",
            Section::Payments => "Payments",
            Section::Maintenance => "Maintenance",
            Section::Reports => "Reports",
        }
    }

    /// Parses a section id. Unknown ids yield `None`; callers at external
    /// boundaries fall back to [`Section::Dashboard`].
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.iter().copied().find(|s| s.id() == id)
    }
}

/// A single entry of the sidebar navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub section: Section,
    pub label: &'static str,
    pub icon: &'static str,
}

impl MenuItem {
    const fn new(section: Section, label: &'static str, icon: &'static str) -> Self {
        Self { section, label, icon }
    }
}

/// Derives the navigation menu for the given profile.
///
/// The base entries are fixed and ordered; the Users entry is inserted
/// directly after Fleet Management and only for super admins. Everyone else
/// (including an absent profile) gets the base list. The result is rebuilt
/// on every call so it always reflects the profile it was derived from.
pub fn menu_for(user: Option<&Profile>) -> Vec<MenuItem> {
    let mut items = vec![
        MenuItem::new(Section::Dashboard, "Dashboard", "📊"),
        MenuItem::new(Section::Bookings, "Bookings", "📅"),
        MenuItem::new(Section::Fleet, "Fleet Management", "🚗"),
        MenuItem::new(Section::Payments, "Payments", "💳"),
        MenuItem::new(Section::Maintenance, "Maintenance", "🔧"),
        MenuItem::new(Section::Reports, "Reports", "📈"),
    ];
    if user.is_some_and(|u| u.role == Role::SuperAdmin) {
        items.insert(3, MenuItem::new(Section::Users, "Users", "👥"));
    }
    items
}

/// Messages that drive the shell state machine.
///
/// Every user action and runtime event the console reacts to is expressed as
/// one of these variants and routed through the shell's update function.
#[derive(Debug, Clone)]
pub enum Msg {
    /// The startup session lookup finished (absent means no usable session).
    SessionResolved(Option<Profile>),
    /// Activate a section directly (menu click, brand control, CLI flag).
    SelectSection(Section),
    /// Flip the sidebar between expanded and collapsed.
    ToggleSidebar,
    /// Move the sidebar keyboard cursor by the given offset.
    SidebarCursor(isize),
    /// Activate the menu entry under the sidebar cursor.
    SidebarActivate,
    /// The logout control was activated.
    LogoutRequested,
    /// Periodic UI tick.
    Tick,
    /// Terminal resized.
    Resize(u16, u16),
}

/// Side effects the runtime performs on behalf of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Invalidate the session through the provider (best effort).
    Logout,
    /// Leave the shell for an external destination.
    Navigate(NavTarget),
}

/// External destinations reachable from the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// The platform's sign-in boundary. Reaching it ends the shell.
    Login,
}

/// How a shell run ended, as reported to the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOutcome {
    /// The session was absent, unauthorized, or explicitly logged out; the
    /// caller should point the user at the sign-in flow.
    RedirectToLogin,
    /// The user quit the console; the session is untouched.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: Role) -> Profile {
        Profile {
            first_name: "Avery".into(),
            last_name: "Quinn".into(),
            email: "avery@fleetdesk.example".into(),
            role,
        }
    }

    #[test]
    fn role_wire_ids_round_trip() {
        for role in [Role::SuperAdmin, Role::Admin, Role::Agent, Role::Customer] {
            let json = serde_json::to_string(&role).expect("serialize role");
            assert_eq!(json, format!("\"{}\"", role.id()));
            let back: Role = serde_json::from_str(&json).expect("deserialize role");
            assert_eq!(back, role);
        }
    }

    #[test]
    fn role_display_name_splits_words() {
        assert_eq!(Role::SuperAdmin.display_name(), "Super Admin");
        assert_eq!(Role::Admin.display_name(), "Admin");
    }

    #[test]
    fn console_access_is_limited_to_admin_tiers() {
        assert!(Role::SuperAdmin.may_use_console());
        assert!(Role::Admin.may_use_console());
        assert!(!Role::Agent.may_use_console());
        assert!(!Role::Customer.may_use_console());
    }

    #[test]
    fn menu_without_user_is_the_base_list() {
        let menu = menu_for(None);
        let sections: Vec<Section> = menu.iter().map(|m| m.section).collect();
        assert_eq!(
            sections,
            vec![
                Section::Dashboard,
                Section::Bookings,
                Section::Fleet,
                Section::Payments,
                Section::Maintenance,
                Section::Reports,
            ]
        );
    }

    #[test]
    fn admin_menu_excludes_users() {
        let user = profile(Role::Admin);
        let menu = menu_for(Some(&user));
        assert!(menu.iter().all(|m| m.section != Section::Users));
        assert_eq!(menu.len(), 6);
    }

    #[test]
    fn super_admin_menu_has_users_after_fleet() {
        let user = profile(Role::SuperAdmin);
        let menu = menu_for(Some(&user));
        let fleet = menu.iter().position(|m| m.section == Section::Fleet).unwrap();
        let users = menu.iter().position(|m| m.section == Section::Users).unwrap();
        assert_eq!(users, fleet + 1);
        assert_eq!(menu.len(), 7);
    }

    #[test]
    fn section_ids_parse_back() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("billing"), None);
        assert_eq!(Section::from_id(""), None);
    }

    #[test]
    fn initial_prefers_first_name_verbatim() {
        let user = profile(Role::Admin);
        assert_eq!(user.initial(), "A");

        let lower = Profile {
            first_name: "avery".into(),
            ..profile(Role::Admin)
        };
        assert_eq!(lower.initial(), "a");
    }

    #[test]
    fn initial_falls_back_to_uppercased_email() {
        let user = Profile {
            first_name: String::new(),
            last_name: "Quinn".into(),
            email: "a@b.com".into(),
            role: Role::Admin,
        };
        assert_eq!(user.initial(), "A");
    }

    #[test]
    fn initial_placeholder_when_nothing_available() {
        let user = Profile {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            role: Role::Admin,
        };
        assert_eq!(user.initial(), "?");
    }

    #[test]
    fn full_name_trims_missing_parts() {
        let user = Profile {
            first_name: String::new(),
            last_name: "Quinn".into(),
            email: "q@b.com".into(),
            role: Role::Admin,
        };
        assert_eq!(user.full_name(), "Quinn");
    }
}
