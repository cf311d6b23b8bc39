//! ANSI 256-color fallback palette for terminals without truecolor
//! support. Uses indexed colors only so every role degrades predictably.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(233),
                surface: Color::Indexed(234),
                surface_muted: Color::Indexed(236),
                border: Color::Indexed(240),
                divider: Color::Indexed(236),

                text: Color::Indexed(255),
                text_secondary: Color::Indexed(252),
                text_muted: Color::Indexed(246),

                accent_primary: Color::Indexed(81),
                accent_secondary: Color::Indexed(39),

                info: Color::Indexed(75),
                success: Color::Indexed(78),
                warning: Color::Indexed(220),
                error: Color::Indexed(211),

                selection_bg: Color::Indexed(237),
                selection_fg: Color::Indexed(255),
                focus: Color::Indexed(81),
            },
        }
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
