//! Slate palette: the console's default truecolor theme. Dark slate
//! surfaces with a sky accent, matching the platform's visual identity.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

#[derive(Debug, Clone)]
pub struct SlateTheme {
    roles: ThemeRoles,
}

impl Default for SlateTheme {
    fn default() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Rgb(2, 6, 23),
                surface: Color::Rgb(15, 23, 42),
                surface_muted: Color::Rgb(30, 41, 59),
                border: Color::Rgb(51, 65, 85),
                divider: Color::Rgb(30, 41, 59),

                text: Color::Rgb(241, 245, 249),
                text_secondary: Color::Rgb(203, 213, 225),
                text_muted: Color::Rgb(148, 163, 184),

                accent_primary: Color::Rgb(56, 189, 248),
                accent_secondary: Color::Rgb(14, 165, 233),

                info: Color::Rgb(96, 165, 250),
                success: Color::Rgb(52, 211, 153),
                warning: Color::Rgb(251, 191, 36),
                error: Color::Rgb(251, 113, 133),

                selection_bg: Color::Rgb(30, 41, 59),
                selection_fg: Color::Rgb(248, 250, 252),
                focus: Color::Rgb(56, 189, 248),
            },
        }
    }
}

impl Theme for SlateTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
