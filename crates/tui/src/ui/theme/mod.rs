//! Theme styling module for the console UI layer.
//!
//! Defines the semantic role palette, the default slate theme, an ANSI
//! 256-color fallback, and helper builders for Ratatui widgets and styles.
//! Prefer these helpers over hard-coding colors to keep the UI consistent.

use std::env;

use tracing::debug;

pub mod ansi256;
pub mod roles;
pub mod slate;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use roles::Theme;
pub use slate::SlateTheme;

/// Environment variable naming the preferred theme (`slate` or `ansi`).
pub const THEME_ENV: &str = "FLEETDESK_THEME";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme from the environment, the caller's preference, and the
/// terminal's color capability. Non-truecolor terminals always get the
/// indexed fallback palette regardless of any requested theme.
pub fn load(preferred_theme: Option<&str>) -> Box<dyn Theme> {
    if matches!(detect_color_capability(), ColorCapability::Ansi256) {
        debug!("ANSI-only terminal detected; forcing fallback palette.");
        return Box::new(Ansi256Theme::default());
    }

    if let Ok(name) = env::var(THEME_ENV)
        && let Some(theme) = resolve(name.trim())
    {
        return theme;
    }

    if let Some(name) = preferred_theme
        && let Some(theme) = resolve(name.trim())
    {
        return theme;
    }

    Box::new(SlateTheme::default())
}

/// Resolves a theme name to a palette. Unknown names yield `None` so the
/// caller falls through to the default.
fn resolve(name: &str) -> Option<Box<dyn Theme>> {
    match name.to_ascii_lowercase().as_str() {
        "slate" => Some(Box::new(SlateTheme::default())),
        "ansi" | "ansi256" => Some(Box::new(Ansi256Theme::default())),
        _ => None,
    }
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var("FLEETDESK_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_case_insensitive() {
        assert!(resolve("Slate").is_some());
        assert!(resolve("ANSI").is_some());
        assert!(resolve("dracula").is_none());
    }

    #[test]
    fn parse_color_mode_accepts_known_values() {
        assert_eq!(parse_color_mode("truecolor"), Some(ColorCapability::Truecolor));
        assert_eq!(parse_color_mode("256"), Some(ColorCapability::Ansi256));
        assert_eq!(parse_color_mode("plaid"), None);
    }
}
