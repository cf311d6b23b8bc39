//! Sidebar navigation for the console.
//!
//! Renders the brand control, the signed-in identity block, and the derived
//! navigation menu as a vertical column. The expanded layout shows icons and
//! labels; the collapsed layout shows icons only and drops the identity
//! block. Activation is reported as `Msg::SelectSection`, so the component
//! never touches the active section directly.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use fleetdesk_types::{Effect, Msg, Section};

use crate::app::App;
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::theme::theme_helpers as th;

/// Column width of the expanded sidebar.
pub const SIDEBAR_EXPANDED_WIDTH: u16 = 26;
/// Column width of the collapsed (icons-only) sidebar.
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 6;

/// Glyph standing in for the platform logo.
const BRAND_GLYPH: &str = "⬢";
/// Product name shown next to the glyph when expanded.
const BRAND_NAME: &str = "Fleetdesk";

#[derive(Debug, Default)]
pub struct SidebarComponent;

impl SidebarComponent {
    /// Width the shell should reserve for the sidebar.
    pub fn width(open: bool) -> u16 {
        if open { SIDEBAR_EXPANDED_WIDTH } else { SIDEBAR_COLLAPSED_WIDTH }
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up => app.update(Msg::SidebarCursor(-1)),
            KeyCode::Down => app.update(Msg::SidebarCursor(1)),
            KeyCode::Enter => app.update(Msg::SidebarActivate),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }

        // The brand always routes home, regardless of the current section.
        if app.sidebar.brand_area.contains(Position::new(mouse.column, mouse.row)) {
            return app.update(Msg::SelectSection(Section::Dashboard));
        }

        let hit = find_target_index_by_mouse_position(&app.sidebar.item_areas, mouse.column, mouse.row);
        if let Some(index) = hit
            && let Some(item) = app.menu().get(index).copied()
        {
            return app.update(Msg::SelectSection(item.section));
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        let open = app.sidebar.open;

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(theme.border_style(false))
            .style(th::panel_style(theme));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let menu = app.menu();
        let identity_height = if open && app.user.is_some() { 3 } else { 0 };
        let mut constraints = vec![
            Constraint::Length(2),               // brand
            Constraint::Length(identity_height), // identity block
        ];
        constraints.extend(vec![Constraint::Length(1); menu.len()]);
        constraints.push(Constraint::Min(0));
        let rows = Layout::vertical(constraints).split(inner);

        let brand = if open {
            Line::from(vec![
                Span::styled(format!(" {BRAND_GLYPH} "), theme.accent_primary_style()),
                Span::styled(BRAND_NAME, theme.accent_emphasis_style()),
            ])
        } else {
            Line::from(Span::styled(BRAND_GLYPH, theme.accent_primary_style())).centered()
        };
        frame.render_widget(Paragraph::new(brand), rows[0]);

        if identity_height > 0
            && let Some(user) = app.user.as_ref()
        {
            let identity = vec![
                Line::from(Span::styled(format!(" {}", user.full_name()), theme.text_primary_style())),
                Line::from(Span::styled(
                    format!(" {}", user.role.display_name()),
                    theme.text_muted_style(),
                )),
                Line::from(Span::styled(
                    "─".repeat(inner.width as usize),
                    ratatui::style::Style::default().fg(theme.roles().divider),
                )),
            ];
            frame.render_widget(Paragraph::new(identity), rows[1]);
        }

        let mut item_areas = Vec::with_capacity(menu.len());
        for (index, item) in menu.iter().enumerate() {
            let row_area = rows[2 + index];
            let is_active = item.section == app.active_section;
            let is_cursor = index == app.sidebar.cursor;

            let marker = if is_active { "▌" } else { " " };
            let line = if open {
                Line::from(vec![
                    Span::styled(marker, theme.accent_primary_style()),
                    Span::raw(format!("{} ", item.icon)),
                    Span::styled(
                        item.label,
                        if is_active {
                            theme.accent_emphasis_style()
                        } else {
                            theme.text_secondary_style()
                        },
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled(marker, theme.accent_primary_style()),
                    Span::raw(format!(" {}", item.icon)),
                ])
            };

            let mut paragraph = Paragraph::new(line);
            if is_cursor {
                paragraph = paragraph.style(theme.selection_style());
            }
            frame.render_widget(paragraph, row_area);
            item_areas.push(row_area);
        }

        app.sidebar.brand_area = rows[0];
        app.sidebar.item_areas = item_areas;
    }
}
