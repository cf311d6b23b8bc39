//! Top bar: sidebar toggle, signed-in identity, and the logout control.
//!
//! Contract: with no signed-in user the bar renders nothing and clears its
//! hit areas, so nothing in it can be activated during the loading phase.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    widgets::{Block, Borders, Paragraph},
};

use fleetdesk_types::{Effect, Msg};

use crate::app::{App, TopBarState};
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

#[derive(Debug, Default)]
pub struct TopBarComponent;

impl Component for TopBarComponent {
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position::new(mouse.column, mouse.row);
        if app.top_bar.toggle_area.contains(position) {
            return app.update(Msg::ToggleSidebar);
        }
        if app.top_bar.logout_area.contains(position) {
            return app.update(Msg::LogoutRequested);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let Some(user) = app.user.clone() else {
            app.top_bar = TopBarState::default();
            return;
        };
        let theme = &*app.theme;

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border_style(false))
            .style(th::panel_style(theme));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let name = user.full_name();
        let name_width = name.chars().count() as u16 + 2;
        let chunks = Layout::horizontal([
            Constraint::Length(5),          // sidebar toggle
            Constraint::Min(1),             // spacer
            Constraint::Length(3),          // identity badge
            Constraint::Length(name_width), // full name
            Constraint::Length(10),         // logout control
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new("☰").centered().style(th::button_secondary_style(theme, true, false)),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(user.initial()).centered().style(th::badge_style(theme)),
            chunks[2],
        );
        frame.render_widget(
            Paragraph::new(format!(" {name}")).style(theme.text_secondary_style()),
            chunks[3],
        );
        frame.render_widget(
            Paragraph::new("Logout").centered().style(th::button_secondary_style(theme, true, false)),
            chunks[4],
        );

        app.top_bar = TopBarState {
            toggle_area: chunks[0],
            logout_area: chunks[4],
        };
    }
}
