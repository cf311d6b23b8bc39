//! Dashboard page: headline figures and recent activity.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

const TILES: &[(&str, &str)] = &[
    ("18", "Active bookings"),
    ("42", "Vehicles in fleet"),
    ("€23.4k", "Revenue (30 days)"),
    ("3", "In maintenance"),
];

const ACTIVITY: &[&str] = &[
    "BK-2317 picked up · VW Golf · M. Okafor",
    "BK-2316 returned · Renault Clio · J. Larsen",
    "WO-0142 opened · Tesla Model 3 · brake inspection",
    "Payment received · INV-8841 · €310.00",
    "BK-2315 extended to Aug 12 · BMW X1 · P. Haddad",
];

#[derive(Debug, Default)]
pub struct DashboardPage;

impl Component for DashboardPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        let rows = Layout::vertical([
            Constraint::Length(4), // stat tiles
            Constraint::Min(1),    // activity feed
        ])
        .split(area);

        let tile_areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(rows[0]);
        for (tile_area, (value, caption)) in tile_areas.iter().zip(TILES) {
            let tile = Paragraph::new(vec![
                Line::from(Span::styled(*value, theme.accent_emphasis_style())),
                Line::from(Span::styled(*caption, theme.text_muted_style())),
            ])
            .centered()
            .block(th::block(theme, None, false));
            frame.render_widget(tile, *tile_area);
        }

        let feed: Vec<Line> = ACTIVITY
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled("• ", theme.accent_primary_style()),
                    Span::styled(*entry, theme.text_secondary_style()),
                ])
            })
            .collect();
        let activity = Paragraph::new(feed).block(th::block(theme, Some("Recent activity"), false));
        frame.render_widget(activity, rows[1]);
    }
}
