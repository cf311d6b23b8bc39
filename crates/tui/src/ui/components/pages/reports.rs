//! Reports page: utilization and revenue summaries with inline meters.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{Theme, theme_helpers as th};

const UTILIZATION: &[(&str, u16)] = &[
    ("Economy", 82),
    ("Compact", 76),
    ("Midsize", 64),
    ("SUV", 71),
    ("Electric", 58),
];

const REVENUE: &[(&str, &str)] = &[
    ("Rentals", "€19,870"),
    ("Late fees", "€640"),
    ("Damage recovery", "€1,205"),
    ("Extras (GPS, seats)", "€1,690"),
];

#[derive(Debug, Default)]
pub struct ReportsPage;

/// Renders a percentage as a ten-cell meter line.
fn meter_line<'a, T: Theme + ?Sized>(theme: &T, label: &'a str, percent: u16) -> Line<'a> {
    let filled = (percent / 10).min(10) as usize;
    let meter = format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled));
    Line::from(vec![
        Span::styled(format!("{label:<20}"), theme.text_secondary_style()),
        Span::styled(meter, theme.accent_primary_style()),
        Span::styled(format!(" {percent:>3}%"), theme.text_muted_style()),
    ])
}

impl Component for ReportsPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        let columns = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(area);

        let utilization: Vec<Line> = UTILIZATION
            .iter()
            .map(|(class, percent)| meter_line(theme, class, *percent))
            .collect();
        frame.render_widget(
            Paragraph::new(utilization).block(th::block(theme, Some("Utilization by class (30 days)"), false)),
            columns[0],
        );

        let revenue: Vec<Line> = REVENUE
            .iter()
            .map(|(source, amount)| {
                Line::from(vec![
                    Span::styled(format!("{source:<22}"), theme.text_secondary_style()),
                    Span::styled(*amount, theme.accent_emphasis_style()),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(revenue).block(th::block(theme, Some("Revenue by source (30 days)"), false)),
            columns[1],
        );
    }
}
