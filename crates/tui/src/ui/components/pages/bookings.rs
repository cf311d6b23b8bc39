//! Bookings page: current and upcoming rental agreements.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Cell, Row, Table},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::pages::status_style;
use crate::ui::theme::theme_helpers as th;

const BOOKINGS: &[[&str; 5]] = &[
    ["BK-2317", "M. Okafor", "VW Golf · B-FD 2041", "Aug 04 – Aug 11", "Active"],
    ["BK-2316", "J. Larsen", "Renault Clio · B-FD 1187", "Jul 30 – Aug 06", "Completed"],
    ["BK-2315", "P. Haddad", "BMW X1 · B-FD 3302", "Aug 01 – Aug 12", "Active"],
    ["BK-2314", "S. Duarte", "Tesla Model 3 · B-FD 4410", "Aug 09 – Aug 14", "Upcoming"],
    ["BK-2313", "K. Novak", "Fiat 500 · B-FD 0923", "Aug 08 – Aug 10", "Reserved"],
    ["BK-2311", "T. Eriksen", "VW Passat · B-FD 2788", "Jul 22 – Jul 29", "Overdue"],
];

#[derive(Debug, Default)]
pub struct BookingsPage;

impl Component for BookingsPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        let headers = ["Reference", "Customer", "Vehicle", "Period", "Status"]
            .into_iter()
            .map(|header| Cell::from(header).style(th::table_header_style(theme)));

        let rows = BOOKINGS.iter().enumerate().map(|(index, booking)| {
            let mut cells: Vec<Cell> = booking[..4].iter().map(|value| Cell::from(*value)).collect();
            cells.push(Cell::from(booking[4]).style(status_style(theme, booking[4])));
            Row::new(cells).style(th::table_row_style(theme, index))
        });

        let widths = [
            Constraint::Length(10),
            Constraint::Percentage(20),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Length(10),
        ];
        let table = Table::new(rows, widths)
            .header(Row::new(headers).style(th::table_header_row_style(theme)))
            .column_spacing(1)
            .block(th::block(theme, None, false));
        frame.render_widget(table, area);
    }
}
