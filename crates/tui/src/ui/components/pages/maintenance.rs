//! Maintenance page: open and recent work orders.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Cell, Row, Table},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::pages::status_style;
use crate::ui::theme::theme_helpers as th;

const WORK_ORDERS: &[[&str; 5]] = &[
    ["WO-0142", "Tesla Model 3 · B-FD 4410", "Brake inspection", "Aug 08", "In service"],
    ["WO-0141", "VW Passat · B-FD 2788", "Oil change", "Aug 12", "Scheduled"],
    ["WO-0139", "Fiat 500 · B-FD 0923", "Tyre replacement", "Aug 05", "Done"],
    ["WO-0137", "Renault Clio · B-FD 1187", "Windscreen chip", "Jul 30", "Done"],
    ["WO-0135", "BMW X1 · B-FD 3302", "Annual service", "Jul 24", "Overdue"],
];

#[derive(Debug, Default)]
pub struct MaintenancePage;

impl Component for MaintenancePage {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        let headers = ["Order", "Vehicle", "Work item", "Due", "Status"]
            .into_iter()
            .map(|header| Cell::from(header).style(th::table_header_style(theme)));

        let rows = WORK_ORDERS.iter().enumerate().map(|(index, order)| {
            let mut cells: Vec<Cell> = order[..4].iter().map(|value| Cell::from(*value)).collect();
            cells.push(Cell::from(order[4]).style(status_style(theme, order[4])));
            Row::new(cells).style(th::table_row_style(theme, index))
        });

        let widths = [
            Constraint::Length(9),
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Length(8),
            Constraint::Length(12),
        ];
        let table = Table::new(rows, widths)
            .header(Row::new(headers).style(th::table_header_row_style(theme)))
            .column_spacing(1)
            .block(th::block(theme, None, false));
        frame.render_widget(table, area);
    }
}
