//! Payments page: invoices raised against bookings.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Cell, Row, Table},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::pages::status_style;
use crate::ui::theme::theme_helpers as th;

const PAYMENTS: &[[&str; 5]] = &[
    ["INV-8843", "BK-2317", "€420.00", "Card", "Pending"],
    ["INV-8841", "BK-2316", "€310.00", "Card", "Paid"],
    ["INV-8840", "BK-2315", "€688.00", "Transfer", "Paid"],
    ["INV-8837", "BK-2313", "€112.50", "Card", "Pending"],
    ["INV-8829", "BK-2311", "€534.00", "Transfer", "Failed"],
];

#[derive(Debug, Default)]
pub struct PaymentsPage;

impl Component for PaymentsPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        let headers = ["Invoice", "Booking", "Amount", "Method", "Status"]
            .into_iter()
            .map(|header| Cell::from(header).style(th::table_header_style(theme)));

        let rows = PAYMENTS.iter().enumerate().map(|(index, payment)| {
            let mut cells: Vec<Cell> = payment[..4].iter().map(|value| Cell::from(*value)).collect();
            cells.push(Cell::from(payment[4]).style(status_style(theme, payment[4])));
            Row::new(cells).style(th::table_row_style(theme, index))
        });

        let widths = [
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Percentage(25),
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
