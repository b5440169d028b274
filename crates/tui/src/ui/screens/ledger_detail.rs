//! The ledger detail dialog.
//!
//! [`LedgerDetailView`] is a stateless overlay: everything it draws is derived
//! from its inputs on every frame, and the only thing it can change is what
//! its callbacks do. Whether the dialog is visible belongs to the caller.
use ledger::{
    Align, CellValue, Column, CurrencyFormatter, Fixtures, LedgerDataset, LedgerKind,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table},
};

use crate::ui::{
    components::{
        badge::status_badge,
        centered_rect,
        hints::{KeyHint, hints_to_spans},
        money::{amount_span, outstanding_span, placeholder_span},
    },
    theme::Theme,
};

const ACTIONS: [KeyHint; 2] = [
    KeyHint::new("d", "Download PDF"),
    KeyHint::new("Esc", "Close"),
];

/// What the user can ask of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    Close,
    DownloadPdf,
}

pub type CloseCallback<'a> = Box<dyn FnMut() + 'a>;
pub type DownloadCallback<'a> = Box<dyn FnMut(&LedgerDataset) + 'a>;

pub struct LedgerDetailView<'a> {
    ledger_name: String,
    kind: LedgerKind,
    dataset: LedgerDataset,
    formatter: Box<dyn CurrencyFormatter + 'a>,
    on_close: CloseCallback<'a>,
    on_download: DownloadCallback<'a>,
}

impl<'a> LedgerDetailView<'a> {
    /// Builds the dialog for `kind`, picking its dataset out of `fixtures`.
    ///
    /// PDF download is a no-op until [`Self::on_download`] supplies a handler.
    pub fn new(
        ledger_name: impl Into<String>,
        kind: LedgerKind,
        fixtures: &Fixtures,
        formatter: impl CurrencyFormatter + 'a,
        on_close: impl FnMut() + 'a,
    ) -> Self {
        Self {
            ledger_name: ledger_name.into(),
            kind,
            dataset: fixtures.select(kind),
            formatter: Box::new(formatter),
            on_close: Box::new(on_close),
            on_download: Box::new(|_| {}),
        }
    }

    pub fn on_download(mut self, on_download: impl FnMut(&LedgerDataset) + 'a) -> Self {
        self.on_download = Box::new(on_download);
        self
    }

    pub fn title(&self) -> String {
        self.kind.title(&self.ledger_name)
    }

    pub fn dataset(&self) -> &LedgerDataset {
        &self.dataset
    }

    pub fn handle_action(&mut self, action: DetailAction) {
        match action {
            DetailAction::Close => (self.on_close)(),
            DetailAction::DownloadPdf => (self.on_download)(&self.dataset),
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
        let popup = centered_rect(90, 80, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.panel));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title and figures
                Constraint::Length(1), // Actions
                Constraint::Min(0),    // Table
            ])
            .split(inner);

        self.render_header(frame, layout[0], theme);
        frame.render_widget(
            Paragraph::new(Line::from(hints_to_spans(&ACTIONS, theme))).alignment(Alignment::Right),
            layout[1],
        );
        self.render_table(frame, layout[2], theme);
    }

    fn render_header(&self, frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
        let outstanding = self.formatter.format(self.dataset.outstanding());
        let lines = vec![
            Line::from(Span::styled(
                self.title(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(self.dataset.name().to_string(), Style::default().fg(theme.text)),
                Span::styled("  ·  ", Style::default().fg(theme.border)),
                Span::styled("Entries", Style::default().fg(theme.dim)),
                Span::raw(format!(": {}", self.dataset.total_entries())),
            ]),
            Line::from(vec![
                Span::styled("Outstanding", Style::default().fg(theme.dim)),
                Span::raw(": "),
                outstanding_span(outstanding, theme),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_table(&self, frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
        let columns = self.dataset.columns();
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border));

        let rows = self.dataset.rows(&*self.formatter);
        if rows.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No entries.",
                Style::default().fg(theme.dim),
            )))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(columns.iter().map(|column| {
            Cell::from(Line::from(column.title).alignment(alignment(column.align)))
        }))
        .style(
            Style::default()
                .fg(theme.dim)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

        let body = rows.iter().map(|cells| {
            Row::new(
                cells
                    .iter()
                    .zip(columns)
                    .map(|(value, column)| table_cell(value, column, theme)),
            )
        });

        let widths = columns.iter().map(|column| Constraint::Length(column.width));
        let table = Table::new(body, widths)
            .header(header)
            .column_spacing(1)
            .block(block);
        frame.render_widget(table, area);
    }
}

fn table_cell(value: &CellValue, column: &Column, theme: &Theme) -> Cell<'static> {
    let span = match value {
        CellValue::Text(text) => Span::styled(text.clone(), Style::default().fg(theme.text)),
        CellValue::Amount(text) => amount_span(text.clone(), theme),
        CellValue::Placeholder => placeholder_span(theme),
        CellValue::Badge(status) => status_badge(*status, theme),
    };
    Cell::from(Line::from(span).alignment(alignment(column.align)))
}

fn alignment(align: Align) -> Alignment {
    match align {
        Align::Left => Alignment::Left,
        Align::Right => Alignment::Right,
        Align::Center => Alignment::Center,
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell as Counter, rc::Rc};

    use ledger::{Currency, EntryStatus, LocaleFormatter, Money, PLACEHOLDER};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;

    fn view<'a>(kind: LedgerKind, on_close: impl FnMut() + 'a) -> LedgerDetailView<'a> {
        LedgerDetailView::new(
            "Acme Logistics",
            kind,
            &Fixtures::sample(),
            LocaleFormatter::new(Currency::Inr),
            on_close,
        )
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw_buffer(view: &LedgerDetailView<'_>) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(200, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                view.render(frame, area, &Theme::default());
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn draw(view: &LedgerDetailView<'_>) -> String {
        buffer_text(&draw_buffer(view))
    }

    /// Cells covering the first occurrence of `needle` on screen.
    fn cells_of<'b>(buffer: &'b Buffer, needle: &str) -> Vec<&'b ratatui::buffer::Cell> {
        let area = buffer.area;
        for y in area.top()..area.bottom() {
            let row: Vec<_> = (area.left()..area.right())
                .map(|x| &buffer[(x, y)])
                .collect();
            let symbols: Vec<&str> = row.iter().map(|cell| cell.symbol()).collect();
            let wanted: Vec<String> = needle.chars().map(String::from).collect();
            if let Some(start) = symbols
                .windows(wanted.len())
                .position(|window| window.iter().zip(&wanted).all(|(a, b)| *a == b.as_str()))
            {
                return row[start..start + wanted.len()].to_vec();
            }
        }
        panic!("{needle:?} not rendered");
    }

    fn table_line<'s>(screen: &'s str, needle: &str) -> &'s str {
        screen
            .lines()
            .find(|line| line.contains(needle))
            .unwrap_or_default()
    }

    #[test]
    fn supplier_dialog_shows_supplier_layout() {
        let screen = draw(&view(LedgerKind::Supplier, || {}));

        assert!(screen.contains("Supplier Ledger: Acme Logistics"));
        assert!(screen.contains("Sharma Roadways"));
        assert!(screen.contains("Entries: 2"));
        assert!(screen.contains("Outstanding: ₹8,46,000"));
        for title in [
            "Date", "Memo No", "Trip Details", "Detention", "Extra WT", "Credit", "Payment",
            "Advance", "Balance", "Remarks",
        ] {
            assert!(screen.contains(title), "missing column {title}");
        }
        assert!(!screen.contains("Bill No"));
        assert!(!screen.contains("Status"));
        assert!(screen.contains("Awaiting POD"));
    }

    #[test]
    fn party_dialog_shows_party_layout() {
        let screen = draw(&view(LedgerKind::Party, || {}));

        assert!(screen.contains("Party Ledger: Acme Logistics"));
        assert!(screen.contains("Entries: 1"));
        assert!(screen.contains("Outstanding: ₹9,00,000"));
        for title in [
            "Date", "Bill No", "Trip Details", "Bill Amount", "Received", "Deductions",
            "Net Received", "Balance", "Status",
        ] {
            assert!(screen.contains(title), "missing column {title}");
        }
        assert!(!screen.contains("Memo No"));
        assert!(table_line(&screen, "BILL-2201").contains(" Pending "));
    }

    #[test]
    fn outstanding_and_status_are_highlighted() {
        let theme = Theme::default();
        let buffer = draw_buffer(&view(LedgerKind::Party, || {}));

        let outstanding = cells_of(&buffer, "₹9,00,000");
        assert_eq!(outstanding.len(), 9);
        assert!(outstanding.iter().all(|cell| cell.fg == theme.warning));

        let badge = cells_of(&buffer, " Pending ");
        let pill = theme.status_color(EntryStatus::Pending);
        assert!(badge.iter().all(|cell| cell.bg == pill));
        assert!(badge.iter().all(|cell| cell.fg == theme.badge_text));
    }

    #[test]
    fn supplier_remarks_are_plain_text() {
        let theme = Theme::default();
        let buffer = draw_buffer(&view(LedgerKind::Supplier, || {}));

        let remarks = cells_of(&buffer, "Awaiting POD");
        assert!(remarks.iter().all(|cell| cell.fg == theme.text));
        assert!(remarks.iter().all(|cell| cell.bg == theme.panel));
    }

    #[test]
    fn general_falls_back_to_party() {
        let general = view(LedgerKind::General, || {});
        assert_eq!(general.title(), "Party Ledger: Acme Logistics");
        assert_eq!(general.dataset(), &Fixtures::sample().select(LedgerKind::Party));

        let screen = draw(&general);
        assert!(screen.contains("Party Ledger: Acme Logistics"));
        assert!(screen.contains("Bill No"));
    }

    #[test]
    fn supplier_rows_show_dashes_for_hidden_amounts() {
        let screen = draw(&view(LedgerKind::Supplier, || {}));
        let row = table_line(&screen, "MEMO-1041");
        let dashes = row
            .split_whitespace()
            .filter(|word| *word == PLACEHOLDER)
            .count();
        // Detention, Extra WT, Payment (zero) and Advance.
        assert_eq!(dashes, 4);
        assert!(row.contains("₹4,50,000"));
        assert!(!row.contains("₹0"));
    }

    #[test]
    fn header_actions_are_visible() {
        let screen = draw(&view(LedgerKind::Party, || {}));
        let actions = table_line(&screen, "Download PDF");
        assert!(actions.contains("[d] Download PDF"));
        assert!(actions.contains("[Esc] Close"));
    }

    #[test]
    fn close_fires_once_and_only_on_close() {
        let closes = Rc::new(Counter::new(0u32));
        let downloads = Rc::new(Counter::new(0u32));
        let mut dialog = {
            let closes = Rc::clone(&closes);
            let downloads = Rc::clone(&downloads);
            view(LedgerKind::Supplier, move || closes.set(closes.get() + 1)).on_download(
                move |dataset| {
                    assert_eq!(dataset.name(), "Sharma Roadways");
                    downloads.set(downloads.get() + 1);
                },
            )
        };

        dialog.handle_action(DetailAction::DownloadPdf);
        dialog.handle_action(DetailAction::DownloadPdf);
        assert_eq!(closes.get(), 0);
        assert_eq!(downloads.get(), 2);

        dialog.handle_action(DetailAction::Close);
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn download_defaults_to_noop() {
        let mut dialog = view(LedgerKind::Party, || panic!("close must not fire"));
        dialog.handle_action(DetailAction::DownloadPdf);
    }

    #[test]
    fn injected_formatter_is_used() {
        let dialog = LedgerDetailView::new(
            "Acme Logistics",
            LedgerKind::Party,
            &Fixtures::sample(),
            |amount: Money| format!("Rs {}", amount.minor() / 100),
            || {},
        );
        let screen = draw(&dialog);
        assert!(screen.contains("Outstanding: Rs 900000"));
    }

    #[test]
    fn empty_ledger_renders_a_notice() {
        let mut fixtures = Fixtures::sample();
        fixtures.supplier.entries.clear();
        fixtures.supplier.total_entries = 0;
        let dialog = LedgerDetailView::new(
            "Empty",
            LedgerKind::Supplier,
            &fixtures,
            LocaleFormatter::default(),
            || {},
        );
        assert!(draw(&dialog).contains("No entries."));
    }
}
