use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{
    components::{
        centered_rect,
        hints::{KeyHint, hints_to_spans},
    },
    screens::ledger_detail::LedgerDetailView,
    theme::Theme,
};

const HINTS: [KeyHint; 2] = [KeyHint::new("o", "Reopen"), KeyHint::new("q", "Quit")];

/// Shown while the dialog is dismissed.
pub fn render(frame: &mut Frame<'_>, area: Rect, view: &LedgerDetailView<'_>, theme: &Theme) {
    let popup = centered_rect(50, 30, area);
    let block = Block::default()
        .title(view.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let lines = vec![
        Line::from("Ledger closed."),
        Line::from(""),
        Line::from(hints_to_spans(&HINTS, theme)),
    ];
    let content = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dim))
        .block(block);
    frame.render_widget(content, popup);
}
