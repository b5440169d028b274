use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// An already formatted amount in the neutral text colour.
#[must_use]
pub fn amount_span(formatted: String, theme: &Theme) -> Span<'static> {
    Span::styled(formatted, Style::default().fg(theme.text))
}

/// The outstanding balance: bold and in the warning colour so it stands out
/// from every other figure in the dialog.
#[must_use]
pub fn outstanding_span(formatted: String, theme: &Theme) -> Span<'static> {
    Span::styled(
        formatted,
        Style::default()
            .fg(theme.warning)
            .add_modifier(Modifier::BOLD),
    )
}

/// The placeholder shown in place of a hidden or zero amount.
#[must_use]
pub fn placeholder_span(theme: &Theme) -> Span<'static> {
    Span::styled(ledger::PLACEHOLDER, Style::default().fg(theme.dim))
}
