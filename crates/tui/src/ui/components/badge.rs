use ledger::EntryStatus;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// A pill-shaped status label: padded text on a coloured background.
#[must_use]
pub fn status_badge(status: EntryStatus, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!(" {} ", status.label()),
        Style::default()
            .fg(theme.badge_text)
            .bg(theme.status_color(status))
            .add_modifier(Modifier::BOLD),
    )
}
