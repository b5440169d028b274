pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{Frame, style::Style, widgets::Block};

use crate::app::DialogState;

pub use components::toast::Toast;
pub use screens::ledger_detail::LedgerDetailView;
pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(
    frame: &mut Frame<'_>,
    view: &LedgerDetailView<'_>,
    dialog: DialogState,
    toast: Option<&Toast>,
) {
    let theme = Theme::default();
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    match dialog {
        DialogState::Open => view.render(frame, area, &theme),
        DialogState::Closed => screens::closed::render(frame, area, view, &theme),
    }

    components::toast::render(frame, area, toast, &theme);
}
