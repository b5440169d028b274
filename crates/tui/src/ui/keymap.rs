use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    Close,
    DownloadPdf,
    Reopen,
    None,
}

pub fn map_key(key: KeyEvent) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return AppAction::Quit;
        }
        return AppAction::None;
    }

    match key.code {
        KeyCode::Char('q') => AppAction::Quit,
        KeyCode::Esc | KeyCode::Char('c') => AppAction::Close,
        KeyCode::Char('d') => AppAction::DownloadPdf,
        KeyCode::Char('o') | KeyCode::Enter => AppAction::Reopen,
        _ => AppAction::None,
    }
}
