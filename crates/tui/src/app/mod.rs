use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ledger::{Fixtures, LocaleFormatter};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self, LedgerDetailView, Toast,
        keymap::{AppAction, map_key},
        screens::ledger_detail::DetailAction,
    },
};

/// Visibility of the ledger dialog. Owned here, never by the dialog itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Open,
    Closed,
}

pub struct App {
    dialog: Rc<Cell<DialogState>>,
    toast: Rc<RefCell<Option<Toast>>>,
    view: LedgerDetailView<'static>,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let fixtures = match &config.fixtures {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading ledger fixtures");
                Fixtures::from_path(path)?
            }
            None => Fixtures::sample(),
        };

        let dialog = Rc::new(Cell::new(DialogState::Open));
        let toast = Rc::new(RefCell::new(None));

        let view = {
            let dialog = Rc::clone(&dialog);
            let toast = Rc::clone(&toast);
            LedgerDetailView::new(
                config.ledger_name,
                config.kind,
                &fixtures,
                LocaleFormatter::new(config.currency),
                move || {
                    tracing::debug!("ledger dialog dismissed");
                    dialog.set(DialogState::Closed);
                },
            )
            .on_download(move |dataset| {
                tracing::info!(
                    ledger = dataset.name(),
                    "pdf download requested, no exporter configured"
                );
                *toast.borrow_mut() = Some(Toast::info("PDF export is not configured"));
            })
        };

        let dataset = view.dataset();
        if !dataset.is_consistent() {
            tracing::warn!(
                ledger = dataset.name(),
                total_entries = dataset.total_entries(),
                "entry count does not match the listed entries"
            );
            *toast.borrow_mut() = Some(Toast::warning(format!(
                "{}: entry count does not match the listed entries",
                dataset.name()
            )));
        }

        Ok(Self {
            dialog,
            toast,
            view,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            self.expire_toast();
            let toast = self.toast.borrow().clone();
            let dialog = self.dialog.get();
            terminal
                .draw(|frame| ui::render(frame, &self.view, dialog, toast.as_ref()))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }

        tracing::info!("ledger_tui exiting");
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match (self.dialog.get(), map_key(key)) {
            (_, AppAction::Quit) => {
                self.should_quit = true;
            }
            (DialogState::Open, AppAction::Close) => {
                self.view.handle_action(DetailAction::Close);
            }
            (DialogState::Open, AppAction::DownloadPdf) => {
                self.view.handle_action(DetailAction::DownloadPdf);
            }
            (DialogState::Closed, AppAction::Reopen) => {
                tracing::debug!("ledger dialog reopened");
                self.dialog.set(DialogState::Open);
            }
            _ => {}
        }
    }

    fn expire_toast(&mut self) {
        let mut toast = self.toast.borrow_mut();
        if toast.as_ref().is_some_and(Toast::is_expired) {
            *toast = None;
        }
    }
}
