use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub warning: Color,
    pub positive: Color,
    pub badge_text: Color,
}

impl Theme {
    /// Pill background for a party bill status.
    pub fn status_color(&self, status: ledger::EntryStatus) -> Color {
        match status {
            ledger::EntryStatus::Pending => self.warning,
            ledger::EntryStatus::Partial => self.accent,
            ledger::EntryStatus::Paid => self.positive,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(8, 12, 16),
            panel: Color::Rgb(20, 26, 32),
            text: Color::Rgb(220, 220, 220),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(80, 160, 160),
            border: Color::Rgb(60, 70, 80),
            warning: Color::Rgb(230, 170, 60),
            positive: Color::Rgb(90, 180, 110),
            badge_text: Color::Rgb(8, 12, 16),
        }
    }
}
