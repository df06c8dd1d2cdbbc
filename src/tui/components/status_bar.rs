// Status bar component
//
// Key hints for the focused area. Letters are text while the form is
// active, so the hints change with focus.

use crate::tui::app::{App, Focus};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};

/// Key hints for the given focus
pub fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Form => " ⏎ search │ Esc back │ Ctrl+U clear │ Ctrl+C quit",
        Focus::Panel => " r retry │ / search │ l lang │ t theme │ L logs │ y copy │ q quit",
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    f.render_widget(
        Paragraph::new(hints(app.focus)).style(app.theme.muted_text()),
        area,
    );
}
