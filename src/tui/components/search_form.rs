// Search form component
//
// Username field with a submit hint. The terminal cursor is placed inside
// the field while it has focus.

use crate::tui::app::{App, Focus};
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let strings = app.strings();
    let theme = &app.theme;
    let focused = app.focus == Focus::Form;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(focused))
        .title(format!(" {} ", strings.input_placeholder))
        .title_bottom(Line::from(format!(" ⏎ {} ", strings.search)).right_aligned());

    let inner = block.inner(area);
    let (shown, cursor_col) = app.form.visible(inner.width as usize);

    let line = if app.form.value().is_empty() && !focused {
        Line::from(Span::styled(strings.input_placeholder, theme.muted_text()))
    } else {
        Line::from(Span::styled(shown, theme.text()))
    };

    f.render_widget(Paragraph::new(line).style(theme.text()).block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        f.set_cursor_position(Position::new(inner.x + cursor_col as u16, inner.y));
    }
}
