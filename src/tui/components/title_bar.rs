// Title bar component
//
// Renders the page title and subtitle, the current location, and the
// active language and theme.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let strings = app.strings();
    let theme = &app.theme;

    let lines = vec![
        Line::from(Span::styled(format!(" ⛏ {}", strings.title), theme.title_style())),
        Line::from(Span::styled(format!(" {}", strings.subtitle), theme.muted_text())),
    ];

    let prefs = format!(
        " {} · {} ",
        app.locale.short_label(),
        app.theme_kind.as_str()
    );

    let title = Paragraph::new(lines).style(theme.text()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(false))
            .title_top(Line::from(prefs).right_aligned())
            .title_bottom(
                Line::from(Span::styled(
                    format!(" {} ", app.widget.location()),
                    theme.muted_text(),
                ))
                .right_aligned(),
            ),
    );

    f.render_widget(title, area);
}
