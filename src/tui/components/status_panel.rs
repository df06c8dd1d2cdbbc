// Status panel component
//
// Renders exactly one of the widget's blocks: loading, error, online or
// offline. Nothing is drawn before the first mount.

use crate::i18n::Strings;
use crate::status::{ServerState, StatusReport, ViewState};
use crate::tui::app::{App, Focus};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Lines for the current view state
///
/// Split out from `render` so the block contents can be tested without a
/// terminal.
pub fn lines<'a>(
    state: &ViewState,
    strings: &'static Strings,
    theme: &Theme,
    spinner: char,
) -> Vec<Line<'a>> {
    match state {
        ViewState::NotRequested => Vec::new(),
        ViewState::Loading => vec![Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(theme.primary)),
            Span::styled(strings.loading, theme.muted_text()),
        ])],
        ViewState::Failed(err) => vec![
            Line::from(Span::styled(
                "⚠",
                Style::default()
                    .fg(theme.error)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                err.user_message(strings),
                Style::default().fg(theme.error),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("[r] {}", strings.retry),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
        ],
        ViewState::Resolved(StatusReport {
            server_state,
            message,
        }) => {
            let (icon, color, label, headline) = match server_state {
                ServerState::Online => ("✓", theme.online, strings.online, strings.success),
                ServerState::Offline => ("✗", theme.offline, strings.offline, strings.not_online),
            };
            vec![
                Line::from(Span::styled(
                    icon,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(format!("{}: ", strings.server_status), theme.text()),
                    Span::styled(format!(" {} ", label), theme.badge(color)),
                ]),
                Line::from(Span::styled(headline, theme.title_style())),
                Line::from(Span::styled(message.clone(), theme.muted_text())),
            ]
        }
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(app.focus == Focus::Panel));

    let body = lines(
        app.widget.state(),
        app.strings(),
        theme,
        app.spinner_char(),
    );

    // Center vertically inside the block
    let inner_height = area.height.saturating_sub(2) as usize;
    let pad = inner_height.saturating_sub(body.len()) / 2;
    let mut padded: Vec<Line> = std::iter::repeat_with(|| Line::from("")).take(pad).collect();
    padded.extend(body);

    let panel = Paragraph::new(padded)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(theme.text())
        .block(block);

    f.render_widget(panel, area);
}
