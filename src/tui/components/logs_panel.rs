// Logs panel component
//
// Tail of the in-memory log buffer, color coded by level. Shown on demand;
// the lookup itself never depends on it.

use crate::logging::{LogEntry, LogLevel};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Format a log entry for display
fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

/// Get color style for log level
fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.log_error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.log_warn),
        LogLevel::Info => Style::default().fg(theme.log_info),
        LogLevel::Debug => Style::default().fg(theme.log_debug),
        LogLevel::Trace => Style::default().fg(theme.log_trace),
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let capacity = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = app
        .log_buffer
        .recent(capacity)
        .iter()
        .map(|entry| {
            ListItem::new(format_log_entry(entry)).style(log_level_style(&entry.level, theme))
        })
        .collect();

    let list = List::new(items).style(theme.text()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(false))
            .title(" Logs "),
    );

    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn entry_format_is_fixed_width_level() {
        let entry = LogEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 13, 4, 5).unwrap(),
            level: LogLevel::Warn,
            message: "lookup failed".to_string(),
        };
        assert_eq!(format_log_entry(&entry), "[13:04:05] WARN  lookup failed");
    }
}
