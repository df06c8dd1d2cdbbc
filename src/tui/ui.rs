// UI rendering logic
//
// One screen: title, search form, status panel, optional logs, key hints.
// The toast is drawn last so it sits on top of everything.

use super::app::App;
use super::components::{logs_panel, search_form, status_bar, status_panel, title_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame,
};

/// Height of the logs panel when visible
const LOGS_HEIGHT: u16 = 8;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    // Paint the theme background first so light mode is light everywhere
    f.render_widget(Block::default().style(app.theme.text()), f.area());

    let logs_height = if app.show_logs { LOGS_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),           // Title bar
            Constraint::Length(3),           // Search form
            Constraint::Min(6),              // Status panel
            Constraint::Length(logs_height), // Logs
            Constraint::Length(1),           // Key hints
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    search_form::render(f, chunks[1], app);
    status_panel::render(f, chunks[2], app);
    if app.show_logs {
        logs_panel::render(f, chunks[3], app);
    }
    status_bar::render(f, chunks[4], app);

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::status::{Location, ServerState, StatusError, StatusResponse, StatusWidget};
    use ratatui::{backend::TestBackend, Terminal};

    fn app_at(url: &str) -> App {
        let widget = StatusWidget::new(Location::parse(url).unwrap());
        App::new(widget, &Config::default(), LogBuffer::new())
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn loading_screen_shows_only_loading_block() {
        let mut app = app_at("https://example.com/status?username=steve");
        app.mount();
        let screen = render(&app);
        let strings = app.strings();
        assert!(screen.contains(strings.loading));
        assert!(!screen.contains(strings.success));
        assert!(!screen.contains(strings.not_online));
    }

    #[test]
    fn missing_username_screen_shows_error_block() {
        let mut app = app_at("https://example.com/status");
        app.mount();
        let screen = render(&app);
        let strings = app.strings();
        assert!(screen.contains(strings.username_required));
        assert!(!screen.contains(strings.loading));
    }

    #[test]
    fn resolved_screen_shows_message() {
        let mut app = app_at("https://example.com/status?username=steve");
        let q = app.mount().unwrap();
        app.widget.complete(
            q.generation,
            Ok(StatusResponse {
                status: ServerState::Offline,
                message: "Tunnel down".into(),
                error: None,
            }),
        );
        let screen = render(&app);
        let strings = app.strings();
        assert!(screen.contains("Tunnel down"));
        assert!(screen.contains(strings.not_online));
        assert!(!screen.contains(strings.loading));
    }

    #[test]
    fn server_error_and_toast_render() {
        let mut app = app_at("https://example.com/status?username=steve");
        let q = app.mount().unwrap();
        app.widget.complete(
            q.generation,
            Err(StatusError::Server {
                status: 500,
                message: Some("Backend exploded".into()),
            }),
        );
        app.show_toast("Copied!");
        let screen = render(&app);
        assert!(screen.contains("Backend exploded"));
        assert!(screen.contains("Copied!"));
    }
}
