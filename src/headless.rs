// Headless mode - one lookup, printed once
//
// Performs the single attempt a mount triggers and prints the resulting
// block as plain text on stdout. Logs go to stderr, so stdout can be piped.
// The exit code reflects the outcome for use in scripts.

use crate::i18n::Strings;
use crate::status::{self, ServerState, StatusReport, StatusSource, StatusWidget, ViewState};
use anyhow::{Context, Result};
use std::io::Write;

/// Server is online
pub const EXIT_ONLINE: i32 = 0;
/// Server is offline
pub const EXIT_OFFLINE: i32 = 1;
/// Lookup failed (missing username, transport, server or body error)
pub const EXIT_FAILED: i32 = 2;

/// Plain-text rendering of a view state
pub fn render(state: &ViewState, strings: &Strings) -> String {
    match state {
        ViewState::NotRequested => String::new(),
        ViewState::Loading => strings.loading.to_string(),
        ViewState::Failed(err) => format!("⚠ {}", err.user_message(strings)),
        ViewState::Resolved(StatusReport {
            server_state,
            message,
        }) => {
            let (icon, label, headline) = match server_state {
                ServerState::Online => ("✓", strings.online, strings.success),
                ServerState::Offline => ("✗", strings.offline, strings.not_online),
            };
            format!(
                "{} {}: {}\n{}\n{}",
                icon, strings.server_status, label, headline, message
            )
        }
    }
}

/// Process exit code for a settled view state
pub fn exit_code(state: &ViewState) -> i32 {
    match state {
        ViewState::Resolved(StatusReport {
            server_state: ServerState::Online,
            ..
        }) => EXIT_ONLINE,
        ViewState::Resolved(StatusReport {
            server_state: ServerState::Offline,
            ..
        }) => EXIT_OFFLINE,
        _ => EXIT_FAILED,
    }
}

/// Mount, await the lookup, print the result to `out`, and return the exit code
pub async fn run(
    widget: &mut StatusWidget,
    source: &dyn StatusSource,
    strings: &Strings,
    out: &mut impl Write,
) -> Result<i32> {
    if let Some(query) = widget.mount() {
        let (generation, outcome) = status::execute(source, query).await;
        widget.complete(generation, outcome);
    }

    let state = widget.state();
    writeln!(out, "{}", render(state, strings)).context("Failed to write result")?;
    Ok(exit_code(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::DemoStatusSource;
    use crate::i18n::Locale;
    use crate::status::scripted::ScriptedSource;
    use crate::status::{Location, StatusError, StatusResponse};
    use std::time::Duration;

    async fn run_for(url: &str, locale: Locale) -> (i32, String) {
        let mut widget = StatusWidget::new(Location::parse(url).unwrap());
        let source = DemoStatusSource::with_delay(Duration::ZERO);
        let mut out = Vec::new();
        let code = run(&mut widget, &source, locale.strings(), &mut out)
            .await
            .unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn online_exits_zero() {
        let (code, out) = run_for("https://example.com/status?username=steve", Locale::En).await;
        assert_eq!(code, EXIT_ONLINE);
        assert!(out.contains("The server is online!"));
        assert!(out.contains("steve"));
    }

    #[tokio::test]
    async fn offline_exits_one() {
        let (code, out) = run_for("https://example.com/status?username=offbeat", Locale::PtBr).await;
        assert_eq!(code, EXIT_OFFLINE);
        assert!(out.contains(Locale::PtBr.strings().not_online));
    }

    #[tokio::test]
    async fn server_error_exits_two_with_message() {
        let (code, out) = run_for("https://example.com/status?username=error", Locale::En).await;
        assert_eq!(code, EXIT_FAILED);
        assert!(out.contains("Tunnel registry unavailable for error"));
    }

    #[tokio::test]
    async fn missing_username_exits_two_without_lookup() {
        let (code, out) = run_for("https://example.com/status", Locale::En).await;
        assert_eq!(code, EXIT_FAILED);
        assert!(out.contains(Locale::En.strings().username_required));
    }

    #[tokio::test]
    async fn missing_username_never_reaches_the_source() {
        let source = ScriptedSource::new(Ok(StatusResponse {
            status: ServerState::Online,
            message: "unreachable".into(),
            error: None,
        }));
        let mut widget =
            StatusWidget::new(Location::parse("https://example.com/status?ref=docs").unwrap());
        let mut out = Vec::new();

        let code = run(&mut widget, &source, Locale::En.strings(), &mut out)
            .await
            .unwrap();

        assert_eq!(code, EXIT_FAILED);
        assert!(source.calls().is_empty());
        assert_eq!(
            widget.state(),
            &ViewState::Failed(StatusError::MissingIdentifier)
        );
    }

    #[tokio::test]
    async fn username_is_fetched_exactly_once() {
        let source = ScriptedSource::new(Ok(StatusResponse {
            status: ServerState::Offline,
            message: "m2".into(),
            error: None,
        }));
        let mut widget = StatusWidget::new(
            Location::parse("https://example.com/status?username=steve").unwrap(),
        );

        let code = run(&mut widget, &source, Locale::En.strings(), &mut Vec::<u8>::new())
            .await
            .unwrap();

        assert_eq!(code, EXIT_OFFLINE);
        assert_eq!(source.calls(), vec!["steve".to_string()]);
    }

    #[test]
    fn failure_rendering_uses_generic_text() {
        let strings = Locale::En.strings();
        let state = ViewState::Failed(StatusError::Transport("refused".into()));
        assert_eq!(render(&state, strings), format!("⚠ {}", strings.generic_error));
        assert_eq!(exit_code(&state), EXIT_FAILED);
    }
}
