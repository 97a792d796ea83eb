use std::sync::mpsc;
use vitrine::components::common::{Msg, PopupActivityMsg};
use vitrine::error::ErrorReporter;
use vitrine::AppError;

#[test]
fn test_simple_report_shows_error_popup() {
    let (tx, rx) = mpsc::channel();
    let reporter = ErrorReporter::new(tx);

    reporter.report_simple(
        AppError::Component("mount failed".to_string()),
        "HomePage",
        "mount",
    );

    match rx.recv().unwrap() {
        Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Component(text))) => {
            assert!(text.contains("mount failed"));
        }
        other => panic!("Expected ShowError, got {other:?}"),
    }
}

#[test]
fn test_theme_problems_are_warnings() {
    let (tx, rx) = mpsc::channel();
    let reporter = ErrorReporter::new(tx);

    reporter.report_theme_error("setup", "Ignoring theme file themes.toml");

    match rx.recv().unwrap() {
        Msg::PopupActivity(PopupActivityMsg::ShowWarning(text)) => {
            assert!(text.starts_with("Ignoring theme file themes.toml"));
            assert!(text.contains("Suggestion:"));
        }
        other => panic!("Expected ShowWarning, got {other:?}"),
    }
}

#[test]
fn test_reporting_without_receiver_does_not_panic() {
    let (tx, rx) = mpsc::channel();
    drop(rx);
    let reporter = ErrorReporter::new(tx);

    reporter.report_error(AppError::State("no listener".to_string()));
    reporter.report_send_error("catalog reload", "channel closed");
}
