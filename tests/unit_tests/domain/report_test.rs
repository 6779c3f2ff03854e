use lvc_reporter::domain::{FAILURE_MARKER, FailureKind, Report};

#[test]
fn given_success_when_rendering_then_returns_text_unchanged() {
    let report = Report::Success {
        text: "CONCLUSÃO TÉCNICA: restaurar".to_string(),
        model: "models/gemini-1.5-flash".to_string(),
    };

    assert!(report.is_success());
    assert_eq!(report.render(), "CONCLUSÃO TÉCNICA: restaurar");
    assert_eq!(report.model(), Some("models/gemini-1.5-flash"));
}

#[test]
fn given_failure_when_rendering_then_starts_with_failure_marker() {
    let report = Report::Failure {
        kind: FailureKind::RateLimited,
        detail: "quota exceeded".to_string(),
    };

    let rendered = report.render();

    assert!(!report.is_success());
    assert!(rendered.starts_with(FAILURE_MARKER));
    assert!(rendered.contains("quota exceeded"));
    assert_eq!(report.model(), None);
}

#[test]
fn given_failure_kinds_when_formatting_then_use_snake_case_names() {
    assert_eq!(FailureKind::Api.to_string(), "api");
    assert_eq!(FailureKind::RateLimited.to_string(), "rate_limited");
    assert_eq!(FailureKind::InvalidResponse.as_str(), "invalid_response");
    assert_eq!(FailureKind::Timeout.as_str(), "timeout");
}
