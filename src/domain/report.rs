use std::fmt;

/// Prefix carried by a rendered failure so the report slot is never empty.
pub const FAILURE_MARKER: &str = "Erro na IA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Success { text: String, model: String },
    Failure { kind: FailureKind, detail: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Api,
    RateLimited,
    InvalidResponse,
    Timeout,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::RateLimited => "rate_limited",
            Self::InvalidResponse => "invalid_response",
            Self::Timeout => "timeout",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Report {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn model(&self) -> Option<&str> {
        match self {
            Self::Success { model, .. } => Some(model),
            Self::Failure { .. } => None,
        }
    }

    /// Text shown to the user and written to the downloadable summary.
    pub fn render(&self) -> String {
        match self {
            Self::Success { text, .. } => text.clone(),
            Self::Failure { detail, .. } => format!("{FAILURE_MARKER}: {detail}"),
        }
    }
}
