use super::schema::Violation;

/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, ScenarioError>;

/// Everything that can end a call or a scenario.
///
/// Scenarios only ever branch on "did it fail"; the variants exist so the
/// run report can say why.
#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    /// The request never produced an HTTP response (connect, timeout, TLS)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("{method} {path} rejected with {status}: {body}")]
    Http {
        method: String,
        path: String,
        status: u16,
        body: String,
    },

    /// Body could not be decoded into the expected type
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response did not conform to its declared schema
    #[error("{type_name} failed structural validation: {}", format_violations(.violations))]
    Schema {
        type_name: String,
        violations: Vec<Violation>,
    },

    /// Business invariant did not hold
    #[error("Invariant violated [{invariant}]: {detail}")]
    Invariant { invariant: String, detail: String },

    /// A negative-path probe was accepted by the backend
    #[error("Expected rejection ({probe}) but call succeeded: {description}")]
    UnexpectedSuccess { probe: String, description: String },

    /// A chain step read an output that was never recorded
    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    /// A chain step name was used twice
    #[error("Duplicate chain step: {0}")]
    DuplicateStep(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Scenario body panicked
    #[error("Scenario panicked: {0}")]
    Panicked(String),
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

// Helper functions for common error scenarios
impl ScenarioError {
    pub fn invariant(invariant: impl Into<String>, detail: impl Into<String>) -> Self {
        ScenarioError::Invariant {
            invariant: invariant.into(),
            detail: detail.into(),
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        ScenarioError::Configuration(msg.into())
    }

    pub fn missing_dependency(name: impl Into<String>) -> Self {
        ScenarioError::MissingDependency(name.into())
    }

    /// HTTP status if the backend answered, `None` otherwise
    pub fn status(&self) -> Option<u16> {
        match self {
            ScenarioError::Http { status, .. } => Some(*status),
            ScenarioError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
