use std::fmt;
use std::future::Future;

use tracing::{debug, error};
use uuid::Uuid;

use crate::core::{RandomGenerator, Result, ScenarioError};

/// Ways a negative path alters an otherwise valid call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeKind {
    /// No authorization header at all
    Unauthenticated,
    /// Authenticated, but as a role the operation does not admit
    WrongRole,
    /// Actor B reaching for actor A's private resource
    CrossTenant,
    /// Well-formed id that names nothing
    NonExistentId,
    /// Empty or omitted required field
    MalformedInput,
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeKind::Unauthenticated => write!(f, "unauthenticated"),
            ProbeKind::WrongRole => write!(f, "wrong-role"),
            ProbeKind::CrossTenant => write!(f, "cross-tenant"),
            ProbeKind::NonExistentId => write!(f, "non-existent-id"),
            ProbeKind::MalformedInput => write!(f, "malformed-input"),
        }
    }
}

/// Await `call` and require it to fail.
///
/// Any error counts; the backend's status code is not inspected. The error is
/// handed back for logging or further (optional) inspection.
pub async fn expect_rejection<T, Fut>(
    probe: ProbeKind,
    description: &str,
    call: Fut,
) -> Result<ScenarioError>
where
    Fut: Future<Output = Result<T>>,
{
    match call.await {
        Ok(_) => {
            error!(%probe, description, "negative path was accepted");
            Err(ScenarioError::UnexpectedSuccess {
                probe: probe.to_string(),
                description: description.to_string(),
            })
        }
        Err(err) => {
            debug!(%probe, description, error = %err, "rejected as expected");
            Ok(err)
        }
    }
}

/// Random well-formed UUID that no backend record carries
pub fn nonexistent_id(random: &mut RandomGenerator) -> Uuid {
    random.uuid()
}
