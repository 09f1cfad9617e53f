use tracing::{debug, info};
use uuid::Uuid;

use super::api;
use super::models::{ActorRole, Authorized, JoinBody, Login, RefreshRequest};
use crate::core::{Connection, RandomGenerator, Result, ScenarioError};

/// An authenticated actor and the connection that acts as it
#[derive(Debug, Clone)]
pub struct ActorSession {
    pub role: ActorRole,
    pub authorized: Authorized,
    /// Carries `Authorization: Bearer <access>`; calls made through it are
    /// attributed to this actor
    pub connection: Connection,
    credentials: Option<Login>,
}

impl ActorSession {
    pub fn id(&self) -> Uuid {
        self.authorized.id
    }

    pub fn credentials(&self) -> Option<&Login> {
        self.credentials.as_ref()
    }
}

/// Obtains authentication contexts for the mall's roles
///
/// All calls go out anonymously from the base connection; the returned
/// sessions carry their own authenticated copies.
#[derive(Debug, Clone)]
pub struct ActorProvisioner {
    base: Connection,
}

impl ActorProvisioner {
    pub fn new(base: &Connection) -> Self {
        Self {
            base: base.anonymous(),
        }
    }

    /// Join with random schema-valid fields
    pub async fn join_random(
        &self,
        role: ActorRole,
        random: &mut RandomGenerator,
    ) -> Result<ActorSession> {
        self.join(JoinBody::random(role, random)).await
    }

    /// Join with an explicit body, e.g. one with fixed fields overridden
    pub async fn join(&self, body: JoinBody) -> Result<ActorSession> {
        let role = body.role();
        let authorized = match &body {
            JoinBody::Admin(join) => api::join(&self.base, role, join).await?,
            JoinBody::Seller(join) => api::join(&self.base, role, join).await?,
            JoinBody::Member(join) => api::join(&self.base, role, join).await?,
            JoinBody::Guest(join) => api::join(&self.base, role, join).await?,
        };

        info!(%role, id = %authorized.id, "actor joined");
        Ok(self.session(role, authorized, body.credentials()))
    }

    /// Log in again with the credentials the session joined with
    pub async fn login(&self, session: &ActorSession) -> Result<ActorSession> {
        let credentials = session.credentials().ok_or_else(|| {
            ScenarioError::missing_dependency(format!("{} credentials", session.role))
        })?;
        self.login_with(session.role, credentials).await
    }

    pub async fn login_with(&self, role: ActorRole, credentials: &Login) -> Result<ActorSession> {
        if !role.has_credentials() {
            return Err(ScenarioError::missing_dependency(format!(
                "{} credentials",
                role
            )));
        }

        let authorized = api::login(&self.base, role, credentials).await?;
        debug!(%role, id = %authorized.id, "actor logged in");
        Ok(self.session(role, authorized, Some(credentials.clone())))
    }

    /// Exchange the session's refresh token for a new token pair
    pub async fn refresh(&self, session: &ActorSession) -> Result<ActorSession> {
        let body = RefreshRequest {
            refresh: session.authorized.token.refresh.clone(),
        };
        let authorized = api::refresh(&self.base, session.role, &body).await?;
        debug!(role = %session.role, id = %authorized.id, "actor token refreshed");
        Ok(self.session(session.role, authorized, session.credentials.clone()))
    }

    fn session(
        &self,
        role: ActorRole,
        authorized: Authorized,
        credentials: Option<Login>,
    ) -> ActorSession {
        ActorSession {
            role,
            connection: self.base.with_bearer(&authorized.token.access),
            authorized,
            credentials,
        }
    }
}
