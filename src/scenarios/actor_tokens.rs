use crate::core::{PageRequest, Result};
use crate::modules::actors::{ActorRole, JoinBody, Login};
use crate::modules::channels::{self, ChannelRequest};
use crate::modules::scenario::prober::{expect_rejection, ProbeKind};
use crate::modules::scenario::validator::{assert_equals, assert_predicate};
use crate::modules::scenario::ScenarioContext;

/// Join, login and refresh for every role.
pub async fn test_api_actor_token_lifecycle(mut ctx: ScenarioContext) -> Result<()> {
    let actors = ctx.actors();

    for role in ActorRole::ALL {
        let body = JoinBody::random(role, &mut ctx.random);
        let joined = ctx.invoke("actors.join", actors.join(body.clone())).await?;
        assert_equals("session role", &role, &joined.role)?;
        assert_predicate("session is authenticated", !joined.connection.is_anonymous())?;

        if let Some(credentials) = joined.credentials() {
            let again = actors.login(&joined).await?;
            assert_equals("login returns the joined actor", &joined.id(), &again.id())?;
            assert_equals(
                "login echoes email",
                &joined.authorized.email,
                &again.authorized.email,
            )?;

            let wrong = Login {
                password: format!("{}-wrong", credentials.password),
                ..credentials.clone()
            };
            expect_rejection(
                ProbeKind::Unauthenticated,
                "login with a wrong password",
                actors.login_with(role, &wrong),
            )
            .await?;
            expect_rejection(
                ProbeKind::MalformedInput,
                "joining twice with one email",
                actors.join(body),
            )
            .await?;
        }

        let refreshed = actors.refresh(&joined).await?;
        assert_equals("refresh keeps the actor", &joined.id(), &refreshed.id())?;
        assert_predicate(
            "refresh stays within the refreshable window",
            refreshed.authorized.token.expired_at <= refreshed.authorized.token.refreshable_until,
        )?;

        if role == ActorRole::Admin {
            let request = ChannelRequest {
                page: PageRequest::new(1, 1),
                ..Default::default()
            };
            channels::api::index(&refreshed.connection, &request).await?;
        }
    }

    Ok(())
}
