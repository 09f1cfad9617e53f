use crate::core::{PageRequest, Result};
use crate::modules::actors::ActorRole;
use crate::modules::channels::{self, Channel, ChannelCreate, ChannelRequest, ChannelSearch};
use crate::modules::scenario::prober::{expect_rejection, ProbeKind};
use crate::modules::scenario::validator::{
    assert_all, assert_echoes, assert_equals, assert_pagination, assert_predicate,
    assert_sorted_by, SortDirection,
};
use crate::modules::scenario::ScenarioContext;

const CREATED: usize = 5;
const PAGE_LIMIT: u32 = 2;

/// Channel listing: pagination bookkeeping, sort order, code search, erase.
pub async fn test_api_channel_index_pagination(mut ctx: ScenarioContext) -> Result<()> {
    let admin = ctx
        .actors()
        .join_random(ActorRole::Admin, &mut ctx.random)
        .await?;
    let conn = &admin.connection;

    let mut created: Vec<Channel> = Vec::with_capacity(CREATED);
    for _ in 0..CREATED {
        let body = ChannelCreate::random(&mut ctx.random);
        let channel = channels::api::create(conn, &body).await?;
        assert_echoes("channel echoes create body", &body, &channel, &[])?;
        created.push(channel);
    }

    let sort = "-created_at";
    let first = ChannelRequest {
        page: PageRequest::new(1, PAGE_LIMIT),
        search: None,
        sort: vec![sort.to_string()],
    };
    let page = ctx
        .invoke("channels.index", channels::api::index(conn, &first))
        .await?;
    assert_pagination("channel index pagination", &page, &first.page)?;
    assert_predicate(
        "channel index counts every created channel",
        page.pagination.records as usize >= CREATED,
    )?;

    let (direction, _) = SortDirection::parse_token(sort).unwrap_or((SortDirection::Ascending, sort));
    assert_sorted_by("channels sorted by created_at", &page.data, |c| c.created_at, direction)?;

    // walk a few following pages; each must keep its own bookkeeping straight
    for number in 2..=page.pagination.pages.min(3) {
        let request = ChannelRequest {
            page: PageRequest::new(number, PAGE_LIMIT),
            ..first.clone()
        };
        let next = channels::api::index(conn, &request).await?;
        assert_pagination("channel index pagination", &next, &request.page)?;
        assert_sorted_by("channels sorted by created_at", &next.data, |c| c.created_at, direction)?;
    }

    let target = &created[CREATED / 2];
    let search = ChannelRequest {
        page: PageRequest::default(),
        search: Some(ChannelSearch {
            code: Some(target.code.clone()),
            name: None,
        }),
        sort: Vec::new(),
    };
    let found = channels::api::index(conn, &search).await?;
    assert_pagination("channel search pagination", &found, &search.page)?;
    assert_all("channel search matches code", &found.data, |c| c.code == target.code)?;
    assert_predicate(
        "channel search finds the target",
        found.data.iter().any(|c| c.id == target.id),
    )?;

    let fetched = channels::api::at(conn, target.id).await?;
    assert_equals("channel read back", target, &fetched)?;

    channels::api::erase(conn, target.id).await?;
    expect_rejection(
        ProbeKind::NonExistentId,
        "reading an erased channel",
        channels::api::at(conn, target.id),
    )
    .await?;

    Ok(())
}
