use async_graphql::{connection::Connection, Object, Result, SimpleObject, Union, ID};
use chrono::{DateTime, Utc};
use speedrun::{
    filters::{self, Scope},
    types as wire, FetchOptions, Session,
};

use super::{list_games, list_runs, non_empty, Color, Game, Link, PlacedRun, Run};
use crate::{
    connection::{connection, paged, OffsetCursor},
    enums::{UserNameVariant, UserRole},
    error::WithCode,
    id::NodeKind,
    inputs::{GameFilter, GameOrder, RunFilter, RunOrder, UserFilter, UserOrder},
};

#[derive(Clone, Debug)]
pub struct User {
    data: wire::User,
    session: Session,
}

impl User {
    pub fn new(data: wire::User, session: Session) -> Self {
        User { data, session }
    }
}

#[Object]
impl User {
    async fn id(&self) -> ID {
        NodeKind::User.global_id(&self.data.id)
    }

    async fn raw_id(&self) -> &str {
        &self.data.id
    }

    async fn name(&self, #[graphql(default)] variant: UserNameVariant) -> Option<&str> {
        let names = &self.data.names;

        non_empty(match variant {
            UserNameVariant::International => &names.international,
            UserNameVariant::Japanese => &names.japanese,
        })
    }

    async fn weblink(&self) -> &str {
        &self.data.weblink
    }

    async fn name_style(&self) -> Option<UserNameStyle> {
        UserNameStyle::from_wire(&self.data.name_style)
    }

    async fn role(&self) -> UserRole {
        self.data.role.into()
    }

    async fn signup(&self) -> Option<DateTime<Utc>> {
        self.data.signup
    }

    async fn twitch(&self) -> Option<Link> {
        self.data.twitch.as_ref().map(Link::from)
    }

    async fn hitbox(&self) -> Option<Link> {
        self.data.hitbox.as_ref().map(Link::from)
    }

    async fn youtube(&self) -> Option<Link> {
        self.data.youtube.as_ref().map(Link::from)
    }

    async fn twitter(&self) -> Option<Link> {
        self.data.twitter.as_ref().map(Link::from)
    }

    async fn speedrunslive(&self) -> Option<Link> {
        self.data.speedrunslive.as_ref().map(Link::from)
    }

    async fn runs(
        &self,
        filter: Option<RunFilter>,
        order: Option<RunOrder>,
        first: Option<i32>,
        after: Option<String>,
    ) -> Result<Connection<OffsetCursor, Run>> {
        let scope = Scope::new("user", self.data.id.clone());
        list_runs(&self.session, Some(scope), filter, order, first, after).await
    }

    async fn personal_bests(&self) -> Result<Vec<PlacedRun>> {
        let runs = self
            .session
            .list_user_personal_bests(&self.data.id, &FetchOptions::new())
            .await
            .with_code()?;

        Ok(runs
            .into_iter()
            .map(|placed| PlacedRun::new(placed, self.session.clone()))
            .collect())
    }

    async fn moderated_games(
        &self,
        filter: Option<GameFilter>,
        order: Option<GameOrder>,
        first: Option<i32>,
        after: Option<String>,
    ) -> Result<Connection<OffsetCursor, Game>> {
        let scope = Scope::owned_by("moderator", "user", self.data.id.clone());
        list_games(&self.session, Some(scope), filter, order, first, after).await
    }
}

pub(crate) async fn list_users(
    session: &Session,
    filter: Option<UserFilter>,
    order: Option<UserOrder>,
    first: Option<i32>,
    after: Option<String>,
) -> Result<Connection<OffsetCursor, User>> {
    let options = match filter.as_ref().map(filters::UserFilter::from) {
        Some(filter) => FetchOptions::new().filters(&filter),
        None => FetchOptions::new(),
    };

    let options = UserOrder::apply(order, options);
    let options = paged(options, first, after.as_deref()).with_code()?;
    let (users, page) = session.list_users(&options).await.with_code()?;

    Ok(connection(users, page.as_ref(), &options, |user| User::new(user, session.clone())))
}

#[derive(Union)]
pub enum UserNameStyle {
    Solid(SolidUserNameStyle),
    Gradient(GradientUserNameStyle),
}

impl UserNameStyle {
    /// `None` when the colors the style needs are missing.
    fn from_wire(style: &wire::UserNameStyle) -> Option<Self> {
        match style.style {
            wire::UserNameStyleValue::Solid => {
                let color = style.color.as_ref()?;
                Some(UserNameStyle::Solid(SolidUserNameStyle { color: color.into() }))
            }
            wire::UserNameStyleValue::Gradient => {
                let (from, to) = style.color_from.as_ref().zip(style.color_to.as_ref())?;

                Some(UserNameStyle::Gradient(GradientUserNameStyle {
                    color_from: from.into(),
                    color_to: to.into(),
                }))
            }
        }
    }
}

#[derive(SimpleObject)]
pub struct SolidUserNameStyle {
    pub color: Color,
}

#[derive(SimpleObject)]
pub struct GradientUserNameStyle {
    pub color_from: Color,
    pub color_to: Color,
}
