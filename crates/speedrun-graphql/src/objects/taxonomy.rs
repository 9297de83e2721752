//! Platforms, regions, genres and engines: named tags a game points at, each
//! with the scoped list of games carrying it.

use async_graphql::{connection::Connection, Object, Result, ID};
use speedrun::{filters::Scope, types as wire, FetchOptions, Session};

use super::{list_games, Game};
use crate::{
    connection::{connection, paged, OffsetCursor},
    error::WithCode,
    id::NodeKind,
    inputs::{GameFilter, GameOrder, GenreOrder, PlatformOrder},
};

macro_rules! taxonomy_object {
    ($name:ident, $kind:ident, $scope:literal $(, { $($extra:tt)* })?) => {
        #[derive(Clone, Debug)]
        pub struct $name {
            data: wire::$name,
            session: Session,
        }

        impl $name {
            pub fn new(data: wire::$name, session: Session) -> Self {
                $name { data, session }
            }
        }

        #[Object]
        impl $name {
            async fn id(&self) -> ID {
                NodeKind::$kind.global_id(&self.data.id)
            }

            async fn raw_id(&self) -> &str {
                &self.data.id
            }

            async fn name(&self) -> &str {
                &self.data.name
            }

            $($($extra)*)?

            async fn games(
                &self,
                filter: Option<GameFilter>,
                order: Option<GameOrder>,
                first: Option<i32>,
                after: Option<String>,
            ) -> Result<Connection<OffsetCursor, Game>> {
                let scope = Scope::new($scope, self.data.id.clone());
                list_games(&self.session, Some(scope), filter, order, first, after).await
            }
        }
    };
}

taxonomy_object!(Platform, Platform, "platform", {
    async fn released(&self) -> Option<i32> {
        (self.data.released > 0).then_some(self.data.released)
    }
});
taxonomy_object!(Region, Region, "region");
taxonomy_object!(Genre, Genre, "genre");
taxonomy_object!(Engine, Engine, "engine");

pub(crate) async fn list_platforms(
    session: &Session,
    order: Option<PlatformOrder>,
    first: Option<i32>,
    after: Option<String>,
) -> Result<Connection<OffsetCursor, Platform>> {
    let options = PlatformOrder::apply(order, FetchOptions::new());
    let options = paged(options, first, after.as_deref()).with_code()?;
    let (platforms, page) = session.list_platforms(&options).await.with_code()?;

    Ok(connection(platforms, page.as_ref(), &options, |platform| {
        Platform::new(platform, session.clone())
    }))
}

pub(crate) async fn list_genres(
    session: &Session,
    order: Option<GenreOrder>,
    first: Option<i32>,
    after: Option<String>,
) -> Result<Connection<OffsetCursor, Genre>> {
    let options = GenreOrder::apply(order, FetchOptions::new());
    let options = paged(options, first, after.as_deref()).with_code()?;
    let (genres, page) = session.list_genres(&options).await.with_code()?;

    Ok(connection(genres, page.as_ref(), &options, |genre| {
        Genre::new(genre, session.clone())
    }))
}
