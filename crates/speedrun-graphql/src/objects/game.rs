use async_graphql::{connection::Connection, Object, Result, ID};
use speedrun::{
    filters::{self, Scope},
    types as wire, FetchOptions, Session,
};

use super::{non_empty, Category, Engine, Genre, Level, Platform, Region, Run, User, Variable};
use crate::{
    connection::{connection, paged, OffsetCursor},
    enums::{GameAssetKind, GameModeratorRole, GameNameVariant, GameRunTime},
    error::WithCode,
    id::NodeKind,
    inputs::{GameFilter, GameOrder, RunFilter, RunOrder},
    objects::list_runs,
};

#[derive(Clone, Debug)]
pub struct Game {
    data: wire::Game,
    session: Session,
}

impl Game {
    pub fn new(data: wire::Game, session: Session) -> Self {
        Game { data, session }
    }
}

#[Object]
impl Game {
    async fn id(&self) -> ID {
        NodeKind::Game.global_id(&self.data.id)
    }

    async fn raw_id(&self) -> &str {
        &self.data.id
    }

    async fn name(&self, #[graphql(default)] variant: GameNameVariant) -> Option<&str> {
        let names = &self.data.names;

        non_empty(match variant {
            GameNameVariant::International => &names.international,
            GameNameVariant::Japanese => &names.japanese,
            GameNameVariant::Twitch => &names.twitch,
        })
    }

    async fn abbreviation(&self) -> Option<&str> {
        non_empty(&self.data.abbreviation)
    }

    async fn weblink(&self) -> &str {
        &self.data.weblink
    }

    async fn release_date(&self) -> Option<&str> {
        non_empty(&self.data.release_date)
    }

    async fn ruleset(&self) -> GameRuleset {
        GameRuleset(self.data.ruleset.clone())
    }

    async fn platforms(&self) -> Result<Vec<Platform>> {
        let platforms = self.session.get_platforms(&self.data.platforms).await.with_code()?;
        Ok(platforms.into_iter().map(|platform| Platform::new(platform, self.session.clone())).collect())
    }

    async fn regions(&self) -> Result<Vec<Region>> {
        let regions = self.session.get_regions(&self.data.regions).await.with_code()?;
        Ok(regions.into_iter().map(|region| Region::new(region, self.session.clone())).collect())
    }

    async fn genres(&self) -> Result<Vec<Genre>> {
        let genres = self.session.get_genres(&self.data.genres).await.with_code()?;
        Ok(genres.into_iter().map(|genre| Genre::new(genre, self.session.clone())).collect())
    }

    async fn engines(&self) -> Result<Vec<Engine>> {
        let engines = self.session.get_engines(&self.data.engines).await.with_code()?;
        Ok(engines.into_iter().map(|engine| Engine::new(engine, self.session.clone())).collect())
    }

    /// Sorted by user id.
    async fn moderators(&self) -> Vec<GameModerator> {
        self.data
            .moderator_roles()
            .map(|(user_id, role)| GameModerator {
                user_id: user_id.to_string(),
                role,
                session: self.session.clone(),
            })
            .collect()
    }

    async fn assets(&self) -> Vec<GameAsset> {
        self.data
            .present_assets()
            .map(|(kind, asset)| GameAsset::new(kind, asset))
            .collect()
    }

    async fn asset(&self, kind: GameAssetKind) -> Option<GameAsset> {
        let kind = wire::GameAssetKind::from(kind);

        self.data
            .present_assets()
            .find(|(candidate, _)| *candidate == kind)
            .map(|(kind, asset)| GameAsset::new(kind, asset))
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        let categories = self
            .session
            .list_game_categories(&self.data.id, &FetchOptions::new())
            .await
            .with_code()?;

        Ok(categories
            .into_iter()
            .map(|category| Category::new(category, self.session.clone()))
            .collect())
    }

    async fn levels(&self) -> Result<Vec<Level>> {
        let levels = self
            .session
            .list_game_levels(&self.data.id, &FetchOptions::new())
            .await
            .with_code()?;

        Ok(levels.into_iter().map(|level| Level::new(level, self.session.clone())).collect())
    }

    async fn variables(&self) -> Result<Vec<Variable>> {
        let variables = self.session.list_game_variables(&self.data.id).await.with_code()?;

        Ok(variables
            .into_iter()
            .map(|variable| Variable::new(variable, self.session.clone()))
            .collect())
    }

    async fn runs(
        &self,
        filter: Option<RunFilter>,
        order: Option<RunOrder>,
        first: Option<i32>,
        after: Option<String>,
    ) -> Result<Connection<OffsetCursor, Run>> {
        let scope = Scope::new("game", self.data.id.clone());
        list_runs(&self.session, Some(scope), filter, order, first, after).await
    }
}

/// Reads one page of games, optionally through a relationship.
pub(crate) async fn list_games(
    session: &Session,
    scope: Option<Scope>,
    filter: Option<GameFilter>,
    order: Option<GameOrder>,
    first: Option<i32>,
    after: Option<String>,
) -> Result<Connection<OffsetCursor, Game>> {
    let filter = filter.as_ref().map(filters::GameFilter::from);

    let options = match (&scope, &filter) {
        (Some(scope), filter) => filters::scoped(scope, filter.as_ref()).with_code()?,
        (None, Some(filter)) => FetchOptions::new().filters(filter),
        (None, None) => FetchOptions::new(),
    };

    let options = GameOrder::apply(order, options);
    let options = paged(options, first, after.as_deref()).with_code()?;
    let (games, page) = session.list_games(&options).await.with_code()?;

    Ok(connection(games, page.as_ref(), &options, |game| {
        Game::new(game, session.clone())
    }))
}

pub struct GameRuleset(wire::GameRuleset);

#[Object]
impl GameRuleset {
    async fn show_milliseconds(&self) -> bool {
        self.0.show_milliseconds
    }

    async fn require_verification(&self) -> bool {
        self.0.require_verification
    }

    async fn require_video(&self) -> bool {
        self.0.require_video
    }

    async fn run_times(&self) -> Vec<GameRunTime> {
        self.0.run_times.iter().copied().map(Into::into).collect()
    }

    async fn default_run_time(&self) -> GameRunTime {
        self.0.default_run_time.into()
    }

    async fn emulators_allowed(&self) -> bool {
        self.0.emulators_allowed
    }
}

pub struct GameModerator {
    user_id: String,
    role: wire::GameModeratorRole,
    session: Session,
}

#[Object]
impl GameModerator {
    async fn user(&self) -> Result<Option<User>> {
        let user = self.session.get_user(&self.user_id).await.with_code()?;
        Ok(user.map(|user| User::new(user, self.session.clone())))
    }

    async fn role(&self) -> GameModeratorRole {
        self.role.into()
    }
}

pub struct GameAsset {
    kind: wire::GameAssetKind,
    data: wire::GameAsset,
}

impl GameAsset {
    fn new(kind: wire::GameAssetKind, data: &wire::GameAsset) -> Self {
        GameAsset {
            kind,
            data: data.clone(),
        }
    }
}

#[Object]
impl GameAsset {
    async fn kind(&self) -> GameAssetKind {
        self.kind.into()
    }

    async fn uri(&self) -> &str {
        &self.data.uri
    }

    async fn width(&self) -> i32 {
        self.data.width
    }

    async fn height(&self) -> i32 {
        self.data.height
    }
}
