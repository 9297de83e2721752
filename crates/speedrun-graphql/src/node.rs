use async_graphql::{Result, Union, ID};
use speedrun::Session;

use crate::{
    error::{invalid_argument, WithCode},
    id::{decode, NodeKind},
    objects::{Category, Engine, Game, Genre, Level, Platform, Region, Run, User, Variable},
};

/// Anything addressable by a global id.
#[derive(Union)]
pub enum Node {
    Category(Category),
    Engine(Engine),
    Game(Game),
    Genre(Genre),
    Level(Level),
    Platform(Platform),
    Region(Region),
    Run(Run),
    User(User),
    Variable(Variable),
}

/// Loads the entity behind a global id.
///
/// A malformed id is an error, an id of a kind this schema does not know
/// resolves to null.
pub(crate) async fn resolve(session: &Session, id: &ID) -> Result<Option<Node>> {
    let Some((kind, raw)) = decode(id) else {
        return Err(invalid_argument(format!("malformed node id {}", id.as_str()))).with_code();
    };

    let Ok(kind) = kind.parse::<NodeKind>() else {
        tracing::debug!(kind = %kind, "node lookup for an unknown kind");
        return Ok(None);
    };

    let session = session.clone();

    let node = match kind {
        NodeKind::Category => {
            let category = session.get_category(&raw).await.with_code()?;
            category.map(|category| Node::Category(Category::new(category, session)))
        }
        NodeKind::Engine => {
            let engine = session.get_engine(&raw).await.with_code()?;
            engine.map(|engine| Node::Engine(Engine::new(engine, session)))
        }
        NodeKind::Game => {
            let game = session.get_game(&raw).await.with_code()?;
            game.map(|game| Node::Game(Game::new(game, session)))
        }
        NodeKind::Genre => {
            let genre = session.get_genre(&raw).await.with_code()?;
            genre.map(|genre| Node::Genre(Genre::new(genre, session)))
        }
        NodeKind::Level => {
            let level = session.get_level(&raw).await.with_code()?;
            level.map(|level| Node::Level(Level::new(level, session)))
        }
        NodeKind::Platform => {
            let platform = session.get_platform(&raw).await.with_code()?;
            platform.map(|platform| Node::Platform(Platform::new(platform, session)))
        }
        NodeKind::Region => {
            let region = session.get_region(&raw).await.with_code()?;
            region.map(|region| Node::Region(Region::new(region, session)))
        }
        NodeKind::Run => {
            let run = session.get_run(&raw).await.with_code()?;
            run.map(|run| Node::Run(Run::new(run, session)))
        }
        NodeKind::User => {
            let user = session.get_user(&raw).await.with_code()?;
            user.map(|user| Node::User(User::new(user, session)))
        }
        NodeKind::Variable => {
            let variable = session.get_variable(&raw).await.with_code()?;
            variable.map(|variable| Node::Variable(Variable::new(variable, session)))
        }
    };

    Ok(node)
}
