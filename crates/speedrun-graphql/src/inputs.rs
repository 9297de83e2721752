use async_graphql::{InputObject, ID};
use speedrun::{filters, FetchOptions};

use crate::{
    enums::{GameOrderField, GenreOrderField, OrderDirection, PlatformOrderField, RunOrderField, UserOrderField},
    id::raw_id,
};

#[derive(InputObject, Clone, Debug, Default)]
pub struct GameFilter {
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub released: Option<i32>,
    pub game_type: Option<ID>,
    pub platform: Option<ID>,
    pub region: Option<ID>,
    pub genre: Option<ID>,
    pub engine: Option<ID>,
    pub developer: Option<ID>,
    pub publisher: Option<ID>,
    pub moderator: Option<ID>,
}

impl From<&GameFilter> for filters::GameFilter {
    fn from(filter: &GameFilter) -> Self {
        filters::GameFilter {
            name: filter.name.clone(),
            abbreviation: filter.abbreviation.clone(),
            released: filter.released,
            game_type: filter.game_type.as_ref().map(raw_id),
            platform: filter.platform.as_ref().map(raw_id),
            region: filter.region.as_ref().map(raw_id),
            genre: filter.genre.as_ref().map(raw_id),
            engine: filter.engine.as_ref().map(raw_id),
            developer: filter.developer.as_ref().map(raw_id),
            publisher: filter.publisher.as_ref().map(raw_id),
            moderator: filter.moderator.as_ref().map(raw_id),
        }
    }
}

#[derive(InputObject, Clone, Debug, Default)]
pub struct RunFilter {
    pub user: Option<ID>,
    pub guest: Option<String>,
    pub examiner: Option<ID>,
    pub game: Option<ID>,
    pub level: Option<ID>,
    pub category: Option<ID>,
    pub platform: Option<ID>,
    pub region: Option<ID>,
    pub emulated: Option<bool>,
    pub status: Option<crate::enums::RunStatusValue>,
}

impl From<&RunFilter> for filters::RunFilter {
    fn from(filter: &RunFilter) -> Self {
        filters::RunFilter {
            user: filter.user.as_ref().map(raw_id),
            guest: filter.guest.clone(),
            examiner: filter.examiner.as_ref().map(raw_id),
            game: filter.game.as_ref().map(raw_id),
            level: filter.level.as_ref().map(raw_id),
            category: filter.category.as_ref().map(raw_id),
            platform: filter.platform.as_ref().map(raw_id),
            region: filter.region.as_ref().map(raw_id),
            emulated: filter.emulated,
            status: filter.status.map(Into::into),
        }
    }
}

#[derive(InputObject, Clone, Debug, Default)]
pub struct UserFilter {
    pub lookup: Option<String>,
    pub name: Option<String>,
    pub twitch: Option<String>,
    pub hitbox: Option<String>,
    pub twitter: Option<String>,
    pub speedrunslive: Option<String>,
}

impl From<&UserFilter> for filters::UserFilter {
    fn from(filter: &UserFilter) -> Self {
        filters::UserFilter {
            lookup: filter.lookup.clone(),
            name: filter.name.clone(),
            twitch: filter.twitch.clone(),
            hitbox: filter.hitbox.clone(),
            twitter: filter.twitter.clone(),
            speedrunslive: filter.speedrunslive.clone(),
        }
    }
}

macro_rules! order_input {
    ($name:ident, $field:ty, $wire:ty) => {
        #[derive(InputObject, Clone, Copy, Debug, Default)]
        pub struct $name {
            pub field: Option<$field>,
            pub direction: Option<OrderDirection>,
        }

        impl $name {
            pub(crate) fn apply(order: Option<Self>, options: FetchOptions) -> FetchOptions {
                match order {
                    Some(order) => options.order(order.field.map(<$wire>::from), order.direction.map(Into::into)),
                    None => options,
                }
            }
        }
    };
}

order_input!(GameOrder, GameOrderField, filters::GameOrderField);
order_input!(RunOrder, RunOrderField, filters::RunOrderField);
order_input!(UserOrder, UserOrderField, filters::UserOrderField);
order_input!(GenreOrder, GenreOrderField, filters::GenreOrderField);
order_input!(PlatformOrder, PlatformOrderField, filters::PlatformOrderField);

/// Narrows a leaderboard to one value of a subcategory variable.
#[derive(InputObject, Clone, Debug)]
pub struct LeaderboardVariable {
    pub id: ID,
    pub value: ID,
}

#[cfg(test)]
mod tests {
    use super::*;
    use speedrun::filters::FilterTable;

    #[test]
    fn global_ids_are_unwrapped_in_filters() {
        let filter = RunFilter {
            category: Some(crate::NodeKind::Category.global_id("wkpoo02r")),
            status: Some(crate::enums::RunStatusValue::Verified),
            ..Default::default()
        };

        let options = FetchOptions::new().filters(&filters::RunFilter::from(&filter));

        assert_eq!(
            options.query_string().as_deref(),
            Some("category=wkpoo02r&status=verified")
        );
        assert_eq!(filters::RunFilter::SUBJECT, "runs");
    }

    #[test]
    fn order_without_field_keeps_direction() {
        let order = GameOrder {
            field: None,
            direction: Some(OrderDirection::Desc),
        };

        let options = GameOrder::apply(Some(order), FetchOptions::new());
        assert_eq!(options.query_string().as_deref(), Some("direction=desc"));
    }
}
