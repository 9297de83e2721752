//! The GraphQL face of the speedrun client.
//!
//! Resolvers find the request's [`speedrun::Session`] in the request data.
//! Every object wraps one upstream value together with that session.

mod connection;
mod enums;
mod error;
mod id;
mod inputs;
mod node;
mod objects;
mod query;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};

pub use connection::OffsetCursor;
pub use id::NodeKind;
pub use node::Node;
pub use query::{Query, Viewer};

pub type SpeedrunSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Builds the schema. Each request must carry its own session:
///
/// ```ignore
/// let request = async_graphql::Request::new(query).data(client.session());
/// let response = schema.execute(request).await;
/// ```
pub fn build_schema(introspection: bool) -> SpeedrunSchema {
    let builder = Schema::build(Query, EmptyMutation, EmptySubscription);

    if introspection {
        builder.finish()
    } else {
        builder.disable_introspection().finish()
    }
}
