use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde_json::json;
use speedrun::{Client, NativeFetcher};
use speedrun_graphql::{build_schema, SpeedrunSchema};
use tokio::{net::TcpListener, signal};

use crate::{config::Config, Error};

#[derive(Clone)]
struct ServerState {
    schema: SpeedrunSchema,
    client: Client,
    graphiql: Arc<str>,
}

/// Starts the server and listens for incoming requests until a termination
/// signal arrives.
pub async fn serve(config: Config) -> crate::Result<()> {
    let fetcher = NativeFetcher::runtime_fetcher()
        .map_err(|error| Error::InternalError(error.to_string()))?
        .with_timeout(config.upstream.timeout());

    let client = Client::new(&config.upstream.base_url, fetcher).with_loader_config(config.loader.loader_config());

    let addr = config.listen_address();
    let listener = TcpListener::bind(addr).await.map_err(Error::Server)?;

    tracing::info!("GraphQL endpoint exposed at http://{addr}{}", config.graph.path);
    tracing::debug!(upstream = %client.base_url(), "forwarding to upstream");

    axum::serve(listener, router(&config, client))
        .with_graceful_shutdown(graceful_shutdown())
        .await
        .map_err(Error::Server)
}

fn router(config: &Config, client: Client) -> Router {
    let state = ServerState {
        schema: build_schema(config.graph.introspection),
        client,
        graphiql: GraphiQLSource::build().endpoint(&config.graph.path).finish().into(),
    };

    let mut router = Router::new().route(&config.graph.path, get(graphiql).post(execute));

    if config.health.enabled {
        router = router.route(&config.health.path, get(health));
    }

    router.with_state(state)
}

/// Runs one operation in a fresh session. The session, and with it every
/// upstream request still pending, goes away with the request.
async fn execute(
    State(state): State<ServerState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let session = state.client.session();
    let response = state.schema.execute(request.data(session)).await;

    Json(response)
}

async fn graphiql(State(state): State<ServerState>) -> impl IntoResponse {
    Html(state.graphiql.to_string())
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

async fn graceful_shutdown() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutting down gracefully...");
}
