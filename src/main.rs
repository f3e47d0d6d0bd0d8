use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use fitness_tracker::shell::config::ServerConfig;
use fitness_tracker::shell::graphql::{AppSchema, MutationRoot, QueryRoot};
use fitness_tracker::shell::http::router;
use fitness_tracker::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // In-memory deps for now
    let state = AppState::in_memory();

    let schema: AppSchema =
        Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
            .data(state.clone())
            .finish();

    let app = router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let config = ServerConfig::from_env();
    let addr = config.socket_addr()?;
    tracing::info!("listening on http://{addr} (GraphQL at /gql)");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
