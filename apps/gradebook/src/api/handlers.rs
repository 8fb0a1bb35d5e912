//! HTTP request handlers
//!
//! Axum handlers for the GraphQL endpoint, the GraphiQL IDE and health.

use super::{AppState, GRAPHQL_PATH};
use async_graphql::http::{GraphiQLSource, parse_query_string};
use async_graphql::parser::parse_query;
use async_graphql::parser::types::{DocumentOperations, OperationType};
use axum::Json;
use axum::extract::{RawQuery, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use gradebook_core::StoreCounts;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub counts: StoreCounts,
}

/// Execute a GraphQL request.
///
/// Query errors are reported inside the GraphQL response body, always with 200.
pub async fn graphql(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(request).await)
}

/// Execute a GraphQL request carried in the query string.
///
/// Without a query string this serves the GraphiQL IDE, or 404 when the IDE
/// is disabled. Mutations are only accepted over POST and get 405 here.
pub async fn graphql_get(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Response {
    let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
        return graphiql(state.graphiql);
    };

    let request = match parse_query_string(&raw) {
        Ok(request) => request,
        Err(err) => {
            debug!(error = %err, "rejected GET query string");
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    if selects_mutation(&request) {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "POST")],
            "mutations must be sent with POST",
        )
            .into_response();
    }

    Json(state.schema.execute(request).await).into_response()
}

fn graphiql(enabled: bool) -> Response {
    if !enabled {
        return StatusCode::NOT_FOUND.into_response();
    }
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response()
}

/// Check whether the operation `request` would run is a mutation.
///
/// Unparseable documents are left to the executor to report.
fn selects_mutation(request: &async_graphql::Request) -> bool {
    let Ok(document) = parse_query(&request.query) else {
        return false;
    };
    let wanted = request.operation_name.as_deref();

    match &document.operations {
        DocumentOperations::Single(operation) => operation.node.ty == OperationType::Mutation,
        DocumentOperations::Multiple(operations) => operations.iter().any(|(name, operation)| {
            wanted.is_none_or(|wanted| wanted == name.as_str())
                && operation.node.ty == OperationType::Mutation
        }),
    }
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let counts = state.store.read().await.counts();
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        counts,
    })
}
