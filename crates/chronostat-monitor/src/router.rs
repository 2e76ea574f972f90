//! Axum router wiring for the monitoring endpoint.
//!
//! Currently exposes a single `/counters` route serving the flattened
//! export as a JSON object.

use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};

use crate::json::JsonStats;

pub fn build_router(stats: JsonStats) -> Router {
    Router::new()
        .route("/counters", get(serve_counters))
        .with_state(stats)
}

async fn serve_counters(State(stats): State<JsonStats>) -> Json<BTreeMap<String, i64>> {
    Json(stats.report_map())
}
