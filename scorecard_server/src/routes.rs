//! HTTP handlers for the scorecard API.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use serde_json::json;

use scorecard_lib::{analyze, validation, Fetcher};

/// Cycle used when the client does not specify one.
pub const DEFAULT_CYCLE: i32 = 2026;

/// Receipt pages fetched per analysis unless the client asks for fewer.
pub const DEFAULT_MAX_PAGES: u32 = 10;

/// Search responses are capped at this many candidates.
pub const MAX_SEARCH_RESULTS: usize = 10;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<Fetcher>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/search_candidates", get(search_candidates))
        .route("/api/analyze_candidate", get(analyze_candidate))
        .with_state(state)
}

async fn health() -> Response {
    Json(json!({"status": "ok"})).into_response()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"error": message}))).into_response()
}

#[derive(Deserialize)]
struct SearchParams {
    name: Option<String>,
    office: Option<String>,
    cycle: Option<i32>,
}

/// GET /api/search_candidates
async fn search_candidates(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let name = match params.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return error_response(StatusCode::BAD_REQUEST, "Name parameter required"),
    };
    let cycle = params.cycle.unwrap_or(DEFAULT_CYCLE);
    let office = params.office.as_deref().filter(|o| !o.trim().is_empty());

    match state.fetcher.search_candidates(&name, cycle, office).await {
        Ok(candidates) => {
            let results: Vec<_> = candidates
                .iter()
                .take(MAX_SEARCH_RESULTS)
                .map(|c| {
                    json!({
                        "candidate_id": c.candidate_id,
                        "name": c.name,
                        "party": c.party.clone().unwrap_or_else(|| "Unknown".to_string()),
                        "state": c.state.clone().unwrap_or_default(),
                        "district": c.district.clone().unwrap_or_default(),
                        "office": c.office.clone().unwrap_or_default(),
                        "office_full": c.office_full.clone().unwrap_or_default(),
                    })
                })
                .collect();

            Json(json!({"results": results})).into_response()
        }
        Err(e) => {
            tracing::error!("Candidate search failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

#[derive(Deserialize)]
struct AnalyzeParams {
    candidate_id: Option<String>,
    name: Option<String>,
    party: Option<String>,
    state: Option<String>,
    cycle: Option<i32>,
    max_pages: Option<u32>,
}

/// GET /api/analyze_candidate
async fn analyze_candidate(
    State(app): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Response {
    let candidate_id = match params.candidate_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return error_response(StatusCode::BAD_REQUEST, "candidate_id parameter required"),
    };
    let candidate_name = params.name.unwrap_or_default();
    let cycle = params.cycle.unwrap_or(DEFAULT_CYCLE);
    let max_pages = match validation::validate_max_pages(params.max_pages.unwrap_or(DEFAULT_MAX_PAGES)) {
        Ok(max_pages) => max_pages,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    let committees = match app.fetcher.get_candidate_committees(&candidate_id, cycle).await {
        Ok(committees) => committees,
        Err(e) => {
            tracing::error!("Committee lookup for {} failed: {}", candidate_id, e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
        }
    };

    if committees.is_empty() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "No committees found for this candidate",
                "candidate_id": candidate_id,
            })),
        )
            .into_response();
    }

    // Receipts come from the principal committee (first in the list).
    let principal = &committees[0];
    let receipts = app
        .fetcher
        .get_committee_receipts(&principal.committee_id, cycle, Some(max_pages))
        .await;

    if receipts.is_empty() {
        return Json(json!({
            "warning": "No contribution data available yet for this candidate",
            "committee": {
                "name": principal.name,
                "id": principal.committee_id,
            },
        }))
        .into_response();
    }

    let analysis = analyze(&receipts, &candidate_name);

    Json(json!({
        "candidate": {
            "id": candidate_id,
            "name": candidate_name,
            "party": params.party.unwrap_or_default(),
            "state": params.state.unwrap_or_default(),
        },
        "committee": {
            "name": principal.name,
            "id": principal.committee_id,
        },
        "analysis": analysis,
        "note": format!("Analysis based on {} contribution records", receipts.len()),
    }))
    .into_response()
}
