use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use mahjong_core::{
    score as calc_score, yaku, ParseTierError, ScoreOutcome, ScoreRequest, Selection,
    SelectionAction, Tier, YakuDef,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::warn;

pub mod config;

pub fn app() -> Router {
    Router::new()
        .route("/api/yaku", get(list_yaku))
        .route("/api/yaku/:id", get(get_yaku))
        .route("/api/score", post(score))
        .route("/api/selection", post(selection))
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Deserialize)]
struct YakuQuery {
    tier: Option<String>,
}

async fn list_yaku(Query(q): Query<YakuQuery>) -> Result<Json<Vec<YakuDef>>, ApiError> {
    let list = match q.tier {
        Some(t) => {
            let tier: Tier = t.parse().map_err(|e: ParseTierError| {
                warn!(error = %e, "bad tier");
                ApiError::BadRequest(e.to_string())
            })?;
            yaku::by_tier(tier).copied().collect()
        }
        None => yaku::all().to_vec(),
    };
    Ok(Json(list))
}

async fn get_yaku(Path(id): Path<String>) -> Result<Json<YakuDef>, ApiError> {
    yaku::find(&id)
        .copied()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("unknown yaku: {}", id)))
}

async fn score(Json(req): Json<ScoreRequest>) -> Json<ScoreOutcome> {
    Json(calc_score(&req))
}

#[derive(Debug, Deserialize)]
struct SelectionStep {
    #[serde(default)]
    selection: Selection,
    action: SelectionAction,
}

#[derive(Debug, Serialize)]
struct SelectionView {
    selection: Selection,
    /// false when the action was refused (disabled or unknown yaku)
    applied: bool,
    disabled: Vec<&'static str>,
    outcome: ScoreOutcome,
}

async fn selection(Json(step): Json<SelectionStep>) -> Json<SelectionView> {
    let mut selection = step.selection;
    let applied = selection.apply(&step.action);
    if !applied {
        warn!(action = ?step.action, "selection action refused");
    }
    Json(SelectionView {
        disabled: selection.disabled_yaku(),
        outcome: selection.score(),
        applied,
        selection,
    })
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, self.to_string()).into_response()
    }
}
