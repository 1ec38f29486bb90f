use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::catalog::FilterCriteria;
use crate::context::AppContext;
use crate::error::AppError;
use crate::profile::ProfileSubmission;

/// Profile form body; `criteria` optionally narrows the postings shown alongside it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileRequest {
    #[serde(flatten)]
    pub profile: ProfileSubmission,
    #[serde(default)]
    pub criteria: FilterCriteria,
}

/// Router builder exposing the catalog and profile endpoints.
pub fn internship_router(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/api/v1/internships", get(list_handler))
        .route("/api/v1/internships/options", get(options_handler))
        .route("/api/v1/profile", post(profile_handler))
        .with_state(context)
}

pub(crate) async fn list_handler(
    State(context): State<Arc<AppContext>>,
    Query(criteria): Query<FilterCriteria>,
) -> Response {
    let listing = context.listing(&criteria);
    tracing::debug!(
        matched = listing.count(),
        total = listing.total,
        "internship listing served"
    );
    (StatusCode::OK, Json(listing)).into_response()
}

pub(crate) async fn options_handler(State(context): State<Arc<AppContext>>) -> Response {
    (StatusCode::OK, Json(context.options())).into_response()
}

pub(crate) async fn profile_handler(
    State(context): State<Arc<AppContext>>,
    Json(request): Json<ProfileRequest>,
) -> Response {
    let ProfileRequest { profile, criteria } = request;
    match context.submit_profile(profile, &criteria) {
        Ok(echo) => (StatusCode::OK, Json(echo)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
