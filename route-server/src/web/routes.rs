//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::domain::{DomainError, SearchObjective};
use crate::planner::{Planner, SearchError, SearchRequest};

use super::dto::*;
use super::state::AppState;

/// Returned by the proxy when the server holds no Duffel credential.
pub const MISSING_KEY_MESSAGE: &str = "Duffel API key not set on server";

/// Returned by the proxy when the upstream could not be reached or read.
pub const PROXY_ERROR_MESSAGE: &str = "Duffel proxy error";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/duffel",
            post(proxy_offer_request).fallback(method_not_allowed),
        )
        .route("/api/search", post(search_itineraries))
        .route("/api/places/autocomplete", get(autocomplete_places))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Forward an offer request to Duffel and relay its answer.
///
/// Upstream statuses and bodies pass through untouched, errors included.
/// Only a missing credential or a failed exchange produce our own errors.
async fn proxy_offer_request(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let Some(duffel) = state.duffel.as_ref() else {
        return Err(AppError::Internal {
            message: MISSING_KEY_MESSAGE.to_string(),
        });
    };

    // Validate only; upstream gets the caller's bytes unchanged
    serde_json::from_slice::<serde::de::IgnoredAny>(&body).map_err(|e| {
        debug!(error = %e, "Proxy body is not JSON");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let reply = duffel.forward_offer_request(body).await.map_err(|e| {
        warn!(error = %e, "Duffel proxy error");
        AppError::Internal {
            message: PROXY_ERROR_MESSAGE.to_string(),
        }
    })?;

    let status = StatusCode::from_u16(reply.status).map_err(|_| AppError::Internal {
        message: PROXY_ERROR_MESSAGE.to_string(),
    })?;

    Ok((status, Json(reply.body)).into_response())
}

/// Search door-to-door itineraries.
async fn search_itineraries(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SearchItinerariesResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: SearchItinerariesRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, body = %String::from_utf8_lossy(&body), "Invalid search body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let objective = match req.objective.as_deref() {
        Some(name) => name.parse::<SearchObjective>().map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?,
        None => SearchObjective::default(),
    };

    let request = SearchRequest {
        origin: req.origin.into_location()?,
        destination: req.destination.into_location()?,
        date: req.date,
        objective,
    };

    let planner = Planner::new(
        state.finder.as_ref(),
        state.ground.as_ref(),
        state.offers.as_ref(),
        &state.config,
    );
    let result = planner.search(&request).await?;

    Ok(Json(SearchItinerariesResponse::from_result(&result, objective)))
}

/// Suggest places for free-text input.
///
/// Never fails: short input, a missing credential and provider errors all
/// answer with an empty list.
async fn autocomplete_places(
    State(state): State<AppState>,
    Query(query): Query<AutocompleteQuery>,
) -> Json<Vec<PlaceDto>> {
    let Some(places) = state.places.as_ref() else {
        return Json(Vec::new());
    };

    match places.autocomplete(&query.input).await {
        Ok(locations) => Json(locations.iter().map(PlaceDto::from).collect()),
        Err(e) => {
            warn!(error = %e, "Autocomplete failed");
            Json(Vec::new())
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    MethodNotAllowed,
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidRequest(message) => AppError::BadRequest { message },
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, error = %message, "Request failed");
        } else {
            debug!(%status, error = %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
