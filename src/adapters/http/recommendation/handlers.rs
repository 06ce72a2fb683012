//! HTTP handlers for profile and recommendation endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Local, NaiveDate};
use serde_json::json;
use tracing::error;

use crate::application::handlers::{
    ComputeRecommendationsHandler, ComputeRecommendationsQuery, GetRecommendationsHandler,
    GetRecommendationsQuery, ListProfilesHandler, RegisterProfileCommand, RegisterProfileHandler,
};
use crate::config::CycleConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ProfileRegistry;

use super::dto::{
    ComputeRecommendationsRequest, ErrorResponse, ProfileCommandResponse, ProfileListResponse,
    RecommendationParams, RecommendationResponse, RegisterProfileRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RecommendationHandlers {
    register_handler: Arc<RegisterProfileHandler>,
    get_recommendations_handler: Arc<GetRecommendationsHandler>,
    list_handler: Arc<ListProfilesHandler>,
    compute_handler: ComputeRecommendationsHandler,
    defaults: CycleConfig,
    verbose_errors: bool,
}

impl RecommendationHandlers {
    pub fn new(
        register_handler: Arc<RegisterProfileHandler>,
        get_recommendations_handler: Arc<GetRecommendationsHandler>,
        list_handler: Arc<ListProfilesHandler>,
        defaults: CycleConfig,
    ) -> Self {
        Self {
            register_handler,
            get_recommendations_handler,
            list_handler,
            compute_handler: ComputeRecommendationsHandler::new(),
            defaults,
            verbose_errors: false,
        }
    }

    /// Wires every handler to the same registry.
    pub fn from_registry(registry: Arc<dyn ProfileRegistry>, defaults: CycleConfig) -> Self {
        Self::new(
            Arc::new(RegisterProfileHandler::new(registry.clone())),
            Arc::new(GetRecommendationsHandler::new(registry.clone())),
            Arc::new(ListProfilesHandler::new(registry)),
            defaults,
        )
    }

    /// Expose internal error messages in responses.
    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }
}

fn reference_day(requested: Option<NaiveDate>) -> NaiveDate {
    requested.unwrap_or_else(|| Local::now().date_naive())
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/profiles - Register (or replace) a profile
pub async fn register_profile(
    State(handlers): State<RecommendationHandlers>,
    Json(req): Json<RegisterProfileRequest>,
) -> Response {
    let cmd = RegisterProfileCommand {
        input: req.into_input(&handlers.defaults),
    };

    match handlers.register_handler.handle(cmd).await {
        Ok(result) => {
            let message = if result.replaced {
                "Profile replaced"
            } else {
                "Profile registered"
            };
            let response = ProfileCommandResponse {
                name: result.profile.name().to_string(),
                replaced: result.replaced,
                message: message.to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e, handlers.verbose_errors),
    }
}

/// GET /api/profiles - List registered profile names
pub async fn list_profiles(State(handlers): State<RecommendationHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(profiles) => (StatusCode::OK, Json(ProfileListResponse { profiles })).into_response(),
        Err(e) => handle_domain_error(e, handlers.verbose_errors),
    }
}

/// GET /api/profiles/:name/recommendations - Recommendations for a registered profile
pub async fn get_recommendations(
    State(handlers): State<RecommendationHandlers>,
    Path(name): Path<String>,
    Query(params): Query<RecommendationParams>,
) -> Response {
    let query = GetRecommendationsQuery {
        name,
        reference_day: reference_day(params.date),
    };

    match handlers.get_recommendations_handler.handle(query).await {
        Ok(result) => {
            (StatusCode::OK, Json(RecommendationResponse::from(result))).into_response()
        }
        Err(e) => handle_domain_error(e, handlers.verbose_errors),
    }
}

/// POST /api/recommendations - Recommendations without registering
pub async fn compute_recommendations(
    State(handlers): State<RecommendationHandlers>,
    Json(req): Json<ComputeRecommendationsRequest>,
) -> Response {
    let query = ComputeRecommendationsQuery {
        reference_day: reference_day(req.reference_date),
        input: req.profile.into_input(&handlers.defaults),
    };

    match handlers.compute_handler.handle(query) {
        Ok(result) => {
            (StatusCode::OK, Json(RecommendationResponse::from(result))).into_response()
        }
        Err(e) => handle_domain_error(e, handlers.verbose_errors),
    }
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_domain_error(error: DomainError, verbose: bool) -> Response {
    let status = match error.code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::ProfileNotFound => StatusCode::NOT_FOUND,
        ErrorCode::CatalogMisconfigured => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::InternalError => {
            error!(error = %error, "Request failed");
            let body = if verbose {
                ErrorResponse::from(&error)
            } else {
                ErrorResponse::internal("An internal error occurred")
            };
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        }
    };
    (status, Json(ErrorResponse::from(&error))).into_response()
}
