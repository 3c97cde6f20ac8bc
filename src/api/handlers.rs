//! HTTP request handlers for the Commission Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    build_report, compute_bonus, compute_commission, validate_commission_request,
};
use crate::metrics::load_metrics_or_default;
use crate::models::{CommissionRequest, PlanKind};

use super::request::{BonusRequest, ReportRequest};
use super::response::{ApiErrorResponse, PlanSummary};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/commission", post(commission_handler))
        .route("/bonus", post(bonus_handler))
        .route("/report", post(report_handler))
        .route("/metrics", get(metrics_handler))
        .route("/plans", get(plans_handler))
        .with_state(state)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Logs a rejected body and converts it into a 400 response.
fn reject(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %rejection.body_text(),
        "Request body rejected"
    );
    ApiErrorResponse::from(rejection).into_response()
}

/// Validates a policy submission, logging the failing field.
fn validate_policy(correlation_id: Uuid, policy: &CommissionRequest) -> Result<(), Response> {
    validate_commission_request(policy).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            plan = %policy.plan,
            error = %err,
            "Policy validation failed"
        );
        ApiErrorResponse::from(err).into_response()
    })
}

/// Handler for POST /commission.
///
/// Validates the submission and returns its commission breakdown.
async fn commission_handler(payload: Result<Json<CommissionRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing commission request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return reject(correlation_id, rejection),
    };

    if let Err(response) = validate_policy(correlation_id, &request) {
        return response;
    }

    let start_time = Instant::now();
    let result = compute_commission(&request);
    info!(
        correlation_id = %correlation_id,
        plan = %request.plan,
        commission = %result.commission,
        advance = %result.advance,
        duration_us = start_time.elapsed().as_micros(),
        "Commission calculated"
    );

    json_ok(result)
}

/// Handler for POST /bonus.
async fn bonus_handler(payload: Result<Json<BonusRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bonus request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return reject(correlation_id, rejection),
    };

    let result = compute_bonus(&request.metrics, request.is_aep);
    info!(
        correlation_id = %correlation_id,
        is_aep = request.is_aep,
        eligible = result.eligible,
        bonus_per_app = %result.bonus_per_app,
        "Bonus evaluated"
    );

    json_ok(result)
}

/// Handler for POST /report.
///
/// Falls back to the configured metrics source when the body carries no
/// metrics; an unavailable source contributes all-zero metrics.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return reject(correlation_id, rejection),
    };

    if let Err(response) = validate_policy(correlation_id, &request.policy) {
        return response;
    }

    let metrics = match request.metrics {
        Some(metrics) => metrics,
        None => load_metrics_or_default(state.metrics_source()),
    };

    let report = build_report(request.client, &request.policy, &metrics);
    info!(
        correlation_id = %correlation_id,
        report_id = %report.report_id,
        plan = %report.plan,
        commission = %report.commission.commission,
        eligible = report.bonus.eligible,
        "Report generated"
    );

    json_ok(report)
}

/// Handler for GET /metrics.
async fn metrics_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.metrics_source().fetch() {
        Ok(metrics) => {
            info!(
                correlation_id = %correlation_id,
                total_apps = metrics.total_apps,
                "Metrics snapshot served"
            );
            json_ok(metrics)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Metrics fetch failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /plans.
async fn plans_handler() -> Response {
    let plans: Vec<PlanSummary> = PlanKind::KNOWN.iter().map(PlanSummary::from).collect();
    json_ok(plans)
}
