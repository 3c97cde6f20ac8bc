//! HTTP API module for the Commission Engine.
//!
//! This module provides the REST endpoints for commission calculation,
//! bonus evaluation, combined submission reports, the metrics snapshot and
//! the plan catalogue.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BonusRequest, ReportRequest};
pub use response::{ApiError, ApiErrorResponse, PlanSummary};
pub use state::AppState;
