//! Core data models for the Commission Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod bonus;
mod commission;
mod plan;
mod report;

pub use bonus::{BonusResult, PerformanceMetrics};
pub use commission::{ClawbackRisk, CommissionRequest, CommissionResult};
pub use plan::{PlanKind, Product};
pub use report::{ClientDetails, CommissionReport};
