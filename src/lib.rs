//! Commission and bonus rule engine for insurance sales agents.
//!
//! This crate computes the commission an agent earns on a policy submission
//! (flat payouts, or rate-based advances with deferred earned amounts) and
//! evaluates the agent's per-application bonus tier from performance
//! metrics. The rule engine in [`calculation`] is pure; [`api`] exposes it
//! over HTTP and [`metrics`] supplies performance snapshots.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod telemetry;
