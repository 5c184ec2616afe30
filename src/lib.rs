//! Vigia - dashboard service for remote health monitoring of elderly patients.
//!
//! # Overview
//!
//! Vigia sits between a monitoring backend and the dashboard UI. It
//! resolves time-series health metrics, risk analyses, and
//! recommendations for a selected patient from the upstream API, and
//! substitutes a fixed example dataset whenever the upstream is
//! unreachable or misbehaves, so the presentation layer never has to
//! special-case "data unavailable."
//!
//! The defining contract of the data layer: every accessor always
//! resolves to a well-formed, renderable value. Transport failures,
//! error statuses, and malformed payloads are absorbed at the accessor
//! boundary and logged, never surfaced.
//!
//! # Modules
//!
//! - [`model`]: Canonical entities and the legacy wire-format adapter
//! - [`fallback`]: The fixed dataset served when the upstream fails
//! - [`upstream`]: Client for the upstream health-monitoring API
//! - [`dashboard`]: Per-patient overview assembly
//! - [`api`]: HTTP API handlers

pub mod api;
pub mod dashboard;
pub mod fallback;
pub mod model;
pub mod upstream;
