//! Tutoring-school dashboard data core.
//!
//! Branch-scoped access to students, teachers, courses, enrollments,
//! attendance, payments, revenue and schedules held in a shared in-memory
//! store, plus statistics and per-branch revenue analysis.

pub mod config;
pub mod core;
pub mod database_service;
pub mod middleware;
pub mod modules;
pub mod store;

// Re-export commonly used types
pub use crate::core::{AppError, DatabaseResult, Result, Role, Scope, Session};
pub use database_service::DatabaseService;
pub use store::{SharedStore, Store};
