pub mod controllers;
pub mod models;
pub mod services;

pub use models::{BranchRevenueAnalysis, RevenueReport, Statistics};
pub use services::ReportService;
