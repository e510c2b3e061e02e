mod report;

pub use report::{BranchRevenueAnalysis, RevenueQueryEcho, RevenueReport, Statistics};
