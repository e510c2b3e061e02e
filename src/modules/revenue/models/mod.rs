mod revenue;

pub use revenue::{NewRevenue, Revenue, RevenuePatch, RevenueQuery};
