pub mod dashboard_model;
pub mod dashboard_service;

pub use dashboard_model::{DashboardSnapshot, PlanProgressEntry};
pub use dashboard_service::DashboardService;
