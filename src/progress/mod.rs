pub mod progress_model;
pub mod reconciler;

pub use progress_model::ProgressView;
pub use reconciler::{
    progress_percent, reconcile, resolve_current_usd, resolve_target_usd,
    MILESTONE_100_THRESHOLD, MILESTONE_50_THRESHOLD,
};
