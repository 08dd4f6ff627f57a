pub mod plans_model;
pub mod plans_service;
pub mod plans_traits;
pub mod poller;

pub use plans_model::{
    MilestoneFlags, PlanReadOutcome, PlanRecord, PlanToken, PlanView, PlansResult,
};
pub use plans_service::PlanReader;
pub use plans_traits::SavingsContractTrait;
pub use poller::{spawn_poller, PollerHandle, DEFAULT_POLL_INTERVAL};
