//! Core composition logic for the account staking dashboard.
//!
//! This crate provides:
//! - Domain records supplied by a data source (`types` module)
//! - Contract-violation errors (`error` module)
//! - Order-preserving, stably-keyed list projection (`project` module)
//! - View-model tree handed to the presentation layer (`view` module)
//! - Section assembly (`compose` module)
//! - The data-source seam and built-in sample data (`source` module)

pub mod compose;
pub mod error;
pub mod project;
pub mod source;
pub mod types;
pub mod view;

// Re-export commonly used items from core modules
pub use compose::{DashboardData, compose};
pub use error::ContractViolation;
pub use project::{Keyed, ViewKey, project};
pub use source::{DashboardSource, SampleSource};
pub use types::{
    AccountIdentity, ActionKind, ActivityItem, ItemAction, StakePosition, StatDetail, VoteChoice,
    VoteRecord,
};
pub use view::{
    ActivityView, CallToAction, DashboardView, HeaderSection, Section, StakeView, VoteView,
};
