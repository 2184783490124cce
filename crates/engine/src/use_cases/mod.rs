//! Use cases - User story orchestration.
//!
//! Use cases coordinate the domain rules with the repository ports so the
//! HTTP handlers stay thin.

pub mod management;

pub use management::{ManagementError, ManagementUseCases, PlayerManagement};
