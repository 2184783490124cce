//! Roster Engine library.
//!
//! This crate contains all server-side code for the player roster service.
//!
//! ## Structure
//!
//! - `use_cases/` - Record management over the domain rules
//! - `infrastructure/` - Ports, the in-memory adapter and configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
