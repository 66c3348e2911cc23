//! Profession reference data service.

pub mod service;

pub use service::{ProfessionRepositoryHandle, ProfessionService};
