//! Company reference data service.

pub mod service;

pub use service::{CompanyRepositoryHandle, CompanyService};
