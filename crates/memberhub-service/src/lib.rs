//! # memberhub-service
//!
//! Service layer for MemberHub reference data. Each service wraps a
//! [`ReferenceRepository`] and is the entry point used by the binary and
//! by other back-office features.
//!
//! Services follow constructor injection: the repository is provided at
//! construction time as an `Arc<dyn ReferenceRepository>`.
//!
//! [`ReferenceRepository`]: memberhub_core::traits::ReferenceRepository

pub mod company;
pub mod profession;

pub use company::CompanyService;
pub use profession::ProfessionService;
