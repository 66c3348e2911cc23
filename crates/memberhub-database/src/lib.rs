//! # memberhub-database
//!
//! Document store connection management, the in-memory document store,
//! and the name-indexed repositories for MemberHub reference data.

pub mod connection;
pub mod memory;
pub mod repositories;

pub use connection::DocumentDatabase;
pub use memory::MemoryDocumentStore;
pub use repositories::{CompanyRepository, NameIndexedRepository, ProfessionRepository};
