//! Core traits defined in `memberhub-core` and implemented by other crates.

pub mod repository;
pub mod service;
pub mod store;

pub use repository::ReferenceRepository;
pub use service::Service;
pub use store::DocumentStore;
