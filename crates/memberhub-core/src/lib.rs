//! # memberhub-core
//!
//! Core crate for MemberHub. Contains the document store and repository
//! traits, configuration schemas, query/document/pagination types, the
//! name normalizer, and the unified error system.
//!
//! This crate has **no** internal dependencies on other MemberHub crates.

pub mod config;
pub mod error;
pub mod normalize;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
