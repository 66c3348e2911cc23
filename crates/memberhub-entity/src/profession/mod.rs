//! Profession reference data.

pub mod model;

pub use model::{CreateProfession, Profession, UpdateProfession};
