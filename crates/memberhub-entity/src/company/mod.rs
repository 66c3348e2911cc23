//! Company reference data.

pub mod model;

pub use model::{Company, CreateCompany, UpdateCompany};
