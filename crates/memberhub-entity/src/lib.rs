//! # memberhub-entity
//!
//! Reference data models for MemberHub. Every record kind stored in a
//! name-indexed collection implements [`ReferenceRecord`], which ties the
//! stored record to its create and update payloads.

pub mod company;
pub mod profession;
pub mod reference;

pub use company::{Company, CreateCompany, UpdateCompany};
pub use profession::{CreateProfession, Profession, UpdateProfession};
pub use reference::{NewReferenceRecord, ReferenceChanges, ReferenceRecord};
