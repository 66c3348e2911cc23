//! Repository implementations for MemberHub reference data.

pub mod company;
pub mod profession;
pub mod reference;

pub use company::CompanyRepository;
pub use profession::ProfessionRepository;
pub use reference::NameIndexedRepository;
