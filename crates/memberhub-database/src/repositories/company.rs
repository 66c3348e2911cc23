//! Company repository.

use memberhub_entity::company::Company;

use super::reference::NameIndexedRepository;

/// Repository over the `companies` collection.
pub type CompanyRepository = NameIndexedRepository<Company>;
