//! Profession repository.

use memberhub_entity::profession::Profession;

use super::reference::NameIndexedRepository;

/// Repository over the `professions` collection.
pub type ProfessionRepository = NameIndexedRepository<Profession>;
