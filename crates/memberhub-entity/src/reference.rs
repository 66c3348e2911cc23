//! Traits shared by name-indexed reference record kinds.

use serde::Serialize;
use serde::de::DeserializeOwned;
use validator::Validate;

/// Stored field names common to every reference record.
pub mod fields {
    /// Display name.
    pub const NAME: &str = "name";
    /// Search key derived from the display name.
    pub const NORMALIZED_NAME: &str = "normalizedName";
    /// Creation time, assigned by the store.
    pub const CREATED_AT: &str = "createdAt";
    /// Last modification time, assigned by the store.
    pub const UPDATED_AT: &str = "updatedAt";
    /// Administrator who created the record.
    pub const CREATED_BY: &str = "createdBy";
}

/// A record kind stored in its own name-indexed collection.
pub trait ReferenceRecord: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection holding records of this kind.
    const COLLECTION: &'static str;

    /// Payload for creating a record.
    type NewRecord: NewReferenceRecord;
    /// Partial payload for updating a record.
    type Changes: ReferenceChanges;

    /// Store-assigned identifier.
    fn id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    /// Search key of the display name.
    fn normalized_name(&self) -> &str;
}

/// Create payload of a reference record.
///
/// Store-managed fields (`normalizedName`, timestamps, `createdBy`) are not
/// part of the payload and cannot be supplied by callers.
pub trait NewReferenceRecord: Serialize + Validate + Default + Clone + Send + Sync + 'static {
    /// Display name of the record to create.
    fn name(&self) -> &str;

    /// Replace the display name.
    fn set_name(&mut self, name: String);
}

/// Update payload of a reference record. Absent fields are left untouched.
pub trait ReferenceChanges: Serialize + Validate + Clone + Send + Sync + 'static {
    /// New display name, if the update renames the record.
    fn name(&self) -> Option<&str>;
}
