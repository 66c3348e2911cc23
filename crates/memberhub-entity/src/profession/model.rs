//! Profession entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::reference::{NewReferenceRecord, ReferenceChanges, ReferenceRecord};

/// A profession members can declare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profession {
    /// Store-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Search key derived from `name`.
    pub normalized_name: String,
    /// Grouping such as "Santé" or "Ingénierie".
    pub category: Option<String>,
    /// Free-form notes.
    pub description: Option<String>,
    /// When the profession was created.
    pub created_at: DateTime<Utc>,
    /// When the profession was last updated.
    pub updated_at: DateTime<Utc>,
    /// Administrator who created this profession.
    pub created_by: String,
}

impl ReferenceRecord for Profession {
    const COLLECTION: &'static str = "professions";

    type NewRecord = CreateProfession;
    type Changes = UpdateProfession;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

/// Data required to create a new profession.
#[derive(Debug, Clone, Default, PartialEq, Validate, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfession {
    /// Display name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Grouping.
    #[validate(length(max = 120))]
    pub category: Option<String>,
    /// Free-form notes.
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

impl CreateProfession {
    /// A payload carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl NewReferenceRecord for CreateProfession {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// Partial update of a profession.
#[derive(Debug, Clone, Default, PartialEq, Validate, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfession {
    /// New display name.
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    /// New grouping.
    #[validate(length(max = 120))]
    pub category: Option<String>,
    /// New notes.
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

impl ReferenceChanges for UpdateProfession {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
