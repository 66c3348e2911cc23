//! Company entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::reference::{NewReferenceRecord, ReferenceChanges, ReferenceRecord};

/// An employer referenced by member records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Store-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Search key derived from `name`.
    pub normalized_name: String,
    /// Postal address.
    pub address: Option<String>,
    /// Business sector.
    pub industry: Option<String>,
    /// Headcount.
    pub employee_count: Option<u32>,
    /// Free-form notes.
    pub description: Option<String>,
    /// When the company was created.
    pub created_at: DateTime<Utc>,
    /// When the company was last updated.
    pub updated_at: DateTime<Utc>,
    /// Administrator who created this company.
    pub created_by: String,
}

impl ReferenceRecord for Company {
    const COLLECTION: &'static str = "companies";

    type NewRecord = CreateCompany;
    type Changes = UpdateCompany;

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

/// Data required to create a new company.
#[derive(Debug, Clone, Default, PartialEq, Validate, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompany {
    /// Display name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Postal address.
    #[validate(length(max = 500))]
    pub address: Option<String>,
    /// Business sector.
    #[validate(length(max = 120))]
    pub industry: Option<String>,
    /// Headcount.
    #[validate(range(max = 10_000_000))]
    pub employee_count: Option<u32>,
    /// Free-form notes.
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

impl CreateCompany {
    /// A payload carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl NewReferenceRecord for CreateCompany {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// Partial update of a company.
#[derive(Debug, Clone, Default, PartialEq, Validate, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompany {
    /// New display name.
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    /// New postal address.
    #[validate(length(max = 500))]
    pub address: Option<String>,
    /// New business sector.
    #[validate(length(max = 120))]
    pub industry: Option<String>,
    /// New headcount.
    #[validate(range(max = 10_000_000))]
    pub employee_count: Option<u32>,
    /// New notes.
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

impl ReferenceChanges for UpdateCompany {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
