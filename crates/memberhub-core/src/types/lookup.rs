//! Name lookup and listing filter types for reference data.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_name;

/// Maximum number of suggestions returned by a failed name lookup.
pub const MAX_SUGGESTIONS: usize = 5;

/// Outcome of looking a record up by display name.
///
/// A lookup either finds a record or offers suggestions, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NameLookup<T> {
    /// A record whose normalized name equals the normalized input.
    Found {
        /// The matching record.
        entity: T,
    },
    /// No exact match; display names sharing the normalized prefix.
    NotFound {
        /// At most [`MAX_SUGGESTIONS`] distinct display names.
        suggestions: Vec<String>,
    },
}

impl<T> NameLookup<T> {
    /// A miss without suggestions.
    pub fn none() -> Self {
        Self::NotFound {
            suggestions: Vec::new(),
        }
    }

    /// Whether a record was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The found record, if any.
    pub fn entity(&self) -> Option<&T> {
        match self {
            Self::Found { entity } => Some(entity),
            Self::NotFound { .. } => None,
        }
    }

    /// The suggestions of a miss; empty when found.
    pub fn suggestions(&self) -> &[String] {
        match self {
            Self::Found { .. } => &[],
            Self::NotFound { suggestions } => suggestions,
        }
    }

    /// Consume the lookup, keeping the record if found.
    pub fn into_entity(self) -> Option<T> {
        match self {
            Self::Found { entity } => Some(entity),
            Self::NotFound { .. } => None,
        }
    }
}

/// Result of a find-or-create call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOrCreate {
    /// Identifier of the existing or new record.
    pub id: String,
    /// Whether the record was created by this call.
    pub is_new: bool,
}

/// Filters accepted by listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilters {
    /// Free-text name prefix.
    #[serde(default)]
    pub search: Option<String>,
}

impl ListFilters {
    /// Filters with a search term.
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
        }
    }

    /// The normalized search key, or `None` when there is nothing to match.
    ///
    /// Input that normalizes to the empty string (blank or punctuation only)
    /// means "no search".
    pub fn search_key(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(normalize_name)
            .filter(|key| !key.is_empty())
    }
}
