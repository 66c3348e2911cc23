//! Core type definitions used across the MemberHub workspace.

pub mod document;
pub mod lookup;
pub mod pagination;
pub mod query;
pub mod sorting;

pub use document::{Document, DocumentWrite, FieldValue, StoredDocument};
pub use lookup::{FindOrCreate, ListFilters, NameLookup};
pub use pagination::{PageInfo, PageRequest, PageResponse, TotalItems};
pub use query::{FilterField, FilterOp, FilterValue, Query};
pub use sorting::{SortDirection, SortField};
