//! In-process document store.

mod eval;
pub mod store;

pub use store::MemoryDocumentStore;
