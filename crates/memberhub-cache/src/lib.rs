//! # memberhub-cache
//!
//! Process-local caches used by MemberHub repositories. The only cache is
//! the pagination [`CursorCache`], which remembers where each fetched page
//! ended so the next page can resume after it.
//!
//! Caches are owned by the repository instance that fills them and are never
//! persisted.

pub mod cursor;
pub mod keys;

pub use cursor::CursorCache;
