//! Local caching module for offline data access.
//!
//! The cache holds at most one snapshot per entity kind, always written and
//! read as a whole collection. There is no expiry: a snapshot lives until it
//! is overwritten by a refresh or cleared.
//!
//! - `CacheStore`: the async interface managers depend on
//! - `BlobCache`: `CacheStore` over any `BlobStore`, one JSON blob per kind
//! - `FileBlobStore`, `MemoryBlobStore`: concrete blob stores
//! - `MockCacheStore`: counting test double

pub mod blob;
pub mod file;
pub mod memory;
pub mod mock;
pub mod store;

pub use blob::{BlobCache, BlobStore};
pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;
pub use mock::{CacheCalls, MockCacheStore};
pub use store::{CacheError, CacheStore, EntityKind};
