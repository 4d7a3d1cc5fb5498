//! # lexmap
//!
//! Separately-chained string hash table with a sorted doubly-linked key
//! index.
//!
//! ## Architecture
//!
//! - **Hash**: djb2 key hashing and bucket placement
//! - **Table**: slab-owned entries threaded into per-bucket chains and one
//!   global key-ordered list
//!
//! ## Design Principles
//!
//! 1. **Single ownership**: every entry lives in one slab arena; both
//!    linkages address it by slab key, so entries drop exactly once
//! 2. **Fixed buckets**: the bucket count is set at creation and never
//!    resized; occupancy past it degrades lookup, never correctness
//! 3. **Two views, one truth**: hash buckets answer point lookups; the
//!    sorted chain answers ordered traversal in both directions
//! 4. **Synchronous**: no locking, no async; callers needing sharing
//!    synchronize externally
//!
//! ## Example
//!
//! ```
//! use lexmap::SortedTable;
//!
//! let mut table = SortedTable::new(1024).unwrap();
//!
//! table.set("banana", "b").unwrap();
//! table.set("apple", "a").unwrap();
//! table.set("cherry", "c").unwrap();
//!
//! assert_eq!(table.get("banana"), Some("b"));
//!
//! let mut out = Vec::new();
//! table.write_ascending(&mut out).unwrap();
//! assert_eq!(out, b"{'apple': 'a', 'banana': 'b', 'cherry': 'c'}\n");
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Key hashing: djb2 and bucket placement
pub mod hash;

/// The sorted hash table and its building blocks
pub mod table;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::TableError;
pub use hash::{bucket_index, hash_djb2};
pub use table::{EntryNode, SortedChain, SortedTable};
