//! Table module: the sorted hash table and its building blocks.
//!
//! ## Architecture
//!
//! The table composes two linkages over a single slab-owned set of entries:
//!
//! - **Bucket chains**: separate chaining for hash lookup, LIFO at each
//!   bucket head
//! - **Sorted chain**: one doubly linked list across all entries in
//!   ascending key order
//!
//! ## Components
//!
//! - [`EntryNode`]: one key/value pair with link metadata for both chains
//! - [`SortedChain`]: endpoints and splice routine for the ordered list
//! - [`SortedTable`]: the public structure tying buckets, arena, and chain
//!   together
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |--------------------|-------------------------|
//! | Set (new key) | O(n) sorted splice scan |
//! | Set (existing key) | O(1) average |
//! | Get | O(1) average, O(n) worst |
//! | Ordered traversal | O(n) |
//!
//! ## Example
//!
//! ```
//! use lexmap::SortedTable;
//!
//! let mut table = SortedTable::new(1024).unwrap();
//! table.set("banana", "b").unwrap();
//! table.set("apple", "a").unwrap();
//!
//! assert_eq!(table.to_string(), "{'apple': 'a', 'banana': 'b'}");
//! ```

pub mod chain;
pub mod node;
pub mod sorted;

pub use chain::SortedChain;
pub use node::EntryNode;
pub use sorted::{Iter, IterRev, SortedTable};
