//! Sorted chain threading every entry in ascending key order.
//!
//! ## Design
//!
//! `SortedChain` holds the head and tail of a doubly linked list that spans
//! the whole table, independent of bucket placement:
//!
//! ```text
//! head (smallest key) <-> entry2 <-> entry3 <-> tail (largest key)
//! ```
//!
//! - Insertion scans from the head for the splice point, then links in O(1)
//! - Traversal is O(n) in either direction via `prev`/`next`
//! - The entry data lives in the slab; this struct only holds the
//!   list endpoints
//!
//! Keys are unique within the table (the table deduplicates before
//! inserting), so the chain order is always strictly ascending.

use slab::Slab;

use crate::table::EntryNode;

/// Endpoints of the global key-ordered list.
///
/// Methods take the entry slab explicitly, the same way the entries
/// themselves are addressed: by slab key.
#[derive(Debug, Clone, Default)]
pub struct SortedChain {
    /// Entry with the smallest key (slab key)
    pub head: Option<usize>,

    /// Entry with the largest key (slab key)
    pub tail: Option<usize>,
}

impl SortedChain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
        }
    }

    /// Check if the chain is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Splice an entry into the chain at its key-ordered position.
    ///
    /// Scans from the head for the first entry whose key is not less than
    /// the new entry's key and links the new entry immediately before it.
    /// If every existing key is smaller, the new entry becomes the tail;
    /// if none is, it becomes the head.
    ///
    /// # Arguments
    ///
    /// * `key` - The slab key of the entry to splice in
    /// * `entries` - The slab containing all entry nodes
    ///
    /// # Panics
    ///
    /// Panics if `key` or any chain link doesn't exist in the slab
    ///
    /// # Example
    ///
    /// ```
    /// use slab::Slab;
    /// use lexmap::table::{EntryNode, SortedChain};
    ///
    /// let mut entries = Slab::new();
    /// let banana = entries.insert(EntryNode::new("banana".into(), "b".into()));
    /// let apple = entries.insert(EntryNode::new("apple".into(), "a".into()));
    ///
    /// let mut chain = SortedChain::new();
    /// chain.insert(banana, &mut entries);
    /// chain.insert(apple, &mut entries);
    ///
    /// // "apple" sorts before "banana" regardless of insertion order
    /// assert_eq!(chain.head, Some(apple));
    /// assert_eq!(chain.tail, Some(banana));
    /// ```
    pub fn insert(&mut self, key: usize, entries: &mut Slab<EntryNode>) {
        // Scan: `before` ends as the last entry ordered strictly below the
        // new key, `after` as the first entry at or above it
        let mut before: Option<usize> = None;
        let mut after = self.head;
        while let Some(cur) = after {
            if entries[cur].key >= entries[key].key {
                break;
            }
            before = Some(cur);
            after = entries[cur].next;
        }

        // Link the new entry between the two
        {
            let node = entries.get_mut(key).expect("Invalid slab key");
            node.prev = before;
            node.next = after;
        }

        match before {
            Some(prev_key) => {
                let prev_node = entries.get_mut(prev_key).expect("Invalid prev key");
                prev_node.next = Some(key);
            }
            None => self.head = Some(key),
        }

        match after {
            Some(next_key) => {
                let next_node = entries.get_mut(next_key).expect("Invalid next key");
                next_node.prev = Some(key);
            }
            None => self.tail = Some(key),
        }
    }

    /// Reset the chain to empty.
    ///
    /// The caller is responsible for clearing the slab alongside; the chain
    /// holds no entries of its own.
    pub fn clear(&mut self) {
        self.head = None;
        self.tail = None;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
