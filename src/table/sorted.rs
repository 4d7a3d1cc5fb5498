//! Sorted hash table implementation.
//!
//! ## Architecture
//!
//! The table composes three structures over one set of owned entries:
//!
//! - **Slab**: single-owner arena holding every [`EntryNode`]
//! - **Bucket array**: fixed-size `Vec<Option<usize>>` of chain heads for
//!   O(1) average lookup by key
//! - **Sorted chain**: global doubly linked list for O(n) ordered
//!   traversal in either direction
//!
//! Every entry is threaded into exactly one bucket chain and into the
//! sorted chain, so the two views always cover the same entries.
//!
//! ## Bucket Placement
//!
//! Keys are placed with djb2 reduced by the bucket count (see
//! [`crate::hash`]). The bucket count is fixed at creation and never
//! resized; as occupancy grows past it, bucket chains lengthen and lookup
//! degrades toward O(n). Ordered traversal is unaffected.
//!
//! ## Example
//!
//! ```
//! use lexmap::SortedTable;
//!
//! let mut table = SortedTable::new(64).unwrap();
//!
//! table.set("banana", "b").unwrap();
//! table.set("apple", "a").unwrap();
//! table.set("cherry", "c").unwrap();
//!
//! assert_eq!(table.get("banana"), Some("b"));
//! assert_eq!(table.to_string(), "{'apple': 'a', 'banana': 'b', 'cherry': 'c'}");
//! ```

use std::fmt;
use std::io::{self, Write};

use slab::Slab;

use crate::error::TableError;
use crate::hash::bucket_index;
use crate::table::{EntryNode, SortedChain};

/// Separately-chained hash table with a sorted key index.
///
/// Lookup and update run against the bucket chains; ordered traversal and
/// serialization run against the sorted chain. Entries live in the slab and
/// are dropped exactly once, when the table is dropped or cleared.
#[derive(Debug, Clone)]
pub struct SortedTable {
    /// Single-owner entry storage
    /// Key: slab index, Value: EntryNode
    entries: Slab<EntryNode>,

    /// Bucket chain heads, length fixed at creation
    /// Index: bucket_index(key, capacity), Value: head slab key
    buckets: Vec<Option<usize>>,

    /// Endpoints of the ascending-key list
    chain: SortedChain,
}

impl SortedTable {
    /// Create a table with a fixed number of buckets.
    ///
    /// The bucket count never changes for the lifetime of the table. The
    /// entry arena pre-allocates the same number of slots and grows on
    /// demand past it.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of buckets, must be non-zero
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ZeroCapacity`] if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use lexmap::SortedTable;
    ///
    /// let table = SortedTable::new(1024).unwrap();
    /// assert_eq!(table.capacity(), 1024);
    /// assert!(table.is_empty());
    ///
    /// assert!(SortedTable::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }

        Ok(Self {
            entries: Slab::with_capacity(capacity),
            buckets: vec![None; capacity],
            chain: SortedChain::new(),
        })
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the bucket count (fixed at creation)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Get the number of entries in the table
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Bucket for a key under this table's capacity
    #[inline]
    fn bucket_of(&self, key: &str) -> usize {
        bucket_index(key.as_bytes(), self.buckets.len())
    }

    /// Scan one bucket chain for an exact key match
    fn find_in_bucket(&self, bucket: usize, key: &str) -> Option<usize> {
        let mut cursor = self.buckets[bucket];
        while let Some(slot) = cursor {
            let node = &self.entries[slot];
            if node.key == key {
                return Some(slot);
            }
            cursor = node.bucket_next;
        }
        None
    }

    /// Get the value stored for a key.
    ///
    /// Returns a borrow of the stored value; the borrow ends before any
    /// later mutation of the table can replace the value's storage.
    ///
    /// Empty keys are never stored, so the empty key is always absent.
    ///
    /// # Example
    ///
    /// ```
    /// use lexmap::SortedTable;
    ///
    /// let mut table = SortedTable::new(64).unwrap();
    /// table.set("apple", "a").unwrap();
    ///
    /// assert_eq!(table.get("apple"), Some("a"));
    /// assert_eq!(table.get("pear"), None);
    /// assert_eq!(table.get(""), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&str> {
        if key.is_empty() {
            return None;
        }

        let bucket = self.bucket_of(key);
        self.find_in_bucket(bucket, key)
            .map(|slot| self.entries[slot].value.as_str())
    }

    /// Check if a key is present
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert or update a key/value pair.
    ///
    /// If the key is already present, only its value is replaced: the
    /// entry keeps its position in both the bucket chain and the sorted
    /// chain (last write wins). A new key is pushed at the head of its
    /// bucket chain and spliced into the sorted chain at its key-ordered
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::EmptyKey`] for the empty key; the table is
    /// left unmodified.
    ///
    /// # Example
    ///
    /// ```
    /// use lexmap::SortedTable;
    ///
    /// let mut table = SortedTable::new(64).unwrap();
    ///
    /// table.set("apple", "a").unwrap();
    /// table.set("apple", "avocado").unwrap();
    ///
    /// assert_eq!(table.len(), 1);
    /// assert_eq!(table.get("apple"), Some("avocado"));
    /// ```
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), TableError> {
        if key.is_empty() {
            return Err(TableError::EmptyKey);
        }

        let bucket = self.bucket_of(key);

        // Existing key: replace the value in place, links untouched
        if let Some(slot) = self.find_in_bucket(bucket, key) {
            self.entries[slot].value = value.to_owned();
            return Ok(());
        }

        // New key: allocate the entry, push at the bucket head (LIFO)
        let slot = self
            .entries
            .insert(EntryNode::new(key.to_owned(), value.to_owned()));
        self.entries[slot].bucket_next = self.buckets[bucket];
        self.buckets[bucket] = Some(slot);

        // Thread into the sorted chain
        self.chain.insert(slot, &mut self.entries);

        Ok(())
    }

    /// Remove every entry.
    ///
    /// The bucket count is unchanged; the arena keeps its allocation for
    /// reuse.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.buckets.fill(None);
        self.chain.clear();
    }

    // ========================================================================
    // Ordered Traversal
    // ========================================================================

    /// Iterate entries in ascending key order.
    ///
    /// # Example
    ///
    /// ```
    /// use lexmap::SortedTable;
    ///
    /// let mut table = SortedTable::new(64).unwrap();
    /// table.set("banana", "b").unwrap();
    /// table.set("apple", "a").unwrap();
    ///
    /// let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
    /// assert_eq!(keys, ["apple", "banana"]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            entries: &self.entries,
            cursor: self.chain.head,
        }
    }

    /// Iterate entries in descending key order.
    pub fn iter_rev(&self) -> IterRev<'_> {
        IterRev {
            entries: &self.entries,
            cursor: self.chain.tail,
        }
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Write the ascending serialization to a sink.
    ///
    /// Format: `{'key': 'value', ...}` followed by a newline; `{}` plus
    /// newline for the empty table.
    ///
    /// # Example
    ///
    /// ```
    /// use lexmap::SortedTable;
    ///
    /// let mut table = SortedTable::new(64).unwrap();
    /// table.set("banana", "b").unwrap();
    /// table.set("apple", "a").unwrap();
    ///
    /// let mut out = Vec::new();
    /// table.write_ascending(&mut out).unwrap();
    /// assert_eq!(out, b"{'apple': 'a', 'banana': 'b'}\n");
    /// ```
    pub fn write_ascending<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_entries(writer, self.iter())
    }

    /// Write the descending serialization to a sink.
    ///
    /// Same format as [`write_ascending`](Self::write_ascending), traversing
    /// tail to head.
    pub fn write_descending<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_entries(writer, self.iter_rev())
    }

    /// Print the ascending serialization to stdout
    pub fn print_ascending(&self) -> io::Result<()> {
        self.write_ascending(&mut io::stdout().lock())
    }

    /// Print the descending serialization to stdout
    pub fn print_descending(&self) -> io::Result<()> {
        self.write_descending(&mut io::stdout().lock())
    }
}

/// Serialize entries into the brace/quote text form (plus newline)
fn write_entries<'a, W, I>(writer: &mut W, entries: I) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = (&'a str, &'a str)>,
{
    writer.write_all(b"{")?;
    for (i, (key, value)) in entries.enumerate() {
        if i > 0 {
            writer.write_all(b", ")?;
        }
        write!(writer, "'{}': '{}'", key, value)?;
    }
    writer.write_all(b"}\n")
}

impl fmt::Display for SortedTable {
    /// Ascending serialization without the trailing newline
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}': '{}'", key, value)?;
        }
        f.write_str("}")
    }
}

// ============================================================================
// Iterators
// ============================================================================

/// Ascending iterator over `(key, value)` pairs.
///
/// Follows the sorted chain from head to tail.
#[derive(Debug)]
pub struct Iter<'a> {
    entries: &'a Slab<EntryNode>,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let node = &self.entries[slot];
        self.cursor = node.next;
        Some((node.key.as_str(), node.value.as_str()))
    }
}

/// Descending iterator over `(key, value)` pairs.
///
/// Follows the sorted chain from tail to head.
#[derive(Debug)]
pub struct IterRev<'a> {
    entries: &'a Slab<EntryNode>,
    cursor: Option<usize>,
}

impl<'a> Iterator for IterRev<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let node = &self.entries[slot];
        self.cursor = node.prev;
        Some((node.key.as_str(), node.value.as_str()))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
