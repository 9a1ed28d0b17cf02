//! Classic data structures and sorting algorithms.
//!
//! Every container is a small, self-contained structure mutated only
//! through its own API: linked lists (singly and doubly), a stack and a
//! queue over the singly linked list, a binary search tree, a lowercase
//! trie, an undirected adjacency-list graph, max/min binary heaps, and two
//! fixed-capacity hash tables (separate chaining and linear probing with
//! tombstones). [`sorting`] holds five comparison sorts plus a heap sort
//! that drains a [`MinBinaryHeap`].
//!
//! Nothing here is thread-safe or persistent; callers own each structure
//! exclusively and synchronize externally if they need sharing.
//!
//! # Examples
//!
//! ```
//! use dsakit::{BinarySearchTree, sorting};
//!
//! let tree: BinarySearchTree<i32> = [5, 3, 8, 1].into_iter().collect();
//! assert_eq!(tree.in_order(), vec![1, 3, 5, 8]);
//!
//! assert_eq!(sorting::quick_sort(vec![3, 1, 2]), vec![1, 2, 3]);
//! ```

mod arena;
mod binary_search_tree;
mod chained_table;
mod doubly_linked_list;
mod error;
mod graph;
mod heap;
mod probed_table;
mod queue;
mod singly_linked_list;
mod stack;
mod trie;
pub mod sorting;

pub use arena::{NodeArena, NodeId, NULL_NODE};
pub use binary_search_tree::BinarySearchTree;
pub use chained_table::{ChainedHashTable, DEFAULT_BUCKET_COUNT};
pub use doubly_linked_list::{DoublyLinkedList, Iter as DoublyLinkedListIter};
pub use error::{DsaError, DsaResult};
pub use graph::UndirectedGraph;
pub use heap::{MaxBinaryHeap, MinBinaryHeap};
pub use probed_table::{LinearProbeTable, DEFAULT_SLOT_COUNT};
pub use queue::Queue;
pub use singly_linked_list::{Iter as SinglyLinkedListIter, SinglyLinkedList};
pub use stack::Stack;
pub use trie::Trie;
