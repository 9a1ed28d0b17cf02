//! Binary search tree keyed by a total order on its values.
//!
//! Children are exclusively owned `Box`ed nodes; ownership flows strictly
//! parent-to-child so the tree drops cleanly. Duplicates are rejected at
//! insert. Deletion uses the standard in-order-successor rule: a node with
//! two children takes the minimum value of its right subtree and that
//! minimum is removed from the subtree instead.

use std::cmp::Ordering;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// Ordered container over `Ord` values, one copy of each.
///
/// # Examples
///
/// ```
/// use dsakit::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// for value in [8, 3, 10, 1, 6] {
///     assert!(tree.insert(value));
/// }
/// assert!(!tree.insert(6)); // duplicate rejected
///
/// assert!(tree.contains(&10));
/// assert_eq!(tree.in_order(), vec![1, 3, 6, 8, 10]);
/// ```
#[derive(Debug, Clone)]
pub struct BinarySearchTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    // ========================================================================
    // INSERT / REMOVE / FIND
    // ========================================================================

    /// Insert a value, keeping the ordering invariant.
    ///
    /// Returns `false` without modifying the tree if the value is already
    /// present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut current = &mut self.root;
        loop {
            match current {
                None => {
                    *current = Some(Box::new(Node::new(value)));
                    self.len += 1;
                    return true;
                }
                Some(node) => match value.cmp(&node.value) {
                    Ordering::Less => current = &mut node.left,
                    Ordering::Greater => current = &mut node.right,
                    Ordering::Equal => return false,
                },
            }
        }
    }

    /// Remove a value. Returns `false` if it was not present.
    pub fn remove(&mut self, value: &T) -> bool {
        let (root, removed) = Self::remove_node(self.root.take(), value);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Returns true if the value is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        let mut current = &self.root;
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Less => current = &node.left,
                Ordering::Greater => current = &node.right,
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Smallest value in the tree, following the left spine.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Largest value in the tree, following the right spine.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Number of values stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every value.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Detach `value` from the subtree rooted at `node`, reporting whether a
    /// match was removed.
    fn remove_node(node: Option<Box<Node<T>>>, value: &T) -> (Option<Box<Node<T>>>, bool) {
        let mut node = match node {
            Some(node) => node,
            None => return (None, false),
        };

        match value.cmp(&node.value) {
            Ordering::Less => {
                let (left, removed) = Self::remove_node(node.left.take(), value);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove_node(node.right.take(), value);
                node.right = right;
                (Some(node), removed)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                // Leaf: unlink outright.
                (None, None) => (None, true),
                // One child: splice the child into the parent's slot.
                (Some(left), None) => (Some(left), true),
                (None, Some(right)) => (Some(right), true),
                // Two children: adopt the in-order successor's value.
                (Some(left), Some(right)) => {
                    let (rest, successor) = Self::take_min(right);
                    node.value = successor;
                    node.left = Some(left);
                    node.right = rest;
                    (Some(node), true)
                }
            },
        }
    }

    /// Remove the minimum node of a subtree, returning what remains of the
    /// subtree along with the extracted value.
    fn take_min(mut node: Box<Node<T>>) -> (Option<Box<Node<T>>>, T) {
        match node.left.take() {
            Some(left) => {
                let (rest, min) = Self::take_min(left);
                node.left = rest;
                (Some(node), min)
            }
            None => {
                let Node { value, right, .. } = *node;
                (right, value)
            }
        }
    }
}

impl<T: Ord + Clone> BinarySearchTree<T> {
    // ========================================================================
    // TRAVERSALS
    // ========================================================================

    /// Values in {self, left, right} visit order.
    pub fn pre_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        Self::visit_pre_order(&self.root, &mut out);
        out
    }

    /// Values in ascending order ({left, self, right}).
    pub fn in_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        Self::visit_in_order(&self.root, &mut out);
        out
    }

    /// Values in {left, right, self} visit order.
    pub fn post_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        Self::visit_post_order(&self.root, &mut out);
        out
    }

    /// Values in breadth order, produced with an explicit FIFO work queue.
    pub fn level_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        let mut queue = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            out.push(node.value.clone());
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
        out
    }

    fn visit_pre_order(node: &Option<Box<Node<T>>>, out: &mut Vec<T>) {
        if let Some(node) = node {
            out.push(node.value.clone());
            Self::visit_pre_order(&node.left, out);
            Self::visit_pre_order(&node.right, out);
        }
    }

    fn visit_in_order(node: &Option<Box<Node<T>>>, out: &mut Vec<T>) {
        if let Some(node) = node {
            Self::visit_in_order(&node.left, out);
            out.push(node.value.clone());
            Self::visit_in_order(&node.right, out);
        }
    }

    fn visit_post_order(node: &Option<Box<Node<T>>>, out: &mut Vec<T>) {
        if let Some(node) = node {
            Self::visit_post_order(&node.left, out);
            Self::visit_post_order(&node.right, out);
            out.push(node.value.clone());
        }
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}
