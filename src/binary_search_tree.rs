//! An unbalanced BST that stores each value at most once. Every parent owns its children through a
//! `Box`, so there are no parent pointers and no shared nodes.
//!
//! Nothing in here recurses: searching, inserting and removing walk down the tree in a loop, and the
//! traversals, [`height`][BinarySearchTree::height] and `Drop` keep their pending nodes on a
//! [`Stack`]. That keeps a fully skewed tree (e.g. one built from sorted input) from overflowing the
//! call stack no matter how deep it gets.
//!
//! # Examples
//!
//! ```
//! use adt::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&8));
//! assert_eq!(tree.find_min(), None);
//! assert_eq!(tree.height(), -1);
//!
//! for value in [8, 3, 10, 1, 6] {
//!     tree.insert(value);
//! }
//!
//! // Inserting a value that's already there does nothing.
//! assert!(!tree.insert(3));
//!
//! assert_eq!(tree.in_order(), [&1, &3, &6, &8, &10]);
//! assert_eq!(tree.pre_order(), [&8, &3, &1, &6, &10]);
//! assert_eq!(tree.post_order(), [&1, &6, &3, &10, &8]);
//! assert_eq!(tree.height(), 2);
//!
//! // Removing a value hands it back. Missing values are ignored.
//! assert_eq!(tree.remove(&3), Some(3));
//! assert_eq!(tree.remove(&42), None);
//! assert_eq!(tree.in_order(), [&1, &6, &8, &10]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::ptr;

use crate::Stack;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree holding a set of values ordered by `T`'s [`Ord`] implementation.
///
/// The tree never rebalances, so its shape (and therefore its height) depends entirely on the
/// order values were inserted and removed in.
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` unless an equal value is already present. Returns whether the tree changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }

        *link = Some(Node::new_boxed(value));
        self.len += 1;
        true
    }

    /// Whether a value equal to `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Removes the value equal to `value` and returns it. If the tree has no such value, nothing
    /// happens and `None` is returned.
    ///
    /// A node with two children isn't unlinked itself. Instead it takes over the value of its
    /// in-order successor (the smallest value in its right subtree) and the successor's node is
    /// unlinked in its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<_> = [10, 5, 15, 3, 7, 20].into_iter().collect();
    ///
    /// // The root has two children.
    /// assert_eq!(tree.remove(&10), Some(10));
    /// assert_eq!(tree.in_order(), [&3, &5, &7, &15, &20]);
    /// assert_eq!(tree.pre_order()[0], &15);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let link = Self::link_to(&mut self.root, value);
        let mut node = link.take()?;

        if node.left.is_some() {
            if let Some(successor) = Self::take_leftmost(&mut node.right) {
                let removed = mem::replace(&mut node.value, successor);
                *link = Some(node);
                self.len -= 1;
                return Some(removed);
            }
        }

        // At most one child: it takes the node's place in the parent (or becomes the root).
        *link = node.left.take().or_else(|| node.right.take());
        self.len -= 1;
        Some(node.value)
    }

    /// The smallest value in the tree.
    pub fn find_min(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Some(&current.value)
    }

    /// The largest value in the tree.
    pub fn find_max(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        Some(&current.value)
    }

    /// The number of edges on the longest path from the root down to a leaf. A lone root has a
    /// height of `0` and an empty tree has a height of `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<_> = (1..=5).collect();
    /// assert_eq!(tree.height(), 4);
    ///
    /// tree.clear();
    /// assert_eq!(tree.height(), -1);
    /// ```
    pub fn height(&self) -> isize {
        let mut height: isize = -1;
        let mut pending = Stack::new();
        if let Some(root) = self.root.as_deref() {
            pending.push((root, 0));
        }

        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                pending.push((child, depth + 1));
            }
        }
        height
    }

    /// The values in ascending order (left subtree, node, right subtree).
    pub fn in_order(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// The values with every node before its subtrees (node, left subtree, right subtree).
    pub fn pre_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        let mut pending = Stack::new();
        if let Some(root) = self.root.as_deref() {
            pending.push(root);
        }

        while let Some(node) = pending.pop() {
            values.push(&node.value);
            // Right goes on first so the left subtree is visited first.
            if let Some(right) = node.right.as_deref() {
                pending.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                pending.push(left);
            }
        }
        values
    }

    /// The values with every node after its subtrees (left subtree, right subtree, node).
    pub fn post_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        let mut pending: Stack<&Node<T>> = Stack::new();
        let mut current = self.root.as_deref();
        let mut last_emitted: Option<&Node<T>> = None;

        loop {
            if let Some(node) = current {
                pending.push(node);
                current = node.left.as_deref();
                continue;
            }

            let Some(&top) = pending.peek() else {
                break;
            };
            // A node is emitted once its right subtree is done, which is exactly when the right
            // child was the last node emitted. Compare nodes, not values.
            match top.right.as_deref() {
                Some(right) if !last_emitted.is_some_and(|last| ptr::eq(last, right)) => {
                    current = Some(right);
                }
                _ => {
                    values.push(&top.value);
                    last_emitted = pending.pop();
                }
            }
        }
        values
    }

    /// Iterates over the values lazily in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            pending: Stack::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        // Children are detached before their parent is dropped so dropping never recurses.
        let mut pending = Stack::new();
        if let Some(root) = self.root.take() {
            pending.push(root);
        }

        while let Some(mut node) = pending.pop() {
            if let Some(left) = node.left.take() {
                pending.push(left);
            }
            if let Some(right) = node.right.take() {
                pending.push(right);
            }
        }
        self.len = 0;
    }

    /// Walks down from `link` to the link that owns the node equal to `value`. If there is no such
    /// node this is the empty link where it would have been inserted.
    fn link_to<'a>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T>
    where
        T: Ord,
    {
        loop {
            let go_left = match link.as_deref().map(|node| value.cmp(&node.value)) {
                Some(Ordering::Less) => true,
                Some(Ordering::Greater) => false,
                Some(Ordering::Equal) | None => return link,
            };

            match link {
                Some(node) => link = if go_left { &mut node.left } else { &mut node.right },
                None => return link,
            }
        }
    }

    /// Unlinks the leftmost node of the subtree owned by `link`, splicing its right child into its
    /// place, and returns its value. Returns `None` if the subtree is empty.
    fn take_leftmost(mut link: &mut Link<T>) -> Option<T> {
        while link.as_ref().is_some_and(|node| node.left.is_some()) {
            match link {
                Some(node) => link = &mut node.left,
                None => return None,
            }
        }

        let Node { value, right, .. } = *link.take()?;
        *link = right;
        Some(value)
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// A lazy, in-order iterator over the values of a [`BinarySearchTree`].
pub struct Iter<'a, T> {
    // The nodes whose value and right subtree haven't been visited yet. The next value is on top.
    pending: Stack<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.pending.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
