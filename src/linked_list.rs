//! A singly linked list that owns its nodes from the head and keeps a pointer to its last node so
//! appends don't have to walk the chain.
//!
//! # Examples
//!
//! ```
//! use adt::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_back(1);
//! list.push_back(3);
//! list.push_front(0);
//!
//! // Positional inserts may land anywhere from the head to just past the tail.
//! list.insert(2, 2).unwrap();
//! assert!(list.insert(9, 4).is_err());
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
//! assert_eq!(list.search(&2), Some(2));
//! assert_eq!(list.pop_back(), Some(3));
//! assert_eq!(list.back(), Some(&2));
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::Error;

// Every node is allocated with `Box::new`, leaked into a `NonNull` and only turned back into a
// `Box` (with `Box::from_raw`) at the moment it is unlinked. No `Box` is ever moved while another
// pointer to its node is alive.
type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new_leaked(value: T, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { value, next })))
    }

    /// Reclaims a node unlinked from its list.
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::new_leaked`], must not have been reclaimed already, and
    /// nothing may dereference it afterwards.
    unsafe fn reclaim(node: NonNull<Self>) -> Box<Self> {
        Box::from_raw(node.as_ptr())
    }
}

/// A singly linked list with O(1) access to both ends for insertion and O(1) removal from the
/// front.
pub struct LinkedList<T> {
    head: Link<T>,
    // Points at the last node of the chain starting at `head`. It is `None` exactly when the list
    // is empty.
    tail: Link<T>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: The list uniquely owns every node reachable from `head` (and `tail` points into that
// chain), so it owns its `T`s the same way a `Box<Node<T>>` chain would.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: See above. Shared access never mutates through `head` or `tail`.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> LinkedList<T> {
    /// Generates a new, empty `LinkedList`.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// The number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prepends `value` so that it becomes the new head.
    pub fn push_front(&mut self, value: T) {
        let node = Node::new_leaked(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }

        self.head = Some(node);
        self.len += 1;
    }

    /// Appends `value` so that it becomes the new tail.
    pub fn push_back(&mut self, value: T) {
        let node = Node::new_leaked(value, None);

        match self.tail {
            // SAFETY: `tail` points at the last live node of this list and we hold `&mut self`,
            // so nothing else can be reading or writing that node.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at position `index`. An `index` of `0` prepends and an
    /// `index` equal to [`len`][Self::len] appends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index` is greater than the length of the list. The
    /// list is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt::{Error, LinkedList};
    ///
    /// let mut list: LinkedList<_> = [1, 3].into_iter().collect();
    /// list.insert(1, 2).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    ///
    /// assert_eq!(
    ///     list.insert(4, 4),
    ///     Err(Error::IndexOutOfRange { index: 4, len: 3 }),
    /// );
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        let len = self.len;
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == len {
            self.push_back(value);
            return Ok(());
        }

        let mut prev = self
            .node_at(index - 1)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        // SAFETY: `prev` is a live node of this list and we hold `&mut self`. It isn't the tail
        // (index < len) so the tail pointer stays correct.
        unsafe {
            let next = prev.as_ref().next;
            prev.as_mut().next = Some(Node::new_leaked(value, next));
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the head and returns its value, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| {
            // SAFETY: `head` is a live node owned only by this list. It is unlinked right below so
            // nothing can reach it once it has been reclaimed.
            let node = unsafe { Node::reclaim(head) };
            self.head = node.next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            node.value
        })
    }

    /// Removes the tail and returns its value, or `None` if the list is empty.
    ///
    /// This walks the list to find the new tail so it takes `O(len)`.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len <= 1 {
            return self.pop_front();
        }

        let mut new_tail = self.node_at(self.len - 2)?;
        // SAFETY: `new_tail` is a live node of this list and we hold `&mut self`. Taking its
        // `next` unlinks the old tail, which `self.tail` stops pointing at below, so nothing
        // references it after it is reclaimed.
        let old_tail = unsafe { Node::reclaim(new_tail.as_mut().next.take()?) };

        self.tail = Some(new_tail);
        self.len -= 1;
        Some(old_tail.value)
    }

    /// Removes the element at `index` and returns it. Returns `None`, leaving the list untouched,
    /// when `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        if index == 0 {
            return self.pop_front();
        }

        let mut prev = self.node_at(index - 1)?;
        // SAFETY: `prev` is a live node of this list and we hold `&mut self`. Its successor is
        // unlinked before being reclaimed, and if it was the tail `self.tail` moves to `prev`.
        let removed = unsafe {
            let removed = Node::reclaim(prev.as_mut().next.take()?);
            prev.as_mut().next = removed.next;
            removed
        };
        if removed.next.is_none() {
            self.tail = Some(prev);
        }

        self.len -= 1;
        Some(removed.value)
    }

    /// A reference to the first element.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` is a live node of this list. The returned reference borrows `self` so the
        // node can't be freed or mutated while it's alive.
        self.head.map(|head| unsafe { &(*head.as_ptr()).value })
    }

    /// A reference to the last element.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` is a live node of this list. The returned reference borrows `self` so the
        // node can't be freed or mutated while it's alive.
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).value })
    }

    /// A reference to the element at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// The position of the first element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use adt::LinkedList;
    ///
    /// let list: LinkedList<_> = [10, 20, 10].into_iter().collect();
    /// assert_eq!(list.search(&10), Some(0));
    /// assert_eq!(list.search(&30), None);
    /// ```
    pub fn search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        // Popping one node at a time reclaims every allocation without recursing.
        while self.pop_front().is_some() {}
    }

    /// Iterates over references to the elements from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }

    fn node_at(&self, index: usize) -> Link<T> {
        let mut current = self.head;
        for _ in 0..index {
            // SAFETY: every link reachable from `head` points at a live node of this list.
            current = unsafe { current?.as_ref().next };
        }
        current
    }
}

impl<T> Clone for LinkedList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> PartialEq for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for LinkedList<T> where T: Eq {}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// A borrowing iterator over a [`LinkedList`], from head to tail.
pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: The iterator borrows the list for `'a`, so every node stays alive and
            // unmodified for that long.
            let node: &'a Node<T> = unsafe { &*node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

// SAFETY: `Iter` only hands out `&T`, exactly like an iterator over `&'a Node<T>` would.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
// SAFETY: See above.
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator over a [`LinkedList`], from head to tail.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
