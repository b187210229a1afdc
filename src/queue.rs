//! A FIFO queue backed by a [`LinkedList`]: values join at the tail and leave from the head.

use std::fmt;

use crate::linked_list::{self, LinkedList};

/// A first-in, first-out container without a capacity bound.
///
/// # Examples
///
/// ```
/// use adt::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.front(), Some(&1));
/// assert_eq!(queue.rear(), Some(&2));
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Clone)]
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Adds `value` at the rear.
    pub fn enqueue(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes the value at the front and returns it, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// The oldest value in the queue.
    pub fn front(&self) -> Option<&T> {
        self.list.front()
    }

    /// The newest value in the queue.
    pub fn rear(&self) -> Option<&T> {
        self.list.back()
    }

    /// The number of values waiting in the queue.
    pub fn size(&self) -> usize {
        self.list.len()
    }

    /// Whether the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Iterates from the front to the rear.
    pub fn iter(&self) -> linked_list::Iter<'_, T> {
        self.list.iter()
    }

    /// Copies the values out, front first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> fmt::Debug for Queue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
