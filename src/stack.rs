//! A LIFO stack backed by a [`LinkedList`]. Pushing and popping both work on the head of the list
//! so every operation except [`Stack::to_vec`] and [`Stack::clear`] is `O(1)`.
//!
//! # Examples
//!
//! ```
//! use adt::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(10);
//! stack.push(20);
//!
//! assert_eq!(stack.peek(), Some(&20));
//! assert_eq!(stack.pop(), Some(20));
//! assert_eq!(stack.pop(), Some(10));
//! assert_eq!(stack.pop(), None);
//! ```

use std::fmt;

use crate::linked_list::{self, LinkedList};

/// A last-in, first-out container without a capacity bound.
#[derive(Clone)]
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Puts `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.list.push_front(value);
    }

    /// Removes the most recently pushed value and returns it, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// The most recently pushed value, left in place.
    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    /// The number of values on the stack.
    pub fn size(&self) -> usize {
        self.list.len()
    }

    /// Whether the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> linked_list::Iter<'_, T> {
        self.list.iter()
    }

    /// Copies the values out, top of the stack first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> fmt::Debug for Stack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top", &self.peek())
            .field("size", &self.size())
            .finish()
    }
}
