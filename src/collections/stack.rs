use std::fmt;

use crate::collections::linked_list::{self, LinkedList};

/// A last-in, first-out stack backed by a [`LinkedList`].
///
/// The top of the stack is the front of the list, so every stack operation is
/// O(1). Nodes are owned by the stack and released when it is cleared or
/// dropped; callers never touch the links directly.
///
/// # Example
/// ```
/// use stackcalc::collections::Stack;
///
/// let mut stack = Stack::new();
/// stack.push('(');
/// stack.push('+');
///
/// assert_eq!(stack.peek(), Some(&'+'));
/// assert_eq!(stack.pop(), Some('+'));
/// assert_eq!(stack.len(), 1);
/// ```
pub struct Stack<T> {
    items: LinkedList<T>,
}

impl<T> Stack<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: LinkedList::new() }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements currently on the stack.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub fn push(&mut self, value: T) {
        self.items.push_front(value);
    }

    /// Removes the top element, or returns `None` on an empty stack.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the top element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.front_mut()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the top of the stack down to the bottom.
    #[must_use]
    pub fn iter(&self) -> linked_list::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes the items in order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}
