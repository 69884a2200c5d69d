use std::fmt;

use crate::error::CollectionError;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next:  Link<T>,
}

impl<T> Node<T> {
    const fn new(value: T, next: Link<T>) -> Self {
        Self { value, next }
    }
}

/// An owned, singly-linked list.
///
/// The list owns its nodes through a chain of `Option<Box<_>>` links starting
/// at `head`; an empty list is simply `head == None`. Front operations are
/// O(1), positional operations walk the chain from the front.
///
/// # Example
/// ```
/// use stackcalc::collections::LinkedList;
///
/// let mut list: LinkedList<i64> = [1, 2, 4].into_iter().collect();
/// list.insert(2, 3).unwrap();
///
/// assert_eq!(list.to_string(), "1 -> 2 -> 3 -> 4");
/// assert_eq!(list.remove(0), Some(1));
/// assert_eq!(list.len(), 3);
/// ```
pub struct LinkedList<T> {
    head: Link<T>,
    len:  usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None,
               len:  0, }
    }

    /// Number of elements in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Prepends `value` to the list.
    pub fn push_front(&mut self, value: T) {
        let node = Box::new(Node::new(value, self.head.take()));
        self.head = Some(node);
        self.len += 1;
    }

    /// Removes and returns the first element, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let Node { value, next } = *self.head.take()?;
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    /// Appends `value` to the end of the list.
    pub fn push_back(&mut self, value: T) {
        self.extend(std::iter::once(value));
    }

    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Returns a reference to the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// `index == len()` appends. Anything past the end is rejected and the
    /// list is left untouched.
    ///
    /// # Errors
    /// `CollectionError::IndexOutOfBounds` if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        let len = self.len;
        let link = self.link_mut(index)
                       .ok_or(CollectionError::IndexOutOfBounds { len, found: index })?;

        let next = link.take();
        *link = Some(Box::new(Node::new(value, next)));
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, or `None` if there is no
    /// such element.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let link = self.link_mut(index)?;
        let Node { value, next } = *link.take()?;
        *link = next;
        self.len -= 1;
        Some(value)
    }

    /// Returns the middle element.
    ///
    /// Walks a slow and a fast cursor from the front; for even lengths this
    /// yields the second of the two central elements (index `len / 2`).
    #[must_use]
    pub fn middle(&self) -> Option<&T> {
        let mut slow = self.head.as_deref()?;
        let mut fast = self.head.as_deref();

        while let Some(next) = fast.and_then(|node| node.next.as_deref()) {
            slow = slow.next.as_deref()?;
            fast = next.next.as_deref();
        }

        Some(&slow.value)
    }

    /// Swaps every pair of adjacent nodes in place.
    ///
    /// Nodes are relinked, not copied: `1 -> 2 -> 3 -> 4 -> 5` becomes
    /// `2 -> 1 -> 4 -> 3 -> 5`. An odd last node stays where it is.
    ///
    /// # Example
    /// ```
    /// use stackcalc::collections::LinkedList;
    ///
    /// let mut list: LinkedList<i64> = (1..=5).collect();
    /// list.swap_pairs();
    ///
    /// assert_eq!(list.to_string(), "2 -> 1 -> 4 -> 3 -> 5");
    /// ```
    pub fn swap_pairs(&mut self) {
        let mut link = &mut self.head;
        while let Some(mut first) = link.take() {
            let Some(mut second) = first.next.take() else {
                *link = Some(first);
                break;
            };

            first.next = second.next.take();
            second.next = Some(first);

            let second = link.insert(second);
            let Some(first) = second.next.as_mut() else {
                break;
            };
            link = &mut first.next;
        }
    }

    /// Drops every element, leaving an empty list.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head.as_deref() }
    }

    /// Walks to the link that holds position `index`; `index == len()` yields
    /// the empty tail link.
    fn link_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the position of the first element equal to `value`.
    #[must_use]
    pub fn position(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }
}

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

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut added = 0;
        if let Some(mut tail) = self.link_mut(self.len) {
            for value in iter {
                tail = &mut tail.insert(Box::new(Node::new(value, None))).next;
                added += 1;
            }
        }
        self.len += added;
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator over a [`LinkedList`], front to back.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
                      self.next = node.next.as_deref();
                      &node.value
                  })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`LinkedList`], front to back.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
