use alloc::boxed::Box;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::error::LinkedListError;
use crate::iter::DoublyLinkedListIter;
use crate::node::{Link, Node};

/// A doubly linked list owning its values
///
/// The list tracks its first node, last node and length. `first` is absent
/// exactly when `last` is absent and the length is 0.
pub struct DoublyLinkedList<T> {
    first: Link<T>,
    last: Link<T>,
    length: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// Safe: the list owns its nodes exclusively, like `Box<Node<T>>` would
#[allow(unsafe_code)]
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}

#[allow(unsafe_code)]
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            first: None,
            last: None,
            length: 0,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    fn check_index(&self, index: usize) -> Result<(), LinkedListError> {
        if self.length == 0 {
            Err(LinkedListError::EmptyList)
        } else if index >= self.length {
            Err(LinkedListError::IndexOutOfRange {
                index,
                length: self.length,
            })
        } else {
            Ok(())
        }
    }

    /// Walks from the first node to the node at `index`.
    #[allow(unsafe_code)]
    fn node_at(&self, index: usize) -> Result<NonNull<Node<T>>, LinkedListError> {
        self.check_index(index)?;

        let mut node = self.first.ok_or(LinkedListError::EmptyList)?;
        for _ in 0..index {
            // Safe: linked nodes stay allocated while the list is borrowed
            node = unsafe { node.as_ref() }
                .next
                .ok_or(LinkedListError::IndexOutOfRange {
                    index,
                    length: self.length,
                })?;
        }
        Ok(node)
    }

    /// Returns the value of the first element.
    ///
    /// # Errors
    ///
    /// Returns `LinkedListError::EmptyList` if the list is empty.
    #[allow(unsafe_code)]
    pub fn first(&self) -> Result<&T, LinkedListError> {
        let node = self.first.ok_or(LinkedListError::EmptyList)?;
        // Safe: the node is linked into the list borrowed by `&self`
        Ok(unsafe { &(*node.as_ptr()).value })
    }

    /// # Errors
    ///
    /// Returns `LinkedListError::EmptyList` if the list is empty.
    #[allow(unsafe_code)]
    pub fn first_mut(&mut self) -> Result<&mut T, LinkedListError> {
        let node = self.first.ok_or(LinkedListError::EmptyList)?;
        // Safe: `&mut self` is the only way to reach the node
        Ok(unsafe { &mut (*node.as_ptr()).value })
    }

    /// Returns the value of the last element.
    ///
    /// # Errors
    ///
    /// Returns `LinkedListError::EmptyList` if the list is empty.
    #[allow(unsafe_code)]
    pub fn last(&self) -> Result<&T, LinkedListError> {
        let node = self.last.ok_or(LinkedListError::EmptyList)?;
        // Safe: the node is linked into the list borrowed by `&self`
        Ok(unsafe { &(*node.as_ptr()).value })
    }

    /// # Errors
    ///
    /// Returns `LinkedListError::EmptyList` if the list is empty.
    #[allow(unsafe_code)]
    pub fn last_mut(&mut self) -> Result<&mut T, LinkedListError> {
        let node = self.last.ok_or(LinkedListError::EmptyList)?;
        // Safe: `&mut self` is the only way to reach the node
        Ok(unsafe { &mut (*node.as_ptr()).value })
    }

    /// Returns the value at `index`, walking from the first element.
    ///
    /// # Errors
    ///
    /// Returns `LinkedListError::EmptyList` if the list is empty and
    /// `LinkedListError::IndexOutOfRange` if `index >= len()`.
    #[allow(unsafe_code)]
    pub fn get(&self, index: usize) -> Result<&T, LinkedListError> {
        let node = self.node_at(index)?;
        // Safe: the node is linked into the list borrowed by `&self`
        Ok(unsafe { &(*node.as_ptr()).value })
    }

    /// # Errors
    ///
    /// Same as [`DoublyLinkedList::get`].
    #[allow(unsafe_code)]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, LinkedListError> {
        let node = self.node_at(index)?;
        // Safe: `&mut self` is the only way to reach the node
        Ok(unsafe { &mut (*node.as_ptr()).value })
    }

    /// Attaches `node` after the current last node.
    #[allow(unsafe_code)]
    fn link_back(&mut self, node: NonNull<Node<T>>) {
        // Safe: `node` is unlinked and owned by this list from now on,
        // `self.last` is a live node of this list
        unsafe {
            (*node.as_ptr()).previous = self.last;
            (*node.as_ptr()).next = None;
            match self.last {
                Some(last) => (*last.as_ptr()).next = Some(node),
                None => self.first = Some(node),
            }
        }
        self.last = Some(node);
        self.length += 1;
    }

    /// Moves every node of `run` into this list, right before `before`.
    /// With no `before` node the run goes after the last node.
    #[allow(unsafe_code)]
    fn splice_before(&mut self, before: Link<T>, mut run: Self) {
        let (Some(run_first), Some(run_last)) = (run.first.take(), run.last.take()) else {
            return;
        };
        let run_length = core::mem::replace(&mut run.length, 0);

        // Safe: `before` is a node of this list, the run nodes were owned by
        // `run` which no longer refers to them
        unsafe {
            let previous = match before {
                Some(node) => (*node.as_ptr()).previous,
                None => self.last,
            };

            (*run_first.as_ptr()).previous = previous;
            (*run_last.as_ptr()).next = before;

            match previous {
                Some(node) => (*node.as_ptr()).next = Some(run_first),
                None => self.first = Some(run_first),
            }
            match before {
                Some(node) => (*node.as_ptr()).previous = Some(run_last),
                None => self.last = Some(run_last),
            }
        }
        self.length += run_length;
    }

    /// Detaches `node`, frees it and returns its value.
    ///
    /// # Safety
    ///
    /// `node` must be linked into this list.
    #[allow(unsafe_code)]
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        // Safe: guaranteed by the caller
        let Node {
            value,
            previous,
            next,
        } = unsafe { Node::release(node) };

        // Safe: the neighbours are live nodes of this list
        unsafe {
            match previous {
                Some(previous) => (*previous.as_ptr()).next = next,
                None => self.first = next,
            }
            match next {
                Some(next) => (*next.as_ptr()).previous = previous,
                None => self.last = previous,
            }
        }
        self.length -= 1;
        value
    }

    fn repeated(value: T, count: usize) -> Result<Self, LinkedListError>
    where
        T: Clone,
    {
        let mut run = Self::new();
        for _ in 1..count {
            run.push_back(value.clone())?;
        }
        run.push_back(value)?;
        Ok(run)
    }

    /// Inserts `count` copies of `value` right before the element at `index`.
    ///
    /// An empty list accepts index 0 only. Otherwise `index` must name an
    /// existing element, so a value cannot be appended through `insert`; use
    /// [`DoublyLinkedList::push_back`] for that.
    ///
    /// # Errors
    ///
    /// - `LinkedListError::InvalidCount` if `count` is 0
    /// - `LinkedListError::IndexOutOfRange` if `index` is not a valid position
    /// - `LinkedListError::AllocationFailure` if a node cannot be allocated
    ///
    /// The list is unchanged on error.
    pub fn insert(&mut self, index: usize, value: T, count: usize) -> Result<(), LinkedListError>
    where
        T: Clone,
    {
        if count < 1 {
            return Err(LinkedListError::InvalidCount { count });
        }

        let before = if self.is_empty() {
            if index != 0 {
                return Err(LinkedListError::IndexOutOfRange { index, length: 0 });
            }
            None
        } else {
            Some(self.node_at(index)?)
        };

        let run = Self::repeated(value, count)?;
        self.splice_before(before, run);
        Ok(())
    }

    /// Inserts `value` before the first element.
    ///
    /// # Errors
    ///
    /// Returns `LinkedListError::AllocationFailure` if the node cannot be allocated.
    pub fn push_front(&mut self, value: T) -> Result<(), LinkedListError> {
        let mut run = Self::new();
        run.link_back(Node::allocate(value)?);
        self.splice_before(self.first, run);
        Ok(())
    }

    /// Appends `value` after the last element.
    ///
    /// # Errors
    ///
    /// Returns `LinkedListError::AllocationFailure` if the node cannot be allocated.
    pub fn push_back(&mut self, value: T) -> Result<(), LinkedListError> {
        let node = Node::allocate(value)?;
        self.link_back(node);
        Ok(())
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns `LinkedListError::EmptyList` if the list is empty.
    #[allow(unsafe_code)]
    pub fn pop_front(&mut self) -> Result<T, LinkedListError> {
        let node = self.first.ok_or(LinkedListError::EmptyList)?;
        // Safe: `first` is linked into this list
        Ok(unsafe { self.unlink(node) })
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `LinkedListError::EmptyList` if the list is empty.
    #[allow(unsafe_code)]
    pub fn pop_back(&mut self) -> Result<T, LinkedListError> {
        let node = self.last.ok_or(LinkedListError::EmptyList)?;
        // Safe: `last` is linked into this list
        Ok(unsafe { self.unlink(node) })
    }

    /// Removes the element at `index` and drops its value.
    ///
    /// # Errors
    ///
    /// Returns `LinkedListError::EmptyList` if the list is empty and
    /// `LinkedListError::IndexOutOfRange` if `index >= len()`.
    #[allow(unsafe_code)]
    pub fn remove_at(&mut self, index: usize) -> Result<(), LinkedListError> {
        let node = self.node_at(index)?;
        // Safe: `node_at` only returns linked nodes
        drop(unsafe { self.unlink(node) });
        Ok(())
    }

    /// Removes the first element and drops its value.
    ///
    /// # Errors
    ///
    /// Returns `LinkedListError::EmptyList` if the list is empty.
    pub fn remove_front(&mut self) -> Result<(), LinkedListError> {
        self.remove_at(0)
    }

    /// Removes every element, front first.
    pub fn clear(&mut self) {
        while self.remove_front().is_ok() {}
    }

    /// Exchanges the values at positions `x` and `y`. Nodes stay in place.
    ///
    /// # Errors
    ///
    /// Returns `LinkedListError::EmptyList` if the list is empty and
    /// `LinkedListError::IndexOutOfRange` if either index is `>= len()`.
    #[allow(unsafe_code)]
    pub fn swap(&mut self, x: usize, y: usize) -> Result<(), LinkedListError> {
        let x_node = self.node_at(x)?;
        let y_node = self.node_at(y)?;

        if x_node != y_node {
            // Safe: two distinct live nodes, reachable only through `&mut self`
            unsafe {
                core::mem::swap(&mut (*x_node.as_ptr()).value, &mut (*y_node.as_ptr()).value);
            }
        }
        Ok(())
    }

    /// Visits values from first to last until `visit` returns `Ok(true)`.
    ///
    /// Returns whether the walk was stopped by `visit`. The walk fails with
    /// `LinkedListError::CircularReference` if it comes back to the first node
    /// or follows more links than the list has elements.
    #[allow(unsafe_code)]
    fn walk<F>(&self, mut visit: F) -> Result<bool, LinkedListError>
    where
        F: FnMut(&T) -> Result<bool, LinkedListError>,
    {
        let mut current = self.first;
        let mut steps = 0;

        while let Some(node) = current {
            if steps >= self.length {
                return Err(LinkedListError::CircularReference { steps });
            }

            // Safe: linked nodes stay allocated while the list is borrowed
            let node = unsafe { node.as_ref() };
            if visit(&node.value)? {
                return Ok(true);
            }

            current = node.next;
            steps += 1;
            if current.is_some() && current == self.first {
                return Err(LinkedListError::CircularReference { steps });
            }
        }
        Ok(false)
    }

    /// Returns whether some element equals `value`.
    ///
    /// # Errors
    ///
    /// Returns `LinkedListError::CircularReference` if the chain loops.
    pub fn contains(&self, value: &T) -> Result<bool, LinkedListError>
    where
        T: PartialEq,
    {
        self.walk(|candidate| Ok(candidate == value))
    }

    /// Creates a new list holding clones of every value, in the same order.
    ///
    /// # Errors
    ///
    /// Returns `LinkedListError::AllocationFailure` if a node cannot be
    /// allocated and `LinkedListError::CircularReference` if the chain loops.
    pub fn try_clone(&self) -> Result<Self, LinkedListError>
    where
        T: Clone,
    {
        let mut copy = Self::new();
        self.walk(|value| copy.push_back(value.clone()).map(|()| false))?;
        Ok(copy)
    }

    /// Returns an iterator over the values, first to last.
    #[must_use]
    pub fn iter(&self) -> DoublyLinkedListIter<'_, T> {
        self.into_iter()
    }

    pub(crate) fn bounds(&self) -> (Link<T>, Link<T>) {
        (self.first, self.last)
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
