use core::fmt;
use core::marker::PhantomData;

use crate::core::DoublyLinkedList;
use crate::node::{Link, Node};

/// Iterator over the values of a `DoublyLinkedList`, first to last
///
/// Iterating from both ends meets in the middle; every value is yielded once.
pub struct DoublyLinkedListIter<'a, T> {
    front: Link<T>,
    back: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> DoublyLinkedListIter<'a, T> {
    pub(crate) fn new(list: &'a DoublyLinkedList<T>) -> Self {
        let (front, back) = list.bounds();
        Self {
            front,
            back,
            remaining: list.len(),
            _marker: PhantomData,
        }
    }
}

// Safe: the iterator only hands out `&T`, like `&DoublyLinkedList<T>` would
#[allow(unsafe_code)]
unsafe impl<T: Sync> Send for DoublyLinkedListIter<'_, T> {}

#[allow(unsafe_code)]
unsafe impl<T: Sync> Sync for DoublyLinkedListIter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedListIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> Clone for DoublyLinkedListIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for DoublyLinkedListIter<'a, T> {
    type Item = &'a T;

    #[allow(unsafe_code)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        // Safe: the list is borrowed for 'a, so its nodes stay allocated
        let node = unsafe { &*node.as_ptr() };
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for DoublyLinkedListIter<'_, T> {
    #[allow(unsafe_code)]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        // Safe: the list is borrowed for 'a, so its nodes stay allocated
        let node = unsafe { &*node.as_ptr() };
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for DoublyLinkedListIter<'_, T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = DoublyLinkedListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        DoublyLinkedListIter::new(self)
    }
}
