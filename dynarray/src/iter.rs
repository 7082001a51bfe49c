use core::slice;

use crate::core::DynamicArray;

/// Iterator over the elements of a `DynamicArray`
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct DynamicArrayIter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for DynamicArrayIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for DynamicArrayIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for DynamicArrayIter<'_, T> {}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = DynamicArrayIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        DynamicArrayIter {
            inner: self.as_slice().iter(),
        }
    }
}
