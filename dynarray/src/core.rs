use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::DynArrayError;
use crate::iter::DynamicArrayIter;

const MIN_CAPACITY: usize = 1;

/// Capacity reserved for an array created with `size_hint` elements:
/// twice the hint, and never less than one slot.
fn initial_capacity(size_hint: usize) -> usize {
    if size_hint < MIN_CAPACITY {
        MIN_CAPACITY
    } else {
        size_hint.saturating_mul(2)
    }
}

fn allocate<T>(capacity: usize) -> Result<Vec<T>, DynArrayError> {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(capacity)
        .map_err(|_| DynArrayError::AllocationFailure {
            requested: capacity,
        })?;
    Ok(storage)
}

/// A growable array that doubles its capacity when full
///
/// `capacity` is the logical slot count of the array. The backing storage is
/// always able to hold at least that many elements once it has been written to.
#[derive(Debug)]
pub struct DynamicArray<T> {
    storage: Vec<T>,
    capacity: usize,
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with a capacity of one slot.
    ///
    /// No storage is reserved until the first element is pushed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            capacity: MIN_CAPACITY,
        }
    }

    /// Creates an empty array with room for `2 * size_hint` elements
    /// (one slot if `size_hint` is 0).
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if the storage cannot be reserved.
    pub fn with_capacity(size_hint: usize) -> Result<Self, DynArrayError> {
        let capacity = initial_capacity(size_hint);
        Ok(Self {
            storage: allocate(capacity)?,
            capacity,
        })
    }

    /// Creates an array holding `length` clones of `value`, with the same
    /// capacity rule as [`DynamicArray::with_capacity`].
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if the storage cannot be reserved.
    pub fn from_elem(value: T, length: usize) -> Result<Self, DynArrayError>
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(length)?;
        array.storage.resize(length, value);
        Ok(array)
    }

    /// Creates a copy of `source` with the same length and capacity.
    ///
    /// Copying an empty array gives an empty array.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if the storage cannot be reserved.
    pub fn copy_from(source: &Self) -> Result<Self, DynArrayError>
    where
        T: Clone,
    {
        let mut storage = allocate(source.capacity)?;
        storage.extend_from_slice(source.as_slice());
        Ok(Self {
            storage,
            capacity: source.capacity,
        })
    }

    /// Appends the elements of `src` to `dest`.
    ///
    /// With no destination a fresh copy of `src` is returned. `src` is never
    /// modified. If growing the destination fails, the destination is dropped
    /// along with the error; use [`DynamicArray::extend_from`] to keep it.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if the storage cannot be grown.
    pub fn concatenate(dest: Option<Self>, src: &Self) -> Result<Self, DynArrayError>
    where
        T: Clone,
    {
        match dest {
            None => Self::copy_from(src),
            Some(mut dest) => {
                dest.extend_from(src)?;
                Ok(dest)
            }
        }
    }

    /// Appends clones of every element of `src`, growing the capacity by `src.len()`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if the storage cannot be grown.
    /// The array is unchanged in that case.
    pub fn extend_from(&mut self, src: &Self) -> Result<(), DynArrayError>
    where
        T: Clone,
    {
        let capacity = self.capacity.checked_add(src.len()).ok_or(
            DynArrayError::AllocationFailure {
                requested: usize::MAX,
            },
        )?;
        self.grow_to(capacity)?;
        self.storage.extend_from_slice(src.as_slice());
        Ok(())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the number of slots before the next push has to grow the storage.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn grow_to(&mut self, capacity: usize) -> Result<(), DynArrayError> {
        let additional = capacity - self.storage.len();
        self.storage
            .try_reserve_exact(additional)
            .map_err(|_| DynArrayError::AllocationFailure {
                requested: capacity,
            })?;
        self.capacity = capacity;
        Ok(())
    }

    /// Appends `value`, doubling the capacity first if the array is full.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if the storage cannot be grown.
    /// The array is unchanged and `value` is dropped in that case.
    pub fn push(&mut self, value: T) -> Result<(), DynArrayError> {
        let capacity = if self.storage.len() == self.capacity {
            self.capacity.saturating_mul(2)
        } else {
            self.capacity
        };
        self.grow_to(capacity)?;
        self.storage.push(value);
        Ok(())
    }

    /// Removes the element at `index` and rebuilds the storage without it.
    ///
    /// The remaining elements keep their order. The new storage is sized as if
    /// the array had been created with `len() - 1` elements.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfRange` if `index >= len()`, and
    /// `DynArrayError::AllocationFailure` if the new storage cannot be reserved.
    /// The array is unchanged on error.
    pub fn remove_at(&mut self, index: usize) -> Result<T, DynArrayError> {
        let length = self.storage.len();
        if index >= length {
            return Err(DynArrayError::IndexOutOfRange { index, length });
        }

        let capacity = initial_capacity(length - 1);
        let mut rebuilt = allocate(capacity)?;

        let removed = self.storage.remove(index);
        rebuilt.append(&mut self.storage);
        self.storage = rebuilt;
        self.capacity = capacity;

        Ok(removed)
    }

    /// Gets the element at the specified index.
    ///
    /// Returns `None` if the index is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.get(index)
    }

    /// Gets a mutable reference to the element at the specified index.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.storage.get_mut(index)
    }

    /// Tries to get the element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfRange` if `index >= len()`.
    pub fn try_get(&self, index: usize) -> Result<&T, DynArrayError> {
        self.storage.get(index).ok_or(DynArrayError::IndexOutOfRange {
            index,
            length: self.storage.len(),
        })
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Returns an iterator over the elements in index order.
    #[must_use]
    pub fn iter(&self) -> DynamicArrayIter<'_, T> {
        self.into_iter()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.storage[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.storage[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_initial_capacity_rule() {
        assert_eq!(initial_capacity(0), 1);
        assert_eq!(initial_capacity(1), 2);
        assert_eq!(initial_capacity(5), 10);
        assert_eq!(initial_capacity(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_new_array() {
        let array: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(array.len(), 0);
        assert!(array.is_empty());
        assert_eq!(array.capacity(), 1);
    }

    #[test]
    fn test_with_capacity() {
        let array: DynamicArray<i32> = DynamicArray::with_capacity(4).unwrap();
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 8);
        assert!(array.storage.capacity() >= 8);
    }

    #[test]
    fn test_from_elem() {
        let array = DynamicArray::from_elem(7u8, 3).unwrap();
        assert_eq!(array.as_slice(), &[7, 7, 7]);
        assert_eq!(array.capacity(), 6);

        let empty = DynamicArray::from_elem(7u8, 0).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.capacity(), 1);
    }

    #[test]
    fn test_push_doubles_capacity() {
        let mut array = DynamicArray::new();
        let mut expected = vec![];

        for (value, capacity) in [(10, 1), (20, 2), (30, 4), (40, 4), (50, 8)] {
            array.push(value).unwrap();
            expected.push(value);
            assert_eq!(array.capacity(), capacity);
            assert_eq!(array.as_slice(), expected.as_slice());
        }
    }

    #[test]
    fn test_backing_storage_tracks_capacity() {
        let mut array = DynamicArray::new();
        for i in 0..100 {
            array.push(i).unwrap();
            assert!(array.storage.capacity() >= array.capacity());
            assert!(array.len() <= array.capacity());
        }
        assert_eq!(array.capacity(), 128);
    }

    #[test]
    fn test_extend_grows_by_source_length() {
        let mut dest = DynamicArray::new();
        dest.push(1).unwrap();
        dest.push(2).unwrap();
        assert_eq!(dest.capacity(), 2);

        let mut src = DynamicArray::new();
        for i in 3..6 {
            src.push(i).unwrap();
        }

        dest.extend_from(&src).unwrap();
        assert_eq!(dest.capacity(), 5);
        assert_eq!(dest.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(src.as_slice(), &[3, 4, 5]);
    }

    #[test]
    fn test_extend_capacity_overflow() {
        let mut dest: DynamicArray<u8> = DynamicArray::new();
        dest.capacity = usize::MAX;
        let mut src = DynamicArray::new();
        src.push(1).unwrap();

        assert_eq!(
            dest.extend_from(&src),
            Err(DynArrayError::AllocationFailure {
                requested: usize::MAX
            })
        );
        assert!(dest.is_empty());
    }

    #[test]
    fn test_remove_at_rebuilds_storage() {
        let mut array = DynamicArray::new();
        for i in 0..8 {
            array.push(i).unwrap();
        }
        assert_eq!(array.capacity(), 8);

        assert_eq!(array.remove_at(3), Ok(3));
        assert_eq!(array.as_slice(), &[0, 1, 2, 4, 5, 6, 7]);
        assert_eq!(array.capacity(), 14);

        assert_eq!(array.remove_at(0), Ok(0));
        assert_eq!(array.remove_at(5), Ok(7));
        assert_eq!(array.as_slice(), &[1, 2, 4, 5, 6]);
    }

    #[test]
    fn test_remove_last_remaining() {
        let mut array = DynamicArray::new();
        array.push("only").unwrap();

        assert_eq!(array.remove_at(0), Ok("only"));
        assert!(array.is_empty());
        assert_eq!(array.capacity(), 1);
    }

    #[test]
    fn test_remove_at_length_is_rejected() {
        let mut array = DynamicArray::new();
        array.push(1).unwrap();
        array.push(2).unwrap();

        assert_eq!(
            array.remove_at(2),
            Err(DynArrayError::IndexOutOfRange {
                index: 2,
                length: 2
            })
        );
        assert_eq!(array.as_slice(), &[1, 2]);
        assert_eq!(array.capacity(), 2);
    }

    #[test]
    fn test_index_operators() {
        let mut array = DynamicArray::new();
        array.push(5).unwrap();
        array[0] += 1;
        assert_eq!(array[0], 6);
        if let Some(value) = array.get_mut(0) {
            *value *= 2;
        }
        assert_eq!(array.get(0), Some(&12));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let array: DynamicArray<i32> = DynamicArray::new();
        let _value = array[0];
    }
}
