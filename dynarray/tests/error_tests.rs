use dynarray::{DynArrayError, DynamicArray};

#[test]
fn test_error_remove_from_empty() {
    let mut array: DynamicArray<u8> = DynamicArray::new();

    assert_eq!(
        array.remove_at(0).unwrap_err(),
        DynArrayError::IndexOutOfRange {
            index: 0,
            length: 0
        }
    );
}

#[test]
fn test_error_remove_at_length() {
    let mut array = DynamicArray::new();
    array.push(1).unwrap();
    array.push(2).unwrap();
    array.push(3).unwrap();

    let result = array.remove_at(3);
    assert_eq!(
        result.unwrap_err(),
        DynArrayError::IndexOutOfRange {
            index: 3,
            length: 3
        }
    );
    assert_eq!(array.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_error_remove_far_out_of_range() {
    let mut array = DynamicArray::new();
    array.push(1).unwrap();

    match array.remove_at(100).unwrap_err() {
        DynArrayError::IndexOutOfRange { index, length } => {
            assert_eq!(index, 100);
            assert_eq!(length, 1);
        }
        _ => panic!("Expected IndexOutOfRange error"),
    }
}

#[test]
fn test_error_try_get() {
    let mut array = DynamicArray::new();
    array.push("test").unwrap();

    assert_eq!(array.try_get(0), Ok(&"test"));
    assert_eq!(
        array.try_get(1).unwrap_err(),
        DynArrayError::IndexOutOfRange {
            index: 1,
            length: 1
        }
    );
}

#[test]
fn test_error_get_returns_none() {
    let array: DynamicArray<u8> = DynamicArray::new();

    assert!(array.get(0).is_none());
}

#[test]
fn test_error_allocation_failure_on_huge_capacity() {
    let result: Result<DynamicArray<u64>, _> = DynamicArray::with_capacity(usize::MAX / 2);

    assert_eq!(
        result.unwrap_err(),
        DynArrayError::AllocationFailure {
            requested: usize::MAX - 1
        }
    );
}

#[test]
fn test_error_display_messages() {
    let out_of_range = DynArrayError::IndexOutOfRange {
        index: 4,
        length: 2,
    };
    assert_eq!(
        out_of_range.to_string(),
        "Index out of range: index 4 is not below array length 2"
    );

    let allocation = DynArrayError::AllocationFailure { requested: 8 };
    assert_eq!(
        allocation.to_string(),
        "Allocation failure: could not reserve storage for 8 elements"
    );
}
