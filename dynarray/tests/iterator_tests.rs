use dynarray::DynamicArray;

#[test]
fn test_iterator_empty_array() {
    let array: DynamicArray<u8> = DynamicArray::new();

    let mut iter = array.iter();
    assert_eq!(iter.next(), None);
    assert_eq!(iter.size_hint(), (0, Some(0)));
}

#[test]
fn test_iterator_populated_array() {
    let mut array = DynamicArray::new();
    array.push("hello").unwrap();
    array.push("world").unwrap();
    array.push("test").unwrap();

    let mut iter = array.iter();
    assert_eq!(iter.size_hint(), (3, Some(3)));

    assert_eq!(iter.next(), Some(&"hello"));
    assert_eq!(iter.len(), 2);

    assert_eq!(iter.next(), Some(&"world"));
    assert_eq!(iter.next(), Some(&"test"));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_reverse() {
    let mut array = DynamicArray::new();
    for i in 1..=4 {
        array.push(i).unwrap();
    }

    let reversed: Vec<_> = array.iter().rev().copied().collect();
    assert_eq!(reversed, vec![4, 3, 2, 1]);
}

#[test]
fn test_for_loop_over_reference() {
    let mut array = DynamicArray::new();
    array.push(2).unwrap();
    array.push(3).unwrap();

    let mut sum = 0;
    for value in &array {
        sum += value;
    }
    assert_eq!(sum, 5);
}

#[test]
fn test_iterator_clone_is_independent() {
    let mut array = DynamicArray::new();
    array.push(1).unwrap();
    array.push(2).unwrap();

    let mut iter = array.iter();
    iter.next();
    let cloned = iter.clone();

    assert_eq!(iter.collect::<Vec<_>>(), vec![&2]);
    assert_eq!(cloned.collect::<Vec<_>>(), vec![&2]);
}
