#![cfg(test)]

use crate::indexed_vec::*;

/// Check that the slot table and the owner table agree.
fn assert_consistent<T>(vec: &IndexedVec<T>) {
    assert_eq!(vec.data.len(), vec.owners.len());
    for (position, handle) in vec.owners.iter().enumerate() {
        assert_eq!(vec.slots[handle.index()], position);
    }
    for handle in &vec.free {
        assert_eq!(vec.slots[handle.index()], FREE);
    }
    assert_eq!(vec.slots.len(), vec.owners.len() + vec.free.len());
}

#[test]
fn insert_and_get() {
    let mut vec = IndexedVec::new();
    let a = vec.insert(10);
    let b = vec.insert(20);

    assert_eq!(vec.len(), 2);
    assert_eq!(vec.get(a).unwrap(), &10);
    assert_eq!(vec.get(b).unwrap(), &20);
    assert_eq!(vec[b], 20);
    assert_ne!(a, b);
    assert_consistent(&vec);
}

#[test]
fn remove_keep_order() {
    let mut vec = IndexedVec::with_order(true);
    let a = vec.insert('A');
    let b = vec.insert('B');
    let c = vec.insert('C');
    assert_eq!(vec.handles().collect::<Vec<_>>(), vec![a, b, c]);

    assert_eq!(vec.remove(b).unwrap(), 'B');
    assert_eq!(vec.data(), &['A', 'C']);
    assert_eq!(vec[a], 'A');
    assert_eq!(vec[c], 'C');
    assert_eq!(vec.index_of(c), 1);
    assert!(!vec.is_valid(b));
    assert_consistent(&vec);

    let d = vec.insert('D');
    assert_eq!(d, b);
    assert_eq!(vec.data(), &['A', 'C', 'D']);
    assert_eq!(vec.get(d).unwrap(), &'D');
    assert_consistent(&vec);
}

#[test]
fn remove_fast() {
    let mut vec = IndexedVec::with_order(false);
    let a = vec.insert('A');
    let b = vec.insert('B');
    let c = vec.insert('C');

    assert_eq!(vec.remove(a).unwrap(), 'A');
    assert_eq!(vec.data(), &['C', 'B']);
    assert_eq!(vec.index_of(c), 0);
    assert_eq!(vec.handle_at(0), c);
    assert_eq!(vec[c], 'C');
    assert_eq!(vec[b], 'B');
    assert!(!vec.is_valid(a));
    assert_consistent(&vec);

    assert_eq!(vec.insert('E'), a);
    assert_consistent(&vec);
}

#[test]
fn remove_last_position_fast() {
    let mut vec = IndexedVec::with_order(false);
    let a = vec.insert(1);
    let b = vec.insert(2);

    vec.remove(b).unwrap();
    assert_eq!(vec.data(), &[1]);
    assert_eq!(vec.index_of(a), 0);
    assert_consistent(&vec);
}

#[test]
fn recycles_most_recently_freed_first() {
    let mut vec = IndexedVec::new();
    let handles: Vec<_> = (0..5).map(|i| vec.insert(i)).collect();

    vec.remove(handles[1]).unwrap();
    vec.remove(handles[3]).unwrap();

    assert_eq!(vec.insert(30), handles[3]);
    assert_eq!(vec.insert(10), handles[1]);

    let fresh = vec.insert(50);
    assert!(handles.iter().all(|h| *h != fresh));
    assert_eq!(vec.data(), &[0, 2, 4, 30, 10, 50]);
    assert_consistent(&vec);
}

#[test]
fn errors() {
    let mut vec = IndexedVec::new();
    let a = vec.insert(1);
    let b = vec.insert(2);
    vec.remove(a).unwrap();

    let err = vec.get(a).unwrap_err();
    assert_eq!(err.kind(), HandleErrorKind::Freed);
    assert_eq!(err.handle(), a);

    let err = vec.remove(a).unwrap_err();
    assert_eq!(err.kind(), HandleErrorKind::Freed);

    let err = vec.get(Handle::INVALID).unwrap_err();
    assert_eq!(err.kind(), HandleErrorKind::OutOfRange);

    let err = vec.get_mut(Handle::new(7)).unwrap_err();
    assert_eq!(err.kind(), HandleErrorKind::OutOfRange);
    assert_eq!(
        format!("{}", err),
        "Handle(7) is not a valid handle: handle out of bounds"
    );

    // Failed removals leave everything in place.
    assert_eq!(vec.data(), &[2]);
    assert_eq!(vec[b], 2);
    assert_consistent(&vec);
}

#[test]
fn removing_everything_resets() {
    let mut vec = IndexedVec::with_order(false);
    let a = vec.insert(1);
    let b = vec.insert(2);
    vec.remove(a).unwrap();
    vec.remove(b).unwrap();

    assert!(vec.is_empty());
    assert!(vec.slots.is_empty());
    assert!(vec.free.is_empty());

    // Both handles are now out of range rather than freed.
    assert_eq!(vec.check(a).unwrap_err().kind(), HandleErrorKind::OutOfRange);
    assert_eq!(vec.check(b).unwrap_err().kind(), HandleErrorKind::OutOfRange);

    // Allocation starts over from the beginning of the slot table.
    assert_eq!(vec.insert(3), a);
    assert_eq!(vec.insert(4), b);
    assert_consistent(&vec);
}

#[test]
fn clear() {
    let mut vec = IndexedVec::new();
    let handles: Vec<_> = (0..4).map(|i| vec.insert(i)).collect();
    vec.remove(handles[2]).unwrap();

    vec.clear();
    assert_eq!(vec.len(), 0);
    assert!(handles.iter().all(|h| !vec.is_valid(*h)));
    assert_consistent(&vec);
}

#[test]
fn reserve() {
    let mut vec = IndexedVec::with_capacity(true, 16);
    assert!(vec.capacity() >= 16);
    assert!(vec.slots.capacity() >= 16);

    let handles: Vec<_> = (0..8).map(|i| vec.insert(i)).collect();
    for handle in &handles[..4] {
        vec.remove(*handle).unwrap();
    }

    vec.reserve(32);
    assert!(vec.capacity() >= 32);
    assert!(vec.owners.capacity() >= 32);
    assert!(vec.slots.capacity() >= 28);
    assert_eq!(vec.data(), &[4, 5, 6, 7]);
}

#[test]
fn mutate_in_place() {
    let mut vec: IndexedVec<_> = (0..4).collect();
    let handles: Vec<_> = vec.handles().collect();

    *vec.get_mut(handles[1]).unwrap() += 10;
    vec[handles[2]] += 20;
    *vec.data_at_mut(3) += 30;
    for value in &mut vec {
        *value *= 2;
    }

    assert_eq!(vec.iter().cloned().collect::<Vec<_>>(), vec![0, 22, 44, 66]);
    assert_eq!(vec.data_at(1), &22);
    assert_consistent(&vec);
}

#[test]
fn entries_follow_physical_order() {
    let mut vec = IndexedVec::with_order(false);
    let a = vec.insert("a");
    let b = vec.insert("b");
    let c = vec.insert("c");
    vec.remove(a).unwrap();

    assert_eq!(vec.entries().collect::<Vec<_>>(), vec![(c, &"c"), (b, &"b")]);
}

#[test]
#[should_panic]
fn index_with_removed_handle_panics() {
    let mut vec = IndexedVec::new();
    let a = vec.insert(1);
    vec.insert(2);
    vec.remove(a).unwrap();
    let _ = vec[a];
}

#[test]
fn handle_sentinel() {
    let mut handle = IndexedVec::new().insert(());
    assert!(!handle.is_invalid());

    handle.invalidate();
    assert!(handle.is_invalid());
    assert_eq!(handle, Handle::default());
    assert_eq!(format!("{:?}", handle), "Handle(invalid)");
}
