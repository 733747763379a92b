mod common;

use common::{count, reset, take_history, Event, Tracked};
use rcontainers::{distance, List};

fn contents<T: Copy>(list: &List<T>) -> Vec<T> {
    list.iter().copied().collect()
}

#[test]
fn test_new_is_empty() {
    let list: List<i32> = List::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.begin(), list.end());
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
}

#[test]
fn test_push_and_pop_both_ends() {
    let mut list = List::new();
    list.push_back(2);
    list.push_back(3);
    list.push_front(1);
    list.push_front(0);
    assert_eq!(contents(&list), [0, 1, 2, 3]);
    assert_eq!(list.front(), Some(&0));
    assert_eq!(list.back(), Some(&3));

    assert_eq!(list.pop_front(), Some(0));
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(contents(&list), [1, 2]);
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), Some(1));
    assert_eq!(list.pop_back(), None);
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn test_front_back_mut() {
    let mut list: List<i32> = [1, 2, 3].into();
    *list.front_mut().unwrap() = 10;
    *list.back_mut().unwrap() = 30;
    assert_eq!(contents(&list), [10, 2, 30]);
}

#[test]
fn test_insert_before_position() {
    let mut list: List<i32> = [1, 4].into();
    unsafe {
        let mut pos = list.begin();
        pos.inc();
        let it = list.insert(pos, 3);
        assert_eq!(*it.get(), 3);
        let it = list.insert(it, 2);
        assert_eq!(*it.get(), 2);
        list.insert(list.end(), 5);
        list.insert(list.begin(), 0);
    }
    assert_eq!(contents(&list), [0, 1, 2, 3, 4, 5]);
    assert_eq!(list.len(), 6);
}

#[test]
fn test_insert_n_and_range() {
    let mut list: List<i32> = [1, 5].into();
    unsafe {
        let mut pos = list.begin();
        pos.inc();

        let it = list.insert_n(pos, 0, 9);
        assert_eq!(it, pos);

        let it = list.insert_range(pos, [2, 3]);
        assert_eq!(*it.get(), 2);

        let it = list.insert_n(pos, 2, 4);
        assert_eq!(*it.get(), 4);

        let it = list.insert_range(pos, std::iter::empty());
        assert_eq!(it, pos);
    }
    assert_eq!(contents(&list), [1, 2, 3, 4, 4, 5]);
}

#[test]
fn test_erase() {
    let mut list: List<i32> = (0..5).collect();
    unsafe {
        let mut pos = list.begin();
        pos.inc();
        let next = list.erase(pos);
        assert_eq!(*next.get(), 2);

        let mut last = next;
        last.inc();
        last.inc();
        let it = list.erase_range(next, last);
        assert_eq!(it, last);
        assert_eq!(*it.get(), 4);
    }
    assert_eq!(contents(&list), [0, 4]);
    assert_eq!(list.len(), 2);
}

#[test]
#[should_panic(expected = "cannot erase the end position")]
fn test_erase_end_panics() {
    let mut list: List<i32> = [1].into();
    unsafe { list.erase(list.end()) };
}

#[test]
fn test_resize() {
    let mut list: List<i32> = [1, 2, 3].into();
    list.resize(5, 0);
    assert_eq!(contents(&list), [1, 2, 3, 0, 0]);
    list.resize(2, 0);
    assert_eq!(contents(&list), [1, 2]);
}

#[test]
fn test_cursor_movement_wraps_through_end() {
    let list: List<i32> = [1, 2, 3].into();
    unsafe {
        let mut it = list.end();
        it.dec();
        assert_eq!(*it.get(), 3);
        it.inc();
        assert_eq!(it, list.end());
        it.inc();
        assert_eq!(it, list.begin());
        assert_eq!(distance(list.begin(), list.end()), 3);
    }
}

#[test]
fn test_walk_both_directions() {
    let list: List<&str> = ["a", "b", "c"].into();
    assert_eq!(list.walk().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
    assert_eq!(list.walk_rev().copied().collect::<Vec<_>>(), ["c", "b", "a"]);
    assert_eq!(list.walk().rev().count(), 3);
    let mut n = 0;
    for _ in &list {
        n += 1;
    }
    assert_eq!(n, 3);
}

#[test]
fn test_clone_is_deep() {
    let list: List<Tracked> = (0..3).map(Tracked::new).collect();
    reset();
    let copy = list.clone();
    assert_eq!(
        take_history(),
        [Event::Clone(0), Event::Clone(1), Event::Clone(2)]
    );
    assert_eq!(copy, list);
    assert_ne!(copy.begin(), list.begin());
}

#[test]
fn test_drop_and_clear_destroy_every_node_once() {
    let mut list: List<Tracked> = (0..4).map(Tracked::new).collect();
    reset();
    list.clear();
    assert_eq!(
        take_history(),
        (0..4).map(Event::Drop).collect::<Vec<_>>()
    );

    list.push_back(Tracked::new(7));
    list.push_front(Tracked::new(6));
    reset();
    drop(list);
    assert_eq!(count(|e| matches!(e, Event::Drop(_))), 2);
}

#[test]
fn test_into_iter() {
    let list: List<i32> = (1..=4).collect();
    let mut it = list.into_iter();
    assert_eq!(it.len(), 4);
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.next_back(), Some(4));
    assert_eq!(it.collect::<Vec<_>>(), [2, 3]);
}

#[test]
fn test_equality_and_formatting() {
    let a: List<i32> = [1, 2, 3].into();
    let mut b = a.clone();
    assert_eq!(a, b);
    b.push_back(4);
    assert_ne!(a, b);
    assert_eq!(format!("{:?}", a), "[1, 2, 3]");

    let mut c: List<i32> = List::default();
    c.extend([1, 2, 3]);
    assert_eq!(a, c);
}
