use rcontainers::{
    distance, vector, Array, BidirectionalCursor, Category, ConstVectorIterator, Cursor, List,
    ListIterator, RandomAccessCursor, VectorIterator, Walk,
};

#[test]
fn test_category_hierarchy() {
    use Category::*;

    let all = [Input, Forward, Bidirectional, RandomAccess];
    for (i, a) in all.iter().enumerate() {
        for (j, b) in all.iter().enumerate() {
            assert_eq!(a.satisfies(*b), i >= j, "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn test_cursor_categories() {
    assert_eq!(
        <VectorIterator<i32> as Cursor>::CATEGORY,
        Category::RandomAccess
    );
    assert_eq!(
        <ConstVectorIterator<i32> as Cursor>::CATEGORY,
        Category::RandomAccess
    );
    assert_eq!(<*const i32 as Cursor>::CATEGORY, Category::RandomAccess);
    assert_eq!(
        <ListIterator<i32> as Cursor>::CATEGORY,
        Category::Bidirectional
    );
}

#[test]
fn test_distance_random_access() {
    let v = vector![1, 2, 3, 4, 5];
    unsafe {
        assert_eq!(distance(v.begin(), v.end()), 5);
        assert_eq!(distance(v.cbegin() + 1, v.cend() - 1), 3);
        assert_eq!(distance(v.end(), v.begin()), -5);
        assert_eq!(distance(v.rbegin(), v.rend()), 5);
    }

    let a = Array::from([1u8, 2, 3]);
    assert_eq!(unsafe { distance(a.begin(), a.end()) }, 3);
}

#[test]
fn test_distance_advances_bidirectional_cursor() {
    let list: List<i32> = (0..7).collect();
    unsafe {
        assert_eq!(distance(list.begin(), list.end()), 7);
        assert_eq!(distance(list.rbegin(), list.rend()), 7);

        let mut mid = list.begin();
        mid.advance();
        mid.advance();
        assert_eq!(distance(mid, list.end()), 5);
        assert_eq!(distance(list.end(), list.end()), 0);
    }
}

#[test]
fn test_vector_iterator_arithmetic() {
    let v = vector![10, 20, 30, 40, 50];
    let begin = v.begin();
    let mut it = begin;

    it += 3;
    assert_eq!(unsafe { *it.get() }, 40);
    it -= 1;
    assert_eq!(unsafe { *it.get() }, 30);

    assert_eq!(begin + 2, it);
    assert_eq!(2isize + begin, it);
    assert_eq!(it - 2, begin);
    assert_eq!(it - begin, 2);
    assert_eq!(begin - it, -2);

    unsafe {
        assert_eq!(*begin.at(4), 50);
        assert_eq!(*it.at(-2), 10);
        assert_eq!(*begin.at(2), *(begin + 2).get());
    }
}

#[test]
fn test_vector_iterator_increments() {
    let v = vector![1, 2, 3];
    let mut it = v.begin();

    let old = it.post_inc();
    assert_eq!(old, v.begin());
    assert_eq!(it, v.begin() + 1);

    assert_eq!(unsafe { *it.inc().get() }, 3);
    assert_eq!(unsafe { *it.dec().get() }, 2);

    let old = it.post_dec();
    assert_eq!(old - v.begin(), 1);
    assert_eq!(it, v.begin());
}

#[test]
fn test_vector_iterator_ordering() {
    let v = vector![1, 2, 3];
    let a = v.begin();
    let b = v.begin() + 1;

    assert!(a < b);
    assert!(a <= b);
    assert!(b > a);
    assert!(b >= a);
    assert!(a != b);
    assert!(a == v.begin());
    assert!(v.end() > b);
}

#[test]
fn test_vector_iterator_write_through() {
    let mut v = vector![1, 2, 3];
    let it = v.begin() + 1;
    unsafe { *it.get_mut() = 20 };
    unsafe { *it.as_mut_ptr().add(1) = 30 };
    assert_eq!(v, [1, 20, 30]);
    v.push(40);
    assert_eq!(v, [1, 20, 30, 40]);
}

#[test]
fn test_const_cursor_from_mutable() {
    let v = vector![1, 2];
    let c: ConstVectorIterator<i32> = v.begin().into();
    assert_eq!(c, v.cbegin());
    assert_eq!(c.as_ptr(), v.as_ptr());
    assert_eq!(v.cend() - c, 2);
}

#[test]
fn test_default_cursor_is_null() {
    let it: VectorIterator<u8> = Default::default();
    assert!(it.as_ptr().is_null());
}

#[test]
fn test_random_access_trait_methods() {
    let v = vector![1, 2, 3, 4];
    let b = v.cbegin();
    assert_eq!(b.jump(3), v.cend() - 1);
    assert_eq!(v.cend().distance_from(&b), 4);
    assert_eq!(b.jump(1).address(), unsafe { v.as_ptr().add(1) });

    let mut p = v.as_ptr();
    unsafe {
        p.advance();
        assert_eq!(*p, 2);
        p.retreat();
        assert_eq!(*p, 1);
    }
}

#[test]
fn test_walk_over_cursor_range() {
    let v = vector![1, 2, 3, 4];
    let walk = unsafe { Walk::new(v.cbegin() + 1, v.cend()) };
    assert_eq!(walk.len(), 3);
    assert_eq!(walk.clone().copied().collect::<Vec<_>>(), [2, 3, 4]);
    assert_eq!(walk.rev().copied().collect::<Vec<_>>(), [4, 3, 2]);

    let list: List<char> = "abc".chars().collect();
    let mut walk = unsafe { Walk::new(list.begin(), list.end()) };
    assert_eq!(walk.size_hint(), (3, Some(3)));
    assert_eq!(walk.next(), Some(&'a'));
    assert_eq!(walk.next_back(), Some(&'c'));
    assert_eq!(walk.next(), Some(&'b'));
    assert_eq!(walk.next(), None);
    assert_eq!(walk.next_back(), None);
    assert_eq!(walk.range_start(), walk.range_end());
}

#[test]
fn test_walk_is_restartable() {
    let v = vector![1, 2, 3];
    let first: Vec<i32> = v.walk().copied().collect();
    let second: Vec<i32> = v.walk().copied().collect();
    assert_eq!(first, second);
    assert_eq!(v.walk().count(), 3);
}
