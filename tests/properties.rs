use proptest::prelude::*;
use rcontainers::{List, Vector};

#[derive(Debug, Clone)]
enum Op {
    Push(i16),
    Pop,
    Insert(usize, i16),
    InsertN(usize, u8, i16),
    Erase(usize),
    Resize(u8, i16),
    Reserve(u8),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i16>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        2 => (any::<usize>(), any::<i16>()).prop_map(|(i, x)| Op::Insert(i, x)),
        1 => (any::<usize>(), 0..8u8, any::<i16>()).prop_map(|(i, n, x)| Op::InsertN(i, n, x)),
        1 => any::<usize>().prop_map(Op::Erase),
        1 => (0..40u8, any::<i16>()).prop_map(|(n, x)| Op::Resize(n, x)),
        1 => (0..64u8).prop_map(Op::Reserve),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    /// Property: every push sequence follows the 2, then 1.5x growth steps
    #[test]
    fn push_follows_growth_policy(values in prop::collection::vec(any::<u32>(), 0..200)) {
        let mut v = Vector::new();
        let mut expected_cap = 0usize;

        for (i, &x) in values.iter().enumerate() {
            if i == expected_cap {
                expected_cap = if expected_cap == 0 { 2 } else { expected_cap + expected_cap / 2 };
            }
            v.push(x);
            prop_assert_eq!(v.len(), i + 1);
            prop_assert_eq!(v.capacity(), expected_cap);
        }
        prop_assert_eq!(v.as_slice(), values.as_slice());
    }

    /// Property: reserve never lowers capacity and lands exactly on larger requests
    #[test]
    fn reserve_is_exact(start in 0..50usize, requests in prop::collection::vec(0..100usize, 1..10)) {
        let mut v: Vector<u8> = Vector::with_capacity(start);
        for n in requests {
            let before = v.capacity();
            v.reserve(n);
            prop_assert_eq!(v.capacity(), before.max(n));
        }
    }

    /// Property: the vector behaves like `Vec` under any mix of mutations
    #[test]
    fn matches_std_vec_model(ops in prop::collection::vec(op(), 0..120)) {
        let mut v: Vector<i16> = Vector::new();
        let mut model: Vec<i16> = Vec::new();

        for op in ops {
            let cap_before = v.capacity();
            match op {
                Op::Push(x) => {
                    v.push(x);
                    model.push(x);
                }
                Op::Pop => {
                    prop_assert_eq!(v.pop(), model.pop());
                }
                Op::Insert(i, x) => {
                    let i = i % (model.len() + 1);
                    let it = v.insert(v.begin() + i as isize, x);
                    prop_assert_eq!(it - v.begin(), i as isize);
                    model.insert(i, x);
                }
                Op::InsertN(i, n, x) => {
                    let i = i % (model.len() + 1);
                    v.insert_n(v.begin() + i as isize, n as usize, x);
                    model.splice(i..i, std::iter::repeat(x).take(n as usize));
                }
                Op::Erase(i) => {
                    if !model.is_empty() {
                        let i = i % model.len();
                        v.erase(v.begin() + i as isize);
                        model.remove(i);
                    }
                }
                Op::Resize(n, x) => {
                    v.resize(n as usize, x);
                    model.resize(n as usize, x);
                }
                Op::Reserve(n) => {
                    v.reserve(n as usize);
                }
                Op::Clear => {
                    v.clear();
                    model.clear();
                    prop_assert_eq!(v.capacity(), cap_before);
                }
            }
            prop_assert!(v.capacity() >= cap_before);
            prop_assert!(v.capacity() >= v.len());
            prop_assert_eq!(v.as_slice(), model.as_slice());
            prop_assert_eq!(v.data().is_null(), v.is_empty());
        }
    }

    /// Property: insertion keeps the prefix in place and shifts the suffix by `count`
    #[test]
    fn insert_range_preserves_order(
        base in prop::collection::vec(any::<i32>(), 0..30),
        extra in prop::collection::vec(any::<i32>(), 0..30),
        pos in any::<usize>(),
    ) {
        let pos = pos % (base.len() + 1);
        let mut v: Vector<i32> = base.iter().copied().collect();
        v.insert_range(v.begin() + pos as isize, extra.iter().copied());

        prop_assert_eq!(v.len(), base.len() + extra.len());
        prop_assert_eq!(&v[..pos], &base[..pos]);
        prop_assert_eq!(&v[pos..pos + extra.len()], extra.as_slice());
        prop_assert_eq!(&v[pos + extra.len()..], &base[pos..]);
    }

    /// Property: a clone equals its source and owns separate storage
    #[test]
    fn clone_is_deep(values in prop::collection::vec(any::<u64>(), 1..50)) {
        let v: Vector<u64> = values.iter().copied().collect();
        let mut c = v.clone();
        prop_assert_eq!(&c, &v);
        prop_assert_eq!(c.capacity(), v.len());
        c[0] = c[0].wrapping_add(1);
        prop_assert_eq!(v[0], values[0]);
    }

    /// Property: forward and reverse walks agree for vectors and lists
    #[test]
    fn walks_agree(values in prop::collection::vec(any::<i8>(), 0..40)) {
        let v: Vector<i8> = values.iter().copied().collect();
        let l: List<i8> = values.iter().copied().collect();

        let forward: Vec<i8> = v.walk().copied().collect();
        let mut backward: Vec<i8> = v.walk_rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(&forward, &values);
        prop_assert_eq!(&backward, &values);

        prop_assert_eq!(l.walk().copied().collect::<Vec<_>>(), values.clone());
        let mut list_backward: Vec<i8> = l.walk_rev().copied().collect();
        list_backward.reverse();
        prop_assert_eq!(list_backward, values);
    }
}
