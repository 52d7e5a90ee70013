use std::collections::{BTreeMap, HashMap, VecDeque};

use proptest::prelude::*;

/// A small pool of unary functions, picked by index so containers of functions can be generated.
pub const UNARY: [fn(i32) -> i32; 4] = [
    |x| x,
    |x| x.wrapping_add(1),
    |x| x.wrapping_mul(-7),
    |x| x.rotate_left(3),
];

pub fn arb_unary() -> impl Strategy<Value = fn(i32) -> i32> {
    (0..UNARY.len()).prop_map(|idx| UNARY[idx])
}

pub fn arb_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..64)
}

pub fn arb_option() -> impl Strategy<Value = Option<i32>> {
    prop::option::of(any::<i32>())
}

pub fn arb_result() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Ok::<i32, String>),
        "[a-z]{0,8}".prop_map(Err::<i32, String>),
    ]
}

pub fn arb_array() -> impl Strategy<Value = [i32; 8]> {
    any::<[i32; 8]>()
}

pub fn arb_hash_map() -> impl Strategy<Value = HashMap<String, i32>> {
    prop::collection::hash_map("[a-z]{1,6}", any::<i32>(), 0..32)
}

pub fn arb_btree_map() -> impl Strategy<Value = BTreeMap<u16, i32>> {
    prop::collection::btree_map(any::<u16>(), any::<i32>(), 0..32)
}

pub fn arb_vec_deque() -> impl Strategy<Value = VecDeque<i32>> {
    prop::collection::vec_deque(any::<i32>(), 0..64)
}

pub fn arb_nested() -> impl Strategy<Value = Vec<Option<i32>>> {
    prop::collection::vec(arb_option(), 0..32)
}
