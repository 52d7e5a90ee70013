//! Built-in [`MappableImpl`] records, one per container kind.
//!
//! Every record here is a `const fn` wrapping a plain function pointer that forwards to the
//! container's own element-wise transform.
use alloc::boxed::Box;
use alloc::collections::{BTreeMap, VecDeque};
use alloc::vec::Vec;

#[cfg(feature = "std")]
use core::hash::{BuildHasher, Hash};
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::mappable::{custom, MapFn, MappableImpl};

/// Map over an optional value. `None` stays `None`.
pub const fn option<A, B>() -> MappableImpl<Option<A>, A, B, Option<B>> {
    custom(map_option as MapFn<Option<A>, A, B, Option<B>>)
}

/// Map over the success value of a result. An `Err` is passed through unchanged.
///
/// ```rust
/// use mappable::{map, result};
///
/// let ok: Result<u32, &str> = Ok(7);
/// let err: Result<u32, &str> = Err("boom");
///
/// assert_eq!(map(&result(), |n| n.to_string(), ok), Ok("7".to_string()));
/// assert_eq!(map(&result(), |n| n.to_string(), err), Err("boom"));
/// ```
pub const fn result<A, B, E>() -> MappableImpl<Result<A, E>, A, B, Result<B, E>> {
    custom(map_result as MapFn<Result<A, E>, A, B, Result<B, E>>)
}

/// Map over every element of a `Vec`, preserving order and length.
pub const fn vec<A, B>() -> MappableImpl<Vec<A>, A, B, Vec<B>> {
    custom(map_vec as MapFn<Vec<A>, A, B, Vec<B>>)
}

/// Map over every element of a fixed-size array, preserving positions.
///
/// ```rust
/// use mappable::{array, map};
///
/// assert_eq!(map(&array(), |s: &str| s.len(), ["a", "bb"]), [1, 2]);
/// ```
pub const fn array<A, B, const N: usize>() -> MappableImpl<[A; N], A, B, [B; N]> {
    custom(map_array as MapFn<[A; N], A, B, [B; N]>)
}

/// Map over the entries of a `HashMap`.
///
/// The element function receives each `(key, value)` entry so that the new value may depend on
/// the key. Its result is bound to the same key, so the output has exactly the input's key set.
/// Keys are cloned to keep them for the output while handing the entry to `f` by value.
///
/// ```rust
/// use std::collections::HashMap;
/// use mappable::{hash_map, map};
///
/// let beatles = HashMap::from([("Lennon", "John"), ("Starr", "Ringo")]);
/// let lengths = map(&hash_map(), |(_, first): (&str, &str)| first.len(), beatles);
///
/// assert_eq!(lengths, HashMap::from([("Lennon", 4), ("Starr", 5)]));
/// ```
#[cfg(feature = "std")]
pub const fn hash_map<K, V, W, S>() -> MappableImpl<HashMap<K, V, S>, (K, V), W, HashMap<K, W, S>>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    custom(map_hash_map as MapFn<HashMap<K, V, S>, (K, V), W, HashMap<K, W, S>>)
}

/// Map over the entries of a `BTreeMap`, as [`hash_map`] does for `HashMap`.
pub const fn btree_map<K, V, W>() -> MappableImpl<BTreeMap<K, V>, (K, V), W, BTreeMap<K, W>>
where
    K: Ord + Clone,
{
    custom(map_btree_map as MapFn<BTreeMap<K, V>, (K, V), W, BTreeMap<K, W>>)
}

/// Map over every element of a `VecDeque`, front to back.
pub const fn vec_deque<A, B>() -> MappableImpl<VecDeque<A>, A, B, VecDeque<B>> {
    custom(map_vec_deque as MapFn<VecDeque<A>, A, B, VecDeque<B>>)
}

/// Map over the single value held in a `Box`.
pub const fn boxed<A, B>() -> MappableImpl<Box<A>, A, B, Box<B>> {
    custom(map_boxed as MapFn<Box<A>, A, B, Box<B>>)
}

/// Map over the second component of a pair, leaving the first untouched.
pub const fn pair<Fst, A, B>() -> MappableImpl<(Fst, A), A, B, (Fst, B)> {
    custom(map_pair as MapFn<(Fst, A), A, B, (Fst, B)>)
}

fn map_option<A, B>(input: Option<A>, f: &mut dyn FnMut(A) -> B) -> Option<B> {
    input.map(f)
}

fn map_result<A, B, E>(input: Result<A, E>, f: &mut dyn FnMut(A) -> B) -> Result<B, E> {
    input.map(f)
}

fn map_vec<A, B>(input: Vec<A>, f: &mut dyn FnMut(A) -> B) -> Vec<B> {
    input.into_iter().map(f).collect()
}

fn map_array<A, B, const N: usize>(input: [A; N], f: &mut dyn FnMut(A) -> B) -> [B; N] {
    input.map(f)
}

#[cfg(feature = "std")]
fn map_hash_map<K, V, W, S>(input: HashMap<K, V, S>, f: &mut dyn FnMut((K, V)) -> W) -> HashMap<K, W, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    input
        .into_iter()
        .map(|(k, v)| (k.clone(), f((k, v))))
        .collect()
}

fn map_btree_map<K: Ord + Clone, V, W>(
    input: BTreeMap<K, V>,
    f: &mut dyn FnMut((K, V)) -> W,
) -> BTreeMap<K, W> {
    input
        .into_iter()
        .map(|(k, v)| (k.clone(), f((k, v))))
        .collect()
}

fn map_vec_deque<A, B>(input: VecDeque<A>, f: &mut dyn FnMut(A) -> B) -> VecDeque<B> {
    input.into_iter().map(f).collect()
}

fn map_boxed<A, B>(input: Box<A>, f: &mut dyn FnMut(A) -> B) -> Box<B> {
    Box::new(f(*input))
}

fn map_pair<Fst, A, B>(input: (Fst, A), f: &mut dyn FnMut(A) -> B) -> (Fst, B) {
    let (fst, a) = input;
    (fst, f(a))
}
