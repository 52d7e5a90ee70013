use core::any::type_name;
use core::fmt;
use core::marker::PhantomData;

/// The plain function pointer wrapped by every built-in instance.
///
/// The element function is passed as `&mut dyn FnMut` so that a single non-generic
/// pointer can serve every caller-supplied closure.
pub type MapFn<CA, A, B, CB> = fn(CA, &mut dyn FnMut(A) -> B) -> CB;

/// A capability record describing how to map over one kind of container.
///
/// `MappableImpl<CA, A, B, CB>` knows how to turn a container `CA` holding elements of type `A`
/// into a container `CB` holding elements of type `B`, given some function `A -> B`.
/// It carries no data of its own beyond the wrapped function `M`.
///
/// # Motivation
///
/// Rust can't name a partially applied type like `Option` or `Vec` on its own, so a single
/// generic `map` can't be written against "any container". Instead, the caller picks a record
/// for the container at hand and passes it in explicitly. Resolution happens entirely at the
/// call site, by which record gets passed.
///
/// # Contract
///
/// The wrapped function must be *shape-preserving*: for every input, the output has the same
/// number of elements (or the same key set, for associative containers) and only element values
/// change. This is not checked. A record that adds, drops or reorders elements is a logic error
/// on the part of whoever built it, and generic code relying on it may silently misbehave.
///
/// # Use
///
/// ```rust
/// use mappable::{map, option, vec};
///
/// assert_eq!(map(&vec(), |n: i32| n * 2, vec![1, 2, 3]), vec![2, 4, 6]);
/// assert_eq!(map(&option(), |n: i32| n.to_string(), Some(5)), Some("5".to_string()));
/// ```
pub struct MappableImpl<CA, A, B, CB, M = MapFn<CA, A, B, CB>> {
    map_fn: M,
    // fn pointer phantom: the container types never affect auto traits or drop check
    _containers: PhantomData<fn(CA, A) -> (B, CB)>,
}

/// Wrap a user-supplied map function as a [`MappableImpl`].
///
/// The function receives the input container and the element function, and must build the
/// output container by applying the element function to each element exactly once, without
/// changing the container's shape. No validation is performed.
///
/// ```rust
/// use mappable::{custom, map};
///
/// #[derive(Debug, PartialEq)]
/// struct Triple<X>(X, X, X);
///
/// let triple = custom(|t: Triple<u8>, f: &mut dyn FnMut(u8) -> u16| Triple(f(t.0), f(t.1), f(t.2)));
///
/// assert_eq!(map(&triple, |n| n as u16 * 100, Triple(1, 2, 3)), Triple(100, 200, 300));
/// ```
pub const fn custom<CA, A, B, CB, M>(map_fn: M) -> MappableImpl<CA, A, B, CB, M>
where
    M: Fn(CA, &mut dyn FnMut(A) -> B) -> CB,
{
    MappableImpl {
        map_fn,
        _containers: PhantomData,
    }
}

impl<CA, A, B, CB, M> MappableImpl<CA, A, B, CB, M>
where
    M: Fn(CA, &mut dyn FnMut(A) -> B) -> CB,
{
    /// Apply `f` to each element of `container`. This is `map` partially applied to this
    /// record, and can be called any number of times with different functions.
    #[inline]
    pub fn map(&self, mut f: impl FnMut(A) -> B, container: CA) -> CB {
        (self.map_fn)(container, &mut f)
    }

    /// Fix the element function as well, leaving a reusable `container -> container` function.
    ///
    /// ```rust
    /// use mappable::vec;
    ///
    /// let strings = vec();
    /// let mut lengths = strings.map_with(|s: &str| s.len());
    ///
    /// assert_eq!(lengths(vec!["a", "bb"]), vec![1, 2]);
    /// assert_eq!(lengths(vec![]), Vec::<usize>::new());
    /// ```
    pub fn map_with<'a, F>(&'a self, mut f: F) -> impl FnMut(CA) -> CB + 'a
    where
        F: FnMut(A) -> B + 'a,
    {
        move |container| self.map(&mut f, container)
    }

    /// Method form of [`flap`].
    #[inline]
    pub fn flap<X: Clone>(&self, container: CA, arg: X) -> CB
    where
        A: FnOnce(X) -> B,
    {
        flap(self, container, arg)
    }
}

/// Apply `f` to each element of `container`, using the strategy described by `mappable`.
///
/// Whatever `f` does (including panicking) propagates unchanged; the record itself cannot fail.
#[inline]
pub fn map<CA, A, B, CB, M>(
    mappable: &MappableImpl<CA, A, B, CB, M>,
    f: impl FnMut(A) -> B,
    container: CA,
) -> CB
where
    M: Fn(CA, &mut dyn FnMut(A) -> B) -> CB,
{
    mappable.map(f, container)
}

/// Treat the elements of `container` as functions and apply each of them to `arg`,
/// producing a container of results in the same shape.
///
/// Always equivalent to `map(mappable, |f| f(arg.clone()), container)`.
///
/// ```rust
/// use mappable::{flap, vec};
///
/// let fs: Vec<fn(i32) -> i32> = vec![|x: i32| x + 1, |x: i32| x * 10];
///
/// assert_eq!(flap(&vec(), fs, 4), vec![5, 40]);
/// ```
pub fn flap<CA, A, B, CB, M, X>(mappable: &MappableImpl<CA, A, B, CB, M>, container: CA, arg: X) -> CB
where
    M: Fn(CA, &mut dyn FnMut(A) -> B) -> CB,
    A: FnOnce(X) -> B,
    X: Clone,
{
    map(mappable, |f| f(arg.clone()), container)
}

/// Combine a record for an outer container with a record for an inner container, producing
/// a record that maps over the innermost elements of `Outer<Inner<A>>`.
///
/// The result is shape-preserving whenever both operands are.
///
/// ```rust
/// use mappable::{compose, map, option, vec};
///
/// let nested = compose(vec(), option());
///
/// assert_eq!(
///     map(&nested, |n: i32| n + 1, vec![Some(1), None, Some(3)]),
///     vec![Some(2), None, Some(4)],
/// );
/// ```
pub fn compose<OA, IA, IB, OB, A, B, M1, M2>(
    outer: MappableImpl<OA, IA, IB, OB, M1>,
    inner: MappableImpl<IA, A, B, IB, M2>,
) -> MappableImpl<OA, A, B, OB, impl Fn(OA, &mut dyn FnMut(A) -> B) -> OB>
where
    M1: Fn(OA, &mut dyn FnMut(IA) -> IB) -> OB,
    M2: Fn(IA, &mut dyn FnMut(A) -> B) -> IB,
{
    custom(move |container: OA, f: &mut dyn FnMut(A) -> B| {
        outer.map(|layer| inner.map(&mut *f, layer), container)
    })
}

impl<CA, A, B, CB, M: Clone> Clone for MappableImpl<CA, A, B, CB, M> {
    fn clone(&self) -> Self {
        MappableImpl {
            map_fn: self.map_fn.clone(),
            _containers: PhantomData,
        }
    }
}

impl<CA, A, B, CB, M: Copy> Copy for MappableImpl<CA, A, B, CB, M> {}

impl<CA, A, B, CB, M> fmt::Debug for MappableImpl<CA, A, B, CB, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappableImpl")
            .field("from", &type_name::<CA>())
            .field("to", &type_name::<CB>())
            .finish_non_exhaustive()
    }
}
