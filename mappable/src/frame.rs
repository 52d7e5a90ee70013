use alloc::vec::Vec;

use crate::mappable::{custom, MapFn, MappableImpl};

/// A container kind that describes its map once, as a trait impl, instead of as a record value.
///
/// # Motivation
///
/// Some container kinds are more naturally described by a trait impl living next to the type
/// definition. [`frame`] turns any such impl into a [`MappableImpl`] that can be handed to
/// [`map`](crate::map) and [`flap`](crate::flap) like the built-in records.
///
/// # Implementing this trait
///
/// Rust doesn't allow implementing a trait for a partially applied type. We can implement a
/// trait for `Tree<usize>` but not for just `Tree`. The convention is to implement this trait
/// over the uninhabited [`PartiallyApplied`] marker, eg
///
/// ```rust
/// # use mappable::{MappableFrame, PartiallyApplied};
/// # #[derive(Debug, PartialEq, Eq)]
/// enum Pair<A> {
///     Both(A, A),
///     Neither,
/// }
///
/// impl MappableFrame for Pair<PartiallyApplied> {
///     type Frame<X> = Pair<X>;
///
///     fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
///         match input {
///             Pair::Both(a, b) => Pair::Both(f(a), f(b)),
///             Pair::Neither => Pair::Neither,
///         }
///     }
/// }
/// ```
///
/// The same shape-preserving contract as [`MappableImpl`] applies to `map_frame`.
///
/// # Use
///
/// ```rust
/// # use mappable::{frame, map, MappableFrame, PartiallyApplied};
/// # #[derive(Debug, PartialEq, Eq)]
/// # enum Pair<A> {
/// #     Both(A, A),
/// #     Neither,
/// # }
/// #
/// # impl MappableFrame for Pair<PartiallyApplied> {
/// #     type Frame<X> = Pair<X>;
/// #
/// #     fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
/// #         match input {
/// #             Pair::Both(a, b) => Pair::Both(f(a), f(b)),
/// #             Pair::Neither => Pair::Neither,
/// #         }
/// #     }
/// # }
/// let pairs = frame::<Pair<PartiallyApplied>, _, _>();
///
/// assert_eq!(map(&pairs, |n: i32| n + 10, Pair::Both(1, 2)), Pair::Both(11, 12));
/// assert_eq!(map(&pairs, |n: i32| n + 10, Pair::Neither), Pair::Neither);
/// ```
pub trait MappableFrame {
    /// the frame type that is mapped over by `map_frame`
    type Frame<X>;

    /// Apply some function `f` to each element inside a frame
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B>;
}

/// An uninhabited type used to define [`MappableFrame`] instances for partially-applied types.
///
/// For example: the MappableFrame instance for `MyFrame<A>` cannot be written over the
/// partially-applied type `MyFrame`, so instead we write it over `MyFrame<PartiallyApplied>`
#[derive(Clone, Debug)]
pub enum PartiallyApplied {}

/// Build a [`MappableImpl`] that delegates to `F::map_frame`.
pub const fn frame<F: MappableFrame, A, B>() -> MappableImpl<F::Frame<A>, A, B, F::Frame<B>> {
    custom(map_via_frame::<F, A, B> as MapFn<F::Frame<A>, A, B, F::Frame<B>>)
}

fn map_via_frame<F: MappableFrame, A, B>(input: F::Frame<A>, f: &mut dyn FnMut(A) -> B) -> F::Frame<B> {
    F::map_frame(input, f)
}

impl MappableFrame for Option<PartiallyApplied> {
    type Frame<X> = Option<X>;

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B> {
        input.map(f)
    }
}

impl MappableFrame for Vec<PartiallyApplied> {
    type Frame<X> = Vec<X>;

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B> {
        input.into_iter().map(f).collect()
    }
}

// first component is carried along untouched
impl<Fst> MappableFrame for (Fst, PartiallyApplied) {
    type Frame<X> = (Fst, X);

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
        (input.0, f(input.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{map, option, pair, vec};
    use alloc::vec;

    #[test]
    fn frame_agrees_with_direct_records() {
        let xs = vec![1, 2, 3];

        assert_eq!(
            map(&frame::<Vec<PartiallyApplied>, _, _>(), |n: i32| n * 3, xs.clone()),
            map(&vec(), |n: i32| n * 3, xs),
        );
        assert_eq!(
            map(&frame::<Option<PartiallyApplied>, _, _>(), |n: i32| n - 1, Some(1)),
            map(&option(), |n: i32| n - 1, Some(1)),
        );
        assert_eq!(
            map(&frame::<(char, PartiallyApplied), _, _>(), |n: u8| n == 0, ('x', 0)),
            map(&pair(), |n: u8| n == 0, ('x', 0)),
        );
    }
}
