//! Type-sequence algebra.
//!
//! A sequence is a tuple type `(A, B, C)` of arity 0..=[`MAX_ARITY`](crate::MAX_ARITY),
//! or an array `[T; N]` with N in 1..=`MAX_ARITY`, read as `(T, ..., T)`.
//! Three operations are provided:
//!
//! - indexed lookup: [`type_at!`](crate::type_at) / [`TypeAt`]
//! - largest-by-size selection: [`max_type!`](crate::max_type) / [`TypeList::MAX_INDEX`]
//! - position lookup: [`index_of!`](crate::index_of) / [`IndexOf`]
//!
//! Every precondition is checked by the compiler. An index past the end has
//! no `TypeAt` impl, a missing type panics during constant evaluation, and
//! neither can reach a running program.
//!
//! ```rust
//! use typeprobe::{index_of, is, max_type, type_at};
//!
//! type Seq = (i32, f64, char);
//!
//! assert!(is!(same: type_at!(1, Seq), f64));
//! assert!(is!(same: max_type!(Seq), f64));
//! assert_eq!(index_of!(char, Seq), 2);
//! ```
//!
//! ```compile_fail
//! type Oops = typeprobe::type_at!(3, (i32, f64, char));
//! let _: Option<Oops> = None;
//! ```
//!
//! ```compile_fail
//! let _ = typeprobe::index_of!(u64, (i32, f64, char));
//! ```

mod arrays;
mod cons;
mod tuples;

pub use cons::{ConsList, HCons, HNil, Here, Locate, Position, There, Uncons};

/// An ordered, fixed-length list of types.
pub trait TypeList {
    /// The same sequence as a cons list (`HCons<A, HCons<B, HNil>>`).
    type List: ConsList;

    /// Number of types in the sequence.
    const LEN: usize;

    /// `size_of` of each element, in order.
    const SIZES: &'static [usize];

    /// Position of the largest element.
    ///
    /// Ties go to the earlier element. Zero for the empty sequence, which
    /// has no element to select.
    const MAX_INDEX: usize = max_index(Self::SIZES);
}

/// The type at position `I`.
///
/// Only implemented for `I < LEN`.
pub trait TypeAt<const I: usize> {
    type Type;
}

/// Positional access to the value at `I`.
pub trait ElementAt<const I: usize>: TypeAt<I> {
    fn element(&self) -> &Self::Type;
}

/// Holds when the sequence has `T` at position `I`.
///
/// Lets probes ask about one position without naming the element type,
/// which would be a hard error past the end.
pub trait Holds<const I: usize, T: ?Sized> {}

impl<S, const I: usize> Holds<I, <S as TypeAt<I>>::Type> for S where S: TypeAt<I> + ?Sized {}

/// `T` occurs in the sequence at the position encoded by `I`.
///
/// The trait form of [`index_of!`](crate::index_of) for generic code. `I` is
/// inferred; a type that occurs twice leaves it ambiguous and is rejected.
pub trait IndexOf<T, I: Position>: TypeList {}

impl<S, T, I> IndexOf<T, I> for S
where
    S: TypeList,
    S::List: Locate<T, I>,
    I: Position,
{
}

/// Position of `T` in `S`, for generic code.
///
/// ```rust
/// use typeprobe::sequence::position;
///
/// const AT: usize = position::<char, (i32, f64, char), _>();
/// assert_eq!(AT, 2);
/// ```
pub const fn position<T, S, I>() -> usize
where
    S: IndexOf<T, I>,
    I: Position,
{
    I::VALUE
}

/// Index of the largest size, reducing left to right with a strict `<`.
pub const fn max_index(sizes: &[usize]) -> usize {
    let mut best = 0;
    let mut i = 1;
    while i < sizes.len() {
        if sizes[best] < sizes[i] {
            best = i;
        }
        i += 1;
    }
    best
}

/// Index of the first `true` flag. Panics when there is none.
///
/// Used by [`index_of!`](crate::index_of) inside a `const` block, where the
/// panic becomes a compile error.
pub const fn first_match(hits: &[bool]) -> usize {
    let mut i = 0;
    while i < hits.len() {
        if hits[i] {
            return i;
        }
        i += 1;
    }
    panic!("type does not occur in the sequence")
}

/// The type at `index` in sequence `S`.
#[macro_export]
macro_rules! type_at {
    ($index:expr, $seq:ty $(,)?) => {
        <$seq as $crate::sequence::TypeAt<{ $index }>>::Type
    };
}

/// The largest element of sequence `S` by `size_of`; ties keep the earlier one.
#[macro_export]
macro_rules! max_type {
    ($seq:ty $(,)?) => {
        <$seq as $crate::sequence::TypeAt<
            { <$seq as $crate::sequence::TypeList>::MAX_INDEX },
        >>::Type
    };
}

/// Position of the first occurrence of `T` in sequence `S`, as a `usize` constant.
#[macro_export]
macro_rules! index_of {
    ($t:ty, $seq:ty $(,)?) => {
        $crate::__index_of!($t, $seq; 0 1 2 3 4 5 6 7 8 9 10 11)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __index_of {
    ($t:ty, $seq:ty; $($i:literal)*) => {
        const {
            $crate::sequence::first_match(&[
                $($crate::implements!($seq where $crate::sequence::Holds<$i, $t>)),*
            ])
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is;

    type Seq = (i32, f64, char);

    #[test]
    fn test_lengths_and_sizes() {
        assert_eq!(<() as TypeList>::LEN, 0);
        assert_eq!(<(u8,) as TypeList>::LEN, 1);
        assert_eq!(<Seq as TypeList>::LEN, 3);
        assert_eq!(<Seq as TypeList>::SIZES, &[4, 8, 4]);
    }

    #[test]
    fn test_type_at_each_position() {
        assert!(is!(same: type_at!(0, Seq), i32));
        assert!(is!(same: type_at!(1, Seq), f64));
        assert!(is!(same: type_at!(2, Seq), char));
    }

    #[test]
    fn test_index_of_round_trips_type_at() {
        assert_eq!(index_of!(type_at!(0, Seq), Seq), 0);
        assert_eq!(index_of!(type_at!(1, Seq), Seq), 1);
        assert_eq!(index_of!(type_at!(2, Seq), Seq), 2);
    }

    #[test]
    fn test_index_of_returns_first_match() {
        assert_eq!(index_of!(u8, (u16, u8, u32, u8)), 1);
    }

    #[test]
    fn test_max_type_tie_break_keeps_left() {
        assert!(is!(same: max_type!((u32, i32)), u32));
        assert!(is!(same: max_type!((i32, u32)), i32));
        assert!(is!(same: max_type!((u8, u16)), u16));
        assert!(is!(same: max_type!((u8, [u8; 3], u16, [u8; 3])), [u8; 3]));
        assert_eq!(<(u8, [u8; 3], u16, [u8; 3]) as TypeList>::MAX_INDEX, 1);
    }

    #[test]
    fn test_max_index_edges() {
        assert_eq!(max_index(&[]), 0);
        assert_eq!(max_index(&[5]), 0);
        assert_eq!(max_index(&[1, 9, 9, 2]), 1);
    }

    #[test]
    fn test_generic_position_lookup() {
        assert_eq!(position::<i32, Seq, _>(), 0);
        assert_eq!(position::<f64, Seq, _>(), 1);
    }

    #[test]
    fn test_element_access() {
        let seq: Seq = (7, 2.5, 'x');
        assert_eq!(*ElementAt::<0>::element(&seq), 7);
        assert_eq!(*ElementAt::<2>::element(&seq), 'x');
    }

    #[test]
    fn test_holds_past_the_end_is_false() {
        assert!(!crate::implements!(Seq where Holds<3, i32>));
        assert!(crate::implements!(Seq where Holds<2, char>));
    }
}
