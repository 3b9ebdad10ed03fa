//! Cons-list view of a sequence, used for recursive lookups.

use std::marker::PhantomData;

/// The empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HNil;

/// A list with head `H` and tail `T`. Never instantiated with values.
pub struct HCons<H, T>(PhantomData<(H, T)>);

/// Type-level lists built from [`HNil`] and [`HCons`].
pub trait ConsList {
    const LEN: usize;
}

impl ConsList for HNil {
    const LEN: usize = 0;
}

impl<H, T: ConsList> ConsList for HCons<H, T> {
    const LEN: usize = T::LEN + 1;
}

/// Head/tail split of a non-empty list.
pub trait Uncons: ConsList {
    type Head;
    type Tail: ConsList;
}

impl<H, T: ConsList> Uncons for HCons<H, T> {
    type Head = H;
    type Tail = T;
}

/// Position marker: the head of the list.
pub struct Here;

/// Position marker: somewhere in the tail, at `I`.
pub struct There<I>(PhantomData<I>);

/// Numeric value of a position marker.
pub trait Position {
    const VALUE: usize;
}

impl Position for Here {
    const VALUE: usize = 0;
}

impl<I: Position> Position for There<I> {
    const VALUE: usize = I::VALUE + 1;
}

/// `T` is found in the list at position `I`.
///
/// The two impls differ in `I`, so they never overlap; the position is
/// inferred by the compiler.
pub trait Locate<T, I> {}

impl<T, Tail> Locate<T, Here> for HCons<T, Tail> {}

impl<T, H, Tail, I> Locate<T, There<I>> for HCons<H, Tail> where Tail: Locate<T, I> {}
