//! Iteration-shaped capabilities.
//!
//! A type is range-loopable when a `for` loop accepts it, either borrowed
//! (`for x in &value`) or by value (`for x in value`). The item type is
//! not constrained: `Vec<u8>` yields `&u8`, a bit set may yield owned
//! `bool`s, and `Range<u8>` and `Chars` are iterated by value.
//!
//! Range-loopable types whose borrowed iteration yields entries `(&K, &V)`
//! (`HashMap`, `BTreeMap`, ...) are associative. Every other range-loopable
//! type is array-like.
//!
//! The two loop modes are separate impls of [`RangeLoopable`], selected by
//! its marker parameter. `T: RangeLoopable` reads "loopable by reference";
//! `is!(range_loopable: T)` holds when either mode does.

/// Loop mode marker: `for x in &value`.
pub enum ByRef {}

/// Loop mode marker: `for x in value`.
pub enum ByValue {}

/// Accepted by a `for` loop in the given mode.
pub trait RangeLoopable<Mode = ByRef> {}

impl<T> RangeLoopable<ByRef> for T
where
    T: ?Sized,
    for<'a> &'a T: IntoIterator,
{
}

impl<T: IntoIterator> RangeLoopable<ByValue> for T {}

/// A borrowed element, `&E`.
pub trait Element: sealed::Sealed {
    type Element: ?Sized;
}

/// A borrowed key/value entry, `(&K, &V)`.
pub trait Entry: sealed::Sealed {
    type Key: ?Sized;
    type Mapped: ?Sized;
}

mod sealed {
    pub trait Sealed {}

    impl<E: ?Sized> Sealed for &E {}
    impl<K: ?Sized, V: ?Sized> Sealed for (&K, &V) {}
}

impl<E: ?Sized> Element for &E {
    type Element = E;
}

impl<K: ?Sized, V: ?Sized> Entry for (&K, &V) {
    type Key = K;
    type Mapped = V;
}

/// Iterable by reference, yielding key/value entries.
pub trait Associative {}

impl<T> Associative for T
where
    T: ?Sized,
    for<'a> &'a T: IntoIterator,
    for<'a> <&'a T as IntoIterator>::Item: Entry,
{
}

/// Key type of an associative container.
pub type KeyOf<'a, T> = <<&'a T as IntoIterator>::Item as Entry>::Key;

/// Mapped type of an associative container.
pub type MappedOf<'a, T> = <<&'a T as IntoIterator>::Item as Entry>::Mapped;

/// Element type of a container iterated as `&E`.
pub type ElementOf<'a, T> = <<&'a T as IntoIterator>::Item as Element>::Element;
