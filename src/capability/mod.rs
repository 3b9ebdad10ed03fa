//! Capability predicates.
//!
//! Structural tests answering "can this type be used as X?". Most are
//! satisfied through std traits the type already implements
//! (`IntoIterator`, `Future`, `IntoFuture`, `Clone`). `expectable` and
//! `optionable` are the exception: a type opts in by implementing
//! [`Expectable`] or [`Optionable`], which this crate does for `Result`
//! and `Option`.
//!
//! | Predicate | Holds when |
//! |-----------|------------|
//! | `range_loopable` | `&T` or `T` is `IntoIterator`, any item type |
//! | `associative` | range-loopable, items are `(&K, &V)` |
//! | `array_like` | range-loopable and not associative |
//! | `tuple_like` | arity is known and position 0 is accessible |
//! | `expectable` | value-or-error (`Result`) |
//! | `optionable` | value-or-absent (`Option`), never also expectable |
//! | `awaiter` | `Future` |
//! | `awaitable` | awaiter, or `IntoFuture` |
//! | `virtual_cloneable` | trait object with `Box<T>: Clone` |
//!
//! ```rust
//! use std::collections::{BTreeMap, HashSet};
//! use typeprobe::is;
//!
//! assert!(is!(associative: BTreeMap<u8, String>));
//! assert!(!is!(array_like: BTreeMap<u8, String>));
//! assert!(is!(array_like: HashSet<u8>));
//! assert!(is!(array_like: [u8; 16]));
//! assert!(is!(range_loopable: std::ops::Range<u8>));
//! assert!(!is!(range_loopable: str));
//! ```

pub mod dynamic;
mod future;
mod outcome;
pub mod primitive;
mod range;
mod tuple;

pub use future::{Awaitable, Awaiter};
pub use outcome::{Expectable, Optionable};
pub use range::{
    Associative, ByRef, ByValue, Element, ElementOf, Entry, KeyOf, MappedOf, RangeLoopable,
};
pub use tuple::TupleLike;
