//! Type-level booleans.
//!
//! `Bool<B>` carries a predicate result wherever a type is required instead
//! of a value: as a generic argument, as an associated type, or as a bound
//! through [`IsTrue`]. Every predicate in this crate has a wrapper-type form
//! built on it (see [`crate::is_t!`]).
//!
//! # Example
//!
//! ```rust
//! use typeprobe::logic::{Bit, Bool, False, True};
//!
//! assert!(<True as Bit>::VALUE);
//! assert!(!<<True as Bit>::Not as Bit>::VALUE);
//! assert!(<<False as Bit>::Or<True> as Bit>::VALUE);
//!
//! // Selection happens at the type level.
//! let picked: <Bool<false> as Bit>::If<u8, &str> = "else branch";
//! assert_eq!(picked, "else branch");
//! ```

/// A boolean lifted to the type level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bool<const B: bool>;

/// `Bool<true>`
pub type True = Bool<true>;

/// `Bool<false>`
pub type False = Bool<false>;

/// Operations on type-level booleans.
///
/// Implemented for exactly two types, [`True`] and [`False`]; the
/// connectives never evaluate a const expression, so they work on generic
/// bits too.
pub trait Bit: Copy + Default + 'static {
    /// The value this type carries.
    const VALUE: bool;

    /// Logical negation.
    type Not: Bit;

    /// Logical conjunction with another bit.
    type And<B: Bit>: Bit;

    /// Logical disjunction with another bit.
    type Or<B: Bit>: Bit;

    /// `T` when this bit is true, `E` otherwise.
    type If<T, E>;
}

impl Bit for True {
    const VALUE: bool = true;
    type Not = False;
    type And<B: Bit> = B;
    type Or<B: Bit> = True;
    type If<T, E> = T;
}

impl Bit for False {
    const VALUE: bool = false;
    type Not = True;
    type And<B: Bit> = False;
    type Or<B: Bit> = B;
    type If<T, E> = E;
}

/// Bound satisfied only by [`True`].
///
/// Turns a wrapper-type predicate into a constraint:
/// `where Bool<{ typeprobe::is!(tuple_like: (u8, u16)) }>: IsTrue`.
pub trait IsTrue: Bit {}

impl IsTrue for True {}

/// Type-level conditional: `Select<C, T, E>` is `T` when `C` is [`True`].
pub type Select<C, T, E> = <C as Bit>::If<T, E>;

/// Reads the value back from a bit type.
pub const fn value_of<B: Bit>() -> bool {
    B::VALUE
}
