//! Value-or-error and value-or-absent wrappers.
//!
//! These two predicates are nominal, not structural. A user type counts
//! only after it implements [`Expectable`] or [`Optionable`] itself;
//! `Result` and `Option` are covered here. Stable Rust offers no bound
//! that observes "works with `?`" (the `Try` trait is unstable), and the
//! accessor names `has_value`/`value`/`error` carry no std trait to detect,
//! so opting in is the one place this crate asks a type's author for an
//! impl.

use std::convert::Infallible;

/// Holds either a value or an error.
pub trait Expectable {
    type Value;
    type Error;

    /// The error-only form, `Result<Infallible, Error>`.
    type Unexpected;

    fn has_value(&self) -> bool;

    fn value(&self) -> Option<&Self::Value>;

    fn error(&self) -> Option<&Self::Error>;

    /// Splits off the error, if any, as its own wrapper.
    fn unexpected(self) -> Option<Self::Unexpected>;
}

impl<T, E> Expectable for Result<T, E> {
    type Value = T;
    type Error = E;
    type Unexpected = Result<Infallible, E>;

    fn has_value(&self) -> bool {
        self.is_ok()
    }

    fn value(&self) -> Option<&T> {
        self.as_ref().ok()
    }

    fn error(&self) -> Option<&E> {
        self.as_ref().err()
    }

    fn unexpected(self) -> Option<Result<Infallible, E>> {
        self.err().map(Err)
    }
}

/// Holds either a value or nothing.
///
/// The predicate form `is!(optionable: T)` additionally requires `T` not be
/// [`Expectable`]; a wrapper that offers both is classified as expectable.
pub trait Optionable {
    type Value;

    fn has_value(&self) -> bool;

    /// Consumes the wrapper, yielding the value if present.
    fn value(self) -> Option<Self::Value>;

    /// Borrows the value if present.
    fn get(&self) -> Option<&Self::Value>;
}

impl<T> Optionable for Option<T> {
    type Value = T;

    fn has_value(&self) -> bool {
        self.is_some()
    }

    fn value(self) -> Option<T> {
        self
    }

    fn get(&self) -> Option<&T> {
        self.as_ref()
    }
}
