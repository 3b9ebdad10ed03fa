//! Membership and identity predicates.
//!
//! | Predicate | Value form | Trait form |
//! |-----------|-----------|------------|
//! | identical | `is!(same: A, B)` | `A: SameAs<B>` |
//! | all identical | `is!(all_same: A, B, C)` | `(A, B, C): AllSame` |
//! | membership | `is!(one_of: T, [A, B, C])` | `T: OneOf<(A, B, C), I>` |
//! | type argument | `is!(within_variadic: T, P)` | `P: ArgAt<N, T>` |
//! | specialization | `is!(specializes: T, ctor::Vec)` | `T: Specializes<ctor::Vec>` |
//! | through deref | `is!(derived_from_specializes: T, ctor::Vec)` | - |
//!
//! ```rust
//! use std::collections::HashMap;
//! use typeprobe::{identity::ctor, is};
//!
//! assert!(is!(all_same: u8, u8, u8));
//! assert!(is!(within_variadic: u32, HashMap<String, u32>));
//! assert!(!is!(within_variadic: u32, String));
//! assert!(is!(specializes: Vec<u8>, ctor::Vec));
//! assert!(!is!(specializes: Vec<u8>, ctor::VecDeque));
//! ```

pub mod ctor;
mod family;

pub use family::Parameterized;

use crate::sequence::{Holds, IndexOf, Position};
use std::ops::Deref;

/// `Self` and `T` are the same type.
pub trait SameAs<T: ?Sized> {}

impl<T: ?Sized> SameAs<T> for T {}

/// Every element of the tuple is the same type. Vacuous for `()` and `(T,)`.
pub trait AllSame {}

/// `Self` occurs in the sequence `S`, at the position encoded by `I`.
pub trait OneOf<S, I: Position> {}

impl<T, S, I> OneOf<S, I> for T
where
    S: IndexOf<T, I>,
    I: Position,
{
}

/// The type arguments of `Self` have `T` at position `I`.
pub trait ArgAt<const I: usize, T: ?Sized> {}

impl<P, T, const I: usize> ArgAt<I, T> for P
where
    P: Parameterized,
    P::Args: Holds<I, T>,
{
}

/// `Self` is an instance of the type constructor `C`.
pub trait Specializes<C> {}

impl<T: Parameterized> Specializes<T::Constructor> for T {}

/// One deref step from `Self` lands on an instance of `C`.
#[doc(hidden)]
pub trait DerefSpecializes<C> {}

impl<T, C> DerefSpecializes<C> for T
where
    T: Deref + ?Sized,
    T::Target: Specializes<C>,
{
}

/// Two deref steps from `Self` land on an instance of `C`.
#[doc(hidden)]
pub trait DerefDerefSpecializes<C> {}

impl<T, C> DerefDerefSpecializes<C> for T
where
    T: Deref + ?Sized,
    T::Target: DerefSpecializes<C>,
{
}

macro_rules! all_same_tuples {
    ($(($($T:ident),+)),+ $(,)?) => {
        $(impl<T> AllSame for ($($T,)+) {})+
    };
}

impl AllSame for () {}

all_same_tuples!(
    (T),
    (T, T),
    (T, T, T),
    (T, T, T, T),
    (T, T, T, T, T),
    (T, T, T, T, T, T),
    (T, T, T, T, T, T, T),
    (T, T, T, T, T, T, T, T),
    (T, T, T, T, T, T, T, T, T),
    (T, T, T, T, T, T, T, T, T, T),
    (T, T, T, T, T, T, T, T, T, T, T),
    (T, T, T, T, T, T, T, T, T, T, T, T),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{implements, is};
    use std::collections::{BTreeMap, HashMap};
    use std::rc::Rc;

    struct Stack(Vec<u8>);

    impl Deref for Stack {
        type Target = Vec<u8>;

        fn deref(&self) -> &Vec<u8> {
            &self.0
        }
    }

    struct Guard(Stack);

    impl Deref for Guard {
        type Target = Stack;

        fn deref(&self) -> &Stack {
            &self.0
        }
    }

    fn member_at<T, S, I>() -> usize
    where
        T: OneOf<S, I>,
        I: Position,
    {
        I::VALUE
    }

    #[test]
    fn test_all_same_is_vacuous_for_short_lists() {
        assert!(is!(all_same:));
        assert!(is!(all_same: String));
        assert!(is!(all_same: u8, u8));
        assert!(!is!(all_same: u8, u8, i8));
    }

    #[test]
    fn test_all_same_trait_form_agrees() {
        assert!(implements!((u8, u8, u8) where AllSame));
        assert!(!implements!((u8, i8, u8) where AllSame));
        assert!(implements!(() where AllSame));
    }

    #[test]
    fn test_one_of() {
        assert!(is!(one_of: u32, [u32, String, f64]));
        assert!(is!(one_of: f64, [u32, String, f64]));
        assert!(!is!(one_of: i64, [u32, String]));
        assert!(!is!(one_of: i64, []));
    }

    #[test]
    fn test_one_of_trait_form_reports_position() {
        assert_eq!(member_at::<String, (u32, String, f64), _>(), 1);
    }

    #[test]
    fn test_within_variadic() {
        assert!(is!(within_variadic: String, HashMap<String, u32>));
        assert!(is!(within_variadic: u32, BTreeMap<String, u32>));
        assert!(is!(within_variadic: char, (u8, u16, char)));
        assert!(!is!(within_variadic: u64, Option<u32>));
        assert!(!is!(within_variadic: u8, u8));
    }

    #[test]
    fn test_specializes_exact_shape_only() {
        assert!(is!(specializes: Option<u8>, ctor::Option));
        assert!(is!(specializes: (u8, char), ctor::Tuple));
        assert!(is!(specializes: Rc<String>, ctor::Rc));
        assert!(!is!(specializes: Stack, ctor::Vec));
        assert!(!is!(specializes: u8, ctor::Option));
    }

    #[test]
    fn test_derived_from_specializes_follows_deref() {
        assert!(is!(derived_from_specializes: Vec<u8>, ctor::Vec));
        assert!(is!(derived_from_specializes: Stack, ctor::Vec));
        assert!(is!(derived_from_specializes: Guard, ctor::Vec));
        assert!(!is!(derived_from_specializes: Stack, ctor::Option));
        assert!(!is!(derived_from_specializes: String, ctor::Vec));
    }
}
