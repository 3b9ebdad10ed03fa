//! Detection idiom and the three exposure forms of every predicate.
//!
//! A predicate is evaluated by *probing*: the macro builds a throwaway
//! `Probe<T>` type with an inherent constant that only exists when `T`
//! satisfies the bound, and a blanket trait constant that always exists.
//! Path resolution prefers the inherent constant, so an unsupported type
//! reads `false` instead of failing to compile.
//!
//! Each predicate `p` is exposed three ways, all derived from the first:
//!
//! | Form | Syntax | Kind |
//! |------|--------|------|
//! | value | `is!(p: T)` | `bool` constant expression |
//! | wrapper type | `is_t!(p: T)` | [`Bool`](crate::logic::Bool) implementing [`Bit`](crate::logic::Bit) |
//! | constraint | `require!(p: T)` | compile-time assertion item |
//!
//! Probes see only the types written at the call site. Inside a generic
//! function a probe on a type parameter cannot be resolved; generic code
//! uses the trait bounds instead (`T: RangeLoopable`, ...).
//!
//! Some predicates place a type inside the probe's bound (the comparison
//! side of `same`, `one_of`, `within_variadic` and the argument of
//! `constructible_to_string`). Reference types there need a named lifetime:
//! `is!(same: T, &'static str)`.

/// Evaluates to `true` when the type satisfies the bound, `false` otherwise.
///
/// Never fails to compile for a well-formed concrete type. The type and
/// the bound are separated by `where`, which keeps fn pointer types
/// without a return type (`fn(u8)`) parseable.
///
/// ```rust
/// use typeprobe::implements;
///
/// const CLONE: bool = implements!(String where Clone);
/// const COPY: bool = implements!(String where Copy);
/// assert!(CLONE);
/// assert!(!COPY);
/// assert!(implements!(fn(u8) where Copy));
/// ```
#[macro_export]
macro_rules! implements {
    ($ty:ty where $($bound:tt)+) => {{
        #[allow(dead_code)]
        trait Fallback {
            const VALUE: bool = false;
        }
        impl<X: ?::core::marker::Sized> Fallback for X {}

        #[allow(dead_code)]
        struct Probe<X: ?::core::marker::Sized>(::core::marker::PhantomData<X>);

        #[allow(dead_code)]
        impl<X: ?::core::marker::Sized + $($bound)+> Probe<X> {
            const VALUE: bool = true;
        }

        <Probe<$ty>>::VALUE
    }};
}

/// Value form of every predicate.
///
/// ```rust
/// use std::collections::HashMap;
/// use typeprobe::is;
///
/// const MAP_IS_ASSOCIATIVE: bool = is!(associative: HashMap<String, u32>);
/// assert!(MAP_IS_ASSOCIATIVE);
/// assert!(is!(array_like: Vec<u8>));
/// assert!(is!(one_of: u8, [u16, u8, i8]));
/// assert!(!is!(tuple_like: HashMap<String, u32>));
/// ```
#[macro_export]
macro_rules! is {
    // Membership & identity
    (same: $a:ty, $b:ty $(,)?) => {
        $crate::implements!($a where $crate::identity::SameAs<$b>)
    };
    (all_same: $(,)?) => {
        true
    };
    (all_same: $first:ty $(, $rest:ty)* $(,)?) => {
        true $(&& $crate::is!(same: $first, $rest))*
    };
    (one_of: $t:ty, [$($set:ty),* $(,)?] $(,)?) => {
        false $(|| $crate::is!(same: $t, $set))*
    };
    (within_variadic: $t:ty, $p:ty $(,)?) => {
        $crate::__within_variadic!($p, $t; 0 1 2 3 4 5 6 7 8 9 10 11)
    };
    (specializes: $t:ty, $ctor:ty $(,)?) => {
        $crate::implements!($t where $crate::identity::Specializes<$ctor>)
    };
    (derived_from_specializes: $t:ty, $ctor:ty $(,)?) => {
        $crate::is!(specializes: $t, $ctor)
            || $crate::implements!($t where $crate::identity::DerefSpecializes<$ctor>)
            || $crate::implements!($t where $crate::identity::DerefDerefSpecializes<$ctor>)
    };

    // Capabilities
    (range_loopable: $t:ty $(,)?) => {
        $crate::implements!($t where $crate::capability::RangeLoopable<$crate::capability::ByRef>)
            || $crate::implements!($t where $crate::capability::RangeLoopable<$crate::capability::ByValue>)
    };
    (associative: $t:ty $(,)?) => {
        $crate::is!(range_loopable: $t)
            && $crate::implements!($t where $crate::capability::Associative)
    };
    (array_like: $t:ty $(,)?) => {
        $crate::is!(range_loopable: $t) && !$crate::is!(associative: $t)
    };
    (tuple_like: $t:ty $(,)?) => {
        $crate::implements!($t where $crate::capability::TupleLike)
    };
    (expectable: $t:ty $(,)?) => {
        $crate::implements!($t where $crate::capability::Expectable)
    };
    (optionable: $t:ty $(,)?) => {
        !$crate::is!(expectable: $t)
            && $crate::implements!($t where $crate::capability::Optionable)
    };
    (awaiter: $t:ty $(,)?) => {
        $crate::implements!($t where $crate::capability::Awaiter)
    };
    (awaitable: $t:ty $(,)?) => {
        $crate::is!(awaiter: $t)
            || $crate::implements!($t where $crate::capability::Awaitable)
    };
    (sized: $t:ty $(,)?) => {
        $crate::implements!($t where $crate::capability::dynamic::SizedProbe)
    };
    (polymorphic: $t:ty $(,)?) => {
        !$crate::is!(sized: $t)
            && !$crate::implements!($t where $crate::capability::dynamic::SliceBacked)
    };
    (virtual_cloneable: $t:ty $(,)?) => {
        $crate::is!(polymorphic: $t)
            && $crate::implements!(::std::boxed::Box<$t> where ::core::clone::Clone)
    };
    (character: $t:ty $(,)?) => {
        $crate::implements!($t where $crate::capability::primitive::Character)
    };
    (non_char_integral: $t:ty $(,)?) => {
        $crate::implements!($t where $crate::capability::primitive::Integral)
            && !$crate::is!(character: $t)
    };
    (constructible_to_string: $t:ty $(,)?) => {
        $crate::implements!(::std::string::String where ::core::convert::From<$t>)
    };
}

/// Wrapper-type form: `Bool<{ is!(...) }>`.
///
/// ```rust
/// use typeprobe::{is_t, logic::{Bit, True}};
///
/// type VecIsArrayLike = is_t!(array_like: Vec<u8>);
/// assert!(<VecIsArrayLike as Bit>::VALUE);
/// let _: True = VecIsArrayLike::default();
/// ```
#[macro_export]
macro_rules! is_t {
    ($($predicate:tt)+) => {
        $crate::logic::Bool<{ $crate::is!($($predicate)+) }>
    };
}

/// Constraint form: fails compilation unless the predicate holds.
///
/// ```rust
/// typeprobe::require!(tuple_like: (u8, char));
/// typeprobe::require!(awaitable: std::future::Ready<u8>);
/// ```
///
/// ```compile_fail
/// typeprobe::require!(tuple_like: Vec<u8>);
/// ```
#[macro_export]
macro_rules! require {
    ($($predicate:tt)+) => {
        const _: () = ::core::assert!(
            $crate::is!($($predicate)+),
            ::core::concat!("requirement not met: ", ::core::stringify!($($predicate)+))
        );
    };
}

/// ORs the type-argument probe over the listed positions.
#[doc(hidden)]
#[macro_export]
macro_rules! __within_variadic {
    ($p:ty, $t:ty; $($i:literal)*) => {
        false $(|| $crate::implements!($p where $crate::identity::ArgAt<$i, $t>))*
    };
}

#[cfg(test)]
mod tests {
    use crate::logic::{Bit, Bool, IsTrue};

    trait Marker {}
    impl Marker for u8 {}

    fn only_true<B: IsTrue>() {}

    #[test]
    fn test_implements_reads_false_for_missing_bound() {
        assert!(implements!(u8 where Marker));
        assert!(!implements!(u16 where Marker));
        assert!(!implements!(str where Marker));
        assert!(!implements!(dyn Fn() where Marker));
    }

    #[test]
    fn test_implements_accepts_unit_returning_fn_pointers() {
        assert!(implements!(fn(u8) where Clone));
        assert!(implements!(fn() where Copy));
        assert!(!implements!(fn(u8) where Default));
        assert!(implements!(for<'a> fn(&'a u8) where Clone));
        assert!(!implements!(unsafe extern "C" fn() where Marker));
        assert!(is!(same: fn(u8), fn(u8)));
        assert!(!is!(same: fn(u8), fn(u16)));
    }

    #[test]
    fn test_implements_is_usable_in_const_context() {
        const HITS: [bool; 2] = [implements!(u8 where Marker), implements!(i8 where Marker)];
        assert_eq!(HITS, [true, false]);
    }

    #[test]
    fn test_forms_agree() {
        const VALUE: bool = is!(range_loopable: [u8; 4]);
        assert_eq!(VALUE, <is_t!(range_loopable: [u8; 4]) as Bit>::VALUE);
        only_true::<is_t!(range_loopable: [u8; 4])>();
        only_true::<Bool<{ is!(same: u8, u8) }>>();
    }

    require!(array_like: Vec<u8>);
    require!(same: u32, u32);
    require!(all_same:);
}
