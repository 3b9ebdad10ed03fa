//! `FunctionSignature` and `MethodSignature` impls for every fn-pointer
//! shape: ten qualifier prefixes times arities 0..=12.

use super::{
    Abi, FunctionSignature, MethodSignature, Qualifiers, Receiver, ReceiverKind, Safety, Unwind,
};

/// Both impls for one prefix and one parameter list.
macro_rules! fn_shape {
    ([$($prefix:tt)*] $safety:ident $abi:ident $unwind:ident; $($A:ident)*) => {
        impl<R $(, $A)*> FunctionSignature for $($prefix)* fn($($A),*) -> R {
            type Return = R;
            type Params = ($($A,)*);
            const QUALIFIERS: Qualifiers =
                Qualifiers::free(Safety::$safety, Abi::$abi, Unwind::$unwind);
        }

        impl<Cls, S, R $(, $A)*> MethodSignature<Cls> for $($prefix)* fn(S $(, $A)*) -> R
        where
            Cls: ?Sized,
            S: Receiver<Cls>,
        {
            type This = Cls;
            type Return = R;
            type Receiver = S;
            type Args = ($($A,)*);
            const RECEIVER: ReceiverKind = S::KIND;
            const QUALIFIERS: Qualifiers =
                Qualifiers::free(Safety::$safety, Abi::$abi, Unwind::$unwind).with_receiver(S::KIND);
        }
    };
}

/// Every qualifier prefix for one parameter list.
macro_rules! fn_shapes {
    ($($A:ident)*) => {
        fn_shape!([] Safe Rust MayUnwind; $($A)*);
        fn_shape!([unsafe] Unsafe Rust MayUnwind; $($A)*);
        fn_shape!([extern "C"] Safe C NoUnwind; $($A)*);
        fn_shape!([unsafe extern "C"] Unsafe C NoUnwind; $($A)*);
        fn_shape!([extern "C-unwind"] Safe C MayUnwind; $($A)*);
        fn_shape!([unsafe extern "C-unwind"] Unsafe C MayUnwind; $($A)*);
        fn_shape!([extern "system"] Safe System NoUnwind; $($A)*);
        fn_shape!([unsafe extern "system"] Unsafe System NoUnwind; $($A)*);
        fn_shape!([extern "system-unwind"] Safe System MayUnwind; $($A)*);
        fn_shape!([unsafe extern "system-unwind"] Unsafe System MayUnwind; $($A)*);
    };
}

/// `fn_shapes!` for the given list and every suffix of it.
macro_rules! fn_arities {
    () => {
        fn_shapes!();
    };
    ($head:ident $($tail:ident)*) => {
        fn_shapes!($head $($tail)*);
        fn_arities!($($tail)*);
    };
}

fn_arities!(A0 A1 A2 A3 A4 A5 A6 A7 A8 A9 A10 A11);
