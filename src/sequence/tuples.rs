//! Sequence impls for tuples, one per arity.

use super::{ElementAt, HCons, HNil, TypeAt, TypeList};
use std::mem::size_of;

/// `HCons<A, HCons<B, HNil>>` from `A, B`.
macro_rules! cons_list {
    () => { HNil };
    ($head:ident $(, $tail:ident)*) => { HCons<$head, cons_list!($($tail),*)> };
}

macro_rules! tuple_sequence {
    ($len:literal; $($T:ident @ $i:tt),+) => {
        impl<$($T),+> TypeList for ($($T,)+) {
            type List = cons_list!($($T),+);
            const LEN: usize = $len;
            const SIZES: &'static [usize] = &[$(size_of::<$T>()),+];
        }

        tuple_sequence!(@positions [$($T),+] $($T @ $i),+);
    };
    (@positions $generics:tt $($T:ident @ $i:tt),+) => {
        $(tuple_sequence!(@position $generics $T @ $i);)+
    };
    (@position [$($G:ident),+] $T:ident @ $i:tt) => {
        impl<$($G),+> TypeAt<$i> for ($($G,)+) {
            type Type = $T;
        }

        impl<$($G),+> ElementAt<$i> for ($($G,)+) {
            fn element(&self) -> &$T {
                &self.$i
            }
        }
    };
}

impl TypeList for () {
    type List = HNil;
    const LEN: usize = 0;
    const SIZES: &'static [usize] = &[];
}

tuple_sequence!(1; A0 @ 0);
tuple_sequence!(2; A0 @ 0, A1 @ 1);
tuple_sequence!(3; A0 @ 0, A1 @ 1, A2 @ 2);
tuple_sequence!(4; A0 @ 0, A1 @ 1, A2 @ 2, A3 @ 3);
tuple_sequence!(5; A0 @ 0, A1 @ 1, A2 @ 2, A3 @ 3, A4 @ 4);
tuple_sequence!(6; A0 @ 0, A1 @ 1, A2 @ 2, A3 @ 3, A4 @ 4, A5 @ 5);
tuple_sequence!(7; A0 @ 0, A1 @ 1, A2 @ 2, A3 @ 3, A4 @ 4, A5 @ 5, A6 @ 6);
tuple_sequence!(8; A0 @ 0, A1 @ 1, A2 @ 2, A3 @ 3, A4 @ 4, A5 @ 5, A6 @ 6, A7 @ 7);
tuple_sequence!(9; A0 @ 0, A1 @ 1, A2 @ 2, A3 @ 3, A4 @ 4, A5 @ 5, A6 @ 6, A7 @ 7, A8 @ 8);
tuple_sequence!(10; A0 @ 0, A1 @ 1, A2 @ 2, A3 @ 3, A4 @ 4, A5 @ 5, A6 @ 6, A7 @ 7, A8 @ 8, A9 @ 9);
tuple_sequence!(11; A0 @ 0, A1 @ 1, A2 @ 2, A3 @ 3, A4 @ 4, A5 @ 5, A6 @ 6, A7 @ 7, A8 @ 8, A9 @ 9, A10 @ 10);
tuple_sequence!(12; A0 @ 0, A1 @ 1, A2 @ 2, A3 @ 3, A4 @ 4, A5 @ 5, A6 @ 6, A7 @ 7, A8 @ 8, A9 @ 9, A10 @ 10, A11 @ 11);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::ConsList;

    type Twelve = (u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u64);

    #[test]
    fn test_largest_arity() {
        assert_eq!(<Twelve as TypeList>::LEN, crate::MAX_ARITY);
        assert_eq!(<<Twelve as TypeList>::List as ConsList>::LEN, 12);
        assert_eq!(<Twelve as TypeList>::MAX_INDEX, 11);
    }

    #[test]
    fn test_element_borrows_field() {
        let pair = (String::from("left"), 3u8);
        let left: &String = ElementAt::<0>::element(&pair);
        assert_eq!(left, "left");
    }
}
