//! Sequence impls for fixed-size arrays `[T; N]`, N in 1..=12.
//!
//! An array reads as the sequence `(T, T, ..., T)`. `[T; 0]` is left out:
//! it has no position 0, which is all it would add over `()`.

use super::{ElementAt, HCons, HNil, TypeAt, TypeList};
use std::mem::size_of;

macro_rules! array_sequence {
    ($len:literal; $($i:tt)+) => {
        impl<T> TypeList for [T; $len] {
            type List = array_sequence!(@list T; $($i)+);
            const LEN: usize = $len;
            const SIZES: &'static [usize] = &[size_of::<T>(); $len];
        }

        $(
            impl<T> TypeAt<$i> for [T; $len] {
                type Type = T;
            }

            impl<T> ElementAt<$i> for [T; $len] {
                fn element(&self) -> &T {
                    &self[$i]
                }
            }
        )+
    };
    (@list $T:ident;) => { HNil };
    (@list $T:ident; $head:tt $($tail:tt)*) => { HCons<$T, array_sequence!(@list $T; $($tail)*)> };
}

array_sequence!(1; 0);
array_sequence!(2; 0 1);
array_sequence!(3; 0 1 2);
array_sequence!(4; 0 1 2 3);
array_sequence!(5; 0 1 2 3 4);
array_sequence!(6; 0 1 2 3 4 5);
array_sequence!(7; 0 1 2 3 4 5 6);
array_sequence!(8; 0 1 2 3 4 5 6 7);
array_sequence!(9; 0 1 2 3 4 5 6 7 8);
array_sequence!(10; 0 1 2 3 4 5 6 7 8 9);
array_sequence!(11; 0 1 2 3 4 5 6 7 8 9 10);
array_sequence!(12; 0 1 2 3 4 5 6 7 8 9 10 11);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is;
    use crate::sequence::ConsList;

    #[test]
    fn test_array_reads_as_repeated_type() {
        assert_eq!(<[u16; 3] as TypeList>::LEN, 3);
        assert_eq!(<[u16; 3] as TypeList>::SIZES, &[2, 2, 2]);
        assert_eq!(<<[u8; 12] as TypeList>::List as ConsList>::LEN, crate::MAX_ARITY);
        assert!(is!(same: crate::type_at!(2, [char; 3]), char));
    }

    #[test]
    fn test_array_element_access() {
        let words = ["zero", "one", "two"];
        assert_eq!(*ElementAt::<1>::element(&words), "one");
        assert_eq!(*ElementAt::<2>::element(&words), "two");
    }

    #[test]
    fn test_empty_and_oversized_arrays_are_not_sequences() {
        assert!(!crate::implements!([u8; 0] where TypeList));
        assert!(!crate::implements!([u8; 13] where TypeList));
        assert!(!crate::implements!([u8; 2] where TypeAt<2>));
    }
}
