use crate::sequence::{ElementAt, TypeAt, TypeList};

/// A fixed-arity product whose arity is queryable and whose first position
/// is accessible.
///
/// Blanket-implemented for tuples of arity 1..=[`MAX_ARITY`](crate::MAX_ARITY)
/// and arrays `[T; N]` of the same lengths. The empty tuple and `[T; 0]`
/// have no position 0 and are not tuple-like.
pub trait TupleLike: TypeList + ElementAt<0> {
    /// Number of positions, from the value.
    fn arity(&self) -> usize {
        Self::LEN
    }

    /// The value at position 0.
    fn first(&self) -> &<Self as TypeAt<0>>::Type {
        self.element()
    }
}

impl<T> TupleLike for T where T: TypeList + ElementAt<0> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is;

    fn describe<T: TupleLike>(value: &T) -> usize {
        value.arity()
    }

    #[test]
    fn test_tuples_are_tuple_like() {
        assert!(is!(tuple_like: (u8,)));
        assert!(is!(tuple_like: (u8, String, f64)));
        assert!(!is!(tuple_like: ()));
    }

    #[test]
    fn test_arrays_are_tuple_like() {
        assert!(is!(tuple_like: [u8; 2]));
        assert!(is!(tuple_like: [String; 12]));
        assert!(!is!(tuple_like: [u8; 0]));

        let coords = [3.5f32, -1.0];
        assert_eq!(describe(&coords), 2);
        assert_eq!(*TupleLike::first(&coords), 3.5);
    }

    #[test]
    fn test_other_aggregates_are_not() {
        assert!(!is!(tuple_like: [u8]));
        assert!(!is!(tuple_like: Vec<u8>));
        assert!(!is!(tuple_like: u8));
    }

    #[test]
    fn test_arity_and_first() {
        let triple = ('a', 2u16, "three");
        assert_eq!(describe(&triple), 3);
        assert_eq!(*triple.first(), 'a');
    }
}
