//! Decomposition of generic types into constructor and arguments.

use super::ctor;
use crate::sequence::TypeList;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

/// A type built by applying a type constructor to arguments.
///
/// Implemented for tuples and the std generic containers. Foreign generic
/// types join by implementing it; nothing else has to change.
pub trait Parameterized {
    /// Marker naming the constructor, from [`ctor`].
    type Constructor;

    /// The type arguments, as a tuple.
    type Args: TypeList;
}

macro_rules! parameterized {
    ($($ty:ident<$($arg:ident),+> => $ctor:ident;)+) => {
        $(
            impl<$($arg),+> Parameterized for $ty<$($arg),+> {
                type Constructor = ctor::$ctor;
                type Args = ($($arg,)+);
            }
        )+
    };
}

parameterized! {
    Option<T> => Option;
    Result<T, E> => Result;
    Vec<T> => Vec;
    VecDeque<T> => VecDeque;
    LinkedList<T> => LinkedList;
    BinaryHeap<T> => BinaryHeap;
    Box<T> => Box;
    Rc<T> => Rc;
    Arc<T> => Arc;
    Cell<T> => Cell;
    RefCell<T> => RefCell;
    HashMap<K, V, S> => HashMap;
    HashSet<T, S> => HashSet;
    BTreeMap<K, V> => BTreeMap;
    BTreeSet<T> => BTreeSet;
    PhantomData<T> => PhantomData;
}

macro_rules! parameterized_tuples {
    ($(($($T:ident),*)),+ $(,)?) => {
        $(
            impl<$($T),*> Parameterized for ($($T,)*) {
                type Constructor = ctor::Tuple;
                type Args = Self;
            }
        )+
    };
}

parameterized_tuples!(
    (),
    (A0),
    (A0, A1),
    (A0, A1, A2),
    (A0, A1, A2, A3),
    (A0, A1, A2, A3, A4),
    (A0, A1, A2, A3, A4, A5),
    (A0, A1, A2, A3, A4, A5, A6),
    (A0, A1, A2, A3, A4, A5, A6, A7),
    (A0, A1, A2, A3, A4, A5, A6, A7, A8),
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9),
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10),
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is, type_at};

    #[test]
    fn test_map_arguments_include_hasher() {
        type Map = HashMap<String, u32>;
        assert_eq!(<<Map as Parameterized>::Args as TypeList>::LEN, 3);
        assert!(is!(same: type_at!(1, <Map as Parameterized>::Args), u32));
    }

    #[test]
    fn test_tuple_arguments_are_the_tuple() {
        assert!(is!(same: <(u8, char) as Parameterized>::Args, (u8, char)));
        assert!(is!(same: <() as Parameterized>::Constructor, ctor::Tuple));
    }
}
