//! Sizedness and dynamic dispatch.
//!
//! Rust has three kinds of dynamically sized types: slices, `str`-like
//! wrappers over slices, and trait objects. A type is *polymorphic* when it
//! is unsized and not backed by a slice, which leaves `dyn Trait`.

use std::ffi::{CStr, OsStr};
use std::path::Path;

/// Implemented for every sized type.
#[doc(hidden)]
pub trait SizedProbe {}

impl<T> SizedProbe for T {}

/// Dynamically sized types whose unsizedness comes from a slice.
///
/// Custom DSTs ending in a slice field can opt in.
pub trait SliceBacked {}

impl<T> SliceBacked for [T] {}
impl SliceBacked for str {}
impl SliceBacked for OsStr {}
impl SliceBacked for Path {}
impl SliceBacked for CStr {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is;
    use std::fmt::Debug;

    trait Shape {
        fn boxed(&self) -> Box<dyn Shape>;
    }

    impl Clone for Box<dyn Shape> {
        fn clone(&self) -> Self {
            self.boxed()
        }
    }

    trait Sealed {}

    #[test]
    fn test_sized() {
        assert!(is!(sized: u8));
        assert!(is!(sized: &str));
        assert!(is!(sized: Box<dyn Debug>));
        assert!(!is!(sized: str));
        assert!(!is!(sized: dyn Debug));
    }

    #[test]
    fn test_polymorphic_is_trait_objects_only() {
        assert!(is!(polymorphic: dyn Debug));
        assert!(is!(polymorphic: dyn Shape));
        assert!(!is!(polymorphic: [u8]));
        assert!(!is!(polymorphic: str));
        assert!(!is!(polymorphic: Path));
        assert!(!is!(polymorphic: Box<dyn Debug>));
    }

    #[test]
    fn test_virtual_cloneable_needs_boxed_clone() {
        assert!(is!(virtual_cloneable: dyn Shape));
        assert!(!is!(virtual_cloneable: dyn Sealed));
        assert!(!is!(virtual_cloneable: [u8]));
        assert!(!is!(virtual_cloneable: String));
    }
}
