//! Best-effort classification from name renderings.
//!
//! Both checks read [`NameToken`] text and inherit its caveats: the answer
//! is fixed for a given toolchain but not guaranteed across toolchains.

use super::{NameShape, NameToken};
use tracing::{debug, debug_span};

/// Whether `T` renders as a named aggregate.
///
/// Rust has no declaration-keyword visibility default to detect, and
/// rustc does not render `struct`/`enum`/`union` keywords. This answers
/// "is `T` a nominal type" instead: true for any path-rendered type, false
/// for primitives, references, pointers, slices, arrays, tuples, fn
/// pointers, trait objects and closures.
///
/// False positives: enums, unions and fn items also render as paths.
///
/// ```rust
/// use typeprobe::name::heuristics::is_struct;
///
/// struct Meters(f64);
///
/// assert!(is_struct::<Meters>());
/// assert!(!is_struct::<(f64, f64)>());
/// assert!(!is_struct::<&Meters>());
/// ```
pub fn is_struct<T: ?Sized>() -> bool {
    let name = NameToken::of::<T>();
    let _span = debug_span!("is_struct", name = %name).entered();

    let shape = name.shape();
    let verdict = shape == NameShape::Path;
    debug!(?shape, verdict, "classified rendering");
    verdict
}

/// Whether `f` is a trait method dispatched through a trait object.
///
/// Recognizes fn items of the form `<dyn Trait as Trait>::method`, which
/// is how a method reached through `dyn Trait` renders.
///
/// False negatives: once coerced to a fn pointer the method's identity is
/// gone, and the answer is `false`.
///
/// ```rust
/// use typeprobe::name::heuristics::is_virtual_fn;
///
/// trait Area {
///     fn area(&self) -> f64;
/// }
///
/// assert!(is_virtual_fn(&<dyn Area as Area>::area));
/// assert!(!is_virtual_fn(&f64::sqrt));
/// ```
pub fn is_virtual_fn<F>(f: &F) -> bool {
    let name = NameToken::of_val(f);
    let _span = debug_span!("is_virtual_fn", name = %name).entered();

    let rendering = name.as_str();
    let verdict = name.shape() == NameShape::QualifiedPath
        && rendering.starts_with("<dyn ")
        && rendering.contains(" as ");
    debug!(verdict, "classified rendering");
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("typeprobe=trace"))
            .with_test_writer()
            .try_init();
    }

    trait Shape {
        fn area(&self) -> f64;
    }

    struct Square(f64);

    impl Square {
        fn side(&self) -> f64 {
            self.0
        }
    }

    impl Shape for Square {
        fn area(&self) -> f64 {
            self.0 * self.0
        }
    }

    enum Suit {
        #[allow(dead_code)]
        Hearts,
    }

    #[test]
    fn test_is_struct() {
        init_tracing();
        assert!(is_struct::<Square>());
        assert!(is_struct::<String>());
        assert!(!is_struct::<u32>());
        assert!(!is_struct::<[Square]>());
        assert!(!is_struct::<[Square; 2]>());
        assert!(!is_struct::<*const Square>());
        assert!(!is_struct::<dyn Shape>());
        assert!(!is_struct::<fn(Square)>());
    }

    #[test]
    fn test_is_struct_false_positive_for_enums() {
        assert!(is_struct::<Suit>());
    }

    #[test]
    fn test_is_virtual_fn() {
        init_tracing();
        assert!(is_virtual_fn(&<dyn Shape as Shape>::area));
        assert!(!is_virtual_fn(&<Square as Shape>::area));
        assert!(!is_virtual_fn(&Square::side));
    }

    #[test]
    fn test_is_virtual_fn_false_negative_for_pointers() {
        let pointer: fn(&(dyn Shape + 'static)) -> f64 = <dyn Shape as Shape>::area;
        assert!(!is_virtual_fn(&pointer));
        assert_eq!(Square(2.0).area(), 4.0);
    }
}
