//! Names of types and compile-time values.
//!
//! A [`NameToken`] is the compiler's rendering of a type, taken from
//! [`std::any::type_name`]. The format is stable within one toolchain but is
//! not specified, so everything that depends on its exact text goes through
//! [`NameToken::between`]; the scanners behind [`NameToken::shape`],
//! [`NameToken::generic_arguments`] and [`NameToken::short`] only rely on
//! bracket structure.
//!
//! ```rust
//! use typeprobe::name::{NameOptions, NameShape, NameToken};
//!
//! let name = NameToken::of::<Vec<Option<String>>>();
//! assert_eq!(name.shape(), NameShape::Path);
//! assert_eq!(name.short(), "Vec<Option<String>>");
//! assert_eq!(
//!     name.render(&NameOptions::default().short_paths().with_max_depth(1)),
//!     "Vec<Option<..>>"
//! );
//! ```
//!
//! Compile-time values are named through a const-generic marker:
//!
//! ```rust
//! use typeprobe::nontype_name;
//!
//! assert_eq!(nontype_name!(u32: 40 + 2).unwrap().as_str(), "42");
//! assert_eq!(nontype_name!(char: 'x').unwrap().as_str(), "'x'");
//! ```

pub mod heuristics;
mod options;
mod parse;

pub use options::NameOptions;
pub use parse::NameShape;

use crate::errors::{NameError, Result};
use std::fmt;
use tracing::trace;

/// The compiler's rendering of a type or value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameToken(&'static str);

impl NameToken {
    pub fn of<T: ?Sized>() -> Self {
        Self(std::any::type_name::<T>())
    }

    pub fn of_val<T: ?Sized>(value: &T) -> Self {
        Self(std::any::type_name_of_val(value))
    }

    /// Wraps a rendering obtained elsewhere, such as a stored `type_name`.
    pub const fn from_rendering(rendering: &'static str) -> Self {
        Self(rendering)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// The text strictly between the first `prefix` and the last `suffix`
    /// that follows it.
    ///
    /// This is the one operation that depends on how the compiler spells a
    /// rendering; callers pass markers they know appear in it.
    pub fn between(self, prefix: &str, suffix: &str) -> Result<NameToken> {
        let rendering = self.0;
        let start = match rendering.find(prefix) {
            Some(at) => at + prefix.len(),
            None => {
                trace!(rendering, prefix, "prefix marker not found");
                return Err(NameError::marker_not_found(rendering, prefix));
            }
        };
        match rendering[start..].rfind(suffix) {
            Some(len) => Ok(Self(&rendering[start..start + len])),
            None => {
                trace!(rendering, suffix, "suffix marker not found");
                Err(NameError::marker_not_found(rendering, suffix))
            }
        }
    }

    pub fn shape(self) -> NameShape {
        parse::shape(self.0)
    }

    /// Arguments of the first generic argument list outside any bracket,
    /// as written.
    pub fn generic_arguments(self) -> Result<Vec<&'static str>> {
        parse::generic_arguments(self.0).inspect_err(|err| {
            trace!(rendering = self.0, %err, "could not split generic arguments");
        })
    }

    /// The rendering with module paths dropped.
    pub fn short(self) -> String {
        parse::short(self.0)
    }

    pub fn render(self, options: &NameOptions) -> String {
        let base = if options.qualified {
            self.0.to_owned()
        } else {
            self.short()
        };
        match options.max_depth {
            Some(depth) => parse::collapse(&base, depth),
            None => base,
        }
    }
}

impl fmt::Display for NameToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for NameToken {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Names a compile-time value of a primitive type.
///
/// Accepts integer primitives, `bool` and `char`, with any constant
/// expression as the value. Evaluates to `Result<NameToken>`.
#[macro_export]
macro_rules! nontype_name {
    ($ty:ident : $value:expr $(,)?) => {
        $crate::name::NameToken::of::<$crate::name::value::$ty<{ $value }>>().between(
            ::core::concat!("::", ::core::stringify!($ty), "<"),
            ">",
        )
    };
}

/// Const-generic markers rendered by [`nontype_name!`](crate::nontype_name).
#[doc(hidden)]
pub mod value {
    #![allow(non_camel_case_types)]

    macro_rules! value_markers {
        ($($ty:ident)+) => {
            $(pub struct $ty<const V: ::core::primitive::$ty>;)+
        };
    }

    value_markers!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize bool char);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Celsius(#[allow(dead_code)] f32);

    #[test]
    fn test_of_and_of_val_agree() {
        let reading = Celsius(21.5);
        assert_eq!(NameToken::of::<Celsius>(), NameToken::of_val(&reading));
        assert!(NameToken::of::<Celsius>().as_str().ends_with("::Celsius"));
    }

    #[test]
    fn test_of_val_on_unsized() {
        let text: &str = "probe";
        assert_eq!(NameToken::of_val(text).as_str(), "str");
    }

    #[test]
    fn test_between() {
        let token = NameToken::of::<Option<u8>>();
        assert_eq!(token.between("Option<", ">").map(NameToken::as_str), Ok("u8"));
        assert!(matches!(
            token.between("Result<", ">"),
            Err(NameError::MarkerNotFound { .. })
        ));
    }

    #[test]
    fn test_nontype_names() {
        assert_eq!(nontype_name!(u8: 7).map(NameToken::as_str), Ok("7"));
        assert_eq!(nontype_name!(i64: -3).map(NameToken::as_str), Ok("-3"));
        assert_eq!(nontype_name!(bool: true).map(NameToken::as_str), Ok("true"));
        assert_eq!(nontype_name!(char: '>').map(NameToken::as_str), Ok("'>'"));
    }

    #[test]
    fn test_render_options() {
        let token = NameToken::of::<Vec<String>>();
        assert_eq!(token.render(&NameOptions::default()), token.as_str());
        assert_eq!(token.render(&NameOptions::default().short_paths()), "Vec<String>");
        assert_eq!(
            token.render(&NameOptions::default().with_max_depth(0)),
            "alloc::vec::Vec<..>"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(NameToken::of::<u16>().to_string(), "u16");
    }
}
