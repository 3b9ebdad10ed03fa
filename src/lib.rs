//! Compile-time classification and decomposition of types.
//!
//! Generic code asks questions about types ("is this iterable by
//! reference?", "what are this signature's parameters?") and gets answers
//! before the program runs. Every predicate has three forms that always
//! agree:
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use typeprobe::{is, is_t, logic::Bit, require};
//!
//! const ASSOC: bool = is!(associative: BTreeMap<u8, String>);
//! type Assoc = is_t!(associative: BTreeMap<u8, String>);
//! require!(associative: BTreeMap<u8, String>);
//!
//! assert_eq!(ASSOC, <Assoc as Bit>::VALUE);
//! ```
//!
//! Generic code that cannot name its types concretely uses the trait forms
//! ([`capability::Associative`], [`identity::Specializes`], ...).
//!
//! Names of types and values ([`name`]) are the exception: they come from
//! `std::any::type_name`, which is evaluated at run time.

// Export modules for library usage
pub mod capability;
pub mod errors;
pub mod identity;
pub mod logic;
pub mod name;
pub mod probe;
pub mod sequence;
pub mod signature;

/// Largest tuple arity and parameter count with sequence and signature impls.
pub const MAX_ARITY: usize = 12;

// Re-export commonly used types
pub use crate::errors::{NameError, Result};
pub use crate::logic::{Bit, Bool, False, IsTrue, True};
pub use crate::name::{NameOptions, NameShape, NameToken};
pub use crate::sequence::{TypeAt, TypeList};
pub use crate::signature::{Callable, FunctionSignature, MethodSignature, Qualifiers};
