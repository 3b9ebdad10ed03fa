//! Function-signature decomposition.
//!
//! Every fn-pointer type decomposes into a return type, an ordered
//! parameter tuple, and a [`Qualifiers`] record:
//!
//! ```rust
//! use typeprobe::{is, signature::{Abi, FunctionSignature, ParamOf, ReturnOf, Unwind}};
//!
//! type Handler = unsafe extern "C" fn(i32, *const u8) -> bool;
//!
//! assert_eq!(<Handler as FunctionSignature>::ARITY, 2);
//! assert!(is!(same: ReturnOf<Handler>, bool));
//! assert!(is!(same: ParamOf<Handler, 1>, *const u8));
//!
//! let q = <Handler as FunctionSignature>::QUALIFIERS;
//! assert!(q.is_unsafe());
//! assert_eq!(q.abi, Abi::C);
//! assert_eq!(q.unwind, Unwind::NoUnwind);
//! ```
//!
//! Method-shaped pointers, whose first parameter is a receiver of some
//! type, also decompose through [`MethodSignature`]. Closures and fn items
//! decompose through [`Callable`], which names the equivalent pointer.
//!
//! Only concrete, non-higher-ranked pointer shapes of arity
//! 0..=[`MAX_ARITY`](crate::MAX_ARITY) are covered; anything else has no
//! impl and does not compile:
//!
//! ```compile_fail
//! use typeprobe::signature::FunctionSignature;
//!
//! let _ = <for<'a> fn(&'a u8) as FunctionSignature>::ARITY;
//! ```

mod callable;
mod receiver;
mod shapes;

pub use callable::{arity_of, Callable};
pub use receiver::{Receiver, ReceiverKind};

use crate::sequence::{TypeAt, TypeList};

/// Whether calling requires an `unsafe` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Safety {
    Safe,
    Unsafe,
}

/// How the receiver is held, for method shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceCategory {
    /// No receiver.
    None,
    /// Borrowed in place: `&Self`, `&mut Self`, `Pin<&Self>`, `Pin<&mut Self>`.
    Borrowed,
    /// Moved in: `Self`, `Box<Self>`, `Rc<Self>`, `Arc<Self>`.
    Owned,
}

/// Calling convention, without its unwind flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Abi {
    Rust,
    C,
    System,
}

/// Whether a panic may unwind out of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unwind {
    MayUnwind,
    NoUnwind,
}

/// The qualifier record of a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Qualifiers {
    /// The receiver grants shared access only.
    pub is_const: bool,
    pub safety: Safety,
    pub reference: ReferenceCategory,
    pub abi: Abi,
    pub unwind: Unwind,
}

impl Qualifiers {
    /// Qualifiers of a free function (no receiver).
    pub const fn free(safety: Safety, abi: Abi, unwind: Unwind) -> Self {
        Self {
            is_const: false,
            safety,
            reference: ReferenceCategory::None,
            abi,
            unwind,
        }
    }

    /// Folds a receiver kind into the const and reference axes.
    pub const fn with_receiver(self, kind: ReceiverKind) -> Self {
        Self {
            is_const: kind.is_const(),
            reference: kind.reference(),
            ..self
        }
    }

    pub const fn is_unsafe(&self) -> bool {
        matches!(self.safety, Safety::Unsafe)
    }

    pub const fn may_unwind(&self) -> bool {
        matches!(self.unwind, Unwind::MayUnwind)
    }
}

/// Decomposition of a fn-pointer type.
pub trait FunctionSignature {
    type Return;

    /// Parameter types, as a tuple.
    type Params: TypeList;

    const ARITY: usize = <Self::Params as TypeList>::LEN;

    const QUALIFIERS: Qualifiers;
}

/// Decomposition of a fn-pointer type whose first parameter receives `Cls`.
///
/// `Cls` is named by the caller; the same pointer type can be read as a
/// free function through [`FunctionSignature`].
pub trait MethodSignature<Cls: ?Sized> {
    /// The enclosing type, `Cls`.
    type This: ?Sized;

    type Return;

    /// The receiver parameter as written (`&Cls`, `Box<Cls>`, ...).
    type Receiver: Receiver<Cls>;

    /// Parameters after the receiver, as a tuple.
    type Args: TypeList;

    const RECEIVER: ReceiverKind;

    /// Free-function qualifiers with the receiver folded in.
    const QUALIFIERS: Qualifiers;
}

/// Return type of a fn-pointer type.
pub type ReturnOf<F> = <F as FunctionSignature>::Return;

/// Parameter tuple of a fn-pointer type.
pub type ParamsOf<F> = <F as FunctionSignature>::Params;

/// Parameter `I` of a fn-pointer type.
pub type ParamOf<F, const I: usize> = <ParamsOf<F> as TypeAt<I>>::Type;
