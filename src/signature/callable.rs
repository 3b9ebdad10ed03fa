use super::FunctionSignature;
use crate::sequence::TypeList;

/// A function object called with the argument tuple `Args`.
///
/// Closures, fn items and fn pointers decompose through their call
/// operator: [`Callable::Call`] names the equivalent fn pointer.
///
/// ```rust
/// use typeprobe::{is, signature::{Callable, FunctionSignature}};
///
/// fn call_shape<F: Callable<(u8, u8)>>(_: &F) -> usize {
///     <F::Call as FunctionSignature>::ARITY
/// }
///
/// let add = |a: u8, b: u8| u16::from(a) + u16::from(b);
/// assert_eq!(call_shape(&add), 2);
/// ```
pub trait Callable<Args> {
    type Output;

    /// `fn(Args..) -> Output`.
    type Call: FunctionSignature;
}

macro_rules! callable {
    ($($A:ident)*) => {
        impl<F, R $(, $A)*> Callable<($($A,)*)> for F
        where
            F: FnOnce($($A),*) -> R,
        {
            type Output = R;
            type Call = fn($($A),*) -> R;
        }
    };
}

macro_rules! callable_arities {
    () => {
        callable!();
    };
    ($head:ident $($tail:ident)*) => {
        callable!($head $($tail)*);
        callable_arities!($($tail)*);
    };
}

callable_arities!(A0 A1 A2 A3 A4 A5 A6 A7 A8 A9 A10 A11);

/// Number of parameters of a function object.
pub fn arity_of<F, Args>(_: &F) -> usize
where
    F: Callable<Args>,
    Args: TypeList,
{
    Args::LEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is;

    fn parse(input: &'static str, radix: u32) -> Option<u64> {
        u64::from_str_radix(input, radix).ok()
    }

    fn output_of<F: Callable<Args>, Args>(_: &F) -> &'static str {
        std::any::type_name::<F::Output>()
    }

    #[test]
    fn test_fn_item_arity() {
        assert_eq!(arity_of(&parse), 2);
        assert_eq!(arity_of(&std::process::id), 0);
    }

    #[test]
    fn test_closure_decomposes_through_call() {
        let scale = |x: f64| x * 2.0;
        assert_eq!(arity_of(&scale), 1);
        assert_eq!(output_of(&scale), "f64");
    }

    #[test]
    fn test_call_pointer_is_a_signature() {
        type Call = <fn(u8, char) -> bool as Callable<(u8, char)>>::Call;
        assert!(is!(same: Call, fn(u8, char) -> bool));
        assert_eq!(<Call as FunctionSignature>::ARITY, 2);
    }
}
