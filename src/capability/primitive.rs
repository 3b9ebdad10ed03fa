//! Primitive classification.

/// The character primitive.
pub trait Character: Copy {}

impl Character for char {}

/// Integer primitives. `char` and `bool` are not integers in Rust and do not
/// implement this.
pub trait Integral: Copy {
    const BITS: u32;
    const SIGNED: bool;
}

macro_rules! integral {
    ($($ty:ty => $signed:literal),+ $(,)?) => {
        $(
            impl Integral for $ty {
                const BITS: u32 = <$ty>::BITS;
                const SIGNED: bool = $signed;
            }
        )+
    };
}

integral! {
    u8 => false, u16 => false, u32 => false, u64 => false, u128 => false, usize => false,
    i8 => true, i16 => true, i32 => true, i64 => true, i128 => true, isize => true,
}
