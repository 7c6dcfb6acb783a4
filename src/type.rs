use std::fmt::Debug;

use num_traits::{Bounded, Num, NumCast, ToPrimitive};

/// A trait for types that can be used for indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Every implementor is a
/// primitive number, which keeps coordinates `Copy` and lets distance computations widen to
/// `f64` without loss of sign or overflow.
pub trait IndexableNum:
    private::Sealed
    + Num
    + NumCast
    + ToPrimitive
    + PartialOrd
    + Copy
    + Debug
    + Send
    + Sync
    + Bounded
{
    /// Widen this coordinate to `f64`.
    fn as_f64(self) -> f64;
}

macro_rules! impl_indexable_num {
    ($($t:ty),*) => {
        $(
            impl IndexableNum for $t {
                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }

            impl private::Sealed for $t {}
        )*
    };
}

impl_indexable_num!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}
}
