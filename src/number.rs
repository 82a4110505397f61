use num_traits::{NumAssign, Signed};

pub use num_traits::Float;

/// Component type usable by the arithmetic, comparison and reduction ops.
/// Satisfied by the signed integer and float primitives.
pub trait Scalar: Copy + PartialOrd + NumAssign + Signed {}

impl<T: Copy + PartialOrd + NumAssign + Signed> Scalar for T {}
