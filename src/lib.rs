mod norm;
pub mod number;
mod ops;
pub mod vector;

pub use number::{Float, Scalar};
pub use vector::Vector;
