use approx::{AbsDiffEq, RelativeEq};
use core::array;
use num_traits::Zero;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Fixed-dimension vector: `N` components of `T` stored inline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> Vector<T, N>
where
    T: Zero + Copy,
{
    pub fn new() -> Self {
        Self {
            data: [T::zero(); N],
        }
    }

    /// Copies `min(N, M)` components positionally; zero-fills the rest when
    /// growing, drops the tail when shrinking.
    pub fn resize<const M: usize>(self) -> Vector<T, M> {
        let mut out = Vector::new();
        let n = if M < N { M } else { N };
        out.data[..n].copy_from_slice(&self.data[..n]);
        out
    }
}

impl<T, const N: usize> Vector<T, N> {
    pub const SIZE: usize = N;

    pub const fn size() -> usize {
        N
    }

    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    pub fn splat(s: T) -> Self
    where
        T: Copy,
    {
        Self { data: [s; N] }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

// elementwise engine: every catalog op routes through these. each output
// position depends only on the same input position(s).
impl<T: Copy, const N: usize> Vector<T, N> {
    pub fn map<F: FnMut(T) -> T>(self, mut f: F) -> Self {
        Self {
            data: array::from_fn(|i| f(self.data[i])),
        }
    }

    pub fn zip<F: FnMut(T, T) -> T>(self, rhs: Self, mut f: F) -> Self {
        Self {
            data: array::from_fn(|i| f(self.data[i], rhs.data[i])),
        }
    }

    pub fn zip_scalar<F: FnMut(T, T) -> T>(self, s: T, mut f: F) -> Self {
        self.map(|x| f(x, s))
    }

    pub fn fold<A, F: FnMut(A, T) -> A>(self, init: A, f: F) -> A {
        self.data.into_iter().fold(init, f)
    }
}

impl<T: Zero + Copy, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.data.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}
