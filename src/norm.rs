use crate::number::{Float, Scalar};
use crate::vector::Vector;

impl<T: Scalar + Float, const N: usize> Vector<T, N> {
    pub fn norm1(self) -> T {
        self.abs().sum()
    }

    pub fn norm2(self) -> T {
        self.dot(self).sqrt()
    }

    /// Chebyshev (infinity) norm.
    pub fn norm8(self) -> T {
        self.abs().max_element()
    }

    /// General Lp norm. `p == 0` is not guarded; the result is whatever
    /// `powf` yields for a `1 / p` exponent of infinity.
    pub fn norm(self, p: T) -> T {
        self.abs().pow(p).sum().powf(T::one() / p)
    }

    /// NaN-filled when `norm2` is zero; callers guard if they care.
    pub fn normalized(self) -> Self {
        self / self.norm2()
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub fn cross(self, rhs: Self) -> Self {
        Self::from_array([
            self[1] * rhs[2] - self[2] * rhs[1],
            self[2] * rhs[0] - self[0] * rhs[2],
            self[0] * rhs[1] - self[1] * rhs[0],
        ])
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// Perp-dot scalar.
    pub fn cross(self, rhs: Self) -> T {
        self[0] * rhs[1] - self[1] * rhs[0]
    }
}
