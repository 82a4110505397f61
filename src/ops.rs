use crate::number::{Float, Scalar};
use crate::vector::Vector;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |x, y| x + y)
    }
}

impl<T: Scalar, const N: usize> Add<T> for Vector<T, N> {
    type Output = Self;

    fn add(self, s: T) -> Self {
        self.zip_scalar(s, |x, y| x + y)
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |x, y| x - y)
    }
}

impl<T: Scalar, const N: usize> Sub<T> for Vector<T, N> {
    type Output = Self;

    fn sub(self, s: T) -> Self {
        self.zip_scalar(s, |x, y| x - y)
    }
}

impl<T: Scalar, const N: usize> Mul for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.zip(rhs, |x, y| x * y)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        self.zip_scalar(s, |x, y| x * y)
    }
}

impl<T: Scalar, const N: usize> Div for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.zip(rhs, |x, y| x / y)
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, s: T) -> Self {
        self.zip_scalar(s, |x, y| x / y)
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, s: T) {
        *self = *self * s;
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn abs(self) -> Self {
        self.map(|x| x.abs())
    }

    pub fn sum(self) -> T {
        self.fold(T::zero(), |acc, x| acc + x)
    }

    pub fn dot(self, rhs: Self) -> T {
        (self * rhs).sum()
    }

    /// Pointwise maximum.
    pub fn max(self, rhs: Self) -> Self {
        self.zip(rhs, |x, y| if x < y { y } else { x })
    }

    /// Pointwise minimum.
    pub fn min(self, rhs: Self) -> Self {
        self.zip(rhs, |x, y| if y < x { y } else { x })
    }

    /// Greatest component. N must be >= 1.
    pub fn max_element(self) -> T {
        let mut m = self[0];
        for i in 1..N {
            if m < self[i] {
                m = self[i];
            }
        }
        m
    }

    /// Least component. N must be >= 1.
    pub fn min_element(self) -> T {
        let mut m = self[0];
        for i in 1..N {
            if self[i] < m {
                m = self[i];
            }
        }
        m
    }

    /// Index of the greatest component; ties resolve to the lowest index.
    /// N must be >= 1.
    pub fn argmax(self) -> usize {
        let mut k = 0;
        for i in 1..N {
            if self[k] < self[i] {
                k = i;
            }
        }
        k
    }

    /// Index of the least component; ties resolve to the lowest index.
    /// N must be >= 1.
    pub fn argmin(self) -> usize {
        let mut k = 0;
        for i in 1..N {
            if self[k] > self[i] {
                k = i;
            }
        }
        k
    }
}

impl<T: Scalar + Float, const N: usize> Vector<T, N> {
    pub fn pow(self, s: T) -> Self {
        self.map(|x| x.powf(s))
    }

    pub fn exp(self) -> Self {
        self.map(T::exp)
    }

    pub fn ln(self) -> Self {
        self.map(T::ln)
    }
}
