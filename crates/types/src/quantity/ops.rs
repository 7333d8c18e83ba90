/// 同次元の量どうしの算術演算とスカラー倍を提供する。
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Quantity;
use crate::traits::Dimensioned;

impl<D: Dimensioned> Add for Quantity<D> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Quantity::new(self.value() + rhs.value())
    }
}

impl<D: Dimensioned> Sub for Quantity<D> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Quantity::new(self.value() - rhs.value())
    }
}

impl<D: Dimensioned> Neg for Quantity<D> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Quantity::new(-self.value())
    }
}

impl<D: Dimensioned> Mul<f64> for Quantity<D> {
    type Output = Self;

    /// スカラー倍（右）: `q * s`。次元は変わらない。
    #[inline]
    fn mul(self, s: f64) -> Self {
        Quantity::new(self.value() * s)
    }
}

impl<D: Dimensioned> Mul<Quantity<D>> for f64 {
    type Output = Quantity<D>;

    /// スカラー倍（左）: `s * q`。`q * s` に委譲する。
    #[inline]
    fn mul(self, q: Quantity<D>) -> Quantity<D> {
        q * self
    }
}

impl<D: Dimensioned> Div<f64> for Quantity<D> {
    type Output = Self;

    #[inline]
    fn div(self, s: f64) -> Self {
        Quantity::new(self.value() / s)
    }
}

impl<D: Dimensioned> AddAssign for Quantity<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<D: Dimensioned> SubAssign for Quantity<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<D: Dimensioned> MulAssign<f64> for Quantity<D> {
    #[inline]
    fn mul_assign(&mut self, s: f64) {
        *self = *self * s;
    }
}

impl<D: Dimensioned> DivAssign<f64> for Quantity<D> {
    #[inline]
    fn div_assign(&mut self, s: f64) {
        *self = *self / s;
    }
}

#[cfg(test)]
mod tests {
    use crate::Quantity;
    use crate::si::Length;

    #[test]
    fn test_add_sub() {
        let a = Quantity::<Length>::new(1.5);
        let b = Quantity::<Length>::new(0.5);
        assert_eq!((a + b).value(), 2.0);
        assert_eq!((a - b).value(), 1.0);
        assert_eq!((-a).value(), -1.5);
    }

    #[test]
    fn test_scalar_mul_commutes() {
        let a = Quantity::<Length>::new(3.0);
        assert_eq!(a * 2.0, 2.0 * a);
    }

    #[test]
    fn test_assign_ops() {
        let mut a = Quantity::<Length>::new(1.0);
        a += Quantity::new(2.0);
        a *= 4.0;
        a -= Quantity::new(2.0);
        a /= 5.0;
        assert_eq!(a.value(), 2.0);
    }
}
