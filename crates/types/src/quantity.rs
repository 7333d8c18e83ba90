//! 次元付きスカラー量。
//!
//! 同次元間の演算は [`ops`]、異次元間の乗除算は [`cross_ops`] に置く。

mod cross_ops;
mod ops;

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::dimension::Dimension;
use crate::error::DimensionMismatch;
use crate::traits::Dimensioned;
use crate::unit::Unit;

/// 正準 SI 単位での大きさと、型レベルの次元タグ `D` を持つスカラー量。
///
/// 大きさの演算は通常の `f64` 演算であり、次元の整合性はコンパイル時に検査される。
/// 単位記述子を介した入出力（[`from_raw`](Self::from_raw) /
/// [`to_raw`](Self::to_raw)）のみが実行時に次元を照合する。
pub struct Quantity<D> {
    value: f64,
    _dim: PhantomData<D>,
}

impl<D: Dimensioned> Quantity<D> {
    /// 正準 SI 単位の大きさから生成する。
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            _dim: PhantomData,
        }
    }

    /// 単位 `unit` で表された生の値から生成する。
    ///
    /// `unit` の次元が `D` と一致しない場合は [`DimensionMismatch`] を返す。
    #[inline]
    pub fn from_raw(raw: f64, unit: &Unit) -> Result<Self, DimensionMismatch> {
        unit.expect_dimension(D::SIGNATURE)?;
        Ok(Self::new(unit.to_canonical(raw)))
    }

    /// 単位 `unit` で表した生の値を返す。
    #[inline]
    pub fn to_raw(&self, unit: &Unit) -> Result<f64, DimensionMismatch> {
        unit.expect_dimension(D::SIGNATURE)?;
        Ok(unit.from_canonical(self.value))
    }

    /// 正準 SI 単位での大きさ。
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        D::SIGNATURE
    }

    pub fn zero() -> Self {
        Self::new(0.0)
    }
}

impl<D> Clone for Quantity<D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Quantity<D> {}

impl<D: Dimensioned> Default for Quantity<D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<D> PartialEq for Quantity<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<D> PartialOrd for Quantity<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<D: Dimensioned> fmt::Debug for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("dimension", &D::SIGNATURE)
            .finish()
    }
}

impl<D: Dimensioned> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if D::SIGNATURE.is_dimensionless() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, D::SIGNATURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::si::{Force, Length, Mass};

    #[test]
    fn test_from_raw_applies_scale() {
        let gram = Unit::new(1e-3, Mass::SIGNATURE);
        let m = Quantity::<Mass>::from_raw(1000.0, &gram).unwrap();
        let rel_err = (m.value() - 1.0).abs();
        assert!(rel_err < 1e-15, "relative error {rel_err} >= 1e-15");
    }

    #[test]
    fn test_to_raw_inverts_from_raw() {
        let kilonewton = Unit::new(1e3, Force::SIGNATURE);
        let f = Quantity::<Force>::from_raw(2.5, &kilonewton).unwrap();
        assert_eq!(f.value(), 2500.0);
        assert_eq!(f.to_raw(&kilonewton).unwrap(), 2.5);
    }

    #[test]
    fn test_from_raw_rejects_wrong_dimension() {
        let metre = Unit::canonical(Length::SIGNATURE);
        let err = Quantity::<Mass>::from_raw(1.0, &metre).unwrap_err();
        assert_eq!(err.expected, Mass::SIGNATURE);
        assert_eq!(err.found, Length::SIGNATURE);
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::<Force>::new(9.81).to_string(), "9.81 kg m s^-2");
    }
}
