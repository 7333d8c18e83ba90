//! 単位記述子。
//!
//! 単位は「生の値 → 正準 SI 値」の倍率と次元シグネチャの組で表す。
//! 文字列表記の解析は [`parse`] に、記号表は [`symbols`] に置く。

mod parse;
mod symbols;

use std::fmt;
use std::ops::{Div, Mul};
use std::str::FromStr;

use crate::dimension::Dimension;
use crate::error::{DimensionMismatch, ExponentOverflow, UnitError};
use crate::traits::Dimensioned;

/// 倍率と次元シグネチャからなる単位記述子。
///
/// 倍率は正の有限値であることを前提とする。`Unit` は生成後に変更されない。
///
/// ```
/// use quanta_types::Unit;
///
/// let km: Unit = "km".parse().unwrap();
/// let m: Unit = "m".parse().unwrap();
/// assert_eq!((km / m).as_factor().unwrap(), 1e3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    scale: f64,
    dimension: Dimension,
}

impl Unit {
    pub const DIMENSIONLESS: Unit = Unit::new(1.0, Dimension::DIMENSIONLESS);

    /// 倍率が正の有限値であることは呼び出し側が保証する。検査付きの生成は [`Unit::try_new`]。
    pub const fn new(scale: f64, dimension: Dimension) -> Self {
        debug_assert!(scale.is_finite() && scale > 0.0);
        Self { scale, dimension }
    }

    /// 倍率を検査して生成する。正の有限値でなければ [`UnitError::InvalidScale`]。
    pub fn try_new(scale: f64, dimension: Dimension) -> Result<Self, UnitError> {
        if scale.is_finite() && scale > 0.0 {
            Ok(Self { scale, dimension })
        } else {
            Err(UnitError::InvalidScale { scale })
        }
    }

    /// 次元 `dimension` の正準 SI 単位（倍率 1）。
    pub const fn canonical(dimension: Dimension) -> Self {
        Self::new(1.0, dimension)
    }

    /// 次元タグ `D` の正準 SI 単位。
    pub fn of<D: Dimensioned>() -> Self {
        Self::canonical(D::SIGNATURE)
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    /// この単位で表された生の値を正準 SI 値に変換する: `raw * scale`。
    #[inline]
    pub fn to_canonical(&self, raw: f64) -> f64 {
        raw * self.scale
    }

    /// 正準 SI 値をこの単位の生の値に変換する: `value / scale`。
    #[inline]
    pub fn from_canonical(&self, value: f64) -> f64 {
        value / self.scale
    }

    /// 次元が `expected` と一致することを確認する。
    #[inline]
    pub fn expect_dimension(&self, expected: Dimension) -> Result<(), DimensionMismatch> {
        if self.dimension == expected {
            Ok(())
        } else {
            Err(DimensionMismatch {
                expected,
                found: self.dimension,
            })
        }
    }

    /// # Panics
    ///
    /// 次元の指数が `i8` に収まらない場合。
    pub fn powi(self, n: i32) -> Self {
        Self::new(self.scale.powi(n), self.dimension.powi(n))
    }

    /// 倍率は `n` 乗、次元の指数は `n` 倍。次元の指数が範囲外なら [`ExponentOverflow`]。
    pub fn checked_powi(self, n: i32) -> Result<Self, ExponentOverflow> {
        Ok(Self {
            scale: self.scale.powi(n),
            dimension: self.dimension.checked_powi(n)?,
        })
    }

    pub fn checked_mul(self, rhs: Self) -> Result<Self, ExponentOverflow> {
        Ok(Self {
            scale: self.scale * rhs.scale,
            dimension: self.dimension.checked_mul(rhs.dimension)?,
        })
    }

    pub fn checked_div(self, rhs: Self) -> Result<Self, ExponentOverflow> {
        Ok(Self {
            scale: self.scale / rhs.scale,
            dimension: self.dimension.checked_div(rhs.dimension)?,
        })
    }

    /// 無次元単位の倍率を返す（例: `km / m` → `1e3`）。
    pub fn as_factor(&self) -> Result<f64, DimensionMismatch> {
        self.expect_dimension(Dimension::DIMENSIONLESS)?;
        Ok(self.scale)
    }
}

impl Mul for Unit {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Unit::new(self.scale * rhs.scale, self.dimension * rhs.dimension)
    }
}

impl Div for Unit {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Unit::new(self.scale / rhs.scale, self.dimension / rhs.dimension)
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, UnitError> {
        parse::parse_unit(s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 1.0 {
            write!(f, "{}", self.dimension)
        } else if self.is_dimensionless() {
            write!(f, "{}", self.scale)
        } else {
            write!(f, "{} {}", self.scale, self.dimension)
        }
    }
}
