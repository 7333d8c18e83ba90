/// 実行時の次元シグネチャ。
use std::fmt;
use std::ops::{Div, Mul};

use crate::error::ExponentOverflow;

/// SI 基本次元の数。
pub const BASE_COUNT: usize = 7;

/// 基本次元の正準 SI 記号（`Dimension` の指数と同じ順序）。
const BASE_SYMBOLS: [&str; BASE_COUNT] = ["kg", "m", "s", "A", "K", "mol", "cd"];

/// SI 基本次元に対する整数指数の組。
///
/// 順序は質量・長さ・時間・電流・温度・物質量・光度。
/// 単位記述子 [`Unit`](crate::Unit) と型レベルのタグ [`Dim`](crate::Dim) の
/// 双方がこの値で次元を表現し、両者の整合性は `==` で判定する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    exponents: [i8; BASE_COUNT],
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension::new([0; BASE_COUNT]);

    pub const fn new(exponents: [i8; BASE_COUNT]) -> Self {
        Self { exponents }
    }

    #[inline]
    pub const fn exponents(&self) -> [i8; BASE_COUNT] {
        self.exponents
    }

    pub fn mass(&self) -> i8 {
        self.exponents[0]
    }

    pub fn length(&self) -> i8 {
        self.exponents[1]
    }

    pub fn time(&self) -> i8 {
        self.exponents[2]
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// 全指数を `n` 倍する。いずれかの指数が `i8` に収まらなければ [`ExponentOverflow`]。
    pub fn checked_powi(self, n: i32) -> Result<Self, ExponentOverflow> {
        self.map_exponents(|_, e| i32::from(e).checked_mul(n))
    }

    /// 次元の積（指数ごとの和）。範囲外なら [`ExponentOverflow`]。
    pub fn checked_mul(self, rhs: Self) -> Result<Self, ExponentOverflow> {
        let b = rhs.exponents;
        self.map_exponents(|i, e| i32::from(e).checked_add(i32::from(b[i])))
    }

    /// 次元の商（指数ごとの差）。範囲外なら [`ExponentOverflow`]。
    pub fn checked_div(self, rhs: Self) -> Result<Self, ExponentOverflow> {
        let b = rhs.exponents;
        self.map_exponents(|i, e| i32::from(e).checked_sub(i32::from(b[i])))
    }

    /// # Panics
    ///
    /// 指数が `i8` に収まらない場合。
    pub fn powi(self, n: i32) -> Self {
        or_panic(self.checked_powi(n))
    }

    fn map_exponents(
        self,
        f: impl Fn(usize, i8) -> Option<i32>,
    ) -> Result<Self, ExponentOverflow> {
        let mut out = [0; BASE_COUNT];
        for (i, (o, &e)) in out.iter_mut().zip(self.exponents.iter()).enumerate() {
            let wide = f(i, e);
            *o = wide
                .and_then(|v| i8::try_from(v).ok())
                .ok_or(ExponentOverflow {
                    base: BASE_SYMBOLS[i],
                    exponent: wide.unwrap_or(i32::MAX),
                })?;
        }
        Ok(Dimension::new(out))
    }
}

fn or_panic(result: Result<Dimension, ExponentOverflow>) -> Dimension {
    match result {
        Ok(d) => d,
        Err(e) => panic!("{e}"),
    }
}

impl Mul for Dimension {
    type Output = Self;

    /// 次元の積: 指数ごとの和。
    ///
    /// # Panics
    ///
    /// 指数が `i8` に収まらない場合。文字列から組み立てる場合は [`Dimension::checked_mul`] を使う。
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        or_panic(self.checked_mul(rhs))
    }
}

impl Div for Dimension {
    type Output = Self;

    /// 次元の商: 指数ごとの差。
    ///
    /// # Panics
    ///
    /// 指数が `i8` に収まらない場合。
    #[inline]
    fn div(self, rhs: Self) -> Self {
        or_panic(self.checked_div(rhs))
    }
}

impl fmt::Display for Dimension {
    /// `kg m s^-2` 形式。無次元は `1`。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for (symbol, &e) in BASE_SYMBOLS.iter().zip(self.exponents.iter()) {
            if e == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            if e == 1 {
                write!(f, "{symbol}")?;
            } else {
                write!(f, "{symbol}^{e}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASS: Dimension = Dimension::new([1, 0, 0, 0, 0, 0, 0]);
    const ACCELERATION: Dimension = Dimension::new([0, 1, -2, 0, 0, 0, 0]);

    #[test]
    fn test_mul_adds_exponents() {
        let force = MASS * ACCELERATION;
        assert_eq!(force.exponents(), [1, 1, -2, 0, 0, 0, 0]);
    }

    #[test]
    fn test_div_is_inverse_of_mul() {
        assert_eq!((MASS * ACCELERATION) / ACCELERATION, MASS);
        assert!((MASS / MASS).is_dimensionless());
    }

    #[test]
    fn test_powi() {
        let area = Dimension::new([0, 1, 0, 0, 0, 0, 0]).powi(2);
        assert_eq!(area.length(), 2);
        assert_eq!(ACCELERATION.powi(-1).time(), 2);
        assert_eq!(MASS.powi(3).mass(), 3);
    }

    // ===== 指数の範囲 =====

    #[test]
    fn test_checked_powi_rejects_out_of_range() {
        let length = Dimension::new([0, 1, 0, 0, 0, 0, 0]);
        assert_eq!(
            length.checked_powi(128).unwrap_err(),
            ExponentOverflow { base: "m", exponent: 128 }
        );
        assert_eq!(
            length.checked_powi(256).unwrap_err(),
            ExponentOverflow { base: "m", exponent: 256 }
        );
        assert_eq!(length.checked_powi(-128).unwrap().length(), -128);
    }

    #[test]
    fn test_checked_mul_and_div_reject_out_of_range() {
        let big = Dimension::new([0, 100, 0, 0, 0, 0, 0]);
        assert_eq!(
            big.checked_mul(big).unwrap_err(),
            ExponentOverflow { base: "m", exponent: 200 }
        );
        assert_eq!(
            big.checked_div(big.powi(-1)).unwrap_err(),
            ExponentOverflow { base: "m", exponent: 200 }
        );
        assert_eq!(big.checked_mul(MASS).unwrap().mass(), 1);
    }

    #[test]
    #[should_panic(expected = "outside -128..=127")]
    fn test_mul_panics_instead_of_wrapping() {
        let big = Dimension::new([100, 0, 0, 0, 0, 0, 0]);
        let _ = big * big;
    }

    #[test]
    fn test_display() {
        assert_eq!((MASS * ACCELERATION).to_string(), "kg m s^-2");
        assert_eq!(Dimension::DIMENSIONLESS.to_string(), "1");
    }
}
