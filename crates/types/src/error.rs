use crate::dimension::Dimension;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("dimension mismatch: expected {expected}, found {found}")]
pub struct DimensionMismatch {
    pub expected: Dimension,
    pub found: Dimension,
}

/// 次元の指数が `i8` の範囲を超えた。`base` は超過した基本次元の SI 記号。
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("exponent {exponent} of '{base}' is outside -128..=127")]
pub struct ExponentOverflow {
    pub base: &'static str,
    pub exponent: i32,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    #[error("empty unit string")]
    Empty,
    #[error("unknown unit symbol '{symbol}'")]
    UnknownSymbol { symbol: String },
    #[error("invalid exponent '{exponent}' on '{symbol}'")]
    InvalidExponent { symbol: String, exponent: String },
    #[error("zero exponent on '{symbol}'")]
    ZeroExponent { symbol: String },
    #[error("negative exponent {exponent} on '{symbol}' is not allowed with '*' or '/'")]
    NegativeExponent { symbol: String, exponent: i32 },
    #[error("expected '(' after '/' at position {position}")]
    ExpectedParenthesis { position: usize },
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
    #[error("expected a unit symbol at position {position}")]
    MissingFactor { position: usize },
    #[error("trailing input at position {position}")]
    TrailingInput { position: usize },
    #[error("exponent {exponent} of '{symbol}' is outside -128..=127")]
    ExponentOverflow { symbol: String, exponent: i32 },
    #[error("unit scale {scale} is not a positive finite number")]
    InvalidScale { scale: f64 },
}

impl From<ExponentOverflow> for UnitError {
    fn from(e: ExponentOverflow) -> Self {
        UnitError::ExponentOverflow {
            symbol: e.base.to_string(),
            exponent: e.exponent,
        }
    }
}
