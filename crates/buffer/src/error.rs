use std::fmt;

use quanta_types::Dimension;

/// 次元照合が行われた位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// 要素 `i` へのアクセス。
    Index(usize),
    /// サイズ 1 のバッファのスカラー読み出し。
    Scalar,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Index(i) => write!(f, "index {i}"),
            Position::Scalar => f.write_str("scalar"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BufferError {
    #[error("dimension mismatch at {position}: buffer holds {stored}, requested {requested}")]
    DimensionMismatch {
        position: Position,
        stored: Dimension,
        requested: Dimension,
    },
    #[error("index {index} out of range for buffer of {len} elements")]
    OutOfRange { index: usize, len: usize },
    #[error("buffer holds {len} elements, expected a scalar")]
    NotScalar { len: usize },
    #[error(
        "invalid layout: {len} elements with stride {stride} need {required} values, storage holds {available}"
    )]
    InvalidLayout {
        len: usize,
        stride: usize,
        required: usize,
        available: usize,
    },
    #[error("stride must be non-zero")]
    ZeroStride,
}

impl BufferError {
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, BufferError::DimensionMismatch { .. })
    }
}
