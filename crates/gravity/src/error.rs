use std::fmt;

use quanta_buffer::BufferError;

/// カーネル引数の役割。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// 質量 `m`
    Mass,
    /// 加速度 `g`
    Acceleration,
    /// 力 `F`（出力）
    Force,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Mass => "m",
            Role::Acceleration => "g",
            Role::Force => "F",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("g must be scalar, got {len} elements")]
    NonScalarAcceleration { len: usize },
    #[error("size mismatch between m and F: {m} vs {f}")]
    SizeMismatch { m: usize, f: usize },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KernelError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("buffer '{role}': {source}")]
    Buffer { role: Role, source: BufferError },
    #[error("unknown kernel '{name}'")]
    UnknownKernel { name: String },
}

impl KernelError {
    /// `map_err` 用: バッファエラーに役割を付ける。
    pub(crate) fn buffer(role: Role) -> impl FnOnce(BufferError) -> KernelError {
        move |source| KernelError::Buffer { role, source }
    }

    /// エラーを起こしたバッファの役割。
    pub fn role(&self) -> Option<Role> {
        match self {
            KernelError::Buffer { role, .. } => Some(*role),
            KernelError::Shape(ShapeError::NonScalarAcceleration { .. }) => {
                Some(Role::Acceleration)
            }
            _ => None,
        }
    }

    pub fn is_shape_error(&self) -> bool {
        matches!(self, KernelError::Shape(_))
    }

    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, KernelError::Buffer { source, .. } if source.is_dimension_mismatch())
    }
}
