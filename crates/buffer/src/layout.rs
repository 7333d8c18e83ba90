use crate::error::BufferError;

/// 要素数とストライド（要素単位）。構築後は変更されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    len: usize,
    stride: usize,
}

impl Layout {
    pub fn contiguous(len: usize) -> Self {
        Self { len, stride: 1 }
    }

    /// `available` 個の値を持つ記憶域に対するストライド付きレイアウトを検証して生成する。
    ///
    /// 最後の要素のオフセット `(len - 1) * stride` が記憶域に収まらない場合は
    /// [`BufferError::InvalidLayout`] を返す。
    pub fn strided(len: usize, stride: usize, available: usize) -> Result<Self, BufferError> {
        if stride == 0 {
            return Err(BufferError::ZeroStride);
        }
        let layout = Self { len, stride };
        match layout.required() {
            Some(required) if required <= available => Ok(layout),
            required => Err(BufferError::InvalidLayout {
                len,
                stride,
                required: required.unwrap_or(usize::MAX),
                available,
            }),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// 全要素を収めるのに必要な記憶域の長さ。オーバーフロー時は `None`。
    pub fn required(&self) -> Option<usize> {
        match self.len {
            0 => Some(0),
            n => (n - 1).checked_mul(self.stride)?.checked_add(1),
        }
    }

    /// 要素 `index` の記憶域上のオフセット。
    #[inline]
    pub(crate) fn offset(&self, index: usize) -> Result<usize, BufferError> {
        if index < self.len {
            Ok(index * self.stride)
        } else {
            Err(BufferError::OutOfRange {
                index,
                len: self.len,
            })
        }
    }
}
