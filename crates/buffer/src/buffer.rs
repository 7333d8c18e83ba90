use quanta_types::{Dimensioned, Quantity, Unit};

use crate::cursor::Cursor;
use crate::error::{BufferError, Position};
use crate::iter::Iter;
use crate::layout::Layout;

/// 外部所有の `f64` 記憶域に対する読み取り専用の単位付きビュー。
///
/// 要素数・ストライド・単位は構築時に固定される。要素は要求された次元タグ `D` の
/// [`Quantity`] として読み出され、`D` の次元がバッファの単位と一致しない場合は
/// [`BufferError::DimensionMismatch`] となる。
///
/// ```
/// use quanta_buffer::QuantityBuffer;
/// use quanta_types::si::Mass;
///
/// let grams = [1000.0, 250.0];
/// let m = QuantityBuffer::new(&grams, "g".parse().unwrap());
/// let first = m.get::<Mass>(0).unwrap();
/// assert!((first.value() - 1.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QuantityBuffer<'a> {
    data: &'a [f64],
    layout: Layout,
    unit: Unit,
}

/// 外部所有の `f64` 記憶域に対する書き込み可能な単位付きビュー。
#[derive(Debug)]
pub struct QuantityBufferMut<'a> {
    data: &'a mut [f64],
    layout: Layout,
    unit: Unit,
}

/// `unit` が次元タグ `D` と一致するかを照合する。
fn check_dimension<D: Dimensioned>(unit: &Unit, position: Position) -> Result<(), BufferError> {
    unit.expect_dimension(D::SIGNATURE)
        .map_err(|e| BufferError::DimensionMismatch {
            position,
            stored: e.found,
            requested: e.expected,
        })
}

impl<'a> QuantityBuffer<'a> {
    /// 連続した記憶域全体を覆うビュー。
    pub fn new(data: &'a [f64], unit: Unit) -> Self {
        Self {
            layout: Layout::contiguous(data.len()),
            data,
            unit,
        }
    }

    /// `stride` 要素おきに `len` 要素を読むビュー。
    pub fn strided(
        data: &'a [f64],
        len: usize,
        stride: usize,
        unit: Unit,
    ) -> Result<Self, BufferError> {
        let layout = Layout::strided(len, stride, data.len())?;
        Ok(Self { data, layout, unit })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.layout.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.layout.len() == 1
    }

    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// 要素 `index` を `Quantity<D>` として読む。
    pub fn get<D: Dimensioned>(&self, index: usize) -> Result<Quantity<D>, BufferError> {
        check_dimension::<D>(&self.unit, Position::Index(index))?;
        self.read(index)
    }

    /// サイズ 1 のバッファの唯一の要素を読む。
    pub fn scalar<D: Dimensioned>(&self) -> Result<Quantity<D>, BufferError> {
        if !self.is_scalar() {
            return Err(BufferError::NotScalar {
                len: self.layout.len(),
            });
        }
        check_dimension::<D>(&self.unit, Position::Scalar)?;
        self.read(0)
    }

    /// 全要素を添字順に返す遅延シーケンス。
    ///
    /// 次元の照合はここで一度だけ行い、不一致は最初の要素（添字 0）の位置で報告する。
    pub fn iter<D: Dimensioned>(&self) -> Result<Iter<'a, D>, BufferError> {
        check_dimension::<D>(&self.unit, Position::Index(0))?;
        Ok(Iter::new(self.data, self.layout, self.unit))
    }

    fn read<D: Dimensioned>(&self, index: usize) -> Result<Quantity<D>, BufferError> {
        let offset = self.layout.offset(index)?;
        let raw = self
            .data
            .get(offset)
            .copied()
            .ok_or(BufferError::OutOfRange {
                index,
                len: self.layout.len(),
            })?;
        Ok(Quantity::new(self.unit.to_canonical(raw)))
    }
}

impl<'a> QuantityBufferMut<'a> {
    /// 連続した記憶域全体を覆うビュー。
    pub fn new(data: &'a mut [f64], unit: Unit) -> Self {
        Self {
            layout: Layout::contiguous(data.len()),
            data,
            unit,
        }
    }

    /// `stride` 要素おきに `len` 要素を扱うビュー。
    pub fn strided(
        data: &'a mut [f64],
        len: usize,
        stride: usize,
        unit: Unit,
    ) -> Result<Self, BufferError> {
        let layout = Layout::strided(len, stride, data.len())?;
        Ok(Self { data, layout, unit })
    }

    /// 読み取り専用ビューとして借用し直す。
    pub fn as_view(&self) -> QuantityBuffer<'_> {
        QuantityBuffer {
            data: &*self.data,
            layout: self.layout,
            unit: self.unit,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.layout.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.layout.len() == 1
    }

    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn get<D: Dimensioned>(&self, index: usize) -> Result<Quantity<D>, BufferError> {
        self.as_view().get(index)
    }

    pub fn iter<D: Dimensioned>(&self) -> Result<Iter<'_, D>, BufferError> {
        self.as_view().iter()
    }

    /// 要素 `index` に `value` を書き込む。値はバッファの単位に換算して格納する。
    pub fn set_element<D: Dimensioned>(
        &mut self,
        index: usize,
        value: Quantity<D>,
    ) -> Result<(), BufferError> {
        check_dimension::<D>(&self.unit, Position::Index(index))?;
        let offset = self.layout.offset(index)?;
        let len = self.layout.len();
        let slot = self
            .data
            .get_mut(offset)
            .ok_or(BufferError::OutOfRange { index, len })?;
        *slot = self.unit.from_canonical(value.value());
        Ok(())
    }

    /// 添字 0 から順に書き込む出力カーソル。
    ///
    /// 次元の照合はここで一度だけ行い、不一致は添字 0 の位置で報告する。
    pub fn cursor<D: Dimensioned>(&mut self) -> Result<Cursor<'_, D>, BufferError> {
        check_dimension::<D>(&self.unit, Position::Index(0))?;
        Ok(Cursor::new(&mut *self.data, self.layout, self.unit))
    }
}
