use std::iter::{StepBy, Take};
use std::marker::PhantomData;
use std::slice;

use quanta_types::{Dimensioned, Quantity, Unit};

use crate::error::BufferError;
use crate::layout::Layout;

/// 書き込むたびに次の要素へ進む出力カーソル。
///
/// 次元の照合は [`QuantityBufferMut::cursor`](crate::QuantityBufferMut::cursor) での構築時に一度だけ行う。
/// 末尾を越えた書き込みは [`BufferError::OutOfRange`] を返し、記憶域には触れない。
pub struct Cursor<'a, D> {
    slots: Take<StepBy<slice::IterMut<'a, f64>>>,
    written: usize,
    len: usize,
    unit: Unit,
    _dim: PhantomData<D>,
}

impl<'a, D: Dimensioned> Cursor<'a, D> {
    pub(crate) fn new(data: &'a mut [f64], layout: Layout, unit: Unit) -> Self {
        Self {
            slots: data.iter_mut().step_by(layout.stride()).take(layout.len()),
            written: 0,
            len: layout.len(),
            unit,
            _dim: PhantomData,
        }
    }

    /// 現在位置に `value` を書き込み、カーソルを 1 つ進める。
    #[inline]
    pub fn write(&mut self, value: Quantity<D>) -> Result<(), BufferError> {
        let slot = self.slots.next().ok_or(BufferError::OutOfRange {
            index: self.written,
            len: self.len,
        })?;
        *slot = self.unit.from_canonical(value.value());
        self.written += 1;
        Ok(())
    }

    /// シーケンス全体を現在位置から書き込み、書き込んだ要素数を返す。
    ///
    /// シーケンスが残り要素数より長い場合、収まる分を書き込んだうえで
    /// [`BufferError::OutOfRange`] を返す。
    pub fn fill<I>(&mut self, values: I) -> Result<usize, BufferError>
    where
        I: IntoIterator<Item = Quantity<D>>,
    {
        let start = self.written;
        for value in values {
            self.write(value)?;
        }
        Ok(self.written - start)
    }

    /// 次に書き込む要素の添字。
    pub fn position(&self) -> usize {
        self.written
    }

    pub fn remaining(&self) -> usize {
        self.len - self.written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quanta_types::si::Force;

    #[test]
    fn writes_advance() {
        let mut data = [0.0; 3];
        let mut cursor = Cursor::<Force>::new(&mut data, Layout::contiguous(3), Unit::of::<Force>());
        cursor.write(Quantity::new(1.0)).unwrap();
        cursor.write(Quantity::new(2.0)).unwrap();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.remaining(), 1);
        assert_eq!(data, [1.0, 2.0, 0.0]);
    }

    #[test]
    fn write_past_end_is_rejected_without_touching_storage() {
        let mut data = [0.0, 7.0, 0.0, 7.0];
        let layout = Layout::strided(2, 2, data.len()).unwrap();
        let mut cursor = Cursor::<Force>::new(&mut data, layout, Unit::of::<Force>());
        cursor.write(Quantity::new(1.0)).unwrap();
        cursor.write(Quantity::new(2.0)).unwrap();
        let err = cursor.write(Quantity::new(3.0)).unwrap_err();
        assert_eq!(err, BufferError::OutOfRange { index: 2, len: 2 });
        assert_eq!(data, [1.0, 7.0, 2.0, 7.0]);
    }

    #[test]
    fn fill_rescales_to_stored_unit() {
        let mut data = [0.0; 2];
        let kilonewton: Unit = "kN".parse().unwrap();
        let mut cursor = Cursor::<Force>::new(&mut data, Layout::contiguous(2), kilonewton);
        let n = cursor
            .fill([Quantity::new(1500.0), Quantity::new(20.0)])
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(data, [1500.0 / 1e3, 20.0 / 1e3]);
    }

    #[test]
    fn fill_overflow_reports_first_excess_index() {
        let mut data = [0.0; 1];
        let mut cursor = Cursor::<Force>::new(&mut data, Layout::contiguous(1), Unit::of::<Force>());
        let err = cursor
            .fill([Quantity::new(1.0), Quantity::new(2.0)])
            .unwrap_err();
        assert_eq!(err, BufferError::OutOfRange { index: 1, len: 1 });
        assert_eq!(data, [1.0]);
    }
}
