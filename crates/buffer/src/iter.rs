use std::iter::{FusedIterator, StepBy, Take};
use std::marker::PhantomData;
use std::slice;

use quanta_types::{Dimensioned, Quantity, Unit};

use crate::layout::Layout;

/// バッファ要素を添字順に `Quantity<D>` として返す遅延シーケンス。
///
/// 次元の照合は [`QuantityBuffer::iter`](crate::QuantityBuffer::iter) での構築時に一度だけ行う。
/// 各要素の値は `Unit::to_canonical` で変換され、添字アクセスと同一の演算になる。
pub struct Iter<'a, D> {
    slots: Take<StepBy<slice::Iter<'a, f64>>>,
    unit: Unit,
    _dim: PhantomData<D>,
}

impl<'a, D: Dimensioned> Iter<'a, D> {
    pub(crate) fn new(data: &'a [f64], layout: Layout, unit: Unit) -> Self {
        Self {
            slots: data.iter().step_by(layout.stride()).take(layout.len()),
            unit,
            _dim: PhantomData,
        }
    }
}

impl<D> Clone for Iter<'_, D> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            unit: self.unit,
            _dim: PhantomData,
        }
    }
}

impl<D: Dimensioned> Iterator for Iter<'_, D> {
    type Item = Quantity<D>;

    #[inline]
    fn next(&mut self) -> Option<Quantity<D>> {
        self.slots
            .next()
            .map(|&raw| Quantity::new(self.unit.to_canonical(raw)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<D: Dimensioned> ExactSizeIterator for Iter<'_, D> {}

impl<D: Dimensioned> FusedIterator for Iter<'_, D> {}
