/// 異なる次元の量どうしの乗除算を提供する。
use std::ops::{Div, Mul};

use super::Quantity;
use crate::traits::{Dimensioned, HasProduct, HasQuotient};

impl<D1, D2> Mul<Quantity<D2>> for Quantity<D1>
where
    D1: HasProduct<D2>,
    D2: Dimensioned,
{
    type Output = Quantity<D1::Output>;

    /// `Quantity<D1> * Quantity<D2> → Quantity<D1·D2>`。
    ///
    /// 大きさは正準単位どうしの単一の `f64` 乗算であり、丸めは 1 回だけ生じる。
    #[inline]
    fn mul(self, rhs: Quantity<D2>) -> Quantity<D1::Output> {
        Quantity::new(self.value() * rhs.value())
    }
}

impl<D1, D2> Div<Quantity<D2>> for Quantity<D1>
where
    D1: HasQuotient<D2>,
    D2: Dimensioned,
{
    type Output = Quantity<D1::Output>;

    /// `Quantity<D1> / Quantity<D2> → Quantity<D1/D2>`。
    #[inline]
    fn div(self, rhs: Quantity<D2>) -> Quantity<D1::Output> {
        Quantity::new(self.value() / rhs.value())
    }
}
