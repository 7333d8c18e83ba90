use std::ops::Sub;

use typenum::{Diff, Integer};

use super::dimensioned::{Dim, Dimensioned};

/// 除算結果の次元タグをコンパイル時に決定する trait。
///
/// `D1: HasQuotient<D2>` のとき、`Quantity<D1> / Quantity<D2>` は
/// `Quantity<D1::Output>` になる。各指数は `typenum` の型レベル減算で求める。
pub trait HasQuotient<Rhs: Dimensioned>: Dimensioned {
    /// 商の次元タグ。
    type Output: Dimensioned;
}

impl<M1, L1, T1, I1, Th1, N1, J1, M2, L2, T2, I2, Th2, N2, J2>
    HasQuotient<Dim<M2, L2, T2, I2, Th2, N2, J2>> for Dim<M1, L1, T1, I1, Th1, N1, J1>
where
    M1: Integer + Sub<M2>,
    L1: Integer + Sub<L2>,
    T1: Integer + Sub<T2>,
    I1: Integer + Sub<I2>,
    Th1: Integer + Sub<Th2>,
    N1: Integer + Sub<N2>,
    J1: Integer + Sub<J2>,
    M2: Integer,
    L2: Integer,
    T2: Integer,
    I2: Integer,
    Th2: Integer,
    N2: Integer,
    J2: Integer,
    Diff<M1, M2>: Integer,
    Diff<L1, L2>: Integer,
    Diff<T1, T2>: Integer,
    Diff<I1, I2>: Integer,
    Diff<Th1, Th2>: Integer,
    Diff<N1, N2>: Integer,
    Diff<J1, J2>: Integer,
{
    type Output = Dim<
        Diff<M1, M2>,
        Diff<L1, L2>,
        Diff<T1, T2>,
        Diff<I1, I2>,
        Diff<Th1, Th2>,
        Diff<N1, N2>,
        Diff<J1, J2>,
    >;
}
