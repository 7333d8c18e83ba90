use std::ops::Add;

use typenum::{Integer, Sum};

use super::dimensioned::{Dim, Dimensioned};

/// 乗算結果の次元タグをコンパイル時に決定する trait。
///
/// `D1: HasProduct<D2>` のとき、`Quantity<D1> * Quantity<D2>` は
/// `Quantity<D1::Output>` になる。各基本次元の指数は `typenum` の型レベル加算で求める。
///
/// # 例
///
/// ```
/// use quanta_types::Quantity;
/// use quanta_types::si::{Acceleration, Force, Mass};
///
/// let m = Quantity::<Mass>::new(2.0);
/// let a = Quantity::<Acceleration>::new(9.81);
/// let f: Quantity<Force> = m * a;
/// assert_eq!(f.value(), 2.0 * 9.81);
/// ```
///
/// # compile_fail 例
///
/// 質量×加速度は長さではないため、以下はコンパイルエラーになる:
///
/// ```compile_fail
/// use quanta_types::Quantity;
/// use quanta_types::si::{Acceleration, Length, Mass};
///
/// let m = Quantity::<Mass>::new(2.0);
/// let a = Quantity::<Acceleration>::new(9.81);
/// let x: Quantity<Length> = m * a;
/// ```
pub trait HasProduct<Rhs: Dimensioned>: Dimensioned {
    /// 積の次元タグ。
    type Output: Dimensioned;
}

impl<M1, L1, T1, I1, Th1, N1, J1, M2, L2, T2, I2, Th2, N2, J2>
    HasProduct<Dim<M2, L2, T2, I2, Th2, N2, J2>> for Dim<M1, L1, T1, I1, Th1, N1, J1>
where
    M1: Integer + Add<M2>,
    L1: Integer + Add<L2>,
    T1: Integer + Add<T2>,
    I1: Integer + Add<I2>,
    Th1: Integer + Add<Th2>,
    N1: Integer + Add<N2>,
    J1: Integer + Add<J2>,
    M2: Integer,
    L2: Integer,
    T2: Integer,
    I2: Integer,
    Th2: Integer,
    N2: Integer,
    J2: Integer,
    Sum<M1, M2>: Integer,
    Sum<L1, L2>: Integer,
    Sum<T1, T2>: Integer,
    Sum<I1, I2>: Integer,
    Sum<Th1, Th2>: Integer,
    Sum<N1, N2>: Integer,
    Sum<J1, J2>: Integer,
{
    type Output = Dim<
        Sum<M1, M2>,
        Sum<L1, L2>,
        Sum<T1, T2>,
        Sum<I1, I2>,
        Sum<Th1, Th2>,
        Sum<N1, N2>,
        Sum<J1, J2>,
    >;
}
