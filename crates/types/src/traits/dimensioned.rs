use std::fmt;
use std::marker::PhantomData;

use typenum::Integer;

use crate::dimension::Dimension;

/// 型レベルの次元タグの共通インターフェース。
///
/// 実装型はゼロサイズのマーカーであり、値としては生成しない。
/// `SIGNATURE` はバッファの単位記述子との照合に用いる。
pub trait Dimensioned {
    /// 実行時の次元シグネチャ。
    const SIGNATURE: Dimension;
}

/// `typenum` の符号付き整数で SI 基本次元の指数を表す次元タグ。
///
/// 引数順は質量・長さ・時間・電流・温度・物質量・光度。
pub struct Dim<M, L, T, I, Th, N, J>(PhantomData<(M, L, T, I, Th, N, J)>);

impl<M, L, T, I, Th, N, J> Dimensioned for Dim<M, L, T, I, Th, N, J>
where
    M: Integer,
    L: Integer,
    T: Integer,
    I: Integer,
    Th: Integer,
    N: Integer,
    J: Integer,
{
    const SIGNATURE: Dimension =
        Dimension::new([M::I8, L::I8, T::I8, I::I8, Th::I8, N::I8, J::I8]);
}

impl<M, L, T, I, Th, N, J> fmt::Debug for Dim<M, L, T, I, Th, N, J>
where
    Self: Dimensioned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dim({})", Self::SIGNATURE)
    }
}
