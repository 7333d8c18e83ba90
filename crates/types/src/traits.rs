/// 次元タグの基盤となる trait 群。
///
/// - [`Dimensioned`][]: 型レベルの次元タグと実行時シグネチャの対応
/// - [`HasProduct`][]: 乗算結果の次元タグをコンパイル時に決定する
/// - [`HasQuotient`][]: 除算結果の次元タグをコンパイル時に決定する
mod dimensioned;
mod has_product;
mod has_quotient;

pub use dimensioned::{Dim, Dimensioned};
pub use has_product::HasProduct;
pub use has_quotient::HasQuotient;
