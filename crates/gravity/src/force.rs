/// 重力 `F[i] = m[i] * g` の 3 つの走査形式。
///
/// 3 形式は同一の前提条件検査（[`prepare`]）を共有し、要素ごとの演算も
/// `Unit::to_canonical` → `Quantity` の乗算 → `Unit::from_canonical` の同じ列になるため、
/// 出力はビット単位で一致する。
use quanta_buffer::{QuantityBuffer, QuantityBufferMut};
use quanta_types::Quantity;
use quanta_types::si::{Acceleration, Force, Mass};
use tracing::{debug, trace};

use crate::error::{KernelError, Role, ShapeError};

/// 前提条件を順に検査し、書き込みが必要なら加速度を返す。
///
/// 1. `g` がスカラーであること
/// 2. `g` が加速度の次元を持つこと（形状検査より先に次元を確定させる）
/// 3. `m` と `F` の要素数が等しいこと
/// 4. `m` が空なら `None`（書き込みなし）
fn prepare(
    m: &QuantityBuffer<'_>,
    g: &QuantityBuffer<'_>,
    f: &QuantityBufferMut<'_>,
) -> Result<Option<Quantity<Acceleration>>, KernelError> {
    if g.size() != 1 {
        return Err(ShapeError::NonScalarAcceleration { len: g.size() }.into());
    }
    let g = g
        .scalar::<Acceleration>()
        .map_err(KernelError::buffer(Role::Acceleration))?;
    if m.size() != f.size() {
        return Err(ShapeError::SizeMismatch {
            m: m.size(),
            f: f.size(),
        }
        .into());
    }
    if m.is_empty() {
        debug!("empty mass buffer, nothing to write");
        return Ok(None);
    }
    trace!(n = m.size(), g = g.value(), "bound acceleration");
    Ok(Some(g))
}

/// 遅延パイプライン形式: 質量シーケンスに `x ↦ x * g` を合成し、出力カーソルへ複写する。
pub fn gravitational_force_pipeline(
    m: &QuantityBuffer<'_>,
    g: &QuantityBuffer<'_>,
    f: &mut QuantityBufferMut<'_>,
) -> Result<(), KernelError> {
    let Some(g) = prepare(m, g, f)? else {
        return Ok(());
    };
    let masses = m.iter::<Mass>().map_err(KernelError::buffer(Role::Mass))?;
    let mut out = f
        .cursor::<Force>()
        .map_err(KernelError::buffer(Role::Force))?;
    out.fill(masses.map(|mi| mi * g))
        .map_err(KernelError::buffer(Role::Force))?;
    Ok(())
}

/// 反復子形式: 読み出し側と書き込み側を 1 要素ずつ同時に進める。
pub fn gravitational_force_iter(
    m: &QuantityBuffer<'_>,
    g: &QuantityBuffer<'_>,
    f: &mut QuantityBufferMut<'_>,
) -> Result<(), KernelError> {
    let Some(g) = prepare(m, g, f)? else {
        return Ok(());
    };
    let masses = m.iter::<Mass>().map_err(KernelError::buffer(Role::Mass))?;
    let mut out = f
        .cursor::<Force>()
        .map_err(KernelError::buffer(Role::Force))?;
    for mi in masses {
        let fi: Quantity<Force> = mi * g;
        out.write(fi).map_err(KernelError::buffer(Role::Force))?;
    }
    Ok(())
}

/// 添字形式: `F.set_element(i, m.get(i) * g)` を `i = 0..N` で繰り返す。
pub fn gravitational_force_index(
    m: &QuantityBuffer<'_>,
    g: &QuantityBuffer<'_>,
    f: &mut QuantityBufferMut<'_>,
) -> Result<(), KernelError> {
    let Some(g) = prepare(m, g, f)? else {
        return Ok(());
    };
    for i in 0..m.size() {
        let mi = m.get::<Mass>(i).map_err(KernelError::buffer(Role::Mass))?;
        f.set_element::<Force>(i, mi * g)
            .map_err(KernelError::buffer(Role::Force))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quanta_buffer::{BufferError, Position};
    use quanta_types::Unit;

    type Variant = fn(
        &QuantityBuffer<'_>,
        &QuantityBuffer<'_>,
        &mut QuantityBufferMut<'_>,
    ) -> Result<(), KernelError>;

    const VARIANTS: [(&str, Variant); 3] = [
        ("pipeline", gravitational_force_pipeline),
        ("iter", gravitational_force_iter),
        ("index", gravitational_force_index),
    ];

    fn unit(s: &str) -> Unit {
        s.parse().unwrap()
    }

    /// 全形式で `F` を計算し、形式ごとの結果を返す。`F` の初期値は `fill`。
    fn run_all(
        m: &[f64],
        m_unit: &str,
        g: &[f64],
        g_unit: &str,
        n_out: usize,
        f_unit: &str,
        fill: f64,
    ) -> Vec<(&'static str, Result<(), KernelError>, Vec<f64>)> {
        VARIANTS
            .iter()
            .map(|&(name, variant)| {
                let mut out = vec![fill; n_out];
                let mb = QuantityBuffer::new(m, unit(m_unit));
                let gb = QuantityBuffer::new(g, unit(g_unit));
                let mut fb = QuantityBufferMut::new(&mut out, unit(f_unit));
                let result = variant(&mb, &gb, &mut fb);
                (name, result, out)
            })
            .collect()
    }

    // ===== 具体例 =====

    #[test]
    fn single_mass() {
        for (name, result, out) in run_all(&[1.0], "kg", &[9.81], "m s^-2", 1, "N", 0.0) {
            result.unwrap();
            assert_eq!(out, vec![9.81], "{name}");
        }
    }

    #[test]
    fn empty_mass_is_noop() {
        for (name, result, out) in run_all(&[], "kg", &[9.81], "m s^-2", 0, "N", 0.0) {
            result.unwrap();
            assert!(out.is_empty(), "{name}");
        }
    }

    #[test]
    fn several_masses() {
        let m = [0.0, 1.0, 2.5];
        for (name, result, out) in run_all(&m, "kg", &[10.0], "m/(s^2)", 3, "N", -1.0) {
            result.unwrap();
            assert_eq!(out, vec![0.0, 10.0, 25.0], "{name}");
        }
    }

    #[test]
    fn grams_to_kilonewtons() {
        for (name, result, out) in run_all(&[1000.0], "g", &[9.80665], "m s^-2", 1, "kN", 0.0) {
            result.unwrap();
            let expected = 0.00980665;
            let rel_err = (out[0] - expected).abs() / expected;
            assert!(rel_err < 1e-14, "{name}: relative error {rel_err} >= 1e-14");
        }
    }

    #[test]
    fn non_scalar_g_is_shape_error() {
        for (name, result, out) in run_all(&[1.0], "kg", &[9.81, 9.81], "m s^-2", 1, "N", 7.0) {
            assert_eq!(
                result.unwrap_err(),
                KernelError::Shape(ShapeError::NonScalarAcceleration { len: 2 }),
                "{name}"
            );
            assert_eq!(out, vec![7.0], "{name}");
        }
    }

    #[test]
    fn empty_g_is_shape_error() {
        for (name, result, _) in run_all(&[], "kg", &[], "m s^-2", 0, "N", 0.0) {
            assert!(result.unwrap_err().is_shape_error(), "{name}");
        }
    }

    #[test]
    fn length_output_is_dimension_mismatch() {
        for (name, result, out) in run_all(&[1.0, 2.0], "kg", &[9.81], "m s^-2", 2, "m", 7.0) {
            let err = result.unwrap_err();
            assert_eq!(err.role(), Some(Role::Force), "{name}");
            assert_eq!(
                err,
                KernelError::Buffer {
                    role: Role::Force,
                    source: BufferError::DimensionMismatch {
                        position: Position::Index(0),
                        stored: unit("m").dimension(),
                        requested: unit("N").dimension(),
                    },
                },
                "{name}"
            );
            assert_eq!(out, vec![7.0, 7.0], "{name}: F must stay untouched");
        }
    }

    // ===== 前提条件の順序 =====

    #[test]
    fn size_mismatch_is_shape_error() {
        for (name, result, out) in run_all(&[1.0, 2.0], "kg", &[9.81], "m s^-2", 3, "N", 7.0) {
            assert_eq!(
                result.unwrap_err(),
                KernelError::Shape(ShapeError::SizeMismatch { m: 2, f: 3 }),
                "{name}"
            );
            assert_eq!(out, vec![7.0; 3], "{name}");
        }
    }

    #[test]
    fn g_dimension_is_checked_before_sizes() {
        // g が加速度でなければ、m と F の要素数不一致より先に報告する
        for (name, result, _) in run_all(&[1.0, 2.0], "kg", &[9.81], "m", 3, "N", 0.0) {
            let err = result.unwrap_err();
            assert!(err.is_dimension_mismatch(), "{name}: {err}");
            assert_eq!(err.role(), Some(Role::Acceleration), "{name}");
        }
    }

    #[test]
    fn mass_dimension_mismatch_reports_role_m() {
        for (name, result, out) in run_all(&[1.0], "s", &[9.81], "m s^-2", 1, "N", 7.0) {
            let err = result.unwrap_err();
            assert_eq!(err.role(), Some(Role::Mass), "{name}");
            assert!(err.is_dimension_mismatch(), "{name}");
            assert_eq!(out, vec![7.0], "{name}");
        }
    }

    #[test]
    fn empty_mass_skips_output_dimension_check() {
        for (name, result, _) in run_all(&[], "kg", &[9.81], "m s^-2", 0, "m", 0.0) {
            assert!(result.is_ok(), "{name}");
        }
    }

    // ===== 形式間の一致 =====

    #[test]
    fn variants_agree_bitwise_on_awkward_values() {
        let m = [0.1, 1.0 / 3.0, 1e-308, 6.02214076e23, -0.0, 123.456];
        let results = run_all(&m, "mg", &[9.80665], "cm/(s^2)", m.len(), "mN", 0.0);
        let reference: Vec<u64> = results[0].2.iter().map(|v| v.to_bits()).collect();
        for (name, result, out) in &results {
            assert!(result.is_ok(), "{name}");
            let bits: Vec<u64> = out.iter().map(|v| v.to_bits()).collect();
            assert_eq!(bits, reference, "{name}");
        }
    }

    #[test]
    fn strided_buffers() {
        let m = [1.0, 99.0, 2.0, 99.0, 3.0];
        let g = [2.0];
        for &(name, variant) in &VARIANTS {
            let mut out = [-1.0; 7];
            let mb = QuantityBuffer::strided(&m, 3, 2, unit("kg")).unwrap();
            let gb = QuantityBuffer::new(&g, unit("m s^-2"));
            let mut fb = QuantityBufferMut::strided(&mut out, 3, 3, unit("N")).unwrap();
            variant(&mb, &gb, &mut fb).unwrap();
            assert_eq!(out, [2.0, -1.0, -1.0, 4.0, -1.0, -1.0, 6.0], "{name}");
        }
    }
}
