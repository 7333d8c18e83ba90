//! convert コマンド: 単位換算

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use super::parse_unit;

#[derive(Args)]
pub struct ConvertArgs {
    /// 換算する値
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// 元の単位（例: "km/(h^2)"）
    pub from: String,

    /// 換算先の単位（例: "m s^-2"）
    pub to: String,
}

pub fn execute(args: ConvertArgs) -> Result<()> {
    let result = convert(args.value, &args.from, &args.to)?;
    println!("{} {} = {} {}", args.value, args.from, result, args.to);
    Ok(())
}

/// `value [from]` を `[to]` での値に換算する。次元が異なればエラー。
fn convert(value: f64, from: &str, to: &str) -> Result<f64> {
    let from_unit = parse_unit(from, "source")?;
    let to_unit = parse_unit(to, "target")?;
    let factor = (from_unit / to_unit)
        .as_factor()
        .with_context(|| format!("cannot convert '{from}' to '{to}'"))?;
    debug!(factor, "conversion factor");
    Ok(value * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let rel_err = (actual - expected).abs() / expected.abs();
        assert!(rel_err < 1e-14, "{actual} vs {expected}: relative error {rel_err}");
    }

    #[test]
    fn prefixed_units() {
        assert_close(convert(1.5, "km", "m").unwrap(), 1500.0);
        assert_close(convert(250.0, "g", "kg").unwrap(), 0.25);
    }

    #[test]
    fn derived_units() {
        assert_close(convert(2.0, "kN", "kg*m/(s^2)").unwrap(), 2000.0);
        assert_close(convert(1.0, "km/(h^2)", "m s^-2").unwrap(), 1000.0 / 3600.0 / 3600.0);
    }

    #[test]
    fn incompatible_dimensions() {
        let err = convert(1.0, "kg", "m").unwrap_err();
        assert!(err.to_string().contains("cannot convert"), "{err}");
    }

    #[test]
    fn invalid_unit_text() {
        let err = convert(1.0, "furlong", "m").unwrap_err();
        assert!(err.to_string().contains("invalid source unit"), "{err}");
    }
}
