//! run コマンド: 乱数質量に対する力の計算

use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Args;
use quanta_buffer::{QuantityBuffer, QuantityBufferMut};
use quanta_gravity::{DEFAULT_KERNEL, gravitational_force, kernels};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::parse_unit;

#[derive(Args)]
pub struct RunArgs {
    /// 質量の個数
    #[arg(short = 'n', long, default_value_t = 20)]
    pub count: usize,

    /// 乱数シード
    #[arg(long, default_value_t = 989_182)]
    pub seed: u64,

    /// 重力加速度の値
    #[arg(short, long, default_value_t = 9.81, allow_negative_numbers = true)]
    pub g: f64,

    /// 重力加速度の単位
    #[arg(long, default_value = "m s^-2")]
    pub g_unit: String,

    /// 質量の単位
    #[arg(long, default_value = "kg")]
    pub mass_unit: String,

    /// 力の単位
    #[arg(long, default_value = "N")]
    pub force_unit: String,

    /// カーネル名または別名
    #[arg(short, long, default_value = DEFAULT_KERNEL)]
    pub method: String,

    /// 全カーネルの出力がビット単位で一致することを確認する
    #[arg(long)]
    pub verify: bool,

    /// 結果を JSON で出力する
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RunReport {
    method: String,
    g: f64,
    g_unit: String,
    mass_unit: String,
    force_unit: String,
    masses: Vec<f64>,
    forces: Vec<f64>,
    elapsed_us: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    verified: Option<bool>,
}

pub fn execute(args: RunArgs) -> Result<()> {
    let mass_unit = parse_unit(&args.mass_unit, "mass")?;
    let g_unit = parse_unit(&args.g_unit, "acceleration")?;
    let force_unit = parse_unit(&args.force_unit, "force")?;

    let masses = sample_masses(args.count, args.seed);
    let g = [args.g];
    let mut forces = vec![0.0; masses.len()];
    debug!(n = masses.len(), seed = args.seed, "generated masses");

    let m = QuantityBuffer::new(&masses, mass_unit);
    let gb = QuantityBuffer::new(&g, g_unit);

    let start = Instant::now();
    gravitational_force(
        &m,
        &gb,
        &mut QuantityBufferMut::new(&mut forces, force_unit),
        &args.method,
    )
    .with_context(|| format!("kernel '{}' failed", args.method))?;
    let elapsed = start.elapsed();
    info!(method = %args.method, n = masses.len(), ?elapsed, "force computed");

    let verified = if args.verify {
        let same = verify_kernels(&m, &gb, force_unit, &forces)?;
        if !same {
            bail!("kernel outputs differ");
        }
        info!("all kernels produced identical output");
        Some(same)
    } else {
        None
    };

    let report = RunReport {
        method: args.method,
        g: args.g,
        g_unit: args.g_unit,
        mass_unit: args.mass_unit,
        force_unit: args.force_unit,
        masses,
        forces,
        elapsed_us: elapsed.as_micros(),
        verified,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&report);
    }
    Ok(())
}

/// `[0, 100)` の一様乱数で質量列を生成する。
pub(crate) fn sample_masses(count: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0.0..100.0)).collect()
}

/// 登録済みの全カーネルを実行し、`reference` とビット単位で比較する。
fn verify_kernels(
    m: &QuantityBuffer<'_>,
    g: &QuantityBuffer<'_>,
    force_unit: quanta_types::Unit,
    reference: &[f64],
) -> Result<bool> {
    for kernel in kernels() {
        let mut out = vec![0.0; reference.len()];
        kernel
            .run(m, g, &mut QuantityBufferMut::new(&mut out, force_unit))
            .with_context(|| format!("kernel '{}' failed during verification", kernel.name))?;
        if !same_bits(&out, reference) {
            warn!(kernel = kernel.name, "output differs from selected kernel");
            return Ok(false);
        }
        debug!(kernel = kernel.name, "output identical");
    }
    Ok(true)
}

fn same_bits(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
}

fn print_table(report: &RunReport) {
    println!(
        "method = {}, g = {} {}",
        report.method, report.g, report.g_unit
    );
    println!(
        "{:>5}  {:>16}  {:>16}",
        "i",
        format!("m [{}]", report.mass_unit),
        format!("F [{}]", report.force_unit)
    );
    for (i, (mi, fi)) in report.masses.iter().zip(&report.forces).enumerate() {
        println!("{i:>5}  {mi:>16.6}  {fi:>16.6}");
    }
    if let Some(verified) = report.verified {
        println!("verified: {verified}");
    }
}
