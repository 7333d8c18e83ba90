//! bench コマンド: カーネルごとの実行時間の比較

use std::hint::black_box;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Args;
use quanta_buffer::{QuantityBuffer, QuantityBufferMut};
use quanta_gravity::kernels;
use serde::Serialize;
use tracing::{debug, info};

use super::parse_unit;
use super::run::sample_masses;

#[derive(Args)]
pub struct BenchArgs {
    /// 質量の個数
    #[arg(short = 'n', long, default_value_t = 1_000_000)]
    pub count: usize,

    /// 計測の繰り返し回数（最良値を採用）
    #[arg(short, long, default_value_t = 5)]
    pub repeat: usize,

    /// 乱数シード
    #[arg(long, default_value_t = 989_182)]
    pub seed: u64,

    /// 結果を JSON で出力する
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Timing {
    kernel: String,
    best_us: u128,
    ns_per_element: f64,
}

pub fn execute(args: BenchArgs) -> Result<()> {
    let repeat = args.repeat.max(1);
    let masses = sample_masses(args.count, args.seed);
    let g = [9.81];
    let mut forces = vec![0.0; masses.len()];

    let kg = parse_unit("kg", "mass")?;
    let accel = parse_unit("m s^-2", "acceleration")?;
    let newton = parse_unit("N", "force")?;
    let m = QuantityBuffer::new(&masses, kg);
    let gb = QuantityBuffer::new(&g, accel);

    let mut timings = Vec::new();
    timings.push(timing(
        "raw-f64",
        best_of(repeat, || {
            for (fi, mi) in forces.iter_mut().zip(&masses) {
                *fi = mi * g[0];
            }
            black_box(&forces);
            Ok(())
        })?,
        masses.len(),
    ));

    for kernel in kernels() {
        let best = best_of(repeat, || {
            kernel
                .run(&m, &gb, &mut QuantityBufferMut::new(&mut forces, newton))
                .with_context(|| format!("kernel '{}' failed", kernel.name))?;
            black_box(&forces);
            Ok(())
        })?;
        debug!(kernel = kernel.name, ?best, "measured");
        timings.push(timing(kernel.name, best, masses.len()));
    }
    info!(n = masses.len(), repeat, "benchmark finished");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&timings)?);
    } else {
        println!("{:>10}  {:>12}  {:>10}", "kernel", "best [us]", "ns/elem");
        for t in &timings {
            println!(
                "{:>10}  {:>12}  {:>10.3}",
                t.kernel, t.best_us, t.ns_per_element
            );
        }
    }
    Ok(())
}

fn best_of(repeat: usize, mut body: impl FnMut() -> Result<()>) -> Result<Duration> {
    let mut best = Duration::MAX;
    for _ in 0..repeat {
        let start = Instant::now();
        body()?;
        best = best.min(start.elapsed());
    }
    Ok(best)
}

fn timing(kernel: &str, best: Duration, n: usize) -> Timing {
    let ns_per_element = if n == 0 {
        0.0
    } else {
        best.as_nanos() as f64 / n as f64
    };
    Timing {
        kernel: kernel.to_string(),
        best_us: best.as_micros(),
        ns_per_element,
    }
}
