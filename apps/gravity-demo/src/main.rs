//! Quanta gravity demo
//!
//! 質量の列と重力加速度から力を計算するコマンドラインツール。
//! 3 つのカーネル形式の実行・一致検証・計測と、単位換算を提供する。

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// 単位付きバッファ上の重力カーネルのデモ
#[derive(Parser)]
#[command(name = "gravity-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Gravitational force kernels over unit-tagged buffers", long_about = None)]
struct Cli {
    /// ログレベル (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 乱数で生成した質量に対して力を計算する
    Run(commands::run::RunArgs),
    /// 登録済みカーネルの実行時間を比較する
    Bench(commands::bench::BenchArgs),
    /// 単位間で値を換算する
    Convert(commands::convert::ConvertArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = cli.log_level.parse::<Level>().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Bench(args) => commands::bench::execute(args),
        Commands::Convert(args) => commands::convert::execute(args),
    }
}
