//! サブコマンドの実装

pub mod bench;
pub mod convert;
pub mod run;

use anyhow::{Context, Result};
use quanta_types::Unit;

/// コマンドライン引数の単位文字列を解析する。
pub(crate) fn parse_unit(text: &str, what: &str) -> Result<Unit> {
    text.parse::<Unit>()
        .with_context(|| format!("invalid {what} unit '{text}'"))
}
