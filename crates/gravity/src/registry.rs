/// 名前でカーネルを選択するためのリンク時レジストリ。
use quanta_buffer::{QuantityBuffer, QuantityBufferMut};
use tracing::debug;

use crate::error::KernelError;
use crate::force::{gravitational_force_index, gravitational_force_iter, gravitational_force_pipeline};

/// カーネル関数の共通シグネチャ `(m, g, F) -> Result`。
pub type KernelFn = fn(
    &QuantityBuffer<'_>,
    &QuantityBuffer<'_>,
    &mut QuantityBufferMut<'_>,
) -> Result<(), KernelError>;

/// 名前を指定しない場合に使うカーネル。
pub const DEFAULT_KERNEL: &str = "pipeline";

/// 登録済みカーネル 1 件。
pub struct ForceKernel {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub entry: KernelFn,
}

impl ForceKernel {
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }

    pub fn run(
        &self,
        m: &QuantityBuffer<'_>,
        g: &QuantityBuffer<'_>,
        f: &mut QuantityBufferMut<'_>,
    ) -> Result<(), KernelError> {
        (self.entry)(m, g, f)
    }
}

inventory::collect!(ForceKernel);

inventory::submit! {
    ForceKernel {
        name: "pipeline",
        aliases: &["rac"],
        description: "lazy transform of the mass sequence copied into an output cursor",
        entry: gravitational_force_pipeline,
    }
}

inventory::submit! {
    ForceKernel {
        name: "iter",
        aliases: &["iterator"],
        description: "explicit reader and cursor advanced in lockstep",
        entry: gravitational_force_iter,
    }
}

inventory::submit! {
    ForceKernel {
        name: "index",
        aliases: &["indexed"],
        description: "integer-indexed get/set loop",
        entry: gravitational_force_index,
    }
}

/// 登録済みカーネルを名前順で返す。
pub fn kernels() -> Vec<&'static ForceKernel> {
    let mut all: Vec<&'static ForceKernel> = inventory::iter::<ForceKernel>.into_iter().collect();
    all.sort_by_key(|k| k.name);
    all
}

/// 名前または別名でカーネルを探す。
pub fn find_kernel(name: &str) -> Result<&'static ForceKernel, KernelError> {
    inventory::iter::<ForceKernel>
        .into_iter()
        .find(|k| k.matches(name))
        .ok_or_else(|| KernelError::UnknownKernel {
            name: name.to_string(),
        })
}

/// `method` で選んだカーネルで `F = m * g` を計算する。
pub fn gravitational_force(
    m: &QuantityBuffer<'_>,
    g: &QuantityBuffer<'_>,
    f: &mut QuantityBufferMut<'_>,
    method: &str,
) -> Result<(), KernelError> {
    let kernel = find_kernel(method)?;
    debug!(kernel = kernel.name, n = m.size(), "computing gravitational force");
    kernel.run(m, g, f)
}
