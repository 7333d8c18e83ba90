//! Gravitational force kernels over unit-tagged buffers.
//!
//! `F[i] = m[i] * g` is provided in three traversal styles that produce
//! bitwise-identical output: a lazy pipeline, an explicit iterator loop and
//! an indexed loop. Each style is registered under a name so callers can
//! select one at run time.

mod error;
mod force;
mod registry;

pub use error::{KernelError, Role, ShapeError};
pub use force::{gravitational_force_index, gravitational_force_iter, gravitational_force_pipeline};
pub use registry::{DEFAULT_KERNEL, ForceKernel, KernelFn, find_kernel, gravitational_force, kernels};
