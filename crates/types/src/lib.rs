//! Fundamental type system for Quanta
//!
//! Provides dimension signatures, dimension-aware quantities, and unit descriptors.

pub mod dimension;
pub mod error;
pub mod quantity;
pub mod si;
pub mod traits;
pub mod unit;

pub use dimension::Dimension;
pub use error::{DimensionMismatch, ExponentOverflow, UnitError};
pub use quantity::Quantity;
pub use traits::{Dim, Dimensioned, HasProduct, HasQuotient};
pub use unit::Unit;
