//! Non-owning, unit-tagged views over `f64` storage.
//!
//! A [`QuantityBuffer`] surfaces the raw values of an externally owned slice
//! as [`Quantity`](quanta_types::Quantity) values, checking the requested
//! dimension against the buffer's [`Unit`](quanta_types::Unit). Three
//! traversal surfaces are offered: indexed access, a lazy reader
//! ([`Iter`]) and an advancing writer ([`Cursor`]).

mod buffer;
mod cursor;
mod error;
mod iter;
mod layout;

pub use buffer::{QuantityBuffer, QuantityBufferMut};
pub use cursor::Cursor;
pub use error::{BufferError, Position};
pub use iter::Iter;
pub use layout::Layout;
