//! # Wire primitives
//!
//! The byte-level layer underneath the portable marshaller: fixed-width
//! primitive encoding into a growable buffer, and the bounds-checked
//! read-side inverses over a borrowed slice.
//!
//! The below pseudocode depicts the primitive encodings. Multi-byte values
//! are laid out in the [`ByteOrder`] the writer or reader was created with;
//! the order is fixed for the instance's entire lifetime.
//!
//! ```text
//! i8:     [u8; 1]
//! i16:    [u8; 2]     (byte-order dependent)
//! i32:    [u8; 4]     (byte-order dependent)
//! i64:    [u8; 8]     (byte-order dependent)
//! f32:    [u8; 4]     (IEEE 754, byte-order dependent)
//! f64:    [u8; 8]     (IEEE 754, byte-order dependent)
//! bytes:  [u8; n]     (raw, no length prefix at this layer)
//! ```
//!
//! There is no in-band byte-order indicator: both peers of a connection must
//! agree on the order out of band.

mod error;
mod input;
mod order;
mod output;

mod wire_test;

pub use error::*;
pub use input::*;
pub use order::*;
pub use output::*;
