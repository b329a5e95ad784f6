//! # Portable marshalling
//!
//! Encodes typed values (scalars, strings, UUIDs, dynamically-typed
//! [`Variant`](types::Variant) trees, and user-defined
//! [`Portable`](types::Portable) objects) into one flat byte sequence, and
//! decodes such a sequence back into owned values.
//!
//! The below pseudocode depicts the serialized representations. All
//! multi-byte integers are laid out in the stream's
//! [`ByteOrder`](griddle_wire::ByteOrder).
//!
//! ```text
//! struct TopLevelObject {
//!     marker:     i8,     // ObjectMarker::Object
//!     type_id:    i32,
//!     fields:     ...,    // the object's own field order
//! }
//!
//! struct String {
//!     len:        i32,    // -1 encodes both absent and empty
//!     bytes:      [u8; len],
//! }
//!
//! struct Uuid {
//!     present:    i8,
//!     high:       i64,    // iff present
//!     low:        i64,    // iff present
//! }
//!
//! struct PrimitiveArray {         // byte/short/int/long/float/double/bool
//!     count:      i32,            // -1 decodes as absent
//!     elements:   [elem; count],  // plain elements, no per-element tag
//! }
//!
//! struct Variant {
//!     tag:        i8,     // TypeTag
//!     payload:    ...,    // tag-specific; lists and maps additionally
//!                         // carry [framing: i8][count: i32]
//! }
//! ```
//!
//! A writer or reader lives for exactly one marshal/unmarshal call; its
//! handle table lives exactly as long as it does. Nothing is shared across
//! calls, so one [`Marshaller`] may serve concurrent callers as long as the
//! registered constructors are thread-safe (they are required to be
//! `Send + Sync`).

mod error;
pub mod handle;
mod marshaller;
mod reader;
mod registry;
pub mod tags;
pub mod types;
mod writer;

mod handle_test;

pub use error::*;
pub use marshaller::*;
pub use reader::*;
pub use registry::*;
pub use writer::*;
