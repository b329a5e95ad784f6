use crate::tags::TypeTag;

/// Decode/encode failures above the byte level.
///
/// Truncated input surfaces as [`griddle_wire::WireError`]; both are
/// recoverable and abort the whole marshal/unmarshal call.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MarshalError {
    #[error("unexpected object marker {0:#04x}")]
    UnexpectedMarker(i8),
    #[error("unknown type tag {0:#04x}")]
    UnknownTag(i8),
    #[error("type tag {0:?} carries no variant payload")]
    UnsupportedTag(TypeTag),
    #[error("no portable constructor registered for type id {0}")]
    UnknownTypeId(i32),
    #[error("malformed length {0}")]
    MalformedLength(i32),
    #[error("portable with type id {type_id} serialized twice in one stream; object graphs must be acyclic and unshared")]
    RepeatedObject { type_id: i32 },
}
