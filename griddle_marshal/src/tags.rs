//! Wire discriminators: value type tags and object framing markers.

use crate::types::Variant;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::ToPrimitive;

/// Single-byte discriminator preceding every variant payload.
///
/// We manually pin the discriminants because the wire values are fixed by
/// the protocol, with gaps (11..=17) left by retired tags.
#[repr(i8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum TypeTag {
    Null = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    Bool = 7,
    Char = 8,
    Str = 9,
    ByteArr = 10,
    List = 18,
    Map = 19,
    Uuid = 20,
    UserObject = 21,
}

impl From<TypeTag> for i8 {
    fn from(tag: TypeTag) -> Self {
        tag.to_i8().unwrap()
    }
}

impl From<&Variant> for TypeTag {
    fn from(val: &Variant) -> Self {
        match val {
            Variant::Null => TypeTag::Null,
            Variant::Int(_) => TypeTag::Int,
            Variant::Long(_) => TypeTag::Long,
            Variant::Bool(_) => TypeTag::Bool,
            Variant::Str(_) => TypeTag::Str,
            Variant::Uuid(_) => TypeTag::Uuid,
            Variant::Object(_) => TypeTag::UserObject,
            Variant::List(_) => TypeTag::List,
            Variant::Map(_) => TypeTag::Map,
        }
    }
}

/// Framing byte ahead of a top-level object and of list/map bodies.
#[repr(i8)]
#[derive(PartialEq, Eq, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum ObjectMarker {
    Object = 0,
    NullObject = 2,
}

impl From<ObjectMarker> for i8 {
    fn from(marker: ObjectMarker) -> Self {
        marker.to_i8().unwrap()
    }
}

// Framing flags reserved for reference-sharing support; declared for wire
// compatibility, not yet emitted.
pub const FLAG_NULL: u8 = 0x80;
pub const FLAG_HANDLE: u8 = 0x81;
pub const FLAG_OBJECT: u8 = 0x82;
pub const FLAG_METADATA: u8 = 0x83;
