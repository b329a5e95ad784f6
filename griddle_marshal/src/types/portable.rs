use crate::writer::PortableWriter;
use anyhow::Result;
use derive_more::{Deref, From};
use std::any::Any;
use std::fmt;

/// Stable wire identifier of a portable type, agreed by every peer that
/// serializes or deserializes it.
#[derive(From, Deref, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct PortableTypeId(i32);

/// A user-defined object that can serialize its own fields and be
/// reconstructed field-by-field on the far side.
///
/// The write side is `write_fields`; the read side is a constructor
/// registered in a [`PortableRegistry`](crate::PortableRegistry) under the
/// same [`PortableTypeId`]. Field order is part of the type's contract: the
/// constructor must read exactly what `write_fields` wrote, in order.
///
/// `eq_dyn`/`as_any`/`into_any` let decoded objects be compared and
/// downcast behind `dyn Portable`; the usual shape is
///
/// ```ignore
/// fn eq_dyn(&self, other: &dyn Portable) -> bool {
///     other.as_any().downcast_ref::<Self>() == Some(self)
/// }
/// fn as_any(&self) -> &dyn Any {
///     self
/// }
/// fn into_any(self: Box<Self>) -> Box<dyn Any> {
///     self
/// }
/// ```
pub trait Portable: Any + fmt::Debug {
    fn portable_type_id(&self) -> PortableTypeId;

    fn write_fields(&self, w: &mut PortableWriter) -> Result<()>;

    fn eq_dyn(&self, other: &dyn Portable) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}
