use crate::error::MarshalError;
use crate::handle::ReadHandleTable;
use crate::registry::PortableRegistry;
use crate::tags::{ObjectMarker, TypeTag};
use crate::types::{Portable, PortableTypeId, Uuid, Variant};
use anyhow::Result;
use griddle_wire::{ByteOrder, WireReader};
use num_traits::FromPrimitive;

/// Field-level decoder over one byte sequence.
///
/// The exact inverse of [`PortableWriter`](crate::PortableWriter):
/// user-object construction is delegated to the registry, every read is
/// bounds-checked by the underlying [`WireReader`], and every decoded
/// object is assigned a read handle in decode order.
pub struct PortableReader<'a> {
    input: WireReader<'a>,
    registry: &'a PortableRegistry,
    handles: ReadHandleTable<usize>,
}

impl<'a> PortableReader<'a> {
    pub fn new(order: ByteOrder, bytes: &'a [u8], registry: &'a PortableRegistry) -> Self {
        Self {
            input: WireReader::new(order, bytes),
            registry,
            handles: ReadHandleTable::new(),
        }
    }

    /// Decodes one user object: framing marker, type id, then construction
    /// through the registry, which pulls the object's own fields.
    pub fn read_portable(&mut self) -> Result<Box<dyn Portable>> {
        let marker = self.input.read_i8()?;
        if ObjectMarker::from_i8(marker) != Some(ObjectMarker::Object) {
            return Err(MarshalError::UnexpectedMarker(marker).into());
        }

        let type_id = PortableTypeId::from(self.input.read_i32()?);

        let registry = self.registry;
        let portable = registry.create(type_id, self)?;

        let identity = portable.as_ref() as *const dyn Portable as *const () as usize;
        self.handles.assign(identity);

        Ok(portable)
    }

    pub fn read_byte(&mut self) -> Result<i8> {
        Ok(self.input.read_i8()?)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.input.read_i16()?)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.input.read_i32()?)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.input.read_i64()?)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(self.input.read_f32()?)
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(self.input.read_f64()?)
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.input.read_i8()? != 0)
    }

    /// A length of `-1` yields absent; an empty string is never produced
    /// (see the write side's conflation).
    pub fn read_string(&mut self) -> Result<Option<String>> {
        let len = self.input.read_i32()?;
        if len == -1 {
            return Ok(None);
        }

        let len = Self::checked_len(len)?;
        let bytes = self.input.read_bytes(len)?;
        Ok(Some(String::from_utf8(bytes)?))
    }

    pub fn read_uuid(&mut self) -> Result<Option<Uuid>> {
        if self.input.read_i8()? == 0 {
            return Ok(None);
        }

        let most_sig_bits = self.input.read_i64()?;
        let least_sig_bits = self.input.read_i64()?;
        Ok(Some(Uuid::new(most_sig_bits, least_sig_bits)))
    }

    pub fn read_byte_array(&mut self) -> Result<Option<Vec<u8>>> {
        match self.read_count()? {
            None => Ok(None),
            Some(len) => Ok(Some(self.input.read_bytes(len)?)),
        }
    }

    pub fn read_i16_array(&mut self) -> Result<Option<Vec<i16>>> {
        match self.read_count()? {
            None => Ok(None),
            Some(count) => {
                let mut vals = self.alloc_elems(count);
                for _ in 0..count {
                    vals.push(self.input.read_i16()?);
                }
                Ok(Some(vals))
            }
        }
    }

    pub fn read_i32_array(&mut self) -> Result<Option<Vec<i32>>> {
        match self.read_count()? {
            None => Ok(None),
            Some(count) => {
                let mut vals = self.alloc_elems(count);
                for _ in 0..count {
                    vals.push(self.input.read_i32()?);
                }
                Ok(Some(vals))
            }
        }
    }

    pub fn read_i64_array(&mut self) -> Result<Option<Vec<i64>>> {
        match self.read_count()? {
            None => Ok(None),
            Some(count) => {
                let mut vals = self.alloc_elems(count);
                for _ in 0..count {
                    vals.push(self.input.read_i64()?);
                }
                Ok(Some(vals))
            }
        }
    }

    pub fn read_f32_array(&mut self) -> Result<Option<Vec<f32>>> {
        match self.read_count()? {
            None => Ok(None),
            Some(count) => {
                let mut vals = self.alloc_elems(count);
                for _ in 0..count {
                    vals.push(self.input.read_f32()?);
                }
                Ok(Some(vals))
            }
        }
    }

    pub fn read_f64_array(&mut self) -> Result<Option<Vec<f64>>> {
        match self.read_count()? {
            None => Ok(None),
            Some(count) => {
                let mut vals = self.alloc_elems(count);
                for _ in 0..count {
                    vals.push(self.input.read_f64()?);
                }
                Ok(Some(vals))
            }
        }
    }

    pub fn read_bool_array(&mut self) -> Result<Option<Vec<bool>>> {
        match self.read_count()? {
            None => Ok(None),
            Some(count) => {
                let mut vals = self.alloc_elems(count);
                for _ in 0..count {
                    vals.push(self.read_bool()?);
                }
                Ok(Some(vals))
            }
        }
    }

    /// Element-level `-1` lengths decode as `""`, the element face of the
    /// empty/absent conflation.
    pub fn read_string_array(&mut self) -> Result<Option<Vec<String>>> {
        match self.read_count()? {
            None => Ok(None),
            Some(count) => {
                let mut vals = self.alloc_elems(count);
                for _ in 0..count {
                    vals.push(self.read_string()?.unwrap_or_default());
                }
                Ok(Some(vals))
            }
        }
    }

    /// One tag byte, then the tag-specific payload.
    ///
    /// Payloads that decode to "absent" (string length `-1`, uuid presence
    /// `0`, list/map count `-1`) yield [`Variant::Null`].
    pub fn read_variant(&mut self) -> Result<Variant> {
        let tag_byte = self.input.read_i8()?;
        let tag = TypeTag::from_i8(tag_byte).ok_or(MarshalError::UnknownTag(tag_byte))?;

        match tag {
            TypeTag::Null => Ok(Variant::Null),
            TypeTag::Int => Ok(Variant::Int(self.input.read_i32()?)),
            TypeTag::Long => Ok(Variant::Long(self.input.read_i64()?)),
            TypeTag::Bool => Ok(Variant::Bool(self.input.read_i8()? != 0)),
            TypeTag::Str => Ok(match self.read_string()? {
                Some(s) => Variant::Str(s),
                None => Variant::Null,
            }),
            TypeTag::Uuid => Ok(match self.read_uuid()? {
                Some(uuid) => Variant::Uuid(uuid),
                None => Variant::Null,
            }),
            TypeTag::UserObject => Ok(Variant::Object(self.read_portable()?)),
            TypeTag::List => Ok(match self.read_variant_array()? {
                Some(items) => Variant::List(items),
                None => Variant::Null,
            }),
            TypeTag::Map => Ok(match self.read_variant_map()? {
                Some(pairs) => Variant::Map(pairs),
                None => Variant::Null,
            }),
            other => Err(MarshalError::UnsupportedTag(other).into()),
        }
    }

    pub fn read_variant_array(&mut self) -> Result<Option<Vec<Variant>>> {
        let marker = self.input.read_i8()?;
        if ObjectMarker::from_i8(marker) != Some(ObjectMarker::Object) {
            return Err(MarshalError::UnexpectedMarker(marker).into());
        }

        match self.read_count()? {
            None => Ok(None),
            Some(count) => {
                let mut items = self.alloc_elems(count);
                for _ in 0..count {
                    items.push(self.read_variant()?);
                }
                Ok(Some(items))
            }
        }
    }

    /// Unlike a list, a map's framing byte may be the null-object marker,
    /// which decodes as absent.
    pub fn read_variant_map(&mut self) -> Result<Option<Vec<(Variant, Variant)>>> {
        let marker = self.input.read_i8()?;
        match ObjectMarker::from_i8(marker) {
            Some(ObjectMarker::NullObject) => return Ok(None),
            Some(ObjectMarker::Object) => {}
            None => return Err(MarshalError::UnexpectedMarker(marker).into()),
        }

        match self.read_count()? {
            None => Ok(None),
            Some(count) => {
                let mut pairs = self.alloc_elems(count);
                for _ in 0..count {
                    let key = self.read_variant()?;
                    let val = self.read_variant()?;
                    pairs.push((key, val));
                }
                Ok(Some(pairs))
            }
        }
    }

    /// Count prefix shared by every collection: `-1` is the absent
    /// sentinel, any other negative is malformed.
    fn read_count(&mut self) -> Result<Option<usize>> {
        let count = self.input.read_i32()?;
        if count == -1 {
            return Ok(None);
        }
        Ok(Some(Self::checked_len(count)?))
    }

    fn checked_len(len: i32) -> Result<usize, MarshalError> {
        usize::try_from(len).map_err(|_| MarshalError::MalformedLength(len))
    }

    /// Preallocation is capped by the bytes remaining: every element
    /// consumes at least one byte, so a count beyond that cannot be honored.
    fn alloc_elems<T>(&self, count: usize) -> Vec<T> {
        Vec::with_capacity(count.min(self.input.remaining()))
    }
}
