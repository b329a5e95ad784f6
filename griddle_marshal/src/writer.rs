use crate::error::MarshalError;
use crate::handle::WriteHandleTable;
use crate::tags::{ObjectMarker, TypeTag};
use crate::types::{Portable, Uuid, Variant};
use anyhow::Result;
use griddle_wire::{ByteOrder, WireWriter};

const HANDLE_TABLE_CAP: usize = 16;
const HANDLE_TABLE_LOAD_FACTOR: f32 = 0.75;

/// Field-level encoder for portable objects and variant trees.
///
/// One writer serializes one top-level value, then is discarded; the handle
/// table lives exactly as long as the writer.
pub struct PortableWriter {
    out: WireWriter,
    handles: WriteHandleTable,
}

impl PortableWriter {
    pub fn new(order: ByteOrder) -> Self {
        Self {
            out: WireWriter::new(order),
            handles: WriteHandleTable::new(HANDLE_TABLE_CAP, HANDLE_TABLE_LOAD_FACTOR),
        }
    }

    /// Serializes one user object: framing marker, type id, then the
    /// object's own fields in its fixed order.
    ///
    /// An identity already serialized in this stream is rejected: object
    /// graphs must be acyclic and unshared.
    pub fn write_portable(&mut self, portable: &dyn Portable) -> Result<()> {
        let identity = portable as *const dyn Portable as *const () as usize;
        if self.handles.lookup(identity).is_some() {
            return Err(MarshalError::RepeatedObject {
                type_id: *portable.portable_type_id(),
            }
            .into());
        }

        self.out.write_i8(ObjectMarker::Object.into());
        self.out.write_i32(*portable.portable_type_id());

        portable.write_fields(self)
    }

    pub fn write_byte(&mut self, val: i8) {
        self.out.write_i8(val);
    }

    pub fn write_i16(&mut self, val: i16) {
        self.out.write_i16(val);
    }

    pub fn write_i32(&mut self, val: i32) {
        self.out.write_i32(val);
    }

    pub fn write_i64(&mut self, val: i64) {
        self.out.write_i64(val);
    }

    pub fn write_f32(&mut self, val: f32) {
        self.out.write_f32(val);
    }

    pub fn write_f64(&mut self, val: f64) {
        self.out.write_f64(val);
    }

    pub fn write_bool(&mut self, val: bool) {
        self.out.write_i8(if val { 1 } else { 0 });
    }

    /// Empty and absent strings share the `-1` length encoding; the read
    /// side yields absent for both.
    pub fn write_string(&mut self, val: &str) -> Result<()> {
        if val.is_empty() {
            self.out.write_i32(-1);
        } else {
            self.out.write_i32(i32::try_from(val.len())?);
            self.out.write_bytes(val.as_bytes());
        }
        Ok(())
    }

    pub fn write_uuid(&mut self, val: Option<&Uuid>) {
        match val {
            Some(uuid) => {
                self.out.write_i8(1);
                self.out.write_i64(uuid.most_sig_bits());
                self.out.write_i64(uuid.least_sig_bits());
            }
            None => self.out.write_i8(0),
        }
    }

    pub fn write_byte_array(&mut self, vals: &[u8]) -> Result<()> {
        self.out.write_i32(i32::try_from(vals.len())?);
        self.out.write_bytes(vals);
        Ok(())
    }

    pub fn write_i16_array(&mut self, vals: &[i16]) -> Result<()> {
        self.out.write_i32(i32::try_from(vals.len())?);
        for val in vals {
            self.out.write_i16(*val);
        }
        Ok(())
    }

    pub fn write_i32_array(&mut self, vals: &[i32]) -> Result<()> {
        self.out.write_i32(i32::try_from(vals.len())?);
        for val in vals {
            self.out.write_i32(*val);
        }
        Ok(())
    }

    pub fn write_i64_array(&mut self, vals: &[i64]) -> Result<()> {
        self.out.write_i32(i32::try_from(vals.len())?);
        for val in vals {
            self.out.write_i64(*val);
        }
        Ok(())
    }

    pub fn write_f32_array(&mut self, vals: &[f32]) -> Result<()> {
        self.out.write_i32(i32::try_from(vals.len())?);
        for val in vals {
            self.out.write_f32(*val);
        }
        Ok(())
    }

    pub fn write_f64_array(&mut self, vals: &[f64]) -> Result<()> {
        self.out.write_i32(i32::try_from(vals.len())?);
        for val in vals {
            self.out.write_f64(*val);
        }
        Ok(())
    }

    pub fn write_bool_array(&mut self, vals: &[bool]) -> Result<()> {
        self.out.write_i32(i32::try_from(vals.len())?);
        for val in vals {
            self.write_bool(*val);
        }
        Ok(())
    }

    pub fn write_string_array<S: AsRef<str>>(&mut self, vals: &[S]) -> Result<()> {
        self.out.write_i32(i32::try_from(vals.len())?);
        for val in vals {
            self.write_string(val.as_ref())?;
        }
        Ok(())
    }

    /// One tag byte, then the tag-specific payload.
    pub fn write_variant(&mut self, val: &Variant) -> Result<()> {
        self.out.write_i8(TypeTag::from(val).into());

        match val {
            Variant::Null => {}
            Variant::Int(i) => self.out.write_i32(*i),
            Variant::Long(i) => self.out.write_i64(*i),
            Variant::Bool(b) => self.write_bool(*b),
            Variant::Str(s) => self.write_string(s)?,
            Variant::Uuid(uuid) => self.write_uuid(Some(uuid)),
            Variant::Object(portable) => self.write_portable(portable.as_ref())?,
            Variant::List(items) => self.write_variant_array(items)?,
            Variant::Map(pairs) => self.write_variant_map(pairs)?,
        }

        Ok(())
    }

    pub fn write_variant_array(&mut self, items: &[Variant]) -> Result<()> {
        self.out.write_i8(ObjectMarker::Object.into());
        self.out.write_i32(i32::try_from(items.len())?);

        for item in items {
            self.write_variant(item)?;
        }

        Ok(())
    }

    pub fn write_variant_map(&mut self, pairs: &[(Variant, Variant)]) -> Result<()> {
        self.out.write_i8(ObjectMarker::Object.into());
        self.out.write_i32(i32::try_from(pairs.len())?);

        for (key, val) in pairs {
            self.write_variant(key)?;
            self.write_variant(val)?;
        }

        Ok(())
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.out.into_bytes()
    }
}
