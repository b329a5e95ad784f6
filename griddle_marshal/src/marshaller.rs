use crate::reader::PortableReader;
use crate::registry::PortableRegistry;
use crate::types::Portable;
use crate::writer::PortableWriter;
use anyhow::{anyhow, Result};
use griddle_wire::ByteOrder;
use std::any;

/// Entry point tying a byte order and a type registry together.
///
/// Each `marshal`/`unmarshal` call creates its own writer or reader; no
/// state spans calls.
pub struct Marshaller {
    order: ByteOrder,
    registry: PortableRegistry,
}

impl Marshaller {
    /// A marshaller using the build target's native byte order. Both peers
    /// of a connection must agree on the order out of band; there is no
    /// in-band indicator.
    pub fn new(registry: PortableRegistry) -> Self {
        Self::with_order(ByteOrder::native(), registry)
    }

    pub fn with_order(order: ByteOrder, registry: PortableRegistry) -> Self {
        Self { order, registry }
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn marshal(&self, portable: &dyn Portable) -> Result<Vec<u8>> {
        let mut w = PortableWriter::new(self.order);
        w.write_portable(portable)?;
        Ok(w.into_bytes())
    }

    pub fn unmarshal(&self, bytes: &[u8]) -> Result<Box<dyn Portable>> {
        let mut r = PortableReader::new(self.order, bytes, &self.registry);
        r.read_portable()
    }

    pub fn unmarshal_as<T: Portable>(&self, bytes: &[u8]) -> Result<Box<T>> {
        let portable = self.unmarshal(bytes)?;
        let type_id = portable.portable_type_id();

        portable.into_any().downcast::<T>().map_err(|_| {
            anyhow!(
                "Portable with type id {} is not a {}",
                *type_id,
                any::type_name::<T>()
            )
        })
    }
}
