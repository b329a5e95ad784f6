use crate::error::MarshalError;
use crate::reader::PortableReader;
use crate::types::{Portable, PortableTypeId};
use anyhow::Result;
use std::collections::HashMap;

type Ctor = Box<dyn Fn(&mut PortableReader<'_>) -> Result<Box<dyn Portable>> + Send + Sync>;

/// Maps a stable type id to a constructor producing a new, self-populated
/// object from a reader.
///
/// Populated once at startup, one registration per portable type; queried by
/// the reader for every user-object frame. Constructors are `Send + Sync`,
/// so one registry may be dispatched from concurrent unmarshal calls.
#[derive(Default)]
pub struct PortableRegistry {
    ctors: HashMap<PortableTypeId, Ctor>,
}

impl PortableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, type_id: PortableTypeId, ctor: F)
    where
        F: Fn(&mut PortableReader<'_>) -> Result<Box<dyn Portable>> + Send + Sync + 'static,
    {
        self.ctors.insert(type_id, Box::new(ctor));
    }

    pub fn create(
        &self,
        type_id: PortableTypeId,
        r: &mut PortableReader<'_>,
    ) -> Result<Box<dyn Portable>> {
        match self.ctors.get(&type_id) {
            Some(ctor) => ctor(r),
            None => Err(MarshalError::UnknownTypeId(*type_id).into()),
        }
    }
}
