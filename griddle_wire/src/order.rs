/// Byte order of all multi-byte primitives in one stream.
///
/// Selected once per writer/reader; never per field.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// The build target's native order.
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }
}
