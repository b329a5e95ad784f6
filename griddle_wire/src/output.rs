use crate::ByteOrder;

const INIT_CAP: usize = 1024;

/// Write-only primitive encoder over a growable byte buffer.
///
/// Appends only; capacity growth is amortized by the backing `Vec` and not
/// observable through the encoding.
#[derive(Debug)]
pub struct WireWriter {
    order: ByteOrder,
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new(order: ByteOrder) -> Self {
        Self {
            order,
            buf: Vec::with_capacity(INIT_CAP),
        }
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn write_i8(&mut self, val: i8) {
        self.buf.push(val as u8);
    }

    pub fn write_bytes(&mut self, src: &[u8]) {
        self.buf.extend_from_slice(src);
    }

    pub fn write_i16(&mut self, val: i16) {
        match self.order {
            ByteOrder::Little => self.buf.extend_from_slice(&val.to_le_bytes()),
            ByteOrder::Big => self.buf.extend_from_slice(&val.to_be_bytes()),
        }
    }

    pub fn write_i32(&mut self, val: i32) {
        match self.order {
            ByteOrder::Little => self.buf.extend_from_slice(&val.to_le_bytes()),
            ByteOrder::Big => self.buf.extend_from_slice(&val.to_be_bytes()),
        }
    }

    pub fn write_i64(&mut self, val: i64) {
        match self.order {
            ByteOrder::Little => self.buf.extend_from_slice(&val.to_le_bytes()),
            ByteOrder::Big => self.buf.extend_from_slice(&val.to_be_bytes()),
        }
    }

    pub fn write_f32(&mut self, val: f32) {
        match self.order {
            ByteOrder::Little => self.buf.extend_from_slice(&val.to_le_bytes()),
            ByteOrder::Big => self.buf.extend_from_slice(&val.to_be_bytes()),
        }
    }

    pub fn write_f64(&mut self, val: f64) {
        match self.order {
            ByteOrder::Little => self.buf.extend_from_slice(&val.to_le_bytes()),
            ByteOrder::Big => self.buf.extend_from_slice(&val.to_be_bytes()),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
