use crate::{ByteOrder, Result, WireError};

/// Read-only primitive decoder: a cursor over a borrowed byte slice.
///
/// Every read of N bytes first checks that N bytes remain; the cursor never
/// runs past the end of the slice.
#[derive(Debug)]
pub struct WireReader<'a> {
    order: ByteOrder,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(order: ByteOrder, bytes: &'a [u8]) -> Self {
        Self {
            order,
            bytes,
            pos: 0,
        }
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn take(&mut self, need: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if remaining < need {
            return Err(WireError::UnexpectedEof { need, remaining });
        }
        let taken = &self.bytes[self.pos..self.pos + need];
        self.pos += need;
        Ok(taken)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        let buf = self.take(1)?;
        Ok(buf[0] as i8)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let buf = self.take(len)?;
        Ok(buf.to_vec())
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        let buf = self.take(2)?.try_into().unwrap();
        Ok(match self.order {
            ByteOrder::Little => i16::from_le_bytes(buf),
            ByteOrder::Big => i16::from_be_bytes(buf),
        })
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let buf = self.take(4)?.try_into().unwrap();
        Ok(match self.order {
            ByteOrder::Little => i32::from_le_bytes(buf),
            ByteOrder::Big => i32::from_be_bytes(buf),
        })
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        let buf = self.take(8)?.try_into().unwrap();
        Ok(match self.order {
            ByteOrder::Little => i64::from_le_bytes(buf),
            ByteOrder::Big => i64::from_be_bytes(buf),
        })
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let buf = self.take(4)?.try_into().unwrap();
        Ok(match self.order {
            ByteOrder::Little => f32::from_le_bytes(buf),
            ByteOrder::Big => f32::from_be_bytes(buf),
        })
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        let buf = self.take(8)?.try_into().unwrap();
        Ok(match self.order {
            ByteOrder::Little => f64::from_le_bytes(buf),
            ByteOrder::Big => f64::from_be_bytes(buf),
        })
    }
}
