#[cfg(test)]
mod test {
    use crate::{ByteOrder, WireError, WireReader, WireWriter};

    #[test]
    fn little_endian_layout() {
        let mut w = WireWriter::new(ByteOrder::Little);
        w.write_i8(0x7F);
        w.write_i16(0x0102);
        w.write_i32(42);
        w.write_i64(-1);
        let bytes = w.into_bytes();
        assert_eq!(
            bytes,
            vec![
                0x7F, //
                0x02, 0x01, //
                0x2A, 0x00, 0x00, 0x00, //
                0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
            ]
        );
    }

    #[test]
    fn big_endian_layout() {
        let mut w = WireWriter::new(ByteOrder::Big);
        w.write_i16(0x0102);
        w.write_i32(42);
        let bytes = w.into_bytes();
        assert_eq!(bytes, vec![0x01, 0x02, 0x00, 0x00, 0x00, 0x2A]);
    }

    #[test]
    fn roundtrip_boundary_values() {
        for order in [ByteOrder::Little, ByteOrder::Big] {
            let mut w = WireWriter::new(order);
            for i in [0i8, -1, i8::MIN, i8::MAX] {
                w.write_i8(i);
            }
            for i in [0i16, -1, i16::MIN, i16::MAX] {
                w.write_i16(i);
            }
            for i in [0i32, -1, i32::MIN, i32::MAX] {
                w.write_i32(i);
            }
            for i in [0i64, -1, i64::MIN, i64::MAX] {
                w.write_i64(i);
            }
            let bytes = w.into_bytes();

            let mut r = WireReader::new(order, &bytes);
            for i in [0i8, -1, i8::MIN, i8::MAX] {
                assert_eq!(i, r.read_i8().unwrap());
            }
            for i in [0i16, -1, i16::MIN, i16::MAX] {
                assert_eq!(i, r.read_i16().unwrap());
            }
            for i in [0i32, -1, i32::MIN, i32::MAX] {
                assert_eq!(i, r.read_i32().unwrap());
            }
            for i in [0i64, -1, i64::MIN, i64::MAX] {
                assert_eq!(i, r.read_i64().unwrap());
            }
            assert_eq!(0, r.remaining());
        }
    }

    #[test]
    fn roundtrip_float_special_values() {
        for order in [ByteOrder::Little, ByteOrder::Big] {
            let mut w = WireWriter::new(order);
            for f in [0.0f32, -0.0, f32::MIN, f32::MAX, f32::INFINITY, f32::NEG_INFINITY] {
                w.write_f32(f);
            }
            w.write_f32(f32::NAN);
            for f in [0.0f64, -0.0, f64::MIN, f64::MAX, f64::INFINITY, f64::NEG_INFINITY] {
                w.write_f64(f);
            }
            w.write_f64(f64::NAN);
            let bytes = w.into_bytes();

            let mut r = WireReader::new(order, &bytes);
            for f in [0.0f32, -0.0, f32::MIN, f32::MAX, f32::INFINITY, f32::NEG_INFINITY] {
                assert_eq!(f.to_bits(), r.read_f32().unwrap().to_bits());
            }
            assert!(r.read_f32().unwrap().is_nan());
            for f in [0.0f64, -0.0, f64::MIN, f64::MAX, f64::INFINITY, f64::NEG_INFINITY] {
                assert_eq!(f.to_bits(), r.read_f64().unwrap().to_bits());
            }
            assert!(r.read_f64().unwrap().is_nan());
        }
    }

    #[test]
    fn raw_bytes_passthrough() {
        let mut w = WireWriter::new(ByteOrder::Little);
        w.write_bytes(b"abc");
        let bytes = w.into_bytes();
        assert_eq!(bytes, b"abc");

        let mut r = WireReader::new(ByteOrder::Little, &bytes);
        assert_eq!(r.read_bytes(3).unwrap(), b"abc");
        assert_eq!(
            r.read_bytes(1),
            Err(WireError::UnexpectedEof {
                need: 1,
                remaining: 0
            })
        );
    }

    #[test]
    fn truncated_reads_fail_at_every_width() {
        let bytes = [0u8; 7];
        let mut r = WireReader::new(ByteOrder::Little, &bytes);
        assert!(r.read_i64().is_err());
        assert!(r.read_f64().is_err());
        // A failed read must not consume anything.
        assert_eq!(7, r.remaining());
        assert!(r.read_i32().is_ok());
        assert!(r.read_i32().is_err());
        assert_eq!(3, r.remaining());
        assert!(r.read_i16().is_ok());
        assert!(r.read_i8().is_ok());
        assert_eq!(
            r.read_i8(),
            Err(WireError::UnexpectedEof {
                need: 1,
                remaining: 0
            })
        );
    }

    #[test]
    fn orders_disagree_on_multibyte_values() {
        let mut w = WireWriter::new(ByteOrder::Little);
        w.write_i32(0x0A0B0C0D);
        let bytes = w.into_bytes();

        let mut r = WireReader::new(ByteOrder::Big, &bytes);
        assert_eq!(0x0D0C0B0A, r.read_i32().unwrap());
    }
}
