use std::fmt;

/// 128-bit identifier carried as two signed 64-bit halves, matching its
/// wire layout.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Uuid {
    most_sig_bits: i64,
    least_sig_bits: i64,
}

impl Uuid {
    pub fn new(most_sig_bits: i64, least_sig_bits: i64) -> Self {
        Self {
            most_sig_bits,
            least_sig_bits,
        }
    }

    pub fn most_sig_bits(&self) -> i64 {
        self.most_sig_bits
    }

    pub fn least_sig_bits(&self) -> i64 {
        self.least_sig_bits
    }
}

impl fmt::Display for Uuid {
    /// Canonical hyphenated form, e.g. `123e4567-e89b-12d3-a456-426614174000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msb = self.most_sig_bits as u64;
        let lsb = self.least_sig_bits as u64;
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            msb >> 32,
            (msb >> 16) & 0xFFFF,
            msb & 0xFFFF,
            lsb >> 48,
            lsb & 0xFFFF_FFFF_FFFF,
        )
    }
}

#[cfg(test)]
mod test {
    use super::Uuid;

    #[test]
    fn display_canonical_form() {
        let uuid = Uuid::new(0x123e4567_e89b_12d3_u64 as i64, 0xa456_426614174000_u64 as i64);
        assert_eq!("123e4567-e89b-12d3-a456-426614174000", uuid.to_string());

        let uuid = Uuid::new(0, 0);
        assert_eq!("00000000-0000-0000-0000-000000000000", uuid.to_string());

        let uuid = Uuid::new(-1, -1);
        assert_eq!("ffffffff-ffff-ffff-ffff-ffffffffffff", uuid.to_string());
    }
}
