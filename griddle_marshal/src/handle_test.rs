#[cfg(test)]
mod test {
    use crate::handle::{ReadHandleTable, WriteHandleTable};
    use rand::seq::SliceRandom;

    #[test]
    fn first_lookup_registers_then_resolves() {
        let mut table = WriteHandleTable::new(16, 0.75);

        assert_eq!(None, table.lookup(0x1000));
        assert_eq!(Some(0), table.lookup(0x1000));
        assert_eq!(Some(0), table.lookup(0x1000));

        assert_eq!(None, table.lookup(0x2000));
        assert_eq!(Some(1), table.lookup(0x2000));
        assert_eq!(Some(0), table.lookup(0x1000));

        assert_eq!(2, table.len());
    }

    #[test]
    fn dense_handles_regardless_of_insertion_order() {
        let mut rand_rng = rand::thread_rng();

        for _ in 0..8 {
            let mut identities: Vec<usize> = (0..100).map(|i| 0x4000 + i * 24).collect();
            identities.shuffle(&mut rand_rng);

            // Small initial capacity so both the spine and the entry arrays
            // grow several times along the way.
            let mut table = WriteHandleTable::new(4, 0.75);
            for identity in &identities {
                assert_eq!(None, table.lookup(*identity));
            }

            for (handle, identity) in identities.iter().enumerate() {
                assert_eq!(Some(handle as i32), table.lookup(*identity));
            }
            assert_eq!(100, table.len());
        }
    }

    #[test]
    fn colliding_identities_chain() {
        // Two buckets, load factor high enough that the spine never grows:
        // every even identity chains through bucket 0.
        let mut table = WriteHandleTable::new(2, 10.0);

        assert_eq!(None, table.lookup(2));
        assert_eq!(None, table.lookup(4));
        assert_eq!(None, table.lookup(6));

        assert_eq!(Some(0), table.lookup(2));
        assert_eq!(Some(1), table.lookup(4));
        assert_eq!(Some(2), table.lookup(6));
    }

    #[test]
    fn read_handles_follow_decode_order() {
        let mut table = ReadHandleTable::new();

        assert_eq!(0, table.assign("a"));
        assert_eq!(1, table.assign("b"));
        assert_eq!(2, table.assign("c"));

        assert_eq!(Some(&"a"), table.lookup(0));
        assert_eq!(Some(&"b"), table.lookup(1));
        assert_eq!(Some(&"c"), table.lookup(2));
        assert_eq!(None, table.lookup(3));
        assert_eq!(3, table.len());
    }
}
