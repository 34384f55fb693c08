//! Property tests for the byte store and item records.

use proptest::prelude::*;
use y0_core::{ByteStore, Field, ItemRecord, RECORD_LEN};

fn record_strategy() -> impl Strategy<Value = ItemRecord> {
    (any::<u16>(), any::<i16>(), any::<i16>(), any::<u16>(), any::<u64>()).prop_map(
        |(item_id, strikes, ammo, quantity, reserved)| ItemRecord {
            item_id,
            strikes,
            ammo,
            quantity,
            reserved,
        },
    )
}

proptest! {
    #[test]
    fn prop_record_decode_inverts_encode(record in record_strategy()) {
        prop_assert_eq!(ItemRecord::decode(&record.encode()), record);
    }

    #[test]
    fn prop_raw_bytes_survive_decode(bytes in any::<[u8; RECORD_LEN]>()) {
        prop_assert_eq!(ItemRecord::decode(&bytes).encode(), bytes);
    }

    #[test]
    fn prop_field_writes_only_its_own_bytes(
        len in 8usize..256,
        seed in any::<u8>(),
        value in any::<u64>(),
        offset_hint in any::<usize>(),
    ) {
        let offset = offset_hint % (len - 7);
        let mut store = ByteStore::new(vec![seed; len]);
        let mut field = Field::<u64>::bind(&store, offset).expect("offset is in range");

        field.set(&mut store, value).expect("offset is in range");

        prop_assert_eq!(store.len(), len);
        prop_assert_eq!(field.get(), value);
        prop_assert_eq!(store.read::<u64>(offset).expect("readable"), value);
        for (i, &b) in store.as_bytes().iter().enumerate() {
            if i < offset || i >= offset + 8 {
                prop_assert_eq!(b, seed);
            }
        }
    }

    #[test]
    fn prop_out_of_range_access_fails_cleanly(len in 0usize..64, extra in 0usize..16) {
        let mut store = ByteStore::new(vec![0; len]);
        let offset = len.saturating_sub(1) + extra;
        if offset + 4 > len {
            prop_assert!(store.read::<u32>(offset).is_err());
            prop_assert!(store.write(offset, 1u32).is_err());
        }
        prop_assert_eq!(store.len(), len);
    }
}
