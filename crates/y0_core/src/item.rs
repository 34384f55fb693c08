use serde::Serialize;

use crate::catalog::{self, ItemCategory};
use crate::store::LeScalar;

pub const RECORD_LEN: usize = 16;

/// One inventory slot as stored on disk:
///
/// | offset | type | field    |
/// |--------|------|----------|
/// | 0      | u16  | item id  |
/// | 2      | i16  | strikes  |
/// | 4      | i16  | ammo     |
/// | 6      | u16  | quantity |
/// | 8      | u64  | reserved |
///
/// Strikes are stored as ten times the durability shown in game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ItemRecord {
    pub item_id: u16,
    pub strikes: i16,
    pub ammo: i16,
    pub quantity: u16,
    pub reserved: u64,
}

impl ItemRecord {
    pub const AMMO_UNLIMITED: i16 = -1;
    pub const AMMO_NOT_APPLICABLE: i16 = -2;
    pub const STRIKES_UNLIMITED: i16 = -1;
    pub const STRIKE_SCALE: i16 = 10;

    pub const EMPTY: ItemRecord = ItemRecord {
        item_id: 0,
        strikes: 0,
        ammo: 0,
        quantity: 0,
        reserved: 0,
    };

    pub fn decode(bytes: &[u8; RECORD_LEN]) -> Self {
        Self {
            item_id: u16::decode(&bytes[0..2]),
            strikes: i16::decode(&bytes[2..4]),
            ammo: i16::decode(&bytes[4..6]),
            quantity: u16::decode(&bytes[6..8]),
            reserved: u64::decode(&bytes[8..16]),
        }
    }

    pub fn encode(&self) -> [u8; RECORD_LEN] {
        let mut out = [0u8; RECORD_LEN];
        self.item_id.encode(&mut out[0..2]);
        self.strikes.encode(&mut out[2..4]);
        self.ammo.encode(&mut out[4..6]);
        self.quantity.encode(&mut out[6..8]);
        self.reserved.encode(&mut out[8..16]);
        out
    }

    /// A slot without data is empty and free for reuse.
    pub fn has_data(&self) -> bool {
        *self != Self::EMPTY
    }

    pub fn is_unlimited_ammo(&self) -> bool {
        self.ammo == Self::AMMO_UNLIMITED
    }

    pub fn is_ammo_not_applicable(&self) -> bool {
        self.ammo == Self::AMMO_NOT_APPLICABLE
    }

    pub fn is_unlimited_strikes(&self) -> bool {
        self.strikes == Self::STRIKES_UNLIMITED
    }

    pub fn name(&self) -> Option<&'static str> {
        catalog::item_by_id(self.item_id).map(|item| item.name)
    }

    /// One-line description such as `5x Tuna Rice Ball` or
    /// `Iron Pipe (strikes: 18)`. Empty slots render as `-`.
    pub fn summary(&self) -> String {
        if !self.has_data() {
            return "-".to_string();
        }

        let desc = catalog::item_by_id(self.item_id);
        let mut extras = Vec::new();

        if desc.is_none_or(|d| d.category == ItemCategory::Weapon) {
            match self.ammo {
                Self::AMMO_UNLIMITED => extras.push("ammo: ∞".to_string()),
                Self::AMMO_NOT_APPLICABLE => {}
                ammo if ammo >= 0 => extras.push(format!("ammo: {ammo}")),
                ammo => extras.push(format!("UNKNOWN AMMO: {ammo}")),
            }
            match self.strikes {
                Self::STRIKES_UNLIMITED => {}
                strikes if strikes >= 0 => {
                    extras.push(format!("strikes: {}", strikes / Self::STRIKE_SCALE))
                }
                strikes => extras.push(format!("UNKNOWN STRIKES: {strikes}")),
            }
        }

        if self.reserved != 0 {
            extras.push(format!("unknown: {}", self.reserved));
        }

        let name = match desc {
            Some(d) => d.name.to_string(),
            None => self.item_id.to_string(),
        };
        let qty = if self.quantity == 1 {
            String::new()
        } else {
            format!("{}x ", self.quantity)
        };
        if extras.is_empty() {
            format!("{qty}{name}")
        } else {
            format!("{qty}{name} ({})", extras.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemRecord, RECORD_LEN};

    #[test]
    fn field_order_matches_disk_layout() {
        let record = ItemRecord {
            item_id: 0x0102,
            strikes: -1,
            ammo: -2,
            quantity: 99,
            reserved: 0x1122_3344_5566_7788,
        };
        let bytes = record.encode();
        assert_eq!(&bytes[0..2], &[0x02, 0x01]);
        assert_eq!(&bytes[2..4], &[0xFF, 0xFF]);
        assert_eq!(&bytes[4..6], &[0xFE, 0xFF]);
        assert_eq!(&bytes[6..8], &[99, 0]);
        assert_eq!(&bytes[8..16], &0x1122_3344_5566_7788u64.to_le_bytes());
        assert_eq!(ItemRecord::decode(&bytes), record);
    }

    #[test]
    fn reserved_alone_counts_as_data() {
        let mut bytes = [0u8; RECORD_LEN];
        assert!(!ItemRecord::decode(&bytes).has_data());
        bytes[15] = 1;
        assert!(ItemRecord::decode(&bytes).has_data());
    }

    #[test]
    fn summary_for_plain_items() {
        let coins = ItemRecord {
            item_id: 552,
            quantity: 999,
            ..ItemRecord::EMPTY
        };
        assert_eq!(coins.summary(), "999x Medieval Silver Coin");

        let single = ItemRecord {
            item_id: 2,
            quantity: 1,
            ..ItemRecord::EMPTY
        };
        assert_eq!(single.summary(), "Toughness Light");
        assert_eq!(ItemRecord::EMPTY.summary(), "-");
    }

    #[test]
    fn summary_annotates_weapons() {
        let pipe = ItemRecord {
            item_id: 223,
            strikes: 180,
            ammo: -2,
            quantity: 1,
            reserved: 0,
        };
        assert_eq!(pipe.summary(), "Iron Pipe (strikes: 18)");

        let lighter = ItemRecord {
            item_id: 312,
            strikes: -1,
            ammo: -1,
            quantity: 1,
            reserved: 0,
        };
        assert_eq!(lighter.summary(), "Modified Bottomless Lighter (ammo: ∞)");
    }

    #[test]
    fn summary_falls_back_to_numeric_id() {
        let unknown = ItemRecord {
            item_id: 17,
            strikes: 0,
            ammo: -2,
            quantity: 3,
            reserved: 4,
        };
        assert_eq!(unknown.summary(), "3x 17 (strikes: 0, unknown: 4)");
    }
}
