use std::fmt;
use std::iter;

use serde::Serialize;

use crate::error::{CoreError, InsertError};
use crate::item::{ItemRecord, RECORD_LEN};
use crate::store::ByteStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RegionKind {
    Item,
    Weapon,
    Gear,
    Valuables,
    ItemBox,
    WeaponBox,
    GearBox,
    Special,
}

impl RegionKind {
    pub const ALL: [RegionKind; 8] = [
        Self::Item,
        Self::Weapon,
        Self::Gear,
        Self::Valuables,
        Self::ItemBox,
        Self::WeaponBox,
        Self::GearBox,
        Self::Special,
    ];

    /// Regions emptied by a non-valuables clear of the carried inventory.
    pub const CARRIED: [RegionKind; 3] = [Self::Item, Self::Weapon, Self::Gear];

    /// Regions emptied by a non-valuables clear of the item box.
    pub const BOXED: [RegionKind; 3] = [Self::ItemBox, Self::WeaponBox, Self::GearBox];

    /// Slot count for every region except `Special`, whose size depends on
    /// the character.
    pub fn slot_count(&self) -> Option<usize> {
        match *self {
            Self::Item => Some(20),
            Self::Weapon | Self::Gear => Some(15),
            Self::Valuables => Some(25),
            Self::ItemBox | Self::WeaponBox | Self::GearBox => Some(200),
            Self::Special => None,
        }
    }

    pub fn is_box(&self) -> bool {
        matches!(*self, Self::ItemBox | Self::WeaponBox | Self::GearBox)
    }
}

/// Where one region lives in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSpec {
    pub kind: RegionKind,
    pub label: &'static str,
    pub base: usize,
    pub slots: usize,
}

impl RegionSpec {
    /// Layout of one of the fixed-size regions. `Special` has no fixed size
    /// and yields an empty region; use [`RegionSpec::special`] instead.
    pub const fn fixed(kind: RegionKind, base: usize) -> Self {
        let (label, slots) = match kind {
            RegionKind::Item => ("Item Inv", 20),
            RegionKind::Weapon => ("Weapon Inv", 15),
            RegionKind::Gear => ("Gear Inv", 15),
            RegionKind::Valuables => ("Valuables", 25),
            RegionKind::ItemBox => ("Item Box", 200),
            RegionKind::WeaponBox => ("Weapon Box", 200),
            RegionKind::GearBox => ("Gear Box", 200),
            RegionKind::Special => ("Special", 0),
        };
        Self {
            kind,
            label,
            base,
            slots,
        }
    }

    pub const fn special(label: &'static str, base: usize, slots: usize) -> Self {
        Self {
            kind: RegionKind::Special,
            label,
            base,
            slots,
        }
    }

    pub fn byte_len(&self) -> usize {
        self.slots * RECORD_LEN
    }
}

/// A fixed-size run of [`ItemRecord`]s decoded from the store. Slot `i`
/// lives at `base + 16 * i`; writes go straight back to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRegion {
    spec: RegionSpec,
    items: Vec<ItemRecord>,
}

impl InventoryRegion {
    pub fn load(store: &ByteStore, spec: RegionSpec) -> Result<Self, CoreError> {
        let raw = store.read_bytes(spec.base, spec.byte_len())?;
        let items = raw
            .chunks_exact(RECORD_LEN)
            .map(|chunk| {
                let mut record = [0u8; RECORD_LEN];
                record.copy_from_slice(chunk);
                ItemRecord::decode(&record)
            })
            .collect();
        Ok(Self { spec, items })
    }

    pub fn kind(&self) -> RegionKind {
        self.spec.kind
    }

    pub fn label(&self) -> &'static str {
        self.spec.label
    }

    pub fn base_offset(&self) -> usize {
        self.spec.base
    }

    pub fn slot_count(&self) -> usize {
        self.spec.slots
    }

    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&ItemRecord> {
        self.items.get(index)
    }

    pub fn slot_offset(&self, index: usize) -> usize {
        self.spec.base + RECORD_LEN * index
    }

    pub fn first_empty_slot(&self) -> Option<usize> {
        self.items.iter().position(|item| !item.has_data())
    }

    pub fn is_empty(&self) -> bool {
        self.items.iter().all(|item| !item.has_data())
    }

    pub fn occupied(&self) -> impl Iterator<Item = (usize, &ItemRecord)> {
        self.items.iter().enumerate().filter(|(_, item)| item.has_data())
    }

    /// Replace slot `index`. The slot's reserved field is carried over.
    pub fn overwrite(
        &mut self,
        store: &mut ByteStore,
        index: usize,
        item_id: u16,
        quantity: u16,
        ammo: i16,
        strikes: i16,
    ) -> Result<(), InsertError> {
        let Some(current) = self.items.get(index) else {
            return Err(InsertError::IndexOutOfRange {
                region: self.spec.label,
                index,
                slots: self.spec.slots,
            });
        };
        let record = ItemRecord {
            item_id,
            strikes,
            ammo,
            quantity,
            reserved: current.reserved,
        };
        self.write_slot(store, index, record)?;
        Ok(())
    }

    /// Write every slot back as the all-zero record.
    pub fn clear_all(&mut self, store: &mut ByteStore) -> Result<(), CoreError> {
        store.write_bytes(self.spec.base, &vec![0u8; self.spec.byte_len()])?;
        self.items.fill(ItemRecord::EMPTY);
        Ok(())
    }

    fn write_slot(
        &mut self,
        store: &mut ByteStore,
        index: usize,
        record: ItemRecord,
    ) -> Result<(), CoreError> {
        store.write_bytes(self.slot_offset(index), &record.encode())?;
        self.items[index] = record;
        Ok(())
    }

    /// Human-readable lines, one per occupied slot (1-based, as the game
    /// shows them), or a single "No ..." line when nothing is stored.
    pub fn describe(&self) -> Box<dyn Iterator<Item = String> + '_> {
        if self.is_empty() {
            return Box::new(iter::once(format!("No {}!", self.spec.label)));
        }
        Box::new(
            self.occupied()
                .map(|(index, item)| format!("{} {}: {}", self.spec.label, index + 1, item.summary())),
        )
    }
}

impl fmt::Display for InventoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.describe() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
