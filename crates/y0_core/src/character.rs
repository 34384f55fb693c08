use std::fmt;
use std::ops::Deref;

use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::{self, ItemCategory, ItemDesc};
use crate::error::{CoreError, InsertError};
use crate::field::Field;
use crate::inventory::{InventoryRegion, RegionKind, RegionSpec};
use crate::item::ItemRecord;
use crate::store::ByteStore;

pub const MONEY_MAX: u64 = 9_999_999_999_999;
pub const CP_MAX: u16 = 32_768;

/// Playable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pc {
    Kiryu,
    Majima,
}

impl Pc {
    pub const ALL: [Pc; 2] = [Pc::Kiryu, Pc::Majima];

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Kiryu => "Kiryu",
            Self::Majima => "Majima",
        }
    }

    /// Match the character name stored in the savegame header.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pc| pc.as_str() == name)
    }

    pub fn layout(&self) -> &'static CharacterLayout {
        match *self {
            Self::Kiryu => &KIRYU_LAYOUT,
            Self::Majima => &MAJIMA_LAYOUT,
        }
    }
}

impl fmt::Display for Pc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed offsets of one character's block. `regions` is ordered like
/// [`RegionKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterLayout {
    pub pc: Pc,
    pub money: usize,
    pub running_totals: [usize; 2],
    pub cp: usize,
    pub skills: [(&'static str, usize); 4],
    pub regions: [RegionSpec; 8],
}

#[rustfmt::skip]
pub const KIRYU_LAYOUT: CharacterLayout = CharacterLayout {
    pc: Pc::Kiryu,
    money: 0xF2C0,
    running_totals: [0xF2D0, 0xF2E0],
    cp: 0xF3E0,
    skills: [
        ("Brawler", 0x72F0),
        ("Rush",    0x72F8),
        ("Beast",   0x7300),
        ("Dragon",  0x7308),
    ],
    regions: [
        RegionSpec::fixed(RegionKind::Item,      0x07AAC),
        RegionSpec::fixed(RegionKind::Weapon,    0x0CE6C),
        RegionSpec::fixed(RegionKind::Gear,      0x0D04C),
        RegionSpec::fixed(RegionKind::Valuables, 0x07D3C),
        RegionSpec::fixed(RegionKind::ItemBox,   0x0836C),
        RegionSpec::fixed(RegionKind::WeaponBox, 0x09C6C),
        RegionSpec::fixed(RegionKind::GearBox,   0x0B56C),
        RegionSpec::special("Pocket Circuit",    0x0D86C, 113),
    ],
};

// Skill order here is storage order, not the order the game lists them.
#[rustfmt::skip]
pub const MAJIMA_LAYOUT: CharacterLayout = CharacterLayout {
    pc: Pc::Majima,
    money: 0xF2C8,
    running_totals: [0xF2D8, 0xF2E8],
    cp: 0xF3E8,
    skills: [
        ("Thug",    0x76F0),
        ("Breaker", 0x76F8),
        ("Slugger", 0x7700),
        ("Mad Dog", 0x7708),
    ],
    regions: [
        RegionSpec::fixed(RegionKind::Item,      0x07BEC),
        RegionSpec::fixed(RegionKind::Weapon,    0x0CF5C),
        RegionSpec::fixed(RegionKind::Gear,      0x0D13C),
        RegionSpec::fixed(RegionKind::Valuables, 0x0805C),
        RegionSpec::fixed(RegionKind::ItemBox,   0x08FEC),
        RegionSpec::fixed(RegionKind::WeaponBox, 0x0A8EC),
        RegionSpec::fixed(RegionKind::GearBox,   0x0C1EC),
        RegionSpec::special("Crafting",          0x0D22C, 96),
    ],
};

/// Options for a single item insertion. The default inserts one item into
/// the carried inventory at the first free slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddItem {
    /// Requested stack size, clamped to `1..=cap` for the target region.
    pub quantity: Option<u32>,
    /// Use the stack cap regardless of `quantity`.
    pub max_quantity: bool,
    pub to_box: bool,
    pub force_index: Option<usize>,
    pub force_region: Option<RegionKind>,
}

impl AddItem {
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn max_quantity(mut self) -> Self {
        self.max_quantity = true;
        self
    }

    pub fn to_box(mut self) -> Self {
        self.to_box = true;
        self
    }

    pub fn force_index(mut self, index: usize) -> Self {
        self.force_index = Some(index);
        self
    }

    pub fn force_region(mut self, kind: RegionKind) -> Self {
        self.force_region = Some(kind);
        self
    }

    fn stack(&self, cap: u16) -> u16 {
        if self.max_quantity {
            return cap;
        }
        match self.quantity {
            Some(requested) => requested.clamp(1, u32::from(cap.max(1))) as u16,
            None => 1,
        }
    }
}

/// A committed insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub character: Pc,
    pub item_id: u16,
    pub item_name: Option<&'static str>,
    pub category: Option<ItemCategory>,
    pub quantity: u16,
    pub ammo: i16,
    pub strikes: i16,
    pub region: RegionKind,
    pub region_label: &'static str,
    pub index: usize,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Saving {}x {}",
            self.quantity,
            item_label(self.item_id, self.item_name)
        )?;

        // The special region uses ammo/strikes as flags, not stats.
        let flags_only = matches!(
            self.category,
            Some(ItemCategory::PocketCircuit | ItemCategory::Crafting)
        );
        let mut extras = Vec::new();
        if !flags_only {
            if self.ammo == ItemRecord::AMMO_UNLIMITED {
                extras.push("ammo: ∞".to_string());
            } else if self.ammo > 0 {
                extras.push(format!("ammo: {}", self.ammo));
            }
            if self.strikes > 0 {
                extras.push(format!("strikes: {}", self.strikes / ItemRecord::STRIKE_SCALE));
            }
        }
        if !extras.is_empty() {
            write!(f, " ({})", extras.join(", "))?;
        }
        write!(f, " in {} at idx {}", self.region_label, self.index)
    }
}

fn item_label(item_id: u16, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{name} (ID {item_id})"),
        None => format!("ID {item_id}"),
    }
}

/// Where and how an item should be written, before slot selection.
struct Routing {
    region: RegionKind,
    quantity: u16,
    ammo: i16,
    strikes: i16,
    hard_index: Option<usize>,
}

impl Routing {
    fn for_item(desc: &ItemDesc, request: &AddItem) -> Self {
        let mut routing = Routing {
            region: RegionKind::Item,
            quantity: 1,
            ammo: 0,
            strikes: 0,
            hard_index: None,
        };
        match desc.category {
            ItemCategory::Weapon => {
                routing.region = boxed_or(RegionKind::Weapon, RegionKind::WeaponBox, request);
                routing.ammo = match desc.ammo {
                    None => ItemRecord::AMMO_NOT_APPLICABLE,
                    Some(0) => ItemRecord::AMMO_UNLIMITED,
                    Some(ammo) => clamp_i16(u32::from(ammo)),
                };
                routing.strikes = match desc.strikes {
                    None | Some(0) => ItemRecord::STRIKES_UNLIMITED,
                    Some(strikes) => {
                        clamp_i16(u32::from(strikes) * ItemRecord::STRIKE_SCALE as u32)
                    }
                };
            }
            ItemCategory::Gear => {
                routing.region = boxed_or(RegionKind::Gear, RegionKind::GearBox, request);
            }
            ItemCategory::Valuable | ItemCategory::ValuableJunk => {
                routing.region = RegionKind::Valuables;
                routing.hard_index = desc.hard_index;
            }
            ItemCategory::PocketCircuit | ItemCategory::Crafting => {
                routing.region = RegionKind::Special;
                routing.hard_index = desc.hard_index;
                // strikes: shown in the menu, ammo: already seen
                routing.strikes = 1;
                routing.ammo = 1;
                if desc.category == ItemCategory::Crafting {
                    routing.quantity = request.stack(desc.max_in_inv);
                }
            }
            ItemCategory::Item | ItemCategory::Menu | ItemCategory::Junk => {
                if request.to_box {
                    routing.region = RegionKind::ItemBox;
                    routing.quantity = request.stack(desc.max_in_box);
                } else {
                    routing.quantity = request.stack(desc.max_in_inv);
                }
            }
        }
        routing
    }

    fn unknown() -> Self {
        Routing {
            region: RegionKind::Item,
            quantity: 1,
            ammo: 0,
            strikes: 0,
            hard_index: None,
        }
    }
}

fn boxed_or(carried: RegionKind, boxed: RegionKind, request: &AddItem) -> RegionKind {
    if request.to_box { boxed } else { carried }
}

fn clamp_i16(value: u32) -> i16 {
    value.min(i16::MAX as u32) as i16
}

/// One character's scalar fields and inventory regions.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pc: Pc,
    money: Field<u64>,
    running_totals: [Field<u64>; 2],
    cp: Field<u16>,
    skills: Vec<(&'static str, Field<u64>)>,
    regions: Vec<InventoryRegion>,
}

impl Character {
    pub fn load(store: &ByteStore, layout: &CharacterLayout) -> Result<Self, CoreError> {
        let skills = layout
            .skills
            .iter()
            .map(|&(label, offset)| Ok((label, Field::bind(store, offset)?)))
            .collect::<Result<Vec<_>, CoreError>>()?;
        let regions = layout
            .regions
            .iter()
            .map(|spec| InventoryRegion::load(store, *spec))
            .collect::<Result<Vec<_>, CoreError>>()?;

        Ok(Self {
            pc: layout.pc,
            money: Field::bind(store, layout.money)?,
            running_totals: [
                Field::bind(store, layout.running_totals[0])?,
                Field::bind(store, layout.running_totals[1])?,
            ],
            cp: Field::bind(store, layout.cp)?,
            skills,
            regions,
        })
    }

    pub fn pc(&self) -> Pc {
        self.pc
    }

    pub fn name(&self) -> &'static str {
        self.pc.as_str()
    }

    pub fn money(&self) -> u64 {
        self.money.get()
    }

    /// Two lifetime income counters next to the money field. Their exact
    /// meaning is unknown; they are exposed read-only.
    pub fn running_totals(&self) -> [u64; 2] {
        [self.running_totals[0].get(), self.running_totals[1].get()]
    }

    pub fn cp(&self) -> u16 {
        self.cp.get()
    }

    /// Money spent on each fighting style, in storage order.
    pub fn skills(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.skills.iter().map(|(label, field)| (*label, field.get()))
    }

    pub fn regions(&self) -> &[InventoryRegion] {
        &self.regions
    }

    pub fn region(&self, kind: RegionKind) -> &InventoryRegion {
        &self.regions[region_slot(kind)]
    }

    pub fn special_region(&self) -> &InventoryRegion {
        self.region(RegionKind::Special)
    }

    fn set_money(&mut self, store: &mut ByteStore, money: u64) -> Result<u64, CoreError> {
        let money = money.min(MONEY_MAX);
        self.money.set(store, money)?;
        Ok(money)
    }

    fn set_cp(&mut self, store: &mut ByteStore, cp: u32) -> Result<u16, CoreError> {
        let cp = cp.min(u32::from(CP_MAX)) as u16;
        self.cp.set(store, cp)?;
        Ok(cp)
    }

    fn clear_non_valuables(
        &mut self,
        store: &mut ByteStore,
        include_inventory: bool,
        include_box: bool,
    ) -> Result<(), CoreError> {
        let kinds = include_inventory
            .then_some(RegionKind::CARRIED)
            .into_iter()
            .chain(include_box.then_some(RegionKind::BOXED))
            .flatten();
        for kind in kinds {
            self.regions[region_slot(kind)].clear_all(store)?;
        }
        Ok(())
    }

    fn add_item(
        &mut self,
        store: &mut ByteStore,
        item_id: u16,
        request: &AddItem,
    ) -> Result<Placement, InsertError> {
        let desc = catalog::item_by_id(item_id);
        let label = item_label(item_id, desc.map(|d| d.name));

        if let Some(lock) = desc.and_then(|d| d.char_lock)
            && lock != self.pc
        {
            return Err(InsertError::CharacterLocked {
                item: label,
                character: self.pc,
            });
        }

        let mut routing = match desc {
            Some(desc) => Routing::for_item(desc, request),
            None => {
                warn!(item_id, "item id not in catalog, inserting into regular inventory");
                Routing::unknown()
            }
        };
        if let Some(kind) = request.force_region {
            routing.region = kind;
        }

        let region = &mut self.regions[region_slot(routing.region)];
        let index = match request.force_index.or(routing.hard_index) {
            Some(index) => index,
            None => region
                .first_empty_slot()
                .ok_or_else(|| InsertError::NoRoomAvailable {
                    item: label.clone(),
                    region: region.label(),
                })?,
        };

        region.overwrite(
            store,
            index,
            item_id,
            routing.quantity,
            routing.ammo,
            routing.strikes,
        )?;

        let placement = Placement {
            character: self.pc,
            item_id,
            item_name: desc.map(|d| d.name),
            category: desc.map(|d| d.category),
            quantity: routing.quantity,
            ammo: routing.ammo,
            strikes: routing.strikes,
            region: routing.region,
            region_label: region.label(),
            index,
        };
        info!(character = %self.pc, %placement, "item placed");
        Ok(placement)
    }
}

fn region_slot(kind: RegionKind) -> usize {
    kind as usize
}

/// Mutable access to one character together with the store it writes to.
pub struct CharacterMut<'a> {
    character: &'a mut Character,
    store: &'a mut ByteStore,
}

impl<'a> CharacterMut<'a> {
    pub(crate) fn new(character: &'a mut Character, store: &'a mut ByteStore) -> Self {
        Self { character, store }
    }

    /// Set money, clamped to [`MONEY_MAX`]. Returns the stored value.
    pub fn set_money(&mut self, money: u64) -> Result<u64, CoreError> {
        self.character.set_money(self.store, money)
    }

    /// Set CP, clamped to [`CP_MAX`]. Returns the stored value.
    pub fn set_cp(&mut self, cp: u32) -> Result<u16, CoreError> {
        self.character.set_cp(self.store, cp)
    }

    /// Empty the item, weapon and gear regions. Valuables and the
    /// character's special region are never touched.
    pub fn clear_non_valuables(
        &mut self,
        include_inventory: bool,
        include_box: bool,
    ) -> Result<(), CoreError> {
        self.character
            .clear_non_valuables(self.store, include_inventory, include_box)
    }

    /// Insert one item following the catalog's routing rules.
    ///
    /// Unknown ids are logged and placed in the carried item inventory.
    /// Items locked to the other character are refused. Slot choice is the
    /// forced index, else the catalog's hard index, else the first free
    /// slot. Nothing is written when an error is returned.
    pub fn add_item(&mut self, item_id: u16, request: &AddItem) -> Result<Placement, InsertError> {
        self.character.add_item(self.store, item_id, request)
    }

    pub fn add_item_by_name(
        &mut self,
        name: &str,
        request: &AddItem,
    ) -> Result<Placement, InsertError> {
        let desc = catalog::item_by_name(name)
            .ok_or_else(|| InsertError::UnknownName(name.to_string()))?;
        self.add_item(desc.id, request)
    }
}

impl Deref for CharacterMut<'_> {
    type Target = Character;

    fn deref(&self) -> &Character {
        self.character
    }
}

#[cfg(test)]
mod tests {
    use super::{KIRYU_LAYOUT, MAJIMA_LAYOUT, Pc};
    use crate::inventory::RegionKind;

    #[test]
    fn layouts_list_regions_in_kind_order() {
        for layout in [&KIRYU_LAYOUT, &MAJIMA_LAYOUT] {
            let kinds: Vec<_> = layout.regions.iter().map(|r| r.kind).collect();
            assert_eq!(kinds, RegionKind::ALL);
        }
    }

    #[test]
    fn region_blocks_never_overlap() {
        let mut spans: Vec<(usize, usize)> = [&KIRYU_LAYOUT, &MAJIMA_LAYOUT]
            .iter()
            .flat_map(|layout| layout.regions.iter())
            .map(|r| (r.base, r.base + r.byte_len()))
            .collect();
        spans.sort();
        for pair in spans.windows(2) {
            assert!(
                pair[0].1 <= pair[1].0,
                "regions at {:#x} and {:#x} overlap",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn header_names_resolve() {
        assert_eq!(Pc::from_name("Kiryu"), Some(Pc::Kiryu));
        assert_eq!(Pc::from_name("Majima"), Some(Pc::Majima));
        assert_eq!(Pc::from_name("kiryu"), None);
        assert_eq!(Pc::Majima.layout().regions[7].label, "Crafting");
    }
}
