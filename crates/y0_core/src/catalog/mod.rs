//! Static item catalog.
//!
//! Every item id the game is known to use, with the metadata the insertion
//! policy needs: which inventory area it lives in, weapon ammo/strike
//! capacities, hard slot indexes and stack limits. The table is a sorted
//! `const` slice, so lookups never allocate and nothing has to be built at
//! startup.

mod items;

use std::fmt;

use serde::Serialize;

use crate::character::Pc;

pub use items::ITEMS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemCategory {
    Item,
    Weapon,
    Gear,
    Valuable,
    ValuableJunk,
    PocketCircuit,
    Crafting,
    Menu,
    Junk,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 9] = [
        Self::Item,
        Self::Weapon,
        Self::Gear,
        Self::Valuable,
        Self::ValuableJunk,
        Self::PocketCircuit,
        Self::Crafting,
        Self::Menu,
        Self::Junk,
    ];

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Item => "Items",
            Self::Weapon => "Weapons",
            Self::Gear => "Gear",
            Self::Valuable => "Valuables",
            Self::ValuableJunk => "Valuables (junk)",
            Self::PocketCircuit => "Pocket Circuit",
            Self::Crafting => "Crafting Materials",
            Self::Menu => "Restaurant/Bar Menus",
            Self::Junk => "Junk/Broken",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog metadata for one item id.
///
/// `max_in_box` only matters for the generic item box; weapon and gear boxes
/// never stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemDesc {
    pub id: u16,
    pub name: &'static str,
    pub category: ItemCategory,
    pub strikes: Option<u16>,
    pub ammo: Option<u16>,
    pub hard_index: Option<usize>,
    pub max_in_inv: u16,
    pub max_in_box: u16,
    pub char_lock: Option<Pc>,
}

impl ItemDesc {
    /// Entry with the per-category defaults applied.
    pub const fn new(id: u16, name: &'static str, category: ItemCategory) -> Self {
        let (max_in_inv, max_in_box, char_lock) = match category {
            ItemCategory::Menu => (1, 1, None),
            ItemCategory::Crafting => (999, 99, Some(Pc::Majima)),
            ItemCategory::PocketCircuit => (1, 99, Some(Pc::Kiryu)),
            _ => (1, 99, None),
        };
        Self {
            id,
            name,
            category,
            strikes: None,
            ammo: None,
            hard_index: None,
            max_in_inv,
            max_in_box,
            char_lock,
        }
    }

    pub const fn strikes(mut self, strikes: u16) -> Self {
        self.strikes = Some(strikes);
        self
    }

    pub const fn ammo(mut self, ammo: u16) -> Self {
        self.ammo = Some(ammo);
        self
    }

    pub const fn hard_index(mut self, index: usize) -> Self {
        self.hard_index = Some(index);
        self
    }

    pub const fn max_in_inv(mut self, max: u16) -> Self {
        self.max_in_inv = max;
        self
    }

    pub const fn max_in_box(mut self, max: u16) -> Self {
        self.max_in_box = max;
        self
    }
}

pub fn items() -> &'static [ItemDesc] {
    ITEMS
}

pub fn item_by_id(id: u16) -> Option<&'static ItemDesc> {
    ITEMS
        .binary_search_by_key(&id, |item| item.id)
        .ok()
        .map(|index| &ITEMS[index])
}

/// Case-insensitive lookup by display name.
pub fn item_by_name(name: &str) -> Option<&'static ItemDesc> {
    let name = name.trim();
    ITEMS.iter().find(|item| eq_casefold(item.name, name))
}

pub fn items_in(category: ItemCategory) -> impl Iterator<Item = &'static ItemDesc> {
    ITEMS.iter().filter(move |item| item.category == category)
}

pub(crate) fn eq_casefold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{ITEMS, ItemCategory, item_by_id, item_by_name, items_in};
    use crate::character::Pc;

    #[test]
    fn ids_are_sorted_and_unique() {
        for pair in ITEMS.windows(2) {
            assert!(
                pair[0].id < pair[1].id,
                "catalog out of order or duplicated around id {}",
                pair[1].id
            );
        }
    }

    #[test]
    fn names_are_unique_ignoring_case() {
        let mut seen = HashSet::new();
        for item in ITEMS {
            assert!(
                seen.insert(item.name.to_lowercase()),
                "duplicate item name {}",
                item.name
            );
        }
    }

    #[test]
    fn lookups_agree() {
        let coin = item_by_id(552).expect("id 552 should exist");
        assert_eq!(coin.name, "Medieval Silver Coin");
        assert_eq!(coin.category, ItemCategory::Item);
        assert_eq!((coin.max_in_inv, coin.max_in_box), (999, 999));

        let pager = item_by_name("pAGER").expect("pager should resolve by name");
        assert_eq!(pager.id, 665);
        assert_eq!(pager.hard_index, Some(1));

        assert_eq!(
            item_by_name("Rosé Champagne (no icon)").map(|i| i.id),
            Some(190)
        );
        assert!(item_by_id(17).is_none());
    }

    #[test]
    fn category_defaults_are_applied() {
        for item in items_in(ItemCategory::Crafting) {
            assert_eq!(item.max_in_inv, 999);
            assert_eq!(item.char_lock, Some(Pc::Majima));
            assert!(item.hard_index.is_some(), "{} has no slot", item.name);
        }
        for item in items_in(ItemCategory::PocketCircuit) {
            assert_eq!(item.char_lock, Some(Pc::Kiryu));
            assert!(item.hard_index.is_some(), "{} has no slot", item.name);
        }
        for item in items_in(ItemCategory::Menu) {
            assert_eq!(item.max_in_box, 1);
        }
    }

    #[test]
    fn only_special_categories_are_character_locked() {
        assert!(
            ITEMS
                .iter()
                .filter(|item| item.char_lock.is_some())
                .all(|item| matches!(
                    item.category,
                    ItemCategory::Crafting | ItemCategory::PocketCircuit
                ))
        );
    }
}
