use y0_core::catalog::{self, ItemCategory};
use y0_core::character::{KIRYU_LAYOUT, MAJIMA_LAYOUT};
use y0_core::{
    AddItem, CoreError, CoreErrorCode, Difficulty, InsertError, ItemRecord, Pc, RECORD_LEN,
    RegionKind, SaveSlot, Savegame,
};

const SAVE_LEN: usize = 0x28000;

fn put<const N: usize>(bytes: &mut [u8], offset: usize, value: [u8; N]) {
    bytes[offset..offset + N].copy_from_slice(&value);
}

fn synthetic_save(current: &str, difficulty: u8) -> Vec<u8> {
    let mut bytes = vec![0u8; SAVE_LEN];
    put(&mut bytes, 0, *b"YZFH");
    bytes[0x6] = 4;
    bytes[0x8..0x8 + current.len()].copy_from_slice(current.as_bytes());
    for (i, v) in [2021u16, 3, 5, 19, 22, 7, 45].into_iter().enumerate() {
        put(&mut bytes, 0x28 + 2 * i, v.to_le_bytes());
    }
    bytes[0x444] = difficulty;
    bytes[0x445] = difficulty;
    let played_secs: u64 = 3 * 3600 + 25 * 60 + 10;
    put(&mut bytes, 0x448, (played_secs * 3000).to_le_bytes());
    bytes
}

fn put_record(bytes: &mut [u8], base: usize, index: usize, record: ItemRecord) {
    put(bytes, base + RECORD_LEN * index, record.encode());
}

fn region_bytes(bytes: &[u8], base: usize, slots: usize) -> Vec<u8> {
    bytes[base..base + slots * RECORD_LEN].to_vec()
}

fn open(bytes: Vec<u8>) -> Savegame {
    Savegame::from_bytes(bytes, "/saves/remote/SaveData0002.sav")
        .unwrap_or_else(|e| panic!("synthetic save should parse: {e}"))
}

fn filler(item_id: u16) -> ItemRecord {
    ItemRecord {
        item_id,
        quantity: 1,
        ..ItemRecord::EMPTY
    }
}

#[test]
fn header_fields_decode() {
    let save = open(synthetic_save("Kiryu", 3));
    assert_eq!(save.current_character(), "Kiryu");
    assert_eq!(save.active_pc(), Some(Pc::Kiryu));
    assert_eq!(save.chapter(), 5);
    assert_eq!(save.saved_at().to_string(), "2021-03-19 22:07:45");
    assert_eq!(save.played_text(), "3:25");
    assert_eq!(save.difficulty(), Difficulty::Legendary);
    assert_eq!(save.slot(), Some(SaveSlot::Slot(3)));
    assert_eq!(save.display_name(), "/saves/remote/SaveData0002.sav (Slot 3)");
}

#[test]
fn disagreeing_difficulty_bytes_reject_the_file() {
    let mut bytes = synthetic_save("Majima", 1);
    bytes[0x445] = 2;
    let err = Savegame::from_bytes(bytes, "SaveData0000.sav").expect_err("mismatch must fail");
    assert!(matches!(
        err,
        CoreError::InconsistentDifficulty {
            first: 1,
            second: 2
        }
    ));
    assert_eq!(err.code(), CoreErrorCode::Corrupt);
}

#[test]
fn bad_magic_is_not_a_savegame() {
    let mut bytes = synthetic_save("Kiryu", 1);
    bytes[3] = b'X';
    let err = Savegame::from_bytes(bytes, "SaveData0000.sav").expect_err("bad magic");
    assert_eq!(err.code(), CoreErrorCode::NotASavegame);
}

#[test]
fn box_coins_are_clamped_into_lowest_free_slot() {
    let box_base = KIRYU_LAYOUT.regions[4].base;
    let mut bytes = synthetic_save("Kiryu", 1);
    put_record(&mut bytes, box_base, 0, filler(2));
    put_record(&mut bytes, box_base, 2, filler(3));
    let mut save = open(bytes);

    let placement = save
        .character_mut(Pc::Kiryu)
        .add_item(552, &AddItem::default().to_box().quantity(5000))
        .expect("coins should fit");

    assert_eq!(placement.region, RegionKind::ItemBox);
    assert_eq!(placement.index, 1);
    assert_eq!(placement.quantity, 999);
    let stored = save.character(Pc::Kiryu).region(RegionKind::ItemBox).get(1).copied();
    assert_eq!(stored.map(|r| (r.item_id, r.quantity)), Some((552, 999)));
    assert_eq!(
        placement.to_string(),
        "Saving 999x Medieval Silver Coin (ID 552) in Item Box at idx 1"
    );
}

#[test]
fn pager_always_lands_on_its_hard_index() {
    let val_base = KIRYU_LAYOUT.regions[3].base;
    let mut bytes = synthetic_save("Kiryu", 1);
    put_record(&mut bytes, val_base, 1, filler(666));
    let mut save = open(bytes);

    let placement = save
        .character_mut(Pc::Kiryu)
        .add_item(665, &AddItem::default())
        .expect("pager should be placed");

    assert_eq!(placement.region, RegionKind::Valuables);
    assert_eq!(placement.index, 1);
    let valuables = save.character(Pc::Kiryu).region(RegionKind::Valuables);
    assert_eq!(valuables.get(1).map(|r| r.item_id), Some(665));
    assert_eq!(valuables.first_empty_slot(), Some(0));
}

#[test]
fn full_region_fails_without_touching_bytes() {
    let inv_base = MAJIMA_LAYOUT.regions[0].base;
    let mut bytes = synthetic_save("Majima", 1);
    for index in 0..20 {
        put_record(&mut bytes, inv_base, index, filler(2));
    }
    let mut save = open(bytes);
    let before = save.as_bytes().to_vec();

    let err = save
        .character_mut(Pc::Majima)
        .add_item(552, &AddItem::default())
        .expect_err("no room left");

    assert!(matches!(
        err,
        InsertError::NoRoomAvailable {
            region: "Item Inv",
            ..
        }
    ));
    assert_eq!(save.as_bytes(), before.as_slice());
}

#[test]
fn weapon_sentinels_follow_catalog_capacities() {
    for weapon in catalog::items_in(ItemCategory::Weapon) {
        let mut save = open(synthetic_save("Kiryu", 1));
        let placement = save
            .character_mut(Pc::Kiryu)
            .add_item(weapon.id, &AddItem::default().to_box())
            .unwrap_or_else(|e| panic!("{} should fit in an empty box: {e}", weapon.name));
        let record = save
            .character(Pc::Kiryu)
            .region(RegionKind::WeaponBox)
            .get(placement.index)
            .copied()
            .expect("placed slot exists");

        match weapon.ammo {
            Some(0) => assert!(record.is_unlimited_ammo(), "{}", weapon.name),
            None => assert!(record.is_ammo_not_applicable(), "{}", weapon.name),
            Some(ammo) => assert_eq!(record.ammo, ammo as i16, "{}", weapon.name),
        }
        match weapon.strikes {
            None | Some(0) => assert!(record.is_unlimited_strikes(), "{}", weapon.name),
            Some(strikes) => assert_eq!(record.strikes, strikes as i16 * 10, "{}", weapon.name),
        }
    }
}

#[test]
fn quantity_requests_are_clamped_both_ways() {
    let mut save = open(synthetic_save("Kiryu", 1));
    let mut kiryu = save.character_mut(Pc::Kiryu);

    let low = kiryu
        .add_item(552, &AddItem::default().quantity(0))
        .expect("inventory has room");
    assert_eq!(low.quantity, 1);

    let high = kiryu
        .add_item(2, &AddItem::default().quantity(50))
        .expect("inventory has room");
    assert_eq!(high.quantity, 1, "Toughness Light does not stack in inventory");

    let max = kiryu
        .add_item(2, &AddItem::default().to_box().max_quantity())
        .expect("box has room");
    assert_eq!(max.quantity, 99);
}

#[test]
fn character_locked_items_are_refused() {
    let mut save = open(synthetic_save("Kiryu", 1));
    let before = save.as_bytes().to_vec();

    let crafting = catalog::items_in(ItemCategory::Crafting)
        .next()
        .expect("catalog has crafting materials");
    let err = save
        .character_mut(Pc::Kiryu)
        .add_item(crafting.id, &AddItem::default())
        .expect_err("Kiryu cannot craft");
    assert!(matches!(
        err,
        InsertError::CharacterLocked {
            character: Pc::Kiryu,
            ..
        }
    ));

    let part = catalog::items_in(ItemCategory::PocketCircuit)
        .next()
        .expect("catalog has pocket circuit parts");
    assert!(
        save.character_mut(Pc::Majima)
            .add_item(part.id, &AddItem::default())
            .is_err()
    );
    assert_eq!(save.as_bytes(), before.as_slice());
}

#[test]
fn crafting_materials_use_special_region_flags() {
    let mut save = open(synthetic_save("Majima", 1));
    let placement = save
        .character_mut(Pc::Majima)
        .add_item(455, &AddItem::default().max_quantity())
        .expect("Lead Ingot belongs to Majima");

    assert_eq!(placement.region, RegionKind::Special);
    assert_eq!(placement.index, 1);
    assert_eq!(placement.quantity, 999);
    assert_eq!((placement.ammo, placement.strikes), (1, 1));
    assert_eq!(
        placement.to_string(),
        "Saving 999x Lead Ingot (ID 455) in Crafting at idx 1"
    );
}

#[test]
fn unknown_ids_fall_back_to_item_inventory() {
    let mut save = open(synthetic_save("Kiryu", 1));
    let placement = save
        .character_mut(Pc::Kiryu)
        .add_item(17, &AddItem::default().quantity(30))
        .expect("unknown ids are placed best-effort");
    assert_eq!(placement.region, RegionKind::Item);
    assert_eq!(placement.index, 0);
    assert_eq!(placement.quantity, 1);
    assert_eq!(placement.item_name, None);
}

#[test]
fn forced_index_past_capacity_is_rejected() {
    let mut save = open(synthetic_save("Kiryu", 1));
    let before = save.as_bytes().to_vec();
    let err = save
        .character_mut(Pc::Kiryu)
        .add_item(552, &AddItem::default().force_index(20))
        .expect_err("index 20 is past a 20-slot region");
    assert!(matches!(
        err,
        InsertError::IndexOutOfRange {
            index: 20,
            slots: 20,
            ..
        }
    ));
    assert_eq!(save.as_bytes(), before.as_slice());
}

#[test]
fn names_resolve_case_insensitively() {
    let mut save = open(synthetic_save("Kiryu", 1));
    let mut kiryu = save.character_mut(Pc::Kiryu);
    let placement = kiryu
        .add_item_by_name("medieval silver coin", &AddItem::default())
        .expect("name should resolve");
    assert_eq!(placement.item_id, 552);
    assert!(matches!(
        kiryu.add_item_by_name("Not A Real Item", &AddItem::default()),
        Err(InsertError::UnknownName(_))
    ));
}

#[test]
fn clearing_leaves_valuables_and_special_untouched() {
    let mut bytes = synthetic_save("Kiryu", 1);
    for spec in KIRYU_LAYOUT.regions {
        for index in 0..spec.slots {
            put_record(&mut bytes, spec.base, index, filler(2 + index as u16));
        }
    }
    let mut save = open(bytes);
    let valuables = KIRYU_LAYOUT.regions[3];
    let special = KIRYU_LAYOUT.regions[7];
    let val_before = region_bytes(save.as_bytes(), valuables.base, valuables.slots);
    let special_before = region_bytes(save.as_bytes(), special.base, special.slots);
    let majima_before = region_bytes(save.as_bytes(), 0x7BEC, 20);

    save.character_mut(Pc::Kiryu)
        .clear_non_valuables(true, true)
        .expect("clear should succeed");

    let bytes = save.as_bytes();
    assert_eq!(region_bytes(bytes, valuables.base, valuables.slots), val_before);
    assert_eq!(region_bytes(bytes, special.base, special.slots), special_before);
    assert_eq!(region_bytes(bytes, 0x7BEC, 20), majima_before);
    for kind in RegionKind::CARRIED.into_iter().chain(RegionKind::BOXED) {
        let region = save.character(Pc::Kiryu).region(kind);
        assert!(region.is_empty(), "{} should be empty", region.label());
        assert!(
            region_bytes(bytes, region.base_offset(), region.slot_count())
                .iter()
                .all(|&b| b == 0)
        );
    }
}

#[test]
fn scalar_edits_are_clamped_and_written_through() {
    let mut save = open(synthetic_save("Majima", 1));
    let mut majima = save.character_mut(Pc::Majima);
    assert_eq!(majima.set_money(u64::MAX).expect("money"), 9_999_999_999_999);
    assert_eq!(majima.set_cp(100_000).expect("cp"), 32_768);
    assert_eq!(majima.money(), 9_999_999_999_999);

    let bytes = save.as_bytes();
    assert_eq!(&bytes[0xF2C8..0xF2D0], &9_999_999_999_999u64.to_le_bytes());
    assert_eq!(&bytes[0xF3E8..0xF3EA], &32_768u16.to_le_bytes());
    assert_eq!(save.character(Pc::Kiryu).money(), 0);
}

#[test]
fn hostess_edits_reach_the_store() {
    let mut save = open(synthetic_save("Majima", 1));
    let change = save
        .set_hostess_by_name("Yuki", Some(40), Some(77))
        .expect("Yuki is on the roster");
    assert_eq!(change.level, Some(40));
    let bytes = save.as_bytes();
    assert_eq!(&bytes[0x277E8..0x277EC], &0x001B_7740u32.to_le_bytes());
    assert_eq!(&bytes[0x277F0..0x277F4], &77u32.to_le_bytes());
    assert_eq!(save.hostesses().get(1).map(|h| h.level()), Some(40));
}

#[test]
fn hard_indexes_fit_their_regions() {
    for item in catalog::items() {
        let Some(index) = item.hard_index else {
            continue;
        };
        let slots = match item.category {
            ItemCategory::Valuable | ItemCategory::ValuableJunk => KIRYU_LAYOUT.regions[3].slots,
            ItemCategory::PocketCircuit => KIRYU_LAYOUT.regions[7].slots,
            ItemCategory::Crafting => MAJIMA_LAYOUT.regions[7].slots,
            other => panic!("{} ({other}) should not have a hard index", item.name),
        };
        assert!(index < slots, "{} index {index} >= {slots}", item.name);
    }
}

#[test]
fn written_file_differs_only_in_edited_bytes() {
    let original = synthetic_save("Kiryu", 2);
    let mut save = open(original.clone());
    save.character_mut(Pc::Kiryu)
        .set_money(1234)
        .expect("money should be written");

    let path = std::env::temp_dir().join(format!("y0_core_write_{}.sav", std::process::id()));
    save.write_to(&path).expect("write should succeed");
    let written = std::fs::read(&path).expect("written file should read");
    let _ = std::fs::remove_file(&path);

    assert_eq!(written.len(), original.len());
    let changed: Vec<usize> = (0..written.len())
        .filter(|&i| written[i] != original[i])
        .collect();
    assert!(changed.iter().all(|&i| (0xF2C0..0xF2C8).contains(&i)));
    assert!(!changed.is_empty());
}

#[test]
fn gear_goes_to_gear_inventory_or_box() {
    let gear_base = KIRYU_LAYOUT.regions[2].base;
    let gear_box_base = KIRYU_LAYOUT.regions[6].base;
    let mut bytes = synthetic_save("Kiryu", 1);
    put_record(&mut bytes, gear_base, 0, filler(362));
    put_record(&mut bytes, gear_box_base, 0, filler(362));
    put_record(&mut bytes, gear_box_base, 1, filler(363));
    let mut save = open(bytes);
    let mut kiryu = save.character_mut(Pc::Kiryu);

    let carried = kiryu
        .add_item(361, &AddItem::default())
        .expect("gear inventory has room");
    assert_eq!(carried.region, RegionKind::Gear);
    assert_eq!(carried.region_label, "Gear Inv");
    assert_eq!(carried.index, 1);

    let boxed = kiryu
        .add_item(361, &AddItem::default().to_box())
        .expect("gear box has room");
    assert_eq!(boxed.region, RegionKind::GearBox);
    assert_eq!(boxed.index, 2);

    let kiryu = save.character(Pc::Kiryu);
    assert_eq!(kiryu.region(RegionKind::Gear).get(1).map(|r| r.item_id), Some(361));
    assert_eq!(kiryu.region(RegionKind::GearBox).get(2).map(|r| r.item_id), Some(361));
    assert!(kiryu.region(RegionKind::Item).is_empty());
}

#[test]
fn pocket_circuit_parts_overwrite_their_hard_index() {
    let special_base = KIRYU_LAYOUT.regions[7].base;
    let mut bytes = synthetic_save("Kiryu", 1);
    put_record(&mut bytes, special_base, 34, filler(591));
    let mut save = open(bytes);

    let placement = save
        .character_mut(Pc::Kiryu)
        .add_item(585, &AddItem::default())
        .expect("Bumper Plate belongs to Kiryu");

    assert_eq!(placement.region, RegionKind::Special);
    assert_eq!(placement.region_label, "Pocket Circuit");
    assert_eq!(placement.index, 34);
    let stored = save
        .character(Pc::Kiryu)
        .special_region()
        .get(34)
        .copied()
        .expect("slot 34 exists");
    assert_eq!((stored.item_id, stored.ammo, stored.strikes), (585, 1, 1));
    assert_eq!(
        save.character(Pc::Kiryu).special_region().first_empty_slot(),
        Some(0)
    );
}

#[test]
fn placements_and_timestamps_serialize_with_field_names() {
    let mut save = open(synthetic_save("Kiryu", 1));
    let placement = save
        .character_mut(Pc::Kiryu)
        .add_item(665, &AddItem::default())
        .expect("pager should be placed");

    let json = serde_json::to_value(&placement).expect("placement serializes");
    assert_eq!(json["character"], "Kiryu");
    assert_eq!(json["item_id"], 665);
    assert_eq!(json["item_name"], "Pager");
    assert_eq!(json["category"], "Valuable");
    assert_eq!(json["quantity"], 1);
    assert_eq!(json["region"], "Valuables");
    assert_eq!(json["region_label"], "Valuables");
    assert_eq!(json["index"], 1);

    let saved = serde_json::to_value(save.saved_at()).expect("timestamp serializes");
    assert_eq!(
        saved,
        serde_json::json!({
            "year": 2021,
            "month": 3,
            "day_of_week": 5,
            "day": 19,
            "hours": 22,
            "minutes": 7,
            "seconds": 45,
        })
    );
    assert_eq!(
        serde_json::to_value(save.difficulty()).expect("difficulty serializes"),
        "Normal"
    );
}
