use serde_json::Value;
use y0_core::{AddItem, Pc, Savegame};
use y0_render::{TextRenderOptions, render_info_json, render_info_text, render_title};

fn synthetic_save() -> Savegame {
    let mut bytes = vec![0u8; 0x28000];
    bytes[..4].copy_from_slice(b"YZFH");
    bytes[0x6] = 1;
    bytes[0x8..0xD].copy_from_slice(b"Kiryu");
    for (i, v) in [2021u16, 3, 5, 19, 22, 7, 45].into_iter().enumerate() {
        bytes[0x28 + 2 * i..0x2A + 2 * i].copy_from_slice(&v.to_le_bytes());
    }
    bytes[0x444] = 1;
    bytes[0x445] = 1;
    bytes[0x448..0x450].copy_from_slice(&(3000u64 * 3900).to_le_bytes());

    let mut save = Savegame::from_bytes(bytes, "remote/SaveData0000.sav")
        .expect("synthetic save should parse");
    let mut kiryu = save.character_mut(Pc::Kiryu);
    kiryu.set_money(1_234_567).expect("money");
    kiryu
        .add_item(552, &AddItem::default().quantity(5))
        .expect("coins");
    kiryu.add_item(665, &AddItem::default()).expect("pager");
    save
}

#[test]
fn title_is_underlined_with_slot() {
    let save = synthetic_save();
    assert_eq!(
        render_title(&save),
        "remote/SaveData0000.sav (Slot 1)\n================================\n"
    );
}

#[test]
fn text_report_lists_general_info_and_regions() {
    let save = synthetic_save();
    let text = render_info_text(&save, &[Pc::Kiryu], TextRenderOptions::default());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        &lines[..8],
        &[
            "General",
            "-------",
            "Current Char: Kiryu",
            "Chapter: 2",
            "Saved on: 2021-03-19 22:07:45",
            "Time Played: 1:05",
            "Difficulty: Normal",
            "",
        ]
    );
    assert!(lines.contains(&"Money: 1,234,567"));
    assert!(lines.contains(&"Item Inv 1: 5x Medieval Silver Coin"));
    assert!(lines.contains(&"Valuables 2: Pager"));
    assert!(lines.contains(&"No Weapon Inv!"));
    assert!(lines.contains(&"No Pocket Circuit!"));
    assert!(!text.contains("Item Box"));
    assert!(!text.contains("Spent on"));
}

#[test]
fn verbose_text_adds_boxes_skills_and_hostesses() {
    let save = synthetic_save();
    let text = render_info_text(&save, &[Pc::Kiryu], TextRenderOptions { verbose: true });
    assert!(text.contains("No Item Box!"));
    assert!(text.contains("Spent on Brawler Style: 0"));
    assert!(text.contains(" 1. Yuki: level 1/40 (XP 0), sales 0"));
}

#[test]
fn json_report_keeps_field_order() {
    let save = synthetic_save();
    let value = render_info_json(&save, &[Pc::Kiryu, Pc::Majima]);
    let keys: Vec<&str> = value
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        vec![
            "file",
            "slot",
            "current_character",
            "chapter",
            "saved_at",
            "time_played",
            "seconds_played",
            "difficulty",
            "characters",
            "hostesses",
        ]
    );

    let kiryu = &value["characters"][0];
    assert_eq!(kiryu["name"], Value::from("Kiryu"));
    assert_eq!(kiryu["money"], Value::from(1_234_567u64));
    let items = kiryu["inventory"]["Item Inv"]
        .as_array()
        .expect("region should be an array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["item_id"], Value::from(552));
    assert_eq!(items[0]["quantity"], Value::from(5));
    assert_eq!(value["characters"][1]["name"], Value::from("Majima"));
    assert_eq!(value["hostesses"].as_array().map(Vec::len), Some(30));
}
