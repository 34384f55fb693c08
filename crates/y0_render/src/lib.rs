use std::fmt::Write as _;

use serde_json::{Map as JsonMap, Value as JsonValue};
use y0_core::{Character, InventoryRegion, ItemRecord, Pc, RegionKind, Savegame};

/// Regions shown by default, in display order.
const SHOWN_REGIONS: [RegionKind; 5] = [
    RegionKind::Item,
    RegionKind::Weapon,
    RegionKind::Gear,
    RegionKind::Valuables,
    RegionKind::Special,
];

/// Box regions, only shown when verbose.
const BOX_REGIONS: [RegionKind; 3] = [
    RegionKind::ItemBox,
    RegionKind::WeaponBox,
    RegionKind::GearBox,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRenderOptions {
    pub verbose: bool,
}

/// File name (with slot) underlined, as printed before any per-file output.
pub fn render_title(save: &Savegame) -> String {
    let name = save.display_name();
    format!("{name}\n{}\n", "=".repeat(name.chars().count()))
}

pub fn render_info_text(save: &Savegame, characters: &[Pc], options: TextRenderOptions) -> String {
    let mut out = String::new();
    write_heading(&mut out, "General", '-');
    writeln!(out, "Current Char: {}", save.current_character())
        .expect("writing to String cannot fail");
    writeln!(out, "Chapter: {}", save.chapter()).expect("writing to String cannot fail");
    writeln!(out, "Saved on: {}", save.saved_at()).expect("writing to String cannot fail");
    writeln!(out, "Time Played: {}", save.played_text()).expect("writing to String cannot fail");
    writeln!(out, "Difficulty: {}", save.difficulty()).expect("writing to String cannot fail");
    out.push('\n');

    for &pc in characters {
        write_character(&mut out, save.character(pc), options);
    }

    if options.verbose {
        write_heading(&mut out, "Hostesses", '-');
        for hostess in save.hostesses().iter() {
            let desc = hostess.desc();
            writeln!(
                out,
                "{:>2}. {}: level {}/{} (XP {}), sales {}",
                desc.id,
                desc.name,
                hostess.level(),
                desc.max_level,
                format_number_with_commas(u64::from(hostess.xp())),
                format_number_with_commas(u64::from(hostess.sales())),
            )
            .expect("writing to String cannot fail");
        }
        out.push('\n');
    }
    out
}

fn write_character(out: &mut String, character: &Character, options: TextRenderOptions) {
    write_heading(out, character.name(), '-');
    writeln!(out, "Money: {}", format_number_with_commas(character.money()))
        .expect("writing to String cannot fail");
    writeln!(out, "CP: {}", character.cp()).expect("writing to String cannot fail");
    if options.verbose {
        for (label, spent) in character.skills() {
            writeln!(
                out,
                "Spent on {label} Style: {}",
                format_number_with_commas(spent)
            )
            .expect("writing to String cannot fail");
        }
    }
    out.push('\n');

    let boxes = options.verbose.then_some(BOX_REGIONS).into_iter().flatten();
    for kind in SHOWN_REGIONS.into_iter().chain(boxes) {
        write_region(out, character.region(kind));
    }
}

fn write_region(out: &mut String, region: &InventoryRegion) {
    for line in region.describe() {
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');
}

fn write_heading(out: &mut String, title: &str, underline: char) {
    writeln!(out, "{title}").expect("writing to String cannot fail");
    writeln!(
        out,
        "{}",
        underline.to_string().repeat(title.chars().count())
    )
    .expect("writing to String cannot fail");
}

pub fn render_info_json(save: &Savegame, characters: &[Pc]) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert(
        "file".to_string(),
        JsonValue::String(save.path().display().to_string()),
    );
    out.insert(
        "slot".to_string(),
        match save.slot() {
            Some(slot) => JsonValue::String(slot.to_string()),
            None => JsonValue::Null,
        },
    );
    out.insert(
        "current_character".to_string(),
        JsonValue::String(save.current_character().to_string()),
    );
    out.insert("chapter".to_string(), JsonValue::from(save.chapter()));
    out.insert(
        "saved_at".to_string(),
        JsonValue::String(save.saved_at().to_string()),
    );
    out.insert(
        "time_played".to_string(),
        JsonValue::String(save.played_text()),
    );
    out.insert(
        "seconds_played".to_string(),
        JsonValue::from(save.seconds_played()),
    );
    out.insert(
        "difficulty".to_string(),
        JsonValue::String(save.difficulty().to_string()),
    );
    out.insert(
        "characters".to_string(),
        JsonValue::Array(
            characters
                .iter()
                .map(|&pc| character_to_json(save.character(pc)))
                .collect(),
        ),
    );
    out.insert("hostesses".to_string(), hostesses_to_json(save));
    JsonValue::Object(out)
}

fn character_to_json(character: &Character) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert(
        "name".to_string(),
        JsonValue::String(character.name().to_string()),
    );
    out.insert("money".to_string(), JsonValue::from(character.money()));
    out.insert(
        "running_totals".to_string(),
        JsonValue::from(character.running_totals().to_vec()),
    );
    out.insert("cp".to_string(), JsonValue::from(character.cp()));

    let mut skills = JsonMap::new();
    for (label, spent) in character.skills() {
        skills.insert(label.to_string(), JsonValue::from(spent));
    }
    out.insert("skills_spent".to_string(), JsonValue::Object(skills));

    let mut regions = JsonMap::new();
    for region in character.regions() {
        regions.insert(region.label().to_string(), region_to_json(region));
    }
    out.insert("inventory".to_string(), JsonValue::Object(regions));
    JsonValue::Object(out)
}

fn region_to_json(region: &InventoryRegion) -> JsonValue {
    JsonValue::Array(
        region
            .occupied()
            .map(|(index, record)| record_to_json(index, record))
            .collect(),
    )
}

fn record_to_json(index: usize, record: &ItemRecord) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert("index".to_string(), JsonValue::from(index));
    out.insert("item_id".to_string(), JsonValue::from(record.item_id));
    out.insert(
        "name".to_string(),
        match record.name() {
            Some(name) => JsonValue::String(name.to_string()),
            None => JsonValue::Null,
        },
    );
    out.insert("quantity".to_string(), JsonValue::from(record.quantity));
    out.insert("ammo".to_string(), JsonValue::from(record.ammo));
    out.insert("strikes".to_string(), JsonValue::from(record.strikes));
    out.insert("reserved".to_string(), JsonValue::from(record.reserved));
    out.insert("summary".to_string(), JsonValue::String(record.summary()));
    JsonValue::Object(out)
}

fn hostesses_to_json(save: &Savegame) -> JsonValue {
    JsonValue::Array(
        save.hostesses()
            .iter()
            .map(|hostess| {
                let desc = hostess.desc();
                let mut out = JsonMap::new();
                out.insert("id".to_string(), JsonValue::from(desc.id));
                out.insert("name".to_string(), JsonValue::String(desc.name.to_string()));
                out.insert("level".to_string(), JsonValue::from(hostess.level()));
                out.insert("max_level".to_string(), JsonValue::from(desc.max_level));
                out.insert("xp".to_string(), JsonValue::from(hostess.xp()));
                out.insert("sales".to_string(), JsonValue::from(hostess.sales()));
                JsonValue::Object(out)
            })
            .collect(),
    )
}

pub fn format_number_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}
