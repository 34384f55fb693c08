use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::character::{Character, CharacterMut, KIRYU_LAYOUT, MAJIMA_LAYOUT, Pc};
use crate::difficulty::Difficulty;
use crate::error::{CoreError, InsertError};
use crate::hostess::{HostessChange, HostessRoster};
use crate::store::{ByteStore, SaveTimestamp};

pub const MAGIC: &[u8; 4] = b"YZFH";

const CHAPTER_OFFSET: usize = 0x6;
const CURRENT_CHARACTER_OFFSET: usize = 0x8;
const SAVED_AT_OFFSET: usize = 0x28;
const DIFFICULTY_OFFSETS: [usize; 2] = [0x444, 0x445];
const PLAYED_TIME_OFFSET: usize = 0x448;

static SLOT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^SaveData(\d+)\.(sav|clr)$").expect("slot name pattern is valid")
});

/// Slot a save file occupies, decoded from its file name. The number is
/// 1-based, as the game shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SaveSlot {
    Slot(u32),
    ClearData(u32),
}

impl SaveSlot {
    /// `SaveData0003.sav` is slot 4, `SaveData0000.clr` is clear data 1.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let caps = SLOT_NAME.captures(name)?;
        let number = caps[1].parse::<u32>().ok()?.checked_add(1)?;
        match &caps[2] {
            "sav" => Some(Self::Slot(number)),
            _ => Some(Self::ClearData(number)),
        }
    }
}

impl fmt::Display for SaveSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Slot(n) => write!(f, "Slot {n}"),
            Self::ClearData(n) => write!(f, "Clear Data {n}"),
        }
    }
}

/// A parsed savegame. Header fields are decoded once and read-only; edits
/// go through [`Savegame::character_mut`] and the hostess methods, and land
/// in the in-memory store immediately.
#[derive(Debug, Clone)]
pub struct Savegame {
    path: PathBuf,
    store: ByteStore,
    slot: Option<SaveSlot>,
    current_character: String,
    chapter: u8,
    saved_at: SaveTimestamp,
    seconds_played: f64,
    difficulty: Difficulty,
    kiryu: Character,
    majima: Character,
    hostesses: HostessRoster,
}

impl Savegame {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| CoreError::io(path, source))?;
        Self::from_bytes(bytes, path)
    }

    /// Parse an in-memory copy of the file found at `path`. Nothing is read
    /// past the magic unless it matches.
    pub fn from_bytes(bytes: Vec<u8>, path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        if !bytes.starts_with(MAGIC) {
            return Err(CoreError::NotASavegame { path });
        }
        let store = ByteStore::new(bytes);

        let first: u8 = store.read(DIFFICULTY_OFFSETS[0])?;
        let second: u8 = store.read(DIFFICULTY_OFFSETS[1])?;
        if first != second {
            return Err(CoreError::InconsistentDifficulty { first, second });
        }

        let save = Self {
            slot: SaveSlot::from_path(&path),
            current_character: store.read_string(CURRENT_CHARACTER_OFFSET)?,
            chapter: store.read::<u8>(CHAPTER_OFFSET)?.saturating_add(1),
            saved_at: store.read_datetime(SAVED_AT_OFFSET)?,
            seconds_played: store.read_scaled_duration(PLAYED_TIME_OFFSET)?,
            difficulty: Difficulty::from_raw(first),
            kiryu: Character::load(&store, &KIRYU_LAYOUT)?,
            majima: Character::load(&store, &MAJIMA_LAYOUT)?,
            hostesses: HostessRoster::load(&store)?,
            path,
            store,
        };
        debug!(path = %save.path.display(), current = %save.current_character, "savegame parsed");
        Ok(save)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn slot(&self) -> Option<SaveSlot> {
        self.slot
    }

    /// File path followed by the slot, when the name says which one.
    pub fn display_name(&self) -> String {
        match self.slot {
            Some(slot) => format!("{} ({slot})", self.path.display()),
            None => self.path.display().to_string(),
        }
    }

    /// Character name as written in the header.
    pub fn current_character(&self) -> &str {
        &self.current_character
    }

    /// The header's character name resolved to a [`Pc`].
    pub fn active_pc(&self) -> Option<Pc> {
        Pc::from_name(&self.current_character)
    }

    /// 1-based chapter number.
    pub fn chapter(&self) -> u8 {
        self.chapter
    }

    pub fn saved_at(&self) -> SaveTimestamp {
        self.saved_at
    }

    pub fn seconds_played(&self) -> f64 {
        self.seconds_played
    }

    /// Play time as `H:MM`.
    pub fn played_text(&self) -> String {
        let minutes = (self.seconds_played / 60.0) as u64;
        format!("{}:{:02}", minutes / 60, minutes % 60)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn character(&self, pc: Pc) -> &Character {
        match pc {
            Pc::Kiryu => &self.kiryu,
            Pc::Majima => &self.majima,
        }
    }

    pub fn characters(&self) -> [&Character; 2] {
        [&self.kiryu, &self.majima]
    }

    pub fn character_mut(&mut self, pc: Pc) -> CharacterMut<'_> {
        let character = match pc {
            Pc::Kiryu => &mut self.kiryu,
            Pc::Majima => &mut self.majima,
        };
        CharacterMut::new(character, &mut self.store)
    }

    pub fn hostesses(&self) -> &HostessRoster {
        &self.hostesses
    }

    pub fn set_hostess(
        &mut self,
        id: u8,
        level: Option<u8>,
        sales: Option<u32>,
    ) -> Result<HostessChange, InsertError> {
        self.hostesses.update(&mut self.store, id, level, sales)
    }

    pub fn set_hostess_by_name(
        &mut self,
        name: &str,
        level: Option<u8>,
        sales: Option<u32>,
    ) -> Result<HostessChange, InsertError> {
        self.hostesses
            .update_by_name(&mut self.store, name, level, sales)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.store.as_bytes()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.store.into_bytes()
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        fs::write(path, self.store.as_bytes()).map_err(|source| CoreError::io(path, source))?;
        debug!(path = %path.display(), bytes = self.store.len(), "savegame written");
        Ok(())
    }

    pub fn overwrite(&self) -> Result<(), CoreError> {
        self.write_to(&self.path)
    }
}
