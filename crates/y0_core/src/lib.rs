//! Yakuza 0 savegame editing.
//!
//! A [`Savegame`] holds the whole file in a [`ByteStore`] and exposes the
//! header, both characters and the hostess roster as typed views over fixed
//! offsets. Edits write straight into the store; [`Savegame::overwrite`]
//! dumps it back. [`SyncLedger`] keeps Steam's `remotecache.vdf` in step with
//! edited files.

pub mod catalog;
pub mod character;
pub mod difficulty;
pub mod error;
pub mod field;
pub mod hostess;
pub mod inventory;
pub mod item;
pub mod ledger;
pub mod savegame;
pub mod store;

pub use catalog::{ItemCategory, ItemDesc};
pub use character::{AddItem, CP_MAX, Character, CharacterMut, MONEY_MAX, Pc, Placement};
pub use difficulty::Difficulty;
pub use error::{CoreError, CoreErrorCode, InsertError};
pub use field::Field;
pub use hostess::{Hostess, HostessChange, HostessDesc, HostessRoster};
pub use inventory::{InventoryRegion, RegionKind, RegionSpec};
pub use item::{ItemRecord, RECORD_LEN};
pub use ledger::{LEDGER_FILE_NAME, LedgerEntry, SyncLedger};
pub use savegame::{MAGIC, SaveSlot, Savegame};
pub use store::{ByteStore, LeScalar, SaveTimestamp};
