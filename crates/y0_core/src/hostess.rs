//! Cabaret hostesses: static roster data and their XP/sales counters.

use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::catalog::eq_casefold;
use crate::error::{CoreError, InsertError};
use crate::field::Field;
use crate::store::ByteStore;

pub const MAX_LEVEL: u8 = 40;
const PLATINUM_MAX_LEVEL: u8 = 40;
const DEFAULT_MAX_LEVEL: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostessDesc {
    pub id: u8,
    pub name: &'static str,
    pub xp_offset: usize,
    pub sales_offset: usize,
    pub max_level: u8,
}

impl HostessDesc {
    const fn new(id: u8, name: &'static str, xp_offset: usize, sales_offset: usize) -> Self {
        Self {
            id,
            name,
            xp_offset,
            sales_offset,
            max_level: DEFAULT_MAX_LEVEL,
        }
    }

    const fn platinum(mut self) -> Self {
        self.max_level = PLATINUM_MAX_LEVEL;
        self
    }
}

#[rustfmt::skip]
pub const HOSTESSES: &[HostessDesc] = &[
    HostessDesc::new( 1, "Yuki",       0x277E8, 0x277F0).platinum(),
    HostessDesc::new( 2, "Chika",      0x27818, 0x27820).platinum(),
    HostessDesc::new( 3, "Mana",       0x27848, 0x27850).platinum(),
    HostessDesc::new( 4, "Ai",         0x27878, 0x27880).platinum(),
    HostessDesc::new( 5, "Hibiki",     0x278A8, 0x278B0).platinum(),
    HostessDesc::new( 6, "Saki",       0x278D8, 0x278E0).platinum(),
    HostessDesc::new( 7, "Miss Isobe", 0x27908, 0x27910),
    HostessDesc::new( 8, "Etsuko",     0x27938, 0x27940),
    HostessDesc::new( 9, "Dolly",      0x27968, 0x27970),
    HostessDesc::new(10, "Unknown",    0x27998, 0x279A0),
    HostessDesc::new(11, "Seiko",      0x279C8, 0x279D0),
    HostessDesc::new(12, "Akina",      0x279F8, 0x27A00),
    HostessDesc::new(13, "Koizumi",    0x27A28, 0x27A30),
    HostessDesc::new(14, "Shizuka",    0x27A58, 0x27A60),
    HostessDesc::new(15, "Erranda",    0x27A88, 0x27A90),
    HostessDesc::new(16, "Kiyoko",     0x27AB8, 0x27AC0),
    HostessDesc::new(17, "Junko",      0x27AE8, 0x27AF0),
    HostessDesc::new(18, "Shiho",      0x27B18, 0x27B20),
    HostessDesc::new(19, "Shinomi",    0x27B48, 0x27B50),
    HostessDesc::new(20, "Akemi",      0x27B78, 0x27B80),
    HostessDesc::new(21, "Hiroko",     0x27BA8, 0x27BB0),
    HostessDesc::new(22, "Harumi",     0x27BD8, 0x27BE0),
    HostessDesc::new(23, "Endo",       0x27C08, 0x27C10),
    HostessDesc::new(24, "Namiko",     0x27C38, 0x27C40),
    HostessDesc::new(25, "Kirara",     0x27C68, 0x27C70),
    HostessDesc::new(26, "Ume",        0x27C98, 0x27CA0),
    HostessDesc::new(27, "Marilyn",    0x27CC8, 0x27CD0),
    HostessDesc::new(28, "Chizu",      0x27CF8, 0x27D00),
    HostessDesc::new(29, "Mitsuko",    0x27D28, 0x27D30),
    HostessDesc::new(30, "Fusae",      0x27D58, 0x27D60),
];

/// XP needed to reach each level; index 0 is level 1.
#[rustfmt::skip]
pub const XP_LEVELS: [u32; MAX_LEVEL as usize] = [
    0x00000000, 0x00001388, 0x00002AF8, 0x00004650, 0x00006590,
    0x000088B8, 0x0000AFC8, 0x0000DAC0, 0x000109A0, 0x00013C68,
    0x00017318, 0x0001ADB0, 0x0001EC30, 0x00022E98, 0x000274E8,
    0x0002BF20, 0x00030D40, 0x00035F48, 0x0003B538, 0x00041EB0,
    0x000493E0, 0x00051C98, 0x0005B8D8, 0x000668A0, 0x00072BF0,
    0x000802C8, 0x0008ED28, 0x0009EB10, 0x000AFC80, 0x000C3500,
    0x000DBBA0, 0x000F4240, 0x0010C8E0, 0x00124F80, 0x0013D620,
    0x00155CC0, 0x0016E360, 0x00186A00, 0x0019F0A0, 0x001B7740,
];

pub fn hostess_by_id(id: u8) -> Option<&'static HostessDesc> {
    HOSTESSES.iter().find(|h| h.id == id)
}

pub fn hostess_by_name(name: &str) -> Option<&'static HostessDesc> {
    let name = name.trim();
    HOSTESSES.iter().find(|h| eq_casefold(h.name, name))
}

/// Highest level whose XP threshold has been reached.
pub fn level_for_xp(xp: u32) -> u8 {
    XP_LEVELS.iter().take_while(|&&needed| needed <= xp).count() as u8
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hostess {
    desc: &'static HostessDesc,
    xp: Field<u32>,
    sales: Field<u32>,
}

impl Hostess {
    pub fn desc(&self) -> &'static HostessDesc {
        self.desc
    }

    pub fn xp(&self) -> u32 {
        self.xp.get()
    }

    pub fn level(&self) -> u8 {
        level_for_xp(self.xp.get())
    }

    pub fn sales(&self) -> u32 {
        self.sales.get()
    }
}

/// What a hostess edit changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostessChange {
    pub id: u8,
    pub name: &'static str,
    pub level: Option<u8>,
    pub sales: Option<u32>,
}

impl fmt::Display for HostessChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Updating {} (ID {}):", self.name, self.id)?;
        if let Some(level) = self.level {
            write!(f, " level {level}")?;
        }
        if let Some(sales) = self.sales {
            write!(f, " sales {sales}")?;
        }
        if self.level.is_none() && self.sales.is_none() {
            f.write_str(" nothing to change")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostessRoster {
    hostesses: Vec<Hostess>,
}

impl HostessRoster {
    pub fn load(store: &ByteStore) -> Result<Self, CoreError> {
        let hostesses = HOSTESSES
            .iter()
            .map(|desc| {
                Ok(Hostess {
                    desc,
                    xp: Field::bind(store, desc.xp_offset)?,
                    sales: Field::bind(store, desc.sales_offset)?,
                })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;
        Ok(Self { hostesses })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hostess> {
        self.hostesses.iter()
    }

    pub fn get(&self, id: u8) -> Option<&Hostess> {
        self.hostesses.iter().find(|h| h.desc.id == id)
    }

    /// Set level and/or sales for one hostess. The level is clamped to
    /// `1..=max_level` and XP is set to that level's threshold.
    pub(crate) fn update(
        &mut self,
        store: &mut ByteStore,
        id: u8,
        level: Option<u8>,
        sales: Option<u32>,
    ) -> Result<HostessChange, InsertError> {
        let hostess = self
            .hostesses
            .iter_mut()
            .find(|h| h.desc.id == id)
            .ok_or_else(|| InsertError::UnknownHostess(id.to_string()))?;

        let level = level.map(|level| level.clamp(1, hostess.desc.max_level));
        if let Some(level) = level {
            hostess.xp.set(store, XP_LEVELS[usize::from(level) - 1])?;
        }
        if let Some(sales) = sales {
            hostess.sales.set(store, sales)?;
        }

        let change = HostessChange {
            id,
            name: hostess.desc.name,
            level,
            sales,
        };
        info!(%change, "hostess updated");
        Ok(change)
    }

    pub(crate) fn update_by_name(
        &mut self,
        store: &mut ByteStore,
        name: &str,
        level: Option<u8>,
        sales: Option<u32>,
    ) -> Result<HostessChange, InsertError> {
        let desc =
            hostess_by_name(name).ok_or_else(|| InsertError::UnknownHostess(name.to_string()))?;
        self.update(store, desc.id, level, sales)
    }
}
