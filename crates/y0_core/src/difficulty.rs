use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Legendary,
    Unknown(u8),
}

impl Difficulty {
    pub const EASY_RAW: u8 = 0;
    pub const NORMAL_RAW: u8 = 1;
    pub const HARD_RAW: u8 = 2;
    pub const LEGENDARY_RAW: u8 = 3;

    pub fn from_raw(raw: u8) -> Self {
        match raw {
            Self::EASY_RAW => Self::Easy,
            Self::NORMAL_RAW => Self::Normal,
            Self::HARD_RAW => Self::Hard,
            Self::LEGENDARY_RAW => Self::Legendary,
            other => Self::Unknown(other),
        }
    }

    pub fn raw(&self) -> u8 {
        match *self {
            Self::Easy => Self::EASY_RAW,
            Self::Normal => Self::NORMAL_RAW,
            Self::Hard => Self::HARD_RAW,
            Self::Legendary => Self::LEGENDARY_RAW,
            Self::Unknown(other) => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::Legendary => "Legendary",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Unknown(v) => write!(f, "Unknown ({})", v),
            _ => f.write_str(self.as_str()),
        }
    }
}
