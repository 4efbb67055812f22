//! Shift and symbol vocabulary.
//!
//! Every persisted day cell carries one [`ShiftSymbol`]. Working symbols
//! depend on the employee's [`EmploymentType`]:
//!
//! | Category | Morning | Evening |
//! |----------|---------|---------|
//! | FullTime | MA1 | EA1 |
//! | PartTime | PT4 | PT5 |
//! | Trainee  | MA1 | EA1 |
//!
//! `O` (off) and `V` (vacation) are category-independent. `B` (relief) is
//! only ever produced by the export layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A weekly base shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Evening,
}

impl Shift {
    /// The opposite shift.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Shift::Morning => Shift::Evening,
            Shift::Evening => Shift::Morning,
        }
    }
}

/// Employment category. Governs which symbol pair is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Trainee,
}

/// A per-day roster symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftSymbol {
    /// Day off (Friday or weekly off-day).
    #[serde(rename = "O")]
    Off,
    /// Approved vacation.
    #[serde(rename = "V")]
    Vacation,
    #[serde(rename = "MA1")]
    MorningFullTime,
    #[serde(rename = "EA1")]
    EveningFullTime,
    #[serde(rename = "PT4")]
    MorningPartTime,
    #[serde(rename = "PT5")]
    EveningPartTime,
    /// Between-shift relief. Export-only.
    #[serde(rename = "B")]
    Relief,
}

impl ShiftSymbol {
    /// Working symbol for a category and shift.
    pub fn for_shift(employment_type: EmploymentType, shift: Shift) -> Self {
        match (employment_type, shift) {
            (EmploymentType::PartTime, Shift::Morning) => ShiftSymbol::MorningPartTime,
            (EmploymentType::PartTime, Shift::Evening) => ShiftSymbol::EveningPartTime,
            (_, Shift::Morning) => ShiftSymbol::MorningFullTime,
            (_, Shift::Evening) => ShiftSymbol::EveningFullTime,
        }
    }

    /// Canonical uppercase code.
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftSymbol::Off => "O",
            ShiftSymbol::Vacation => "V",
            ShiftSymbol::MorningFullTime => "MA1",
            ShiftSymbol::EveningFullTime => "EA1",
            ShiftSymbol::MorningPartTime => "PT4",
            ShiftSymbol::EveningPartTime => "PT5",
            ShiftSymbol::Relief => "B",
        }
    }

    /// Classifies a working symbol as Morning or Evening.
    ///
    /// Returns `None` for `O`, `V`, and `B`.
    pub fn shift(self) -> Option<Shift> {
        match self {
            ShiftSymbol::MorningFullTime | ShiftSymbol::MorningPartTime => Some(Shift::Morning),
            ShiftSymbol::EveningFullTime | ShiftSymbol::EveningPartTime => Some(Shift::Evening),
            ShiftSymbol::Off | ShiftSymbol::Vacation | ShiftSymbol::Relief => None,
        }
    }

    /// Whether this symbol marks a day away from work.
    #[inline]
    pub fn is_rest(self) -> bool {
        matches!(self, ShiftSymbol::Off | ShiftSymbol::Vacation)
    }
}

impl fmt::Display for ShiftSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a symbol string is not part of the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shift symbol: {0:?}")]
pub struct UnknownSymbol(pub String);

impl FromStr for ShiftSymbol {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "O" => Ok(ShiftSymbol::Off),
            "V" => Ok(ShiftSymbol::Vacation),
            "MA1" => Ok(ShiftSymbol::MorningFullTime),
            "EA1" => Ok(ShiftSymbol::EveningFullTime),
            "PT4" => Ok(ShiftSymbol::MorningPartTime),
            "PT5" => Ok(ShiftSymbol::EveningPartTime),
            "B" => Ok(ShiftSymbol::Relief),
            _ => Err(UnknownSymbol(s.to_string())),
        }
    }
}
