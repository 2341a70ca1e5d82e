//! Houses and their traditional properties.
//!
//! Condition and gender are tiled across the twelve houses from the first
//! house; the horizon split is a fixed partition.

use std::str::FromStr;
use std::sync::LazyLock;

use crate::base::{GENDERS, Gender};
use crate::error::PropsError;
use crate::tile::{Tiling, tile_array};
use crate::util::find_by_name;

/// The 12 mundane houses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum House {
    #[cfg_attr(feature = "serde", serde(rename = "House 1"))]
    House1,
    #[cfg_attr(feature = "serde", serde(rename = "House 2"))]
    House2,
    #[cfg_attr(feature = "serde", serde(rename = "House 3"))]
    House3,
    #[cfg_attr(feature = "serde", serde(rename = "House 4"))]
    House4,
    #[cfg_attr(feature = "serde", serde(rename = "House 5"))]
    House5,
    #[cfg_attr(feature = "serde", serde(rename = "House 6"))]
    House6,
    #[cfg_attr(feature = "serde", serde(rename = "House 7"))]
    House7,
    #[cfg_attr(feature = "serde", serde(rename = "House 8"))]
    House8,
    #[cfg_attr(feature = "serde", serde(rename = "House 9"))]
    House9,
    #[cfg_attr(feature = "serde", serde(rename = "House 10"))]
    House10,
    #[cfg_attr(feature = "serde", serde(rename = "House 11"))]
    House11,
    #[cfg_attr(feature = "serde", serde(rename = "House 12"))]
    House12,
}

/// All 12 houses in order (0 = first house).
pub const ALL_HOUSES: [House; 12] = [
    House::House1,
    House::House2,
    House::House3,
    House::House4,
    House::House5,
    House::House6,
    House::House7,
    House::House8,
    House::House9,
    House::House10,
    House::House11,
    House::House12,
];

/// Houses 7 to 12.
pub const ABOVE_HORIZON: [House; 6] = [
    House::House7,
    House::House8,
    House::House9,
    House::House10,
    House::House11,
    House::House12,
];

/// Houses 1 to 6.
pub const BELOW_HORIZON: [House; 6] = [
    House::House1,
    House::House2,
    House::House3,
    House::House4,
    House::House5,
    House::House6,
];

impl House {
    /// Display name ("House 1" .. "House 12").
    pub const fn name(self) -> &'static str {
        match self {
            Self::House1 => "House 1",
            Self::House2 => "House 2",
            Self::House3 => "House 3",
            Self::House4 => "House 4",
            Self::House5 => "House 5",
            Self::House6 => "House 6",
            Self::House7 => "House 7",
            Self::House8 => "House 8",
            Self::House9 => "House 9",
            Self::House10 => "House 10",
            Self::House11 => "House 11",
            Self::House12 => "House 12",
        }
    }

    /// 0-based index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based house number.
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// House for a 1-based number. Returns None outside 1..=12.
    pub fn from_number(number: u8) -> Option<House> {
        let i = number.checked_sub(1)?;
        ALL_HOUSES.get(i as usize).copied()
    }
}

impl FromStr for House {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        by_name(s)
    }
}

/// Resolve a house from its display name, e.g. "House 10".
pub fn by_name(name: &str) -> Result<House, PropsError> {
    find_by_name(&ALL_HOUSES, House::name, "house", name)
}

/// Angularity of a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    Angular,
    Succedent,
    Cadent,
}

pub const CONDITIONS: [Condition; 3] = [Condition::Angular, Condition::Succedent, Condition::Cadent];

impl Condition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Angular => "Angular",
            Self::Succedent => "Succedent",
            Self::Cadent => "Cadent",
        }
    }
}

/// Every property of one house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HouseProperties {
    pub house: House,
    pub number: u8,
    pub condition: Condition,
    pub gender: Gender,
    pub above_horizon: bool,
}

struct HouseTable {
    condition: [Condition; 12],
    gender: [Gender; 12],
}

static HOUSE_TABLE: LazyLock<HouseTable> = LazyLock::new(|| {
    let table = HouseTable {
        condition: tile_array(&CONDITIONS, Tiling::RoundRobin),
        gender: tile_array(&GENDERS, Tiling::RoundRobin),
    };
    tracing::debug!(houses = ALL_HOUSES.len(), "derived house property table");
    table
});

pub fn condition(house: House) -> Condition {
    HOUSE_TABLE.condition[house.index() as usize]
}

pub fn gender(house: House) -> Gender {
    HOUSE_TABLE.gender[house.index() as usize]
}

pub fn is_above_horizon(house: House) -> bool {
    ABOVE_HORIZON.contains(&house)
}

pub fn is_below_horizon(house: House) -> bool {
    BELOW_HORIZON.contains(&house)
}

pub fn properties(house: House) -> HouseProperties {
    HouseProperties {
        house,
        number: house.number(),
        condition: condition(house),
        gender: gender(house),
        above_horizon: is_above_horizon(house),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_sequential() {
        for (i, h) in ALL_HOUSES.iter().enumerate() {
            assert_eq!(h.number() as usize, i + 1);
            assert_eq!(House::from_number(h.number()), Some(*h));
        }
        assert_eq!(House::from_number(0), None);
        assert_eq!(House::from_number(13), None);
    }

    #[test]
    fn angles() {
        for h in [House::House1, House::House4, House::House7, House::House10] {
            assert_eq!(condition(h), Condition::Angular, "{}", h.name());
        }
        assert_eq!(condition(House::House2), Condition::Succedent);
        assert_eq!(condition(House::House12), Condition::Cadent);
    }

    #[test]
    fn genders_cover_all_twelve() {
        assert_eq!(gender(House::House1), Gender::Masculine);
        assert_eq!(gender(House::House10), Gender::Feminine);
        assert_eq!(gender(House::House11), Gender::Masculine);
        assert_eq!(gender(House::House12), Gender::Feminine);
    }

    #[test]
    fn horizon_sides_exclusive() {
        for h in ALL_HOUSES {
            assert_ne!(is_above_horizon(h), is_below_horizon(h), "{}", h.name());
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(by_name("House 1"), Ok(House::House1));
        assert_eq!("House 12".parse::<House>(), Ok(House::House12));
        assert!(by_name("House 13").is_err());
        assert!(by_name("House1").is_err());
    }
}
