//! Zodiac signs and their traditional properties.
//!
//! Mode, sun season, gender, faction, element and temperament are not
//! listed per sign: each is a short base sequence tiled across the twelve
//! signs starting at Aries (see [`crate::tile`]). Fertility and the figure
//! classes are literal tables.

use std::str::FromStr;
use std::sync::LazyLock;

use crate::base::{
    ELEMENTS, Element, FACTIONS, Faction, GENDERS, Gender, SUN_SEASONS, SunSeason, TEMPERAMENTS,
    Temperament,
};
use crate::error::PropsError;
use crate::tile::{Tiling, tile_array};
use crate::util::find_by_name;

/// The 12 tropical signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiacal order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Display name, also the sign's identifier.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based sign number (Aries=1 .. Pisces=12).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Sign for a 0-based index. Returns None if index >= 12.
    pub fn from_index(index: u8) -> Option<Sign> {
        ALL_SIGNS.get(index as usize).copied()
    }
}

impl FromStr for Sign {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_name(&ALL_SIGNS, Self::name, "sign", s)
    }
}

/// Quadruplicity of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    Cardinal,
    Fixed,
    Mutable,
}

/// Modes in the order they recur from Aries.
pub const MODES: [Mode; 3] = [Mode::Cardinal, Mode::Fixed, Mode::Mutable];

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardinal => "Cardinal",
            Self::Fixed => "Fixed",
            Self::Mutable => "Mutable",
        }
    }
}

/// Fertility grade of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fertility {
    Sterile,
    #[cfg_attr(feature = "serde", serde(rename = "Moderately Sterile"))]
    ModeratelySterile,
    #[cfg_attr(feature = "serde", serde(rename = "Moderately Fertile"))]
    ModeratelyFertile,
    Fertile,
}

impl Fertility {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sterile => "Sterile",
            Self::ModeratelySterile => "Moderately Sterile",
            Self::ModeratelyFertile => "Moderately Fertile",
            Self::Fertile => "Fertile",
        }
    }
}

/// Figure class of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Figure {
    Bestial,
    Human,
    Wild,
}

impl Figure {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bestial => "Bestial",
            Self::Human => "Human",
            Self::Wild => "Wild",
        }
    }
}

/// Signs figured as four-footed beasts.
pub const FIGURE_BESTIAL: [Sign; 5] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Leo,
    Sign::Sagittarius,
    Sign::Capricorn,
];

/// Signs figured as human.
pub const FIGURE_HUMAN: [Sign; 4] = [Sign::Gemini, Sign::Virgo, Sign::Libra, Sign::Aquarius];

/// Signs figured as wild beasts. Leo is also bestial.
pub const FIGURE_WILD: [Sign; 1] = [Sign::Leo];

/// Every property of one sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SignProperties {
    pub sign: Sign,
    /// 1-based sign number.
    pub number: u8,
    pub mode: Mode,
    pub sun_season: SunSeason,
    pub gender: Gender,
    pub faction: Faction,
    pub element: Element,
    pub temperament: Temperament,
    pub fertility: Fertility,
}

struct SignTable {
    mode: [Mode; 12],
    sun_season: [SunSeason; 12],
    gender: [Gender; 12],
    faction: [Faction; 12],
    element: [Element; 12],
    temperament: [Temperament; 12],
}

static SIGN_TABLE: LazyLock<SignTable> = LazyLock::new(|| {
    let table = SignTable {
        mode: tile_array(&MODES, Tiling::RoundRobin),
        sun_season: tile_array(&SUN_SEASONS, Tiling::Block),
        gender: tile_array(&GENDERS, Tiling::RoundRobin),
        faction: tile_array(&FACTIONS, Tiling::RoundRobin),
        element: tile_array(&ELEMENTS, Tiling::RoundRobin),
        temperament: tile_array(&TEMPERAMENTS, Tiling::RoundRobin),
    };
    tracing::debug!(signs = ALL_SIGNS.len(), "derived sign property table");
    table
});

pub fn mode(sign: Sign) -> Mode {
    SIGN_TABLE.mode[sign.index() as usize]
}

pub fn sun_season(sign: Sign) -> SunSeason {
    SIGN_TABLE.sun_season[sign.index() as usize]
}

pub fn gender(sign: Sign) -> Gender {
    SIGN_TABLE.gender[sign.index() as usize]
}

pub fn faction(sign: Sign) -> Faction {
    SIGN_TABLE.faction[sign.index() as usize]
}

pub fn element(sign: Sign) -> Element {
    SIGN_TABLE.element[sign.index() as usize]
}

pub fn temperament(sign: Sign) -> Temperament {
    SIGN_TABLE.temperament[sign.index() as usize]
}

/// Fertility grade (literal table, no derivation rule).
pub const fn fertility(sign: Sign) -> Fertility {
    match sign {
        Sign::Aries => Fertility::ModeratelySterile,
        Sign::Taurus => Fertility::ModeratelyFertile,
        Sign::Gemini => Fertility::Sterile,
        Sign::Cancer => Fertility::Fertile,
        Sign::Leo => Fertility::Sterile,
        Sign::Virgo => Fertility::Sterile,
        Sign::Libra => Fertility::ModeratelyFertile,
        Sign::Scorpio => Fertility::Fertile,
        Sign::Sagittarius => Fertility::ModeratelyFertile,
        Sign::Capricorn => Fertility::ModeratelySterile,
        Sign::Aquarius => Fertility::ModeratelySterile,
        Sign::Pisces => Fertility::Fertile,
    }
}

/// Signs belonging to a figure class.
pub const fn figure_members(figure: Figure) -> &'static [Sign] {
    match figure {
        Figure::Bestial => &FIGURE_BESTIAL,
        Figure::Human => &FIGURE_HUMAN,
        Figure::Wild => &FIGURE_WILD,
    }
}

/// Figure classes a sign belongs to, in Bestial, Human, Wild order.
///
/// Usually zero or one class; Leo is both Bestial and Wild.
pub fn figures(sign: Sign) -> Vec<Figure> {
    [Figure::Bestial, Figure::Human, Figure::Wild]
        .into_iter()
        .filter(|&f| figure_members(f).contains(&sign))
        .collect()
}

/// All properties of one sign.
pub fn properties(sign: Sign) -> SignProperties {
    SignProperties {
        sign,
        number: sign.number(),
        mode: mode(sign),
        sun_season: sun_season(sign),
        gender: gender(sign),
        faction: faction(sign),
        element: element(sign),
        temperament: temperament(sign),
        fertility: fertility(sign),
    }
}
