//! Base vocabularies: elements, temperaments, qualities, genders, factions,
//! sun seasons and moon quarters, with their fixed cross-mappings.
//!
//! The four elements pair one-to-one with the four temperaments; each is
//! described by one thermal quality (hot/cold) and one humidity quality
//! (dry/humid).

use std::str::FromStr;

use crate::error::PropsError;
use crate::util::find_by_name;

/// The four classical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// The four elements in canonical order.
pub const ELEMENTS: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

impl FromStr for Element {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_name(&ELEMENTS, Self::name, "element", s)
    }
}

/// The four humoral temperaments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Temperament {
    Choleric,
    Melancholic,
    Sanguine,
    Phlegmatic,
}

/// The four temperaments in canonical order (slot-aligned with [`ELEMENTS`]).
pub const TEMPERAMENTS: [Temperament; 4] = [
    Temperament::Choleric,
    Temperament::Melancholic,
    Temperament::Sanguine,
    Temperament::Phlegmatic,
];

impl Temperament {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Choleric => "Choleric",
            Self::Melancholic => "Melancholic",
            Self::Sanguine => "Sanguine",
            Self::Phlegmatic => "Phlegmatic",
        }
    }
}

impl FromStr for Temperament {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_name(&TEMPERAMENTS, Self::name, "temperament", s)
    }
}

/// Elementary qualities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quality {
    Hot,
    Cold,
    Dry,
    Humid,
}

impl Quality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hot => "Hot",
            Self::Cold => "Cold",
            Self::Dry => "Dry",
            Self::Humid => "Humid",
        }
    }
}

/// Gender of a sign, house or body.
///
/// `Neutral` is only carried by Mercury.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Masculine,
    Feminine,
    Neutral,
}

/// The two alternating genders used for signs and houses.
pub const GENDERS: [Gender; 2] = [Gender::Masculine, Gender::Feminine];

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Masculine => "Masculine",
            Self::Feminine => "Feminine",
            Self::Neutral => "Neutral",
        }
    }
}

/// Sect affinity of a sign or body.
///
/// `Neutral` is only carried by Mercury.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Faction {
    Diurnal,
    Nocturnal,
    Neutral,
}

/// The two alternating factions used for signs.
pub const FACTIONS: [Faction; 2] = [Faction::Diurnal, Faction::Nocturnal];

impl Faction {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diurnal => "Diurnal",
            Self::Nocturnal => "Nocturnal",
            Self::Neutral => "Neutral",
        }
    }
}

/// Season of the Sun's passage through a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SunSeason {
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Seasons in order, starting at the vernal equinox.
pub const SUN_SEASONS: [SunSeason; 4] = [
    SunSeason::Spring,
    SunSeason::Summer,
    SunSeason::Autumn,
    SunSeason::Winter,
];

impl SunSeason {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }
}

impl FromStr for SunSeason {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_name(&SUN_SEASONS, Self::name, "sun season", s)
    }
}

/// Quarter of the lunation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoonQuarter {
    #[cfg_attr(feature = "serde", serde(rename = "First Quarter"))]
    First,
    #[cfg_attr(feature = "serde", serde(rename = "Second Quarter"))]
    Second,
    #[cfg_attr(feature = "serde", serde(rename = "Third Quarter"))]
    Third,
    #[cfg_attr(feature = "serde", serde(rename = "Last Quarter"))]
    Last,
}

pub const MOON_QUARTERS: [MoonQuarter; 4] = [
    MoonQuarter::First,
    MoonQuarter::Second,
    MoonQuarter::Third,
    MoonQuarter::Last,
];

impl MoonQuarter {
    pub const fn name(self) -> &'static str {
        match self {
            Self::First => "First Quarter",
            Self::Second => "Second Quarter",
            Self::Third => "Third Quarter",
            Self::Last => "Last Quarter",
        }
    }
}

impl FromStr for MoonQuarter {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_name(&MOON_QUARTERS, Self::name, "moon quarter", s)
    }
}

/// Temperament paired with an element.
pub const fn element_temperament(element: Element) -> Temperament {
    match element {
        Element::Fire => Temperament::Choleric,
        Element::Earth => Temperament::Melancholic,
        Element::Air => Temperament::Sanguine,
        Element::Water => Temperament::Phlegmatic,
    }
}

/// Element paired with a temperament. Inverse of [`element_temperament`].
pub const fn temperament_element(temperament: Temperament) -> Element {
    match temperament {
        Temperament::Choleric => Element::Fire,
        Temperament::Melancholic => Element::Earth,
        Temperament::Sanguine => Element::Air,
        Temperament::Phlegmatic => Element::Water,
    }
}

/// Thermal and humidity qualities of an element, in that order.
pub const fn element_qualities(element: Element) -> [Quality; 2] {
    match element {
        Element::Fire => [Quality::Hot, Quality::Dry],
        Element::Earth => [Quality::Cold, Quality::Dry],
        Element::Air => [Quality::Hot, Quality::Humid],
        Element::Water => [Quality::Cold, Quality::Humid],
    }
}

/// Thermal and humidity qualities of a temperament, in that order.
pub const fn temperament_qualities(temperament: Temperament) -> [Quality; 2] {
    match temperament {
        Temperament::Choleric => [Quality::Hot, Quality::Dry],
        Temperament::Melancholic => [Quality::Cold, Quality::Dry],
        Temperament::Sanguine => [Quality::Hot, Quality::Humid],
        Temperament::Phlegmatic => [Quality::Cold, Quality::Humid],
    }
}

pub const fn moon_quarter_element(quarter: MoonQuarter) -> Element {
    match quarter {
        MoonQuarter::First => Element::Air,
        MoonQuarter::Second => Element::Fire,
        MoonQuarter::Third => Element::Earth,
        MoonQuarter::Last => Element::Water,
    }
}

pub const fn sun_season_element(season: SunSeason) -> Element {
    match season {
        SunSeason::Spring => Element::Air,
        SunSeason::Summer => Element::Fire,
        SunSeason::Autumn => Element::Earth,
        SunSeason::Winter => Element::Water,
    }
}
