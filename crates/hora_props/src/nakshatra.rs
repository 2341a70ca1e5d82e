//! The 27 nakshatras (lunar mansions) and their ruling bodies.
//!
//! Rulership follows the Vimshottari sequence: nine rulers starting from
//! the South Node, repeated three times from Ashwini. Lookup by display
//! name is the primary keying; the names keep the registry's spellings
//! (e.g. "Mrigshira", "Aardra").

use std::str::FromStr;
use std::sync::LazyLock;

use crate::body::Body;
use crate::error::PropsError;
use crate::tile::{Tiling, tile_array};
use crate::util::find_by_name;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigshira,
    Aardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    #[cfg_attr(feature = "serde", serde(rename = "Purva Phalguni"))]
    PurvaPhalguni,
    #[cfg_attr(feature = "serde", serde(rename = "Uttara Phalguni"))]
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishaka,
    Anuradha,
    Jyeshta,
    Mula,
    #[cfg_attr(feature = "serde", serde(rename = "Purva Ashadha"))]
    PurvaAshadha,
    #[cfg_attr(feature = "serde", serde(rename = "Uttara Ashadha"))]
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    #[cfg_attr(feature = "serde", serde(rename = "Purva Bhadrapada"))]
    PurvaBhadrapada,
    #[cfg_attr(feature = "serde", serde(rename = "Uttara Bhadrapada"))]
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigshira,
    Nakshatra::Aardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishaka,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshta,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Ruler sequence repeated across the nakshatras.
pub const RULER_CYCLE: [Body; 9] = [
    Body::SouthNode,
    Body::Venus,
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::NorthNode,
    Body::Jupiter,
    Body::Saturn,
    Body::Mercury,
];

impl Nakshatra {
    /// Display name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigshira => "Mrigshira",
            Self::Aardra => "Aardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishaka => "Vishaka",
            Self::Anuradha => "Anuradha",
            Self::Jyeshta => "Jyeshta",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ruling body.
    pub fn ruler(self) -> Body {
        RULERS[self.index() as usize]
    }
}

impl FromStr for Nakshatra {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        by_name(s)
    }
}

static RULERS: LazyLock<[Body; 27]> = LazyLock::new(|| {
    let rulers: [Body; 27] = tile_array(&RULER_CYCLE, Tiling::RoundRobin);
    tracing::debug!(nakshatras = ALL_NAKSHATRAS.len(), "derived nakshatra ruler table");
    rulers
});

/// Resolve a nakshatra from its display name.
pub fn by_name(name: &str) -> Result<Nakshatra, PropsError> {
    find_by_name(&ALL_NAKSHATRAS, Nakshatra::name, "nakshatra", name)
}

/// Ruling body of the nakshatra with the given display name.
pub fn nakshatra_ruler(name: &str) -> Result<Body, PropsError> {
    find_by_name(&ALL_NAKSHATRAS, Nakshatra::name, "nakshatra.ruler", name).map(Nakshatra::ruler)
}

/// Name-keyed ruler table in nakshatra order.
pub fn ruler_table() -> impl Iterator<Item = (&'static str, Body)> {
    ALL_NAKSHATRAS.into_iter().map(|n| (n.name(), n.ruler()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn names_unique() {
        for (i, a) in ALL_NAKSHATRAS.iter().enumerate() {
            for b in &ALL_NAKSHATRAS[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn cycle_repeats_every_nine() {
        for n in ALL_NAKSHATRAS {
            let i = n.index() as usize;
            assert_eq!(n.ruler(), RULER_CYCLE[i % 9], "{}", n.name());
        }
    }

    #[test]
    fn known_rulers() {
        assert_eq!(nakshatra_ruler("Ashwini"), Ok(Body::SouthNode));
        assert_eq!(nakshatra_ruler("Magha"), Ok(Body::SouthNode));
        assert_eq!(nakshatra_ruler("Mula"), Ok(Body::SouthNode));
        assert_eq!(nakshatra_ruler("Rohini"), Ok(Body::Moon));
        assert_eq!(nakshatra_ruler("Revati"), Ok(Body::Mercury));
    }

    #[test]
    fn registry_spellings_only() {
        assert!(nakshatra_ruler("Mrigshira").is_ok());
        assert!(nakshatra_ruler("Mrigashira").is_err());
        assert!(nakshatra_ruler("Abhijit").is_err());
    }

    #[test]
    fn table_has_27_rows() {
        assert_eq!(ruler_table().count(), 27);
    }
}
