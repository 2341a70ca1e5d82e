//! Aspect vocabulary and display names.
//!
//! Each aspect is identified by its angle in whole degrees; the
//! `NoAspect` sentinel uses -1.

use std::str::FromStr;

use crate::error::PropsError;
use crate::util::find_by_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Aspect {
    #[cfg_attr(feature = "serde", serde(rename = "None"))]
    NoAspect,
    // Major
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
    // Minor
    Semisextile,
    Semiquintile,
    Semisquare,
    Quintile,
    Sesquiquintile,
    Sesquisquare,
    Biquintile,
    Quincunx,
}

/// The sentinel followed by the major then minor aspects.
pub const ALL_ASPECTS: [Aspect; 14] = [
    Aspect::NoAspect,
    Aspect::Conjunction,
    Aspect::Sextile,
    Aspect::Square,
    Aspect::Trine,
    Aspect::Opposition,
    Aspect::Semisextile,
    Aspect::Semiquintile,
    Aspect::Semisquare,
    Aspect::Quintile,
    Aspect::Sesquiquintile,
    Aspect::Sesquisquare,
    Aspect::Biquintile,
    Aspect::Quincunx,
];

pub const MAJOR_ASPECTS: [Aspect; 5] = [
    Aspect::Conjunction,
    Aspect::Sextile,
    Aspect::Square,
    Aspect::Trine,
    Aspect::Opposition,
];

pub const MINOR_ASPECTS: [Aspect; 8] = [
    Aspect::Semisextile,
    Aspect::Semiquintile,
    Aspect::Semisquare,
    Aspect::Quintile,
    Aspect::Sesquiquintile,
    Aspect::Sesquisquare,
    Aspect::Biquintile,
    Aspect::Quincunx,
];

impl Aspect {
    /// Display name. The sentinel is "None".
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoAspect => "None",
            Self::Conjunction => "Conjunction",
            Self::Sextile => "Sextile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Opposition => "Opposition",
            Self::Semisextile => "Semisextile",
            Self::Semiquintile => "Semiquintile",
            Self::Semisquare => "Semisquare",
            Self::Quintile => "Quintile",
            Self::Sesquiquintile => "Sesquiquintile",
            Self::Sesquisquare => "Sesquisquare",
            Self::Biquintile => "Biquintile",
            Self::Quincunx => "Quincunx",
        }
    }

    /// Identifier angle in degrees (-1 for the sentinel).
    pub const fn angle(self) -> i16 {
        match self {
            Self::NoAspect => -1,
            Self::Conjunction => 0,
            Self::Sextile => 60,
            Self::Square => 90,
            Self::Trine => 120,
            Self::Opposition => 180,
            Self::Semisextile => 30,
            Self::Semiquintile => 36,
            Self::Semisquare => 45,
            Self::Quintile => 72,
            Self::Sesquiquintile => 108,
            Self::Sesquisquare => 135,
            Self::Biquintile => 144,
            Self::Quincunx => 150,
        }
    }

    /// Aspect identified by `angle`.
    pub fn from_angle(angle: i16) -> Result<Aspect, PropsError> {
        ALL_ASPECTS
            .iter()
            .copied()
            .find(|a| a.angle() == angle)
            .ok_or_else(|| PropsError::unknown("aspect", angle.to_string()))
    }

    pub const fn is_major(self) -> bool {
        matches!(
            self,
            Self::Conjunction | Self::Sextile | Self::Square | Self::Trine | Self::Opposition
        )
    }
}

impl FromStr for Aspect {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_name(&ALL_ASPECTS, Self::name, "aspect", s)
    }
}

/// Display name for an aspect identifier angle.
pub fn aspect_name(angle: i16) -> Result<&'static str, PropsError> {
    Aspect::from_angle(angle).map(Aspect::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_plus_thirteen_named() {
        assert_eq!(ALL_ASPECTS.len(), 14);
        assert_eq!(ALL_ASPECTS.iter().filter(|a| **a != Aspect::NoAspect).count(), 13);
        assert_eq!(MAJOR_ASPECTS.len() + MINOR_ASPECTS.len() + 1, ALL_ASPECTS.len());
    }

    #[test]
    fn angles_unique() {
        for (i, a) in ALL_ASPECTS.iter().enumerate() {
            for b in &ALL_ASPECTS[i + 1..] {
                assert_ne!(a.angle(), b.angle(), "{} / {}", a.name(), b.name());
            }
        }
    }

    #[test]
    fn major_flag() {
        for a in MAJOR_ASPECTS {
            assert!(a.is_major());
        }
        for a in MINOR_ASPECTS {
            assert!(!a.is_major());
        }
        assert!(!Aspect::NoAspect.is_major());
    }

    #[test]
    fn names_by_angle() {
        assert_eq!(aspect_name(-1), Ok("None"));
        assert_eq!(aspect_name(90), Ok("Square"));
        assert_eq!(aspect_name(150), Ok("Quincunx"));
        assert!(aspect_name(100).is_err());
    }

    #[test]
    fn parse_aspect() {
        assert_eq!("Trine".parse::<Aspect>(), Ok(Aspect::Trine));
        assert_eq!("None".parse::<Aspect>(), Ok(Aspect::NoAspect));
    }
}
