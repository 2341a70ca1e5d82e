//! Celestial bodies and calculated points with their traditional properties.
//!
//! Every body has a mean daily motion and an orb. Only the seven classical
//! bodies carry element, temperament, gender, faction and joys; asking any
//! other body for those fails with [`PropsError::UnknownIdentifier`].
//!
//! Sign rulership is keyed by the sign's display name rather than by
//! [`Sign`], since chart consumers resolve rulers from names.

use std::str::FromStr;

use crate::base::{Element, Faction, Gender, Temperament};
use crate::error::PropsError;
use crate::house::House;
use crate::sign::Sign;
use crate::util::find_by_name;

/// Bodies and calculated points known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    #[cfg_attr(feature = "serde", serde(rename = "North Node"))]
    NorthNode,
    #[cfg_attr(feature = "serde", serde(rename = "South Node"))]
    SouthNode,
    Syzygy,
    #[cfg_attr(feature = "serde", serde(rename = "Pars Fortuna"))]
    ParsFortuna,
}

/// All 15 bodies in registry order.
pub const ALL_BODIES: [Body; 15] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::Chiron,
    Body::NorthNode,
    Body::SouthNode,
    Body::Syzygy,
    Body::ParsFortuna,
];

/// The seven classical bodies.
pub const CLASSICAL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    /// Display name, also the body's identifier.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::Chiron => "Chiron",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
            Self::Syzygy => "Syzygy",
            Self::ParsFortuna => "Pars Fortuna",
        }
    }

    /// 0-based index into ALL_BODIES.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn is_classical(self) -> bool {
        matches!(
            self,
            Self::Sun
                | Self::Moon
                | Self::Mercury
                | Self::Venus
                | Self::Mars
                | Self::Jupiter
                | Self::Saturn
        )
    }
}

impl FromStr for Body {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_name(&ALL_BODIES, Self::name, "body", s)
    }
}

/// Mean daily motion in degrees per day.
///
/// Calculated points (Syzygy, Pars Fortuna) are 0.
pub const fn mean_motion(body: Body) -> f64 {
    match body {
        Body::Sun => 0.9833,
        Body::Moon => 13.1833,
        Body::Mercury => 0.9833,
        Body::Venus => 0.9833,
        Body::Mars => 0.5166,
        Body::Jupiter => 0.0833,
        Body::Saturn => 0.0333,
        Body::Uranus => 0.001,
        Body::Neptune => 0.0001,
        Body::Pluto => 0.00001,
        Body::Chiron => 0.00001,
        Body::NorthNode => 13.1833,
        Body::SouthNode => 13.1833,
        Body::Syzygy | Body::ParsFortuna => 0.0,
    }
}

/// Orb of influence in degrees.
pub const fn orb(body: Body) -> f64 {
    match body {
        Body::Sun => 15.0,
        Body::Moon => 12.0,
        Body::Mercury | Body::Venus => 7.0,
        Body::Mars => 8.0,
        Body::Jupiter | Body::Saturn => 9.0,
        Body::Uranus | Body::Neptune | Body::Pluto | Body::Chiron => 5.0,
        Body::NorthNode | Body::SouthNode => 12.0,
        Body::Syzygy | Body::ParsFortuna => 0.0,
    }
}

// Columns: element, temperament, gender, faction, sign of joy, house of joy.
type ClassicalRow = (Element, Temperament, Gender, Faction, Sign, House);

#[rustfmt::skip]
const fn classical_row(body: Body) -> Option<ClassicalRow> {
    use Element::*;
    use Temperament::*;
    let row = match body {
        Body::Saturn => (Earth, Melancholic, Gender::Masculine, Faction::Diurnal, Sign::Aquarius, House::House12),
        Body::Jupiter => (Air, Sanguine, Gender::Masculine, Faction::Diurnal, Sign::Sagittarius, House::House11),
        Body::Mars => (Fire, Choleric, Gender::Masculine, Faction::Nocturnal, Sign::Scorpio, House::House6),
        Body::Sun => (Fire, Choleric, Gender::Masculine, Faction::Diurnal, Sign::Leo, House::House9),
        Body::Venus => (Air, Sanguine, Gender::Feminine, Faction::Nocturnal, Sign::Taurus, House::House5),
        Body::Mercury => (Earth, Melancholic, Gender::Neutral, Faction::Neutral, Sign::Virgo, House::House1),
        Body::Moon => (Water, Phlegmatic, Gender::Feminine, Faction::Nocturnal, Sign::Cancer, House::House3),
        _ => return None,
    };
    Some(row)
}

fn classical(table: &'static str, body: Body) -> Result<ClassicalRow, PropsError> {
    classical_row(body).ok_or_else(|| PropsError::unknown(table, body.name()))
}

pub fn element(body: Body) -> Result<Element, PropsError> {
    classical("body.element", body).map(|r| r.0)
}

pub fn temperament(body: Body) -> Result<Temperament, PropsError> {
    classical("body.temperament", body).map(|r| r.1)
}

pub fn gender(body: Body) -> Result<Gender, PropsError> {
    classical("body.gender", body).map(|r| r.2)
}

pub fn faction(body: Body) -> Result<Faction, PropsError> {
    classical("body.faction", body).map(|r| r.3)
}

/// Sign in which the body rejoices.
pub fn sign_joy(body: Body) -> Result<Sign, PropsError> {
    classical("body.sign_joy", body).map(|r| r.4)
}

/// House in which the body rejoices.
pub fn house_joy(body: Body) -> Result<House, PropsError> {
    classical("body.house_joy", body).map(|r| r.5)
}

/// Domicile rulers keyed by sign display name.
pub const SIGN_RULERS: [(&str, Body); 12] = [
    ("Aries", Body::Mars),
    ("Taurus", Body::Venus),
    ("Gemini", Body::Mercury),
    ("Cancer", Body::Moon),
    ("Leo", Body::Sun),
    ("Virgo", Body::Mercury),
    ("Libra", Body::Venus),
    ("Scorpio", Body::Mars),
    ("Sagittarius", Body::Jupiter),
    ("Capricorn", Body::Saturn),
    ("Aquarius", Body::Saturn),
    ("Pisces", Body::Jupiter),
];

/// Domicile ruler of the sign with the given display name, e.g. "Leo".
pub fn sign_ruler(sign_name: &str) -> Result<Body, PropsError> {
    SIGN_RULERS
        .iter()
        .find(|(name, _)| *name == sign_name)
        .map(|&(_, ruler)| ruler)
        .ok_or_else(|| PropsError::unknown("body.sign_ruler", sign_name))
}

/// Properties shared by every body, plus the classical ones when present.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BodyProperties {
    pub body: Body,
    pub mean_motion: f64,
    pub orb: f64,
    pub classical: Option<ClassicalProperties>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassicalProperties {
    pub element: Element,
    pub temperament: Temperament,
    pub gender: Gender,
    pub faction: Faction,
    pub sign_joy: Sign,
    pub house_joy: House,
}

pub fn properties(body: Body) -> BodyProperties {
    BodyProperties {
        body,
        mean_motion: mean_motion(body),
        orb: orb(body),
        classical: classical_row(body).map(
            |(element, temperament, gender, faction, sign_joy, house_joy)| ClassicalProperties {
                element,
                temperament,
                gender,
                faction,
                sign_joy,
                house_joy,
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::element_temperament;
    use crate::sign::ALL_SIGNS;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BODIES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn classical_flag_matches_list() {
        for b in ALL_BODIES {
            assert_eq!(b.is_classical(), CLASSICAL_BODIES.contains(&b), "{}", b.name());
        }
    }

    #[test]
    fn known_orbs_and_motions() {
        assert_eq!(orb(Body::Sun), 15.0);
        assert_eq!(orb(Body::Pluto), 5.0);
        assert_eq!(mean_motion(Body::Moon), 13.1833);
        assert_eq!(mean_motion(Body::Mars), 0.5166);
    }

    #[test]
    fn calculated_points_do_not_move() {
        for b in [Body::Syzygy, Body::ParsFortuna] {
            assert_eq!(mean_motion(b), 0.0);
            assert_eq!(orb(b), 0.0);
        }
    }

    #[test]
    fn motions_and_orbs_non_negative() {
        for b in ALL_BODIES {
            assert!(mean_motion(b) >= 0.0);
            assert!(orb(b) >= 0.0);
        }
    }

    #[test]
    fn classical_element_temperament_agree() {
        for b in CLASSICAL_BODIES {
            let e = element(b).unwrap();
            assert_eq!(element_temperament(e), temperament(b).unwrap(), "{}", b.name());
        }
    }

    #[test]
    fn chiron_has_no_element() {
        assert!(matches!(
            element(Body::Chiron),
            Err(PropsError::UnknownIdentifier { table: "body.element", .. })
        ));
    }

    #[test]
    fn non_classical_tables_fail() {
        for b in ALL_BODIES.iter().filter(|b| !b.is_classical()) {
            assert!(element(*b).is_err());
            assert!(temperament(*b).is_err());
            assert!(gender(*b).is_err());
            assert!(faction(*b).is_err());
            assert!(sign_joy(*b).is_err());
            assert!(house_joy(*b).is_err());
        }
    }

    #[test]
    fn mercury_is_neutral() {
        assert_eq!(gender(Body::Mercury), Ok(Gender::Neutral));
        assert_eq!(faction(Body::Mercury), Ok(Faction::Neutral));
    }

    #[test]
    fn joys() {
        assert_eq!(sign_joy(Body::Saturn), Ok(Sign::Aquarius));
        assert_eq!(house_joy(Body::Saturn), Ok(House::House12));
        assert_eq!(house_joy(Body::Mercury), Ok(House::House1));
        assert_eq!(house_joy(Body::Moon), Ok(House::House3));
    }

    #[test]
    fn sign_ruler_covers_every_sign_name() {
        for s in ALL_SIGNS {
            assert!(sign_ruler(s.name()).is_ok(), "{}", s.name());
        }
        assert_eq!(sign_ruler("Leo"), Ok(Body::Sun));
        assert_eq!(sign_ruler("Aquarius"), Ok(Body::Saturn));
    }

    #[test]
    fn sign_ruler_rejects_identifiers_of_other_forms() {
        assert!(sign_ruler("leo").is_err());
        assert!(sign_ruler("Simha").is_err());
    }

    #[test]
    fn rulers_are_classical() {
        for (_, ruler) in SIGN_RULERS {
            assert!(ruler.is_classical());
        }
    }

    #[test]
    fn properties_record() {
        let p = properties(Body::Venus);
        assert_eq!(p.orb, 7.0);
        let c = p.classical.unwrap();
        assert_eq!(c.sign_joy, Sign::Taurus);
        assert_eq!(c.house_joy, House::House5);
        assert!(properties(Body::NorthNode).classical.is_none());
    }

    #[test]
    fn parse_body() {
        assert_eq!("North Node".parse::<Body>(), Ok(Body::NorthNode));
        assert_eq!("Pars Fortuna".parse::<Body>(), Ok(Body::ParsFortuna));
        assert!("Vulcan".parse::<Body>().is_err());
    }
}
