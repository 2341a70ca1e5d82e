//! String-keyed lookups over the property tables.
//!
//! Chart code usually holds identifiers as strings ("Aries", "North Node",
//! "House 7"). These functions resolve the identifier and consult the
//! relevant table in one step; any identifier outside a table's domain is
//! reported as [`PropsError::UnknownIdentifier`].

use std::str::FromStr;

use crate::aspect::Aspect;
use crate::base::{Element, Faction, Gender, SunSeason, Temperament};
use crate::body::{self, Body};
use crate::error::PropsError;
use crate::house::{self, Condition, House};
use crate::nakshatra;
use crate::sign::{self, Mode, Sign};

/// Either a sign or a body: the domain of the element, temperament, gender
/// and faction lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Sign(Sign),
    Body(Body),
}

impl From<Sign> for Subject {
    fn from(s: Sign) -> Self {
        Self::Sign(s)
    }
}

impl From<Body> for Subject {
    fn from(b: Body) -> Self {
        Self::Body(b)
    }
}

impl FromStr for Subject {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(sign) = s.parse::<Sign>() {
            return Ok(Self::Sign(sign));
        }
        s.parse::<Body>()
            .map(Self::Body)
            .map_err(|_| PropsError::unknown("sign or body", s))
    }
}

impl Subject {
    pub fn element(self) -> Result<Element, PropsError> {
        match self {
            Self::Sign(s) => Ok(sign::element(s)),
            Self::Body(b) => body::element(b),
        }
    }

    pub fn temperament(self) -> Result<Temperament, PropsError> {
        match self {
            Self::Sign(s) => Ok(sign::temperament(s)),
            Self::Body(b) => body::temperament(b),
        }
    }

    pub fn gender(self) -> Result<Gender, PropsError> {
        match self {
            Self::Sign(s) => Ok(sign::gender(s)),
            Self::Body(b) => body::gender(b),
        }
    }

    pub fn faction(self) -> Result<Faction, PropsError> {
        match self {
            Self::Sign(s) => Ok(sign::faction(s)),
            Self::Body(b) => body::faction(b),
        }
    }
}

/// Element of a sign or body.
pub fn element(id: &str) -> Result<Element, PropsError> {
    id.parse::<Subject>()?.element()
}

pub fn temperament(id: &str) -> Result<Temperament, PropsError> {
    id.parse::<Subject>()?.temperament()
}

pub fn gender(id: &str) -> Result<Gender, PropsError> {
    id.parse::<Subject>()?.gender()
}

pub fn faction(id: &str) -> Result<Faction, PropsError> {
    id.parse::<Subject>()?.faction()
}

pub fn mode(sign_id: &str) -> Result<Mode, PropsError> {
    Ok(sign::mode(sign_id.parse()?))
}

pub fn sun_season(sign_id: &str) -> Result<SunSeason, PropsError> {
    Ok(sign::sun_season(sign_id.parse()?))
}

/// Condition of a house given by display name, e.g. "House 4".
pub fn condition(house_id: &str) -> Result<Condition, PropsError> {
    Ok(house::condition(house_id.parse::<House>()?))
}

pub fn orb(body_id: &str) -> Result<f64, PropsError> {
    Ok(body::orb(body_id.parse()?))
}

pub fn mean_motion(body_id: &str) -> Result<f64, PropsError> {
    Ok(body::mean_motion(body_id.parse()?))
}

/// Domicile ruler by sign display name.
pub fn sign_ruler(sign_name: &str) -> Result<Body, PropsError> {
    body::sign_ruler(sign_name)
}

/// Ruling body by nakshatra display name.
pub fn nakshatra_ruler(nakshatra_name: &str) -> Result<Body, PropsError> {
    nakshatra::nakshatra_ruler(nakshatra_name)
}

/// Display name of an aspect given by its identifier angle ("90", "-1").
pub fn aspect_name(aspect_id: &str) -> Result<&'static str, PropsError> {
    let angle: i16 = aspect_id
        .parse()
        .map_err(|_| PropsError::unknown("aspect", aspect_id))?;
    Aspect::from_angle(angle).map(Aspect::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_resolves_signs_before_bodies() {
        assert_eq!("Leo".parse::<Subject>(), Ok(Subject::Sign(Sign::Leo)));
        assert_eq!("Sun".parse::<Subject>(), Ok(Subject::Body(Body::Sun)));
        assert!(matches!(
            "House 1".parse::<Subject>(),
            Err(PropsError::UnknownIdentifier { table: "sign or body", .. })
        ));
    }

    #[test]
    fn element_over_both_domains() {
        assert_eq!(element("Cancer"), Ok(Element::Water));
        assert_eq!(element("Saturn"), Ok(Element::Earth));
        assert!(element("Chiron").is_err());
    }

    #[test]
    fn typed_subject() {
        assert_eq!(Subject::from(Body::Moon).gender(), Ok(Gender::Feminine));
        assert_eq!(Subject::from(Sign::Libra).faction(), Ok(Faction::Diurnal));
    }

    #[test]
    fn aspect_ids() {
        assert_eq!(aspect_name("180"), Ok("Opposition"));
        assert_eq!(aspect_name("-1"), Ok("None"));
        assert!(aspect_name("Opposition").is_err());
        assert!(aspect_name("7").is_err());
    }

    #[test]
    fn aspect_ids_match_exactly() {
        assert!(aspect_name(" 90").is_err());
        assert!(aspect_name("90 ").is_err());
        assert!(aspect_name("").is_err());
    }

    #[test]
    fn house_condition_by_name() {
        assert_eq!(condition("House 10"), Ok(Condition::Angular));
        assert!(condition("House 0").is_err());
    }
}
