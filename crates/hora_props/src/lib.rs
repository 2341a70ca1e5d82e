//! Static property registry for traditional astrology.
//!
//! This crate provides:
//! - Base vocabularies (elements, temperaments, qualities, genders, factions,
//!   seasons, moon quarters) and their cross-mappings
//! - Per-sign and per-house properties derived by cyclic tiling
//! - Orbs, mean motions, joys and rulerships of bodies
//! - Nakshatra rulership and aspect names
//!
//! All tables are immutable. Derived tables are built once on first use
//! and may be read from any thread.

pub mod aspect;
pub mod base;
pub mod body;
pub mod error;
pub mod house;
pub mod nakshatra;
pub mod registry;
pub mod sign;
pub mod tile;
mod util;

pub use aspect::{ALL_ASPECTS, Aspect, MAJOR_ASPECTS, MINOR_ASPECTS, aspect_name};
pub use base::{
    ELEMENTS, Element, FACTIONS, Faction, GENDERS, Gender, MOON_QUARTERS, MoonQuarter, Quality,
    SUN_SEASONS, SunSeason, TEMPERAMENTS, Temperament, element_qualities, element_temperament,
    moon_quarter_element, sun_season_element, temperament_element, temperament_qualities,
};
pub use body::{ALL_BODIES, Body, BodyProperties, CLASSICAL_BODIES, ClassicalProperties, sign_ruler};
pub use error::PropsError;
pub use house::{ABOVE_HORIZON, ALL_HOUSES, BELOW_HORIZON, Condition, House, HouseProperties};
pub use nakshatra::{ALL_NAKSHATRAS, Nakshatra, RULER_CYCLE, nakshatra_ruler};
pub use registry::Subject;
pub use sign::{
    ALL_SIGNS, FIGURE_BESTIAL, FIGURE_HUMAN, FIGURE_WILD, Fertility, Figure, MODES, Mode, Sign,
    SignProperties,
};
pub use tile::{Tiling, tile};
