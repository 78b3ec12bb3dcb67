//! A single circular jamming zone.

use jamnav_core::Position;

use crate::{ZoneError, ZoneResult};

/// A disk in which communication is considered lost.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JammingZone {
    pub center: Position,
    pub radius: f64,
}

impl JammingZone {
    /// Validated constructor: `radius > 0` and a finite centre.
    pub fn new(center: Position, radius: f64) -> ZoneResult<Self> {
        let zone = Self { center, radius };
        zone.validate()?;
        Ok(zone)
    }

    /// Re-check the invariants of a zone built by struct literal or serde.
    pub fn validate(&self) -> ZoneResult<()> {
        if !self.center.is_finite() {
            return Err(ZoneError::InvalidCenter(self.center));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ZoneError::InvalidRadius(self.radius));
        }
        Ok(())
    }

    /// Boundary-inclusive containment.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.distance(self.center) <= self.radius
    }
}

/// `true` iff `position` lies within the radius of any zone.
///
/// Linear scan; [`ZoneSet`](crate::ZoneSet) answers the same question
/// through its R-tree.
pub fn is_jammed(position: Position, zones: &[JammingZone]) -> bool {
    zones.iter().any(|z| z.contains(position))
}
