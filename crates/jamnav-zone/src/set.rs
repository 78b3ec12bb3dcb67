//! The active zone set.
//!
//! # Spatial index
//!
//! Each zone is stored in an R-tree (via `rstar`) under the bounding box of
//! its disk.  Membership queries descend only into boxes that contain the
//! point and then run the exact circle test; nearest-zone queries rank by
//! distance to the zone centre.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use jamnav_core::{Position, ZoneId};

use crate::{JammingZone, ZoneResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct ZoneEntry {
    center: [f64; 2],
    radius: f64,
    id:     ZoneId,
}

impl RTreeObject for ZoneEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let [cx, cy] = self.center;
        AABB::from_corners(
            [cx - self.radius, cy - self.radius],
            [cx + self.radius, cy + self.radius],
        )
    }
}

impl PointDistance for ZoneEntry {
    /// Squared distance to the zone centre.  Never smaller than the squared
    /// distance to the envelope, so nearest-neighbour pruning stays exact.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.center[0] - point[0];
        let dy = self.center[1] - point[1];
        dx * dx + dy * dy
    }

    /// Same boundary-inclusive test as [`JammingZone::contains`].
    fn contains_point(&self, point: &[f64; 2]) -> bool {
        (self.center[0] - point[0]).hypot(self.center[1] - point[1]) <= self.radius
    }
}

// ── ZoneSet ───────────────────────────────────────────────────────────────────

/// Immutable union of jamming disks.
pub struct ZoneSet {
    zones: Vec<JammingZone>,
    index: RTree<ZoneEntry>,
}

impl ZoneSet {
    /// Validate every zone and bulk-load the index.
    pub fn new(zones: Vec<JammingZone>) -> ZoneResult<Self> {
        for zone in &zones {
            zone.validate()?;
        }
        let entries = zones
            .iter()
            .enumerate()
            .map(|(i, z)| ZoneEntry {
                center: [z.center.x, z.center.y],
                radius: z.radius,
                id:     ZoneId(i as u32),
            })
            .collect();

        Ok(Self {
            zones,
            index: RTree::bulk_load(entries),
        })
    }

    /// A set with no zones; nothing is ever jammed.
    pub fn empty() -> Self {
        Self {
            zones: Vec::new(),
            index: RTree::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn zones(&self) -> &[JammingZone] {
        &self.zones
    }

    pub fn get(&self, id: ZoneId) -> Option<&JammingZone> {
        self.zones.get(id.index())
    }

    /// `true` iff `p` is within the radius of any zone.
    pub fn is_jammed(&self, p: Position) -> bool {
        self.index.locate_all_at_point(&[p.x, p.y]).next().is_some()
    }

    /// Ids of every zone covering `p`, in ascending order.
    pub fn covering(&self, p: Position) -> Vec<ZoneId> {
        let mut ids: Vec<ZoneId> = self
            .index
            .locate_all_at_point(&[p.x, p.y])
            .map(|e| e.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// The zone whose centre is closest to `p`.
    ///
    /// Returns `None` only if the set is empty.
    pub fn nearest(&self, p: Position) -> Option<&JammingZone> {
        self.index
            .nearest_neighbor(&[p.x, p.y])
            .map(|e| &self.zones[e.id.index()])
    }
}
