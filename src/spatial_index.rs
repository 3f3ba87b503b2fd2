//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for marker hit testing on the board.
//! Entries are microphone positions in world coordinates; a query asks for the
//! markers whose circle covers a pointer position.

use crate::types::{MicId, Point};
use rstar::{PointDistance, RTree, RTreeObject, AABB};
use std::collections::HashMap;

/// A spatial entry representing one microphone marker.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub id: MicId,
    pub x: f64,
    pub y: f64,
}

impl SpatialEntry {
    pub fn new(id: MicId, pos: Point) -> Self {
        Self { id, x: pos.x, y: pos.y }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.x, self.y])
    }
}

impl PointDistance for SpatialEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.x - point[0];
        let dy = self.y - point[1];
        dx * dx + dy * dy
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Spatial index for microphone markers using an R-tree.
#[derive(Debug)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<MicId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: MicId, pos: Point) {
        if let Some(old_entry) = self.entries.remove(&id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(id, pos);
        self.tree.insert(entry);
        self.entries.insert(id, entry);
    }

    pub fn remove(&mut self, id: MicId) -> bool {
        if let Some(entry) = self.entries.remove(&id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn update(&mut self, id: MicId, pos: Point) {
        self.insert(id, pos);
    }

    /// Topmost marker within `radius` of `pos` (all in world units).
    ///
    /// Markers are drawn in creation order, so the newest id is on top.
    pub fn query_point(&self, pos: Point, radius: f64) -> Option<MicId> {
        self.tree
            .locate_within_distance([pos.x, pos.y], radius * radius)
            .map(|entry| entry.id)
            .max()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
