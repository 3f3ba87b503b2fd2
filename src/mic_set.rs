//! The in-memory microphone collection.
//!
//! Insertion order is kept for display and export. Ids come from a monotonic
//! counter owned by the set, so they never collide and are never reused, even
//! after the microphone that held one is removed.

use crate::spatial_index::SpatialIndex;
use crate::types::{MicId, Microphone, Point};
use tracing::debug;

#[derive(Debug, Default)]
pub struct MicrophoneSet {
    mics: Vec<Microphone>,
    /// Raw value of the last id handed out
    last_id: u64,
    index: SpatialIndex,
}

impl MicrophoneSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a microphone at `pos` with a fresh id.
    ///
    /// Non-finite positions are rejected and consume no id.
    pub fn add(&mut self, pos: Point) -> Option<Microphone> {
        if !pos.is_finite() {
            debug!(x = pos.x, y = pos.y, "Rejected non-finite position");
            return None;
        }

        self.last_id += 1;
        let mic = Microphone {
            id: MicId::new(self.last_id),
            x: pos.x,
            y: pos.y,
        };
        debug_assert!(self.get(mic.id).is_none(), "id {} reused", mic.id);

        self.index.insert(mic.id, mic.position());
        self.mics.push(mic.clone());
        debug!(id = %mic.id, x = mic.x, y = mic.y, "Microphone added");
        Some(mic)
    }

    /// Remove the microphone with `id`. Missing ids are a no-op.
    pub fn remove(&mut self, id: MicId) -> Option<Microphone> {
        let pos = self.mics.iter().position(|m| m.id == id)?;
        let mic = self.mics.remove(pos);
        self.index.remove(id);
        debug!(id = %id, "Microphone removed");
        Some(mic)
    }

    /// Move the microphone with `id` to (`x`, `y`).
    ///
    /// Returns the updated microphone, or `None` when the id is unknown or a
    /// coordinate is not finite (nothing is changed in either case).
    pub fn update(&mut self, id: MicId, x: f64, y: f64) -> Option<Microphone> {
        if !x.is_finite() || !y.is_finite() {
            debug!(id = %id, x, y, "Rejected non-finite coordinates");
            return None;
        }

        let mic = self.mics.iter_mut().find(|m| m.id == id)?;
        mic.x = x;
        mic.y = y;
        let updated = mic.clone();
        self.index.update(id, updated.position());
        debug!(id = %id, x, y, "Microphone updated");
        Some(updated)
    }

    pub fn get(&self, id: MicId) -> Option<&Microphone> {
        self.mics.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: MicId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Microphone> {
        self.mics.iter()
    }

    pub fn as_slice(&self) -> &[Microphone] {
        &self.mics
    }

    pub fn len(&self) -> usize {
        self.mics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mics.is_empty()
    }

    /// Topmost microphone within `radius` meters of `world`.
    pub fn hit_test(&self, world: Point, radius: f64) -> Option<MicId> {
        self.index.query_point(world, radius)
    }
}
