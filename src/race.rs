use super::geometry::Point;
use super::pod::Pod;

/// Fixed race configuration: lap count and the checkpoint ring, immutable
/// once read at match start.
#[derive(Debug)]
pub struct Race {
    pub laps: u32,
    checkpoints: Vec<Point>,
}

impl Race {
    pub fn new(laps: u32, checkpoints: Vec<Point>) -> Self {
        assert!(!checkpoints.is_empty(), "checkpoint ring is empty");
        Race { laps, checkpoints }
    }

    pub fn checkpoint_count(&self) -> usize {
        self.checkpoints.len()
    }

    /// Ring lookup with wraparound, so checkpoint(pod.next_cp_id + 1) is
    /// always safe.
    pub fn checkpoint(&self, id: usize) -> Point {
        self.checkpoints[id % self.checkpoints.len()]
    }

    pub fn checkpoint_for(&self, pod: &Pod) -> Point {
        self.checkpoint(pod.next_cp_id)
    }
}

/// Lightweight view of one ring slot. Borrows the race, owns nothing.
pub struct Checkpoint<'a> {
    race: &'a Race,
    id: usize,
}

impl<'a> Checkpoint<'a> {
    pub fn new(race: &'a Race, id: usize) -> Self {
        Checkpoint {
            race,
            id: id % race.checkpoint_count(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn set_id(&mut self, new_id: usize) -> usize {
        self.id = new_id % self.race.checkpoint_count();
        self.id
    }

    pub fn next_id(&self) -> usize {
        (self.id + 1) % self.race.checkpoint_count()
    }

    pub fn point(&self) -> Point {
        self.race.checkpoint(self.id)
    }

    pub fn next(&self) -> Point {
        self.race.checkpoint(self.next_id())
    }

    pub fn advance(&mut self) -> Point {
        self.id = self.next_id();
        self.point()
    }
}
