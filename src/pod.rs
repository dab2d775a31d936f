use super::geometry::Point;
use super::tuning::Tuning;

/// Facing angle reported by the feed before the first command is issued.
pub const ANGLE_UNSET: i32 = -1;

/// One craft's telemetry snapshot for the current turn. Fresh every turn,
/// never mutated by the decision core.
#[derive(Default, Debug, Copy, Clone)]
pub struct Pod {
    pub position: Point,
    /// Displacement per turn.
    pub velocity: Point,
    /// Facing in degrees [0, 360], or ANGLE_UNSET on the very first turn.
    pub angle: i32,
    /// Index of the checkpoint this pod must reach next, as reported by the
    /// feed.
    pub next_cp_id: usize,
}

impl Pod {
    pub fn distance(&self, p: Point) -> i32 {
        self.position.distance(p)
    }

    pub fn speed(&self) -> i32 {
        self.velocity.magnitude()
    }

    pub fn heading(&self) -> i32 {
        self.velocity.angle()
    }

    /// Remaining displacement if the pod stops thrusting, from the closed
    /// drag series rather than a per-turn simulation.
    pub fn coast_offset(&self, tuning: &Tuning) -> Point {
        self.velocity * tuning.coast_factor()
    }

    /// Final resting point if the pod stops thrusting.
    pub fn coast_dest(&self, tuning: &Tuning) -> Point {
        self.position + self.coast_offset(tuning)
    }

    pub fn coast_dist(&self, tuning: &Tuning) -> i32 {
        self.coast_offset(tuning).magnitude()
    }
}
