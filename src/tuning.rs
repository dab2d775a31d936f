/// Gameplay constants gathered in one place so tuning never means editing
/// formula bodies.
#[derive(Debug, Copy, Clone)]
pub struct Tuning {
    /// Capture radius of every checkpoint, distance units.
    pub checkpoint_radius: i32,
    /// Fraction of velocity kept after each turn's drag.
    pub drag_decay: f32,
    /// Throttle lost per degree of facing error.
    pub rotation_slowdown: f32,
    /// Throttle gained per unit of distance to the target.
    pub proximity_slowdown: f32,
    /// Commanded speed before attenuation.
    pub base_speed: f32,
}

impl Tuning {
    pub const DEFAULT: Tuning = Tuning {
        checkpoint_radius: 600,
        drag_decay: 0.85,
        rotation_slowdown: 0.02,
        proximity_slowdown: 0.002,
        base_speed: 100.0,
    };

    /// Closed-form sum of the drag decay series, sum of decay^n for n >= 0.
    /// Scaling the current velocity by this gives the total displacement a
    /// coasting pod still accumulates, without stepping turn by turn.
    pub fn coast_factor(&self) -> f32 {
        1.0 / (1.0 - self.drag_decay)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coast_factor_matches_series_sum() {
        let t = Tuning::DEFAULT;
        // 1 / (1 - 0.85) = 20 / 3
        assert!((t.coast_factor() - 20.0 / 3.0).abs() < 1e-4);
    }
}
