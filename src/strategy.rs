use std::fmt;

use super::geometry::{Point, Vector};
use super::pod::{Pod, ANGLE_UNSET};
use super::race::{Checkpoint, Race};
use super::tuning::Tuning;
use super::world::World;

/// Per-pod command: target coordinates, throttle, optional boost.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Move {
    pub target: Point,
    pub boost: bool,
    speed: i32,
}

impl Move {
    pub fn new(target: Point, speed: i32) -> Self {
        let mut mv = Move {
            target,
            boost: false,
            speed: 0,
        };
        mv.set_speed(speed);
        mv
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn set_speed(&mut self, desired_speed: i32) -> i32 {
        self.speed = desired_speed.clamp(0, 100);
        self.speed
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.boost {
            write!(f, "{} {} BOOST", self.target.x, self.target.y)
        } else {
            write!(f, "{} {} {}", self.target.x, self.target.y, self.speed)
        }
    }
}

/// Smaller of the two angular differences between a1 and a2, in [0, 180].
/// Defined as 0 when either side is still ANGLE_UNSET.
pub fn angle_diff(a1: i32, a2: i32) -> i32 {
    if a1 == ANGLE_UNSET || a2 == ANGLE_UNSET {
        return 0;
    }
    assert!((0..=360).contains(&a1));
    assert!((0..=360).contains(&a2));
    180 - ((a1 - a2).abs() - 180).abs()
}

pub struct Strategy {
    tuning: Tuning,
}

impl Strategy {
    pub fn new() -> Self {
        Strategy {
            tuning: Tuning::DEFAULT,
        }
    }

    pub fn with_tuning(tuning: Tuning) -> Self {
        Strategy { tuning }
    }

    /// Guess whether the pod will cross its current checkpoint with no
    /// further thrust. Projects the velocity heading out by the current
    /// checkpoint distance instead of solving the true line/circle
    /// intersection, so it can misjudge trajectories that clip the radius
    /// at a different range. Known accuracy limitation, kept deliberately.
    pub fn expect_to_hit_cp(&self, race: &Race, pod: &Pod) -> bool {
        let cp = race.checkpoint_for(pod);
        let cp_distance = pod.distance(cp);

        // Does our speed allow us to coast all the way there?
        let enough_speed = pod.coast_dist(&self.tuning) >= cp_distance;

        // Does our line of travel pass through the capture radius?
        let travel = Vector::new(cp_distance, pod.heading());
        let closest_to_cp = pod.position + travel.to_point();
        let enough_accuracy = cp.distance(closest_to_cp) <= self.tuning.checkpoint_radius;

        enough_speed && enough_accuracy
    }

    /// Slowdown factor when not facing the target.
    pub fn speed_factor_angle(&self, pod: &Pod, target: Point) -> f32 {
        let bearing = (target - pod.position).angle();
        let rotational_error = angle_diff(pod.angle, bearing);
        (1.0 - rotational_error as f32 * self.tuning.rotation_slowdown).clamp(0.0, 1.0)
    }

    /// Slowdown factor when close to the target.
    pub fn speed_factor_distance(&self, pod: &Pod, target: Point) -> f32 {
        (pod.distance(target) as f32 * self.tuning.proximity_slowdown).clamp(0.0, 1.0)
    }

    /// One pod, one turn, one command. Pure: reads the snapshot, never
    /// mutates it. The aim advance below lasts for this command only, the
    /// feed reports the authoritative checkpoint index again next turn.
    pub fn decide(&self, race: &Race, pod: &Pod) -> Move {
        let mut target_cp = Checkpoint::new(race, pod.next_cp_id);
        let mut desired_speed = self.tuning.base_speed;

        if self.expect_to_hit_cp(race, pod) {
            // Already coasting in, stop accelerating and aim one ahead.
            target_cp.advance();
            desired_speed = 0.0;
        }

        let target = target_cp.point();
        desired_speed *= self.speed_factor_angle(pod, target);
        desired_speed *= self.speed_factor_distance(pod, target);

        let mut mv = Move::new(target, desired_speed as i32);

        // Start the match with the one-time boost.
        if pod.angle == ANGLE_UNSET {
            mv.boost = true;
        }
        mv
    }

    pub fn play(&self, world: &World) {
        for pod in &world.me {
            let mv = self.decide(&world.race, pod);

            eprintln!(
                "turn {}: pod at {} {} -> cp {} at {} {}, dist {} bearing {}, facing {} velocity heading {}",
                world.turn,
                pod.position.x,
                pod.position.y,
                pod.next_cp_id,
                mv.target.x,
                mv.target.y,
                pod.distance(mv.target),
                (mv.target - pod.position).angle(),
                pod.angle,
                pod.heading(),
            );

            println!("{}", mv);
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pod(x: i32, y: i32, vx: i32, vy: i32, angle: i32, next_cp_id: usize) -> Pod {
        Pod {
            position: Point::new(x, y),
            velocity: Point::new(vx, vy),
            angle,
            next_cp_id,
        }
    }

    #[test]
    fn throttle_is_always_clamped() {
        assert_eq!(Move::new(Point::default(), -50).speed(), 0);
        assert_eq!(Move::new(Point::default(), 0).speed(), 0);
        assert_eq!(Move::new(Point::default(), 73).speed(), 73);
        assert_eq!(Move::new(Point::default(), 100).speed(), 100);
        assert_eq!(Move::new(Point::default(), 10_000).speed(), 100);
    }

    #[test]
    fn move_renders_protocol_line() {
        let mut mv = Move::new(Point::new(800, 600), 42);
        assert_eq!(mv.to_string(), "800 600 42");
        mv.boost = true;
        assert_eq!(mv.to_string(), "800 600 BOOST");
    }

    #[test]
    fn angle_diff_takes_shorter_arc() {
        assert_eq!(angle_diff(0, 350), 10);
        assert_eq!(angle_diff(350, 0), 10);
        assert_eq!(angle_diff(90, 90), 0);
        assert_eq!(angle_diff(0, 180), 180);
        assert_eq!(angle_diff(10, 200), 170);
    }

    #[test]
    fn angle_diff_treats_unset_as_zero() {
        assert_eq!(angle_diff(ANGLE_UNSET, 90), 0);
        assert_eq!(angle_diff(270, ANGLE_UNSET), 0);
        assert_eq!(angle_diff(ANGLE_UNSET, ANGLE_UNSET), 0);
    }

    #[test]
    fn heading_factor_is_monotone_in_error() {
        let strategy = Strategy::new();
        // Target due east of the pod, so facing == rotational error.
        let target = Point::new(1000, 0);

        let mut previous = f32::INFINITY;
        for error in 0..=180 {
            let p = pod(0, 0, 0, 0, error, 0);
            let factor = strategy.speed_factor_angle(&p, target);
            assert!(factor <= previous, "factor rose at error {}", error);
            assert!((0.0..=1.0).contains(&factor));
            previous = factor;
        }

        let aligned = pod(0, 0, 0, 0, 0, 0);
        assert_eq!(strategy.speed_factor_angle(&aligned, target), 1.0);
        let reversed = pod(0, 0, 0, 0, 180, 0);
        assert_eq!(strategy.speed_factor_angle(&reversed, target), 0.0);
    }

    #[test]
    fn proximity_factor_saturates_at_range() {
        let strategy = Strategy::new();
        let p = pod(0, 0, 0, 0, 0, 0);
        assert_eq!(strategy.speed_factor_distance(&p, Point::new(0, 0)), 0.0);
        let halfway = strategy.speed_factor_distance(&p, Point::new(250, 0));
        assert!((halfway - 0.5).abs() < 1e-4);
        assert_eq!(strategy.speed_factor_distance(&p, Point::new(500, 0)), 1.0);
        assert_eq!(strategy.speed_factor_distance(&p, Point::new(20_000, 0)), 1.0);
    }

    // Stationary pod far from its checkpoint: no capture expected, full
    // throttle toward it.
    #[test]
    fn slow_pod_keeps_accelerating() {
        let race = Race::new(3, vec![Point::new(0, 0)]);
        let strategy = Strategy::new();
        let p = pod(1000, 0, 0, 0, 180, 0);

        assert!(!strategy.expect_to_hit_cp(&race, &p));

        let mv = strategy.decide(&race, &p);
        assert_eq!(mv.target, Point::new(0, 0));
        assert!(mv.speed() > 0);
        assert!(!mv.boost);
    }

    // Pod coasting straight into its only checkpoint: aim wraps back to the
    // same ring slot and throttle is held at zero.
    #[test]
    fn coasting_capture_cuts_throttle() {
        let race = Race::new(3, vec![Point::new(0, 0)]);
        let strategy = Strategy::new();
        // coast distance 200 * 20/3 = 1333 >= 1000, heading dead on
        let p = pod(1000, 0, -200, 0, 180, 0);

        assert!(strategy.expect_to_hit_cp(&race, &p));

        let mv = strategy.decide(&race, &p);
        assert_eq!(mv.target, Point::new(0, 0));
        assert_eq!(mv.speed(), 0);
    }

    #[test]
    fn capture_on_last_checkpoint_targets_first() {
        let race = Race::new(
            3,
            vec![
                Point::new(0, 0),
                Point::new(5000, 0),
                Point::new(10000, 0),
            ],
        );
        let strategy = Strategy::new();
        // Lined up on checkpoint 2 with enough coast to reach it.
        let p = pod(11_000, 0, -160, 0, 180, 2);

        assert!(strategy.expect_to_hit_cp(&race, &p));

        let mv = strategy.decide(&race, &p);
        assert_eq!(mv.target, race.checkpoint(0));
        assert_eq!(mv.speed(), 0);
    }

    // Fast enough but pointed wide: the accuracy leg of the predicate fails.
    #[test]
    fn off_line_pod_is_not_a_capture() {
        let race = Race::new(3, vec![Point::new(0, 0)]);
        let strategy = Strategy::new();
        // Heading 90 while the checkpoint is at bearing 180.
        let p = pod(1000, 0, 0, 200, 90, 0);

        assert!(!strategy.expect_to_hit_cp(&race, &p));
    }

    #[test]
    fn boost_exactly_on_facing_sentinel() {
        let race = Race::new(3, vec![Point::new(4000, 4000)]);
        let strategy = Strategy::new();

        let first_turn = pod(0, 0, 0, 0, ANGLE_UNSET, 0);
        let mv = strategy.decide(&race, &first_turn);
        assert!(mv.boost);
        // Sentinel also nulls the heading attenuation.
        assert_eq!(
            strategy.speed_factor_angle(&first_turn, Point::new(4000, 4000)),
            1.0
        );

        for angle in [0, 45, 180, 359] {
            let later = pod(0, 0, 0, 0, angle, 0);
            assert!(!strategy.decide(&race, &later).boost);
        }
    }
}
