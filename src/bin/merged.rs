pub mod geometry {
use std::ops::{Add, Mul, Sub};

/// Maps any angle in degrees into [0, 360). Uses a euclidean remainder so
/// negative inputs wrap instead of staying negative.
pub fn normalize(direction: i32) -> i32 {
    direction.rem_euclid(360)
}

/// Polar quantity: non-negative magnitude in game distance units, direction
/// in degrees, always stored normalized.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Vector {
    pub magnitude: i32,
    direction: i32,
}

impl Vector {
    pub fn new(magnitude: i32, direction: i32) -> Self {
        Vector {
            magnitude,
            direction: normalize(direction),
        }
    }

    pub fn direction(self) -> i32 {
        self.direction
    }

    pub fn set_direction(&mut self, new_direction: i32) -> i32 {
        self.direction = normalize(new_direction);
        self.direction
    }

    pub fn x(self) -> i32 {
        ((self.direction as f64).to_radians().cos() * self.magnitude as f64).round() as i32
    }

    pub fn y(self) -> i32 {
        ((self.direction as f64).to_radians().sin() * self.magnitude as f64).round() as i32
    }

    pub fn to_point(self) -> Point {
        Point {
            x: self.x(),
            y: self.y(),
        }
    }
}

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    // Rounds half away from zero, so scaling is symmetric around the origin.
    fn mul(self, other: f32) -> Point {
        Point {
            x: (self.x as f32 * other).round() as i32,
            y: (self.y as f32 * other).round() as i32,
        }
    }
}

impl From<Vector> for Point {
    fn from(v: Vector) -> Point {
        v.to_point()
    }
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Bearing from the origin to this point, degrees in [0, 360).
    /// The zero point yields 0 (atan2(0, 0) is 0).
    pub fn angle(self) -> i32 {
        let degrees = (self.y as f64).atan2(self.x as f64).to_degrees();
        normalize(degrees.round() as i32)
    }

    pub fn distance(self, other: Point) -> i32 {
        let d = other - self;
        (d.x as f64).hypot(d.y as f64).round() as i32
    }

    pub fn magnitude(self) -> i32 {
        self.distance(Point::default())
    }

    pub fn to_vector(self) -> Vector {
        Vector::new(self.magnitude(), self.angle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_into_range() {
        for d in [-720, -361, -360, -359, -1, 0, 1, 359, 360, 361, 720, 1000] {
            let n = normalize(d);
            assert!((0..360).contains(&n), "normalize({}) = {}", d, n);
            assert_eq!(n, normalize(d + 360 * 3));
            assert_eq!(n, normalize(d - 360 * 5));
        }
        assert_eq!(normalize(-90), 270);
        assert_eq!(normalize(-1), 359);
    }

    #[test]
    fn vector_direction_is_normalized() {
        assert_eq!(Vector::new(1, -90).direction(), 270);
        assert_eq!(Vector::new(1, 720).direction(), 0);

        let mut v = Vector::new(5, 0);
        assert_eq!(v.set_direction(-45), 315);
        assert_eq!(v.direction(), 315);
    }

    #[test]
    fn vector_components() {
        assert_eq!(Vector::new(100, 0).to_point(), Point::new(100, 0));
        assert_eq!(Vector::new(100, 90).to_point(), Point::new(0, 100));
        assert_eq!(Vector::new(100, 180).to_point(), Point::new(-100, 0));
        assert_eq!(Vector::new(100, 270).to_point(), Point::new(0, -100));
    }

    #[test]
    fn angle_by_quadrant() {
        assert_eq!(Point::new(10, 0).angle(), 0);
        assert_eq!(Point::new(0, 10).angle(), 90);
        assert_eq!(Point::new(-10, 0).angle(), 180);
        assert_eq!(Point::new(0, -10).angle(), 270);
        assert_eq!(Point::new(10, 10).angle(), 45);
    }

    #[test]
    fn angle_of_zero_point_is_zero() {
        assert_eq!(Point::default().angle(), 0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(120, -45);
        let b = Point::new(-3000, 999);
        assert_eq!(a.distance(b), b.distance(a));
        assert_eq!(a.distance(a), 0);
        assert_eq!(Point::new(0, 0).distance(Point::new(3, 4)), 5);
    }

    #[test]
    fn scaling_rounds_half_away_from_zero() {
        assert_eq!(Point::new(3, -3) * 0.5, Point::new(2, -2));
        assert_eq!(Point::new(10, -10) * 0.25, Point::new(3, -3));
    }

    #[test]
    fn point_vector_round_trip() {
        let p = Point::new(300, 400);
        let v = p.to_vector();
        assert_eq!(v.magnitude, 500);
        // angle is rounded to whole degrees, so allow a small error
        assert!(Point::from(v).distance(p) <= 9);

        let axis = Point::new(-250, 0);
        assert_eq!(Point::from(axis.to_vector()), axis);
    }
}
}
pub mod pod {
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

}
pub mod race {
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

}
pub mod strategy {
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

}
pub mod tuning {
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
}
pub mod world {
use super::pod::Pod;
use super::race::Race;

/// Everything known this turn: the fixed race plus the latest telemetry for
/// both sides. Opposing pods are part of the feed contract and carried here,
/// but the heuristics never read them.
#[derive(Debug)]
pub struct World {
    pub race: Race,
    pub me: Vec<Pod>,
    pub opponent: Vec<Pod>,
    pub turn: u32,
}

impl World {
    pub fn new(race: Race) -> Self {
        World {
            race,
            me: Vec::new(),
            opponent: Vec::new(),
            turn: 0,
        }
    }

    pub fn update(&mut self, me: Vec<Pod>, opponent: Vec<Pod>) {
        self.me = me;
        self.opponent = opponent;
        self.turn += 1;
    }

    pub fn first_turn(&self) -> bool {
        self.turn == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn turn_counter_advances_per_update() {
        let mut world = World::new(Race::new(3, vec![Point::new(0, 0)]));
        assert_eq!(world.turn, 0);
        assert!(!world.first_turn());

        world.update(vec![Pod::default()], vec![Pod::default()]);
        assert_eq!(world.turn, 1);
        assert!(world.first_turn());

        world.update(vec![Pod::default()], vec![Pod::default()]);
        assert!(!world.first_turn());
    }
}
}

pub use geometry::*;
pub use pod::*;
pub use race::*;
pub use strategy::*;
pub use tuning::*;
pub use world::*;

use std::io;

use {geometry::Point, pod::Pod, race::Race, strategy::Strategy, world::World};

macro_rules! parse_input {
    ($x:expr, $t:ident) => {
        $x.trim().parse::<$t>().unwrap()
    };
}

const PODS_PER_SIDE: usize = 2;

fn read_pods(count: usize) -> Vec<Pod> {
    let mut pods = Vec::with_capacity(count);

    for _ in 0..count {
        let mut input_line = String::new();
        io::stdin().read_line(&mut input_line).unwrap();

        let inputs = input_line.split(" ").collect::<Vec<_>>();
        let x = parse_input!(inputs[0], i32);
        let y = parse_input!(inputs[1], i32);
        let vx = parse_input!(inputs[2], i32);
        let vy = parse_input!(inputs[3], i32);
        let angle = parse_input!(inputs[4], i32);
        let next_cp_id = parse_input!(inputs[5], usize);

        pods.push(Pod {
            position: Point::new(x, y),
            velocity: Point::new(vx, vy),
            angle,
            next_cp_id,
        });
    }

    pods
}

fn main() {
    let mut input_line = String::new();
    io::stdin().read_line(&mut input_line).unwrap();
    let laps = parse_input!(input_line, u32);

    input_line.clear();
    io::stdin().read_line(&mut input_line).unwrap();
    let checkpoint_count = parse_input!(input_line, usize);

    let mut checkpoints = Vec::with_capacity(checkpoint_count);
    for _ in 0..checkpoint_count {
        let mut input_line = String::new();
        io::stdin().read_line(&mut input_line).unwrap();

        let inputs = input_line.split(" ").collect::<Vec<_>>();
        checkpoints.push(Point::new(
            parse_input!(inputs[0], i32),
            parse_input!(inputs[1], i32),
        ));
    }

    let mut world = World::new(Race::new(laps, checkpoints));
    let strategy = Strategy::new();

    // game loop
    loop {
        let me = read_pods(PODS_PER_SIDE);
        let opponent = read_pods(PODS_PER_SIDE);
        world.update(me, opponent);

        strategy.play(&world);
    }
}
