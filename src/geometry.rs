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
