//! Core primitives, constants, and shared value types for the Mortar Calculator workspace.

/// Game-world constants. Distances are in studs, times in seconds, angles in degrees.
pub mod constants {
    /// Gravitational acceleration (studs/s²).
    pub const GRAVITY: f64 = 196.2;
    /// Lowest elevation the mortar tube can be laid at (degrees).
    pub const MIN_ELEVATION_DEG: f64 = 44.25;
    /// Highest elevation the mortar tube can be laid at (degrees).
    pub const MAX_ELEVATION_DEG: f64 = 85.25;
    /// Muzzle velocities for charges C0 through C4 (studs/s).
    pub const CHARGE_VELOCITIES: [f64; 5] = [720.0, 780.0, 840.0, 900.0, 960.0];
}

/// Positions in world space.
pub mod point {
    /// A point in world space. `y` is height; `x` and `z` span the ground plane.
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Point3 {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    impl Point3 {
        #[inline]
        pub const fn new(x: f64, y: f64, z: f64) -> Self {
            Self { x, y, z }
        }

        /// Ground-plane offset `(dx, dz)` from `self` to `to`.
        #[inline]
        pub fn horizontal_delta(&self, to: &Point3) -> (f64, f64) {
            (to.x - self.x, to.z - self.z)
        }

        /// Height of `to` relative to `self`.
        #[inline]
        pub fn vertical_delta(&self, to: &Point3) -> f64 {
            to.y - self.y
        }

        #[inline]
        pub fn to_array(self) -> [f64; 3] {
            [self.x, self.y, self.z]
        }
    }
}

/// Propellant charge selection.
pub mod charge {
    use std::fmt;

    /// One entry of the charge table: its position and the muzzle velocity it produces.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Charge {
        pub index: usize,
        pub velocity: f64,
    }

    impl Charge {
        pub const fn new(index: usize, velocity: f64) -> Self {
            Self { index, velocity }
        }
    }

    impl fmt::Display for Charge {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "C{}", self.index)
        }
    }
}

pub use charge::Charge;
pub use point::Point3;
