//! Firing-solution solvers: bearing, horizontal range, and per-charge elevation/time of flight.
//!
//! All functions are pure and hold no state, so they can be called from any number of threads
//! for independent launch/target pairs.

pub mod elevation;
pub mod geometry;

pub use elevation::{
    ArcBranch, ArcRoots, ArcSolution, ChargeSolution, MIN_HORIZONTAL_RANGE, arc_roots,
    elevations_and_time_of_flight, solve_charge, time_of_flight,
};
pub use geometry::{bearing_deg, horizontal_range};

use mortar_config::BallisticsConfig;
use mortar_core::Point3;

/// Everything a gun crew needs to lay the mortar on a target.
#[derive(Debug, Clone, PartialEq)]
pub struct FiringSolution {
    pub bearing_deg: f64,
    pub horizontal_range: f64,
    pub charges: Vec<ChargeSolution>,
}

impl FiringSolution {
    /// Charges that can reach the target inside the elevation band.
    pub fn feasible(&self) -> impl Iterator<Item = &ChargeSolution> {
        self.charges.iter().filter(|c| c.is_feasible())
    }
}

/// Bearing plus the full per-charge table for `launch` -> `target`.
pub fn firing_solution(
    launch: &Point3,
    target: &Point3,
    config: &BallisticsConfig,
) -> FiringSolution {
    FiringSolution {
        bearing_deg: bearing_deg(launch, target),
        horizontal_range: horizontal_range(launch, target),
        charges: elevations_and_time_of_flight(launch, target, config),
    }
}
