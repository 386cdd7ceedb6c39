//! Closed-form elevation and time-of-flight solutions of the vacuum range equation.
//!
//! For a fixed muzzle velocity `v`, gravity `g`, ground range `R`, and height difference `dy`,
//! the launch angle satisfies
//!
//! ```text
//! tan θ = (v² ± sqrt(v⁴ − g(gR² + 2·dy·v²))) / (gR)
//! ```
//!
//! The `+` root is the high (plunging) arc and the `−` root the low (direct) arc. Mortars fire
//! indirect, so the high arc wins whenever it fits inside the elevation band.

use log::{debug, trace};
use mortar_config::BallisticsConfig;
use mortar_core::{Charge, Point3};

use crate::geometry::horizontal_range;

/// Ground ranges below this (studs) are treated as "target directly overhead/underfoot",
/// where the range equation divides by zero and no elevation in the band applies.
pub const MIN_HORIZONTAL_RANGE: f64 = 1e-9;

/// Which root of the range equation a solution was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcBranch {
    High,
    Low,
}

impl ArcBranch {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArcBranch::High => "high",
            ArcBranch::Low => "low",
        }
    }
}

/// Both elevation roots for one velocity, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcRoots {
    pub high_deg: f64,
    pub low_deg: f64,
}

/// A feasible arc for one charge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSolution {
    pub elevation_deg: f64,
    pub time_of_flight_s: f64,
    pub branch: ArcBranch,
}

/// Outcome for one charge; `arc` is `None` when no elevation in the band reaches the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeSolution {
    pub charge: Charge,
    pub arc: Option<ArcSolution>,
}

impl ChargeSolution {
    pub fn infeasible(charge: Charge) -> Self {
        Self { charge, arc: None }
    }

    pub fn is_feasible(&self) -> bool {
        self.arc.is_some()
    }

    pub fn elevation_deg(&self) -> Option<f64> {
        self.arc.map(|a| a.elevation_deg)
    }

    pub fn time_of_flight_s(&self) -> Option<f64> {
        self.arc.map(|a| a.time_of_flight_s)
    }
}

/// Solve the range equation for both elevation roots.
///
/// Returns `None` when the discriminant is negative, i.e. `velocity` cannot reach the point at
/// any angle. `range` must be non-zero; callers screen out degenerate geometry first.
pub fn arc_roots(velocity: f64, range: f64, dy: f64, gravity: f64) -> Option<ArcRoots> {
    let v2 = velocity * velocity;
    let discriminant = v2 * v2 - gravity * (gravity * range * range + 2.0 * dy * v2);
    trace!("v={velocity} R={range} dy={dy} discriminant={discriminant}");
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let denom = gravity * range;
    Some(ArcRoots {
        high_deg: ((v2 + sqrt_disc) / denom).atan().to_degrees(),
        low_deg: ((v2 - sqrt_disc) / denom).atan().to_degrees(),
    })
}

/// Time for a shell fired at `elevation_deg` to come down at height `dy` relative to the tube.
///
/// Takes the later (descending) root of `dy = v·sinθ·t − ½gt²`. Returns `None` when the apex
/// of the arc lies below `dy`, so the shell never gets there.
pub fn time_of_flight(velocity: f64, elevation_deg: f64, dy: f64, gravity: f64) -> Option<f64> {
    let vy = velocity * elevation_deg.to_radians().sin();
    let vy2 = vy * vy;
    let radicand = vy2 - 2.0 * gravity * dy;
    // a target exactly at the apex can round to a few ulps below zero
    let tolerance = 4.0 * f64::EPSILON * vy2.max(f64::MIN_POSITIVE);
    if radicand.is_nan() || radicand < -tolerance {
        return None;
    }
    Some((vy + radicand.max(0.0).sqrt()) / gravity)
}

/// Pick the arc for a single charge, preferring the high root over the low one.
pub fn solve_charge(
    charge: Charge,
    range: f64,
    dy: f64,
    config: &BallisticsConfig,
) -> ChargeSolution {
    let Some(roots) = arc_roots(charge.velocity, range, dy, config.gravity) else {
        debug!("{charge}: out of reach at {range:.2} studs");
        return ChargeSolution::infeasible(charge);
    };

    let chosen = if config.accepts_elevation(roots.high_deg) {
        Some((roots.high_deg, ArcBranch::High))
    } else if config.accepts_elevation(roots.low_deg) {
        Some((roots.low_deg, ArcBranch::Low))
    } else {
        None
    };

    let Some((elevation_deg, branch)) = chosen else {
        debug!(
            "{charge}: roots {:.2}° / {:.2}° outside [{}, {}]",
            roots.high_deg, roots.low_deg, config.angle_min_deg, config.angle_max_deg
        );
        return ChargeSolution::infeasible(charge);
    };

    let Some(time_of_flight_s) =
        time_of_flight(charge.velocity, elevation_deg, dy, config.gravity)
    else {
        debug!("{charge}: {elevation_deg:.2}° arc peaks below the target");
        return ChargeSolution::infeasible(charge);
    };
    debug!(
        "{charge}: {} arc {elevation_deg:.2}° tof {time_of_flight_s:.2}s",
        branch.as_str()
    );
    ChargeSolution {
        charge,
        arc: Some(ArcSolution {
            elevation_deg,
            time_of_flight_s,
            branch,
        }),
    }
}

/// Solve every charge in the table for `launch` -> `target`, keeping table order.
///
/// Infeasible charges stay in the list with no arc; one charge failing never stops the rest.
pub fn elevations_and_time_of_flight(
    launch: &Point3,
    target: &Point3,
    config: &BallisticsConfig,
) -> Vec<ChargeSolution> {
    let range = horizontal_range(launch, target);
    let dy = launch.vertical_delta(target);
    let charges = config.charges();

    if range < MIN_HORIZONTAL_RANGE {
        debug!("target shares the launch ground position; no charge applies");
        return charges.into_iter().map(ChargeSolution::infeasible).collect();
    }

    charges
        .into_iter()
        .map(|charge| solve_charge(charge, range, dy, config))
        .collect()
}
