//! Simulation clock and astronomical angles.
//!
//! Greenwich Mean Sidereal Time for Earth-fixed alignment, per-body spin
//! angles the renderer applies before drawing the textured sphere, and the
//! speed-scaled simulation clock that timestamps per-frame ephemeris
//! queries.

use std::f64::consts::PI;
use chrono::{DateTime, Duration, Utc};
use crate::celestial::CelestialBody;
use crate::tle::SECONDS_PER_DAY;

/// Render timer cadence, roughly 60 Hz.
pub const FRAME_INTERVAL_MS: u64 = 16;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;
const GMST_BASE_DEG: f64 = 280.46061837;
const GMST_ROTATION_PER_DAY: f64 = 360.98564736629;
const GMST_CORRECTION: f64 = 0.000387933;

pub fn greenwich_mean_sidereal_time(timestamp: DateTime<Utc>) -> f64 {
    let j2000 = DateTime::parse_from_rfc3339("2000-01-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc);
    let days_since_j2000 =
        (timestamp - j2000).num_milliseconds() as f64 / (1000.0 * SECONDS_PER_DAY);
    let centuries = days_since_j2000 / DAYS_PER_JULIAN_CENTURY;
    let gmst_degrees = GMST_BASE_DEG
        + GMST_ROTATION_PER_DAY * days_since_j2000
        + GMST_CORRECTION * centuries * centuries
        - centuries * centuries * centuries / 38710000.0;
    gmst_degrees.rem_euclid(360.0).to_radians()
}

/// Spin angle in radians applied to the body before drawing. Earth turns
/// with sidereal time; other bodies spin by their rotation period.
pub fn body_rotation_angle(body: CelestialBody, sim_time_seconds: f64, gmst: f64) -> f64 {
    if body == CelestialBody::Earth {
        gmst
    } else {
        let period_seconds = body.rotation_period_hours() * 3600.0;
        let rotations = sim_time_seconds / period_seconds;
        (rotations * 2.0 * PI).rem_euclid(2.0 * PI)
    }
}

/// Wall-clock anchored simulation time, speed-scaled and pausable. One
/// instance per view; the frame loop advances it by the real elapsed time.
pub struct SimClock {
    start: DateTime<Utc>,
    sim_seconds: f64,
    speed: f64,
    running: bool,
}

impl SimClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            start,
            sim_seconds: 0.0,
            speed: 1.0,
            running: true,
        }
    }

    pub fn advance(&mut self, real_dt_seconds: f64) {
        if self.running {
            self.sim_seconds += real_dt_seconds * self.speed;
        }
    }

    pub fn current(&self) -> DateTime<Utc> {
        self.start + Duration::milliseconds((self.sim_seconds * 1000.0).round() as i64)
    }

    pub fn sim_seconds(&self) -> f64 {
        self.sim_seconds
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Simulation seconds per wall-clock second; negative rewinds.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }
}
