//! Camera state machine for the globe view.
//!
//! Three externally selected modes: a fixed overview pose (Static), a pose
//! rigidly offset from the live target (Follow), and a user-driven orbit
//! around the target in spherical coordinates (Orbit). All angle and
//! distance updates clamp in place; mode switches never touch the stored
//! orbit parameters. The scene frame is Y-up with the planet at the origin.

use crate::math::{self, GeometryError};
use nalgebra::{Matrix4, Vector3};

/// Orbit pitch clamp, keeps the camera off the poles.
pub const PITCH_LIMIT_DEG: f64 = 89.0;
/// Degrees of orbit rotation per pixel of drag.
pub const DRAG_SENSITIVITY_DEG_PER_PX: f64 = 0.5;
/// Floor for the altitude-scaled zoom factor, so the camera can still back
/// away after hitting the minimum altitude.
const MIN_ZOOM_FACTOR: f64 = 0.01;
/// Static overview eye sits this far up the +Z axis, km.
const STATIC_EYE_Z_KM: f64 = 30_000.0;
/// Orbit anchor distance when the target is the planet itself, km.
const PLANET_ORBIT_DISTANCE_KM: f64 = 20_000.0;
/// Orbit anchor distance for satellite targets, km; the altitude clamp
/// raises this to the floor.
const TARGET_ORBIT_DISTANCE_KM: f64 = 1_000.0;
/// Follow eye offset outward from the target, as a fraction of the planet
/// radius.
const FOLLOW_OFFSET_FACTOR: f64 = 0.5;

/// Targets closer to the origin than this are the planet, not a satellite.
const ORIGIN_EPSILON_KM: f64 = 1e-9;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CameraMode {
    Static,
    Follow,
    Orbit,
}

impl CameraMode {
    pub fn label(&self) -> &'static str {
        match self {
            CameraMode::Static => "Static",
            CameraMode::Follow => "Follow",
            CameraMode::Orbit => "Orbit",
        }
    }

    pub const ALL: [CameraMode; 3] = [CameraMode::Static, CameraMode::Follow, CameraMode::Orbit];
}

/// What the camera is pointed at. Replaced wholesale on every retarget so
/// the renderer never observes a half-updated target.
#[derive(Clone, PartialEq, Debug)]
pub struct CameraTarget {
    pub name: String,
    pub position_km: Vector3<f64>,
}

impl CameraTarget {
    pub fn new(name: impl Into<String>, position_km: Vector3<f64>) -> Self {
        Self { name: name.into(), position_km }
    }

    pub fn earth() -> Self {
        Self::new("Earth", Vector3::zeros())
    }
}

/// Eye/center/up triple consumed by the renderer each frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ViewTransform {
    pub eye: Vector3<f64>,
    pub center: Vector3<f64>,
    pub up: Vector3<f64>,
}

impl ViewTransform {
    pub fn matrix(&self) -> Result<Matrix4<f64>, GeometryError> {
        math::look_at(&self.eye, &self.center, &self.up)
    }
}

pub struct Camera {
    mode: CameraMode,
    target: CameraTarget,
    planet_radius_km: f64,
    min_altitude_km: f64,
    max_altitude_km: f64,
    yaw_deg: f64,
    pitch_deg: f64,
    distance_km: f64,
}

impl Camera {
    pub fn new(planet_radius_km: f64) -> Self {
        let min_altitude_km = planet_radius_km + 1.0;
        let max_altitude_km = planet_radius_km * 50.0;
        Self {
            mode: CameraMode::Static,
            target: CameraTarget::earth(),
            planet_radius_km,
            min_altitude_km,
            max_altitude_km,
            yaw_deg: 0.0,
            pitch_deg: 0.0,
            distance_km: PLANET_ORBIT_DISTANCE_KM.clamp(min_altitude_km, max_altitude_km),
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Switches mode without touching yaw, pitch, or distance, so returning
    /// to Orbit resumes where the user left off.
    pub fn set_mode(&mut self, mode: CameraMode) {
        if mode != self.mode {
            log::debug!("camera mode {} -> {}", self.mode.label(), mode.label());
        }
        self.mode = mode;
    }

    pub fn target(&self) -> &CameraTarget {
        &self.target
    }

    pub fn yaw_deg(&self) -> f64 {
        self.yaw_deg
    }

    pub fn pitch_deg(&self) -> f64 {
        self.pitch_deg
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn planet_radius_km(&self) -> f64 {
        self.planet_radius_km
    }

    pub fn min_altitude_km(&self) -> f64 {
        self.min_altitude_km
    }

    pub fn max_altitude_km(&self) -> f64 {
        self.max_altitude_km
    }

    /// Replaces the target. A change of target identity (name) re-anchors
    /// the orbit distance; per-frame position refreshes of the same target
    /// leave the user's zoom alone.
    pub fn set_target(&mut self, name: impl Into<String>, position_km: Vector3<f64>) {
        let name = name.into();
        if name != self.target.name {
            let anchor = if position_km.norm() < ORIGIN_EPSILON_KM {
                PLANET_ORBIT_DISTANCE_KM
            } else {
                TARGET_ORBIT_DISTANCE_KM
            };
            self.distance_km = anchor.clamp(self.min_altitude_km, self.max_altitude_km);
            log::debug!(
                "camera target '{}' -> '{}', orbit distance {:.0} km",
                self.target.name,
                name,
                self.distance_km
            );
        }
        self.target = CameraTarget::new(name, position_km);
    }

    /// Accumulates a pointer drag into the orbit angles. Only meaningful in
    /// Orbit mode; a no-op otherwise.
    pub fn apply_drag(&mut self, dx: f64, dy: f64) {
        if self.mode != CameraMode::Orbit {
            return;
        }
        self.yaw_deg -= dx * DRAG_SENSITIVITY_DEG_PER_PX;
        self.pitch_deg = (self.pitch_deg + dy * DRAG_SENSITIVITY_DEG_PER_PX)
            .clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
    }

    /// Applies a scroll delta to the orbit distance. The delta is scaled by
    /// the normalized altitude so zoom is gentle near the surface and fast
    /// far out. Only meaningful in Orbit mode; a no-op otherwise.
    pub fn apply_scroll(&mut self, delta: f64) {
        if self.mode != CameraMode::Orbit {
            return;
        }
        let span = self.max_altitude_km - self.min_altitude_km;
        let t = ((self.distance_km - self.min_altitude_km) / span).max(MIN_ZOOM_FACTOR);
        self.distance_km =
            (self.distance_km - delta * t).clamp(self.min_altitude_km, self.max_altitude_km);
    }

    /// Current view transform; pure in the camera state. Follow mode fails
    /// for a target at the origin, which has no outward direction.
    pub fn view_transform(&self) -> Result<ViewTransform, GeometryError> {
        match self.mode {
            CameraMode::Static => Ok(ViewTransform {
                eye: Vector3::new(0.0, 0.0, STATIC_EYE_Z_KM),
                center: Vector3::zeros(),
                up: Vector3::y(),
            }),
            CameraMode::Follow => {
                let outward = math::normalize(&self.target.position_km)?;
                let eye = self.target.position_km
                    + outward * (self.planet_radius_km * FOLLOW_OFFSET_FACTOR);
                Ok(ViewTransform {
                    eye,
                    center: self.target.position_km,
                    up: Vector3::y(),
                })
            }
            CameraMode::Orbit => {
                let theta = self.yaw_deg.to_radians();
                let phi = self.pitch_deg.to_radians();
                let r = self.distance_km;
                let t = self.target.position_km;
                let eye = Vector3::new(
                    r * theta.sin() * phi.cos() + t.x,
                    r * phi.sin() + t.y,
                    r * theta.cos() * phi.cos() + t.z,
                );
                Ok(ViewTransform {
                    eye,
                    center: t,
                    up: Vector3::y(),
                })
            }
        }
    }
}
