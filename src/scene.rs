//! Scene selection and per-frame camera target resolution.
//!
//! Each scene pins the camera to one mode and one target rule: the globe
//! overview stares at the planet, the tracking scene follows the selected
//! satellite, and the explore scene orbits the planet (or the satellite,
//! when the tracking sub-mode is on). Live positions come from an
//! ephemeris collaborator queried once per frame.

use chrono::{DateTime, Utc};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::{Camera, CameraMode};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Scene {
    GlobeView,
    TrackingView,
    ExploreView,
}

impl Scene {
    pub fn label(&self) -> &'static str {
        match self {
            Scene::GlobeView => "Globe",
            Scene::TrackingView => "Tracking",
            Scene::ExploreView => "Explore",
        }
    }

    pub const ALL: [Scene; 3] = [Scene::GlobeView, Scene::TrackingView, Scene::ExploreView];

    pub fn camera_mode(&self) -> CameraMode {
        match self {
            Scene::GlobeView => CameraMode::Static,
            Scene::TrackingView => CameraMode::Follow,
            Scene::ExploreView => CameraMode::Orbit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EphemerisError {
    #[error("propagation failed for {name}: {reason}")]
    Propagation { name: String, reason: String },
}

/// Synchronous position source for the tracked satellite. Implementations
/// return scene-frame coordinates in kilometers.
pub trait EphemerisProvider {
    fn name(&self) -> &str;
    fn position_km(&self, at: DateTime<Utc>) -> Result<Vector3<f64>, EphemerisError>;
}

pub struct SceneController {
    scene: Scene,
    planet_name: String,
    explore_tracks_target: bool,
}

impl SceneController {
    pub fn new(planet_name: impl Into<String>) -> Self {
        Self {
            scene: Scene::GlobeView,
            planet_name: planet_name.into(),
            explore_tracks_target: false,
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn explore_tracks_target(&self) -> bool {
        self.explore_tracks_target
    }

    /// When set, the explore scene orbits the tracked satellite instead of
    /// the planet.
    pub fn set_explore_tracks_target(&mut self, on: bool) {
        self.explore_tracks_target = on;
    }

    /// Switches scene, applying the camera mode now and any fixed target
    /// now. Live targets resolve on the next `update`.
    pub fn set_scene(&mut self, scene: Scene, camera: &mut Camera) {
        if scene != self.scene {
            log::info!("scene {} -> {}", self.scene.label(), scene.label());
        }
        self.scene = scene;
        camera.set_mode(scene.camera_mode());
        match scene {
            Scene::GlobeView | Scene::ExploreView => {
                camera.set_target(self.planet_name.clone(), Vector3::zeros());
            }
            Scene::TrackingView => {}
        }
    }

    /// Per-frame target resolution. On a propagation failure the camera
    /// keeps its last valid target and the error is reported to the caller.
    pub fn update(
        &self,
        camera: &mut Camera,
        ephemeris: Option<&dyn EphemerisProvider>,
        at: DateTime<Utc>,
    ) -> Result<(), EphemerisError> {
        match self.scene {
            Scene::GlobeView => {
                camera.set_target(self.planet_name.clone(), Vector3::zeros());
            }
            Scene::TrackingView => {
                // With no satellite selected the camera holds its last target.
                if let Some(eph) = ephemeris {
                    let pos = eph.position_km(at)?;
                    camera.set_target(eph.name().to_string(), pos);
                }
            }
            Scene::ExploreView => match ephemeris {
                Some(eph) if self.explore_tracks_target => {
                    let pos = eph.position_km(at)?;
                    camera.set_target(eph.name().to_string(), pos);
                }
                _ => camera.set_target(self.planet_name.clone(), Vector3::zeros()),
            },
        }
        Ok(())
    }
}
