//! Per-frame orchestration of the globe view.
//!
//! Owns the camera, the scene selector, the render quality, and the
//! simulation clock. Each frame tick resolves the camera target, computes
//! the view transform, and packages everything the renderer consumes. The
//! GL drawing itself, textures, and widgets live outside this crate.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::camera::{Camera, ViewTransform};
use crate::celestial::CelestialBody;
use crate::math::GeometryError;
use crate::overlay::OverlayInfo;
use crate::quality::{RenderParams, RenderQuality};
use crate::scene::{EphemerisError, EphemerisProvider, Scene, SceneController};
use crate::time::{SimClock, body_rotation_angle, greenwich_mean_sidereal_time};

/// Far plane in planet radii; keeps the whole orbit envelope and the
/// skybox inside the frustum.
const RENDER_DISTANCE_FACTOR: f64 = 52.0;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FrameRender {
    pub view: ViewTransform,
    pub body_rotation_rad: f64,
    pub params: RenderParams,
    pub render_distance_km: f64,
}

pub struct GlobeView {
    body: CelestialBody,
    camera: Camera,
    scenes: SceneController,
    quality: RenderQuality,
    clock: SimClock,
    overlay_visible: bool,
}

impl GlobeView {
    pub fn new(body: CelestialBody, start: DateTime<Utc>) -> Self {
        let mut camera = Camera::new(body.radius_km());
        let mut scenes = SceneController::new(body.label());
        // The app starts out in the free-orbit scene.
        scenes.set_scene(Scene::ExploreView, &mut camera);
        Self {
            body,
            camera,
            scenes,
            quality: RenderQuality::Low,
            clock: SimClock::new(start),
            overlay_visible: false,
        }
    }

    pub fn body(&self) -> CelestialBody {
        self.body
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut SimClock {
        &mut self.clock
    }

    pub fn scene(&self) -> Scene {
        self.scenes.scene()
    }

    pub fn set_scene(&mut self, scene: Scene) {
        self.scenes.set_scene(scene, &mut self.camera);
    }

    pub fn set_explore_tracks_target(&mut self, on: bool) {
        self.scenes.set_explore_tracks_target(on);
    }

    pub fn quality(&self) -> RenderQuality {
        self.quality
    }

    pub fn set_quality(&mut self, quality: RenderQuality) {
        if quality != self.quality {
            log::info!(
                "render quality {} -> {}",
                self.quality.label(),
                quality.label()
            );
        }
        self.quality = quality;
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
    }

    /// Pointer drag in pixels, forwarded to the orbit camera.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        self.camera.apply_drag(dx, dy);
    }

    /// Scroll delta, forwarded to the orbit camera.
    pub fn scroll(&mut self, delta: f64) {
        self.camera.apply_scroll(delta);
    }

    pub fn render_distance_km(&self) -> f64 {
        self.body.radius_km() * RENDER_DISTANCE_FACTOR
    }

    /// One frame tick: advance the simulation clock by the real elapsed
    /// time, resolve the camera target for the active scene, and compute
    /// the view transform.
    pub fn frame(
        &mut self,
        ephemeris: Option<&dyn EphemerisProvider>,
        real_dt_seconds: f64,
    ) -> Result<FrameRender, FrameError> {
        self.clock.advance(real_dt_seconds);
        let at = self.clock.current();
        self.scenes.update(&mut self.camera, ephemeris, at)?;
        let view = self.camera.view_transform()?;
        let gmst = greenwich_mean_sidereal_time(at);
        let body_rotation_rad = body_rotation_angle(self.body, self.clock.sim_seconds(), gmst);
        Ok(FrameRender {
            view,
            body_rotation_rad,
            params: self.quality.params(),
            render_distance_km: self.render_distance_km(),
        })
    }

    pub fn overlay_info(&self) -> OverlayInfo {
        OverlayInfo::capture(self.scenes.scene(), &self.camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraMode;
    use nalgebra::Vector3;

    struct StubSatellite {
        position: Vector3<f64>,
    }

    impl EphemerisProvider for StubSatellite {
        fn name(&self) -> &str {
            "ISS"
        }

        fn position_km(&self, _at: DateTime<Utc>) -> Result<Vector3<f64>, EphemerisError> {
            Ok(self.position)
        }
    }

    fn start() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn frame_dt() -> f64 {
        crate::time::FRAME_INTERVAL_MS as f64 / 1000.0
    }

    #[test]
    fn starts_in_the_explore_scene_orbiting_the_planet() {
        let view = GlobeView::new(CelestialBody::Earth, start());
        assert_eq!(view.scene(), Scene::ExploreView);
        assert_eq!(view.camera().mode(), CameraMode::Orbit);
        assert_eq!(view.camera().target().name, "Earth");
    }

    #[test]
    fn explore_frame_without_a_satellite_renders_the_planet() {
        let mut view = GlobeView::new(CelestialBody::Earth, start());
        let frame = view.frame(None, frame_dt()).unwrap();
        assert_eq!(frame.view.center, Vector3::zeros());
        assert_eq!(frame.params, RenderQuality::Low.params());
        assert!(frame.body_rotation_rad.is_finite());
        assert!((frame.render_distance_km - 6371.0 * 52.0).abs() < 1e-9);
    }

    #[test]
    fn tracking_frame_centers_on_the_satellite() {
        let mut view = GlobeView::new(CelestialBody::Earth, start());
        view.set_scene(Scene::TrackingView);
        let sat = StubSatellite {
            position: Vector3::new(6771.0, 0.0, 0.0),
        };
        let frame = view.frame(Some(&sat), frame_dt()).unwrap();
        assert_eq!(view.camera().mode(), CameraMode::Follow);
        assert_eq!(frame.view.center, sat.position);
        assert!(frame.view.eye.x > sat.position.x);
    }

    #[test]
    fn quality_changes_flow_into_the_frame() {
        let mut view = GlobeView::new(CelestialBody::Earth, start());
        view.set_quality(RenderQuality::High);
        let frame = view.frame(None, frame_dt()).unwrap();
        assert_eq!(frame.params, RenderQuality::High.params());
    }

    #[test]
    fn frames_advance_the_simulation_clock() {
        let mut view = GlobeView::new(CelestialBody::Earth, start());
        for _ in 0..10 {
            view.frame(None, frame_dt()).unwrap();
        }
        assert!((view.clock().sim_seconds() - 0.16).abs() < 1e-9);
    }

    #[test]
    fn input_reaches_the_orbit_camera() {
        let mut view = GlobeView::new(CelestialBody::Earth, start());
        let dist = view.camera().distance_km();
        view.drag(10.0, 4.0);
        view.scroll(1000.0);
        assert!(view.camera().yaw_deg() != 0.0);
        assert!(view.camera().pitch_deg() != 0.0);
        assert!(view.camera().distance_km() < dist);
    }

    #[test]
    fn overlay_reflects_the_active_scene() {
        let mut view = GlobeView::new(CelestialBody::Earth, start());
        view.set_scene(Scene::GlobeView);
        let info = view.overlay_info();
        assert_eq!(info.scene, Scene::GlobeView);
        assert_eq!(info.camera_mode, CameraMode::Static);
        assert_eq!(info.target.name, "Earth");
    }
}
