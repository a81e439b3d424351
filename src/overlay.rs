//! Overlay readouts shown above the 3D view.
//!
//! View-model only: scene, camera mode, target, and the target's geocentric
//! subpoint. The GUI layer draws these lines verbatim on its transparent
//! overlay.

use nalgebra::Vector3;

use crate::camera::{Camera, CameraMode, CameraTarget};
use crate::scene::Scene;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Subpoint {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub altitude_km: f64,
}

/// Geocentric subpoint of a scene-frame (Y-up) position. The origin has no
/// subpoint.
pub fn subpoint(position_km: &Vector3<f64>, planet_radius_km: f64) -> Option<Subpoint> {
    let r = position_km.norm();
    if r < 1e-9 {
        return None;
    }
    let lat_deg = (position_km.y / r).asin().to_degrees();
    let lon_deg = -position_km.z.atan2(position_km.x).to_degrees();
    Some(Subpoint {
        lat_deg,
        lon_deg,
        altitude_km: r - planet_radius_km,
    })
}

#[derive(Clone, PartialEq, Debug)]
pub struct OverlayInfo {
    pub scene: Scene,
    pub camera_mode: CameraMode,
    pub target: CameraTarget,
    pub subpoint: Option<Subpoint>,
}

impl OverlayInfo {
    pub fn capture(scene: Scene, camera: &Camera) -> Self {
        let target = camera.target().clone();
        let subpoint = subpoint(&target.position_km, camera.planet_radius_km());
        Self {
            scene,
            camera_mode: camera.mode(),
            target,
            subpoint,
        }
    }

    pub fn scene_line(&self) -> String {
        format!("Scene: {}", self.scene.label())
    }

    pub fn camera_mode_line(&self) -> String {
        format!("Camera Mode: {}", self.camera_mode.label())
    }

    pub fn target_line(&self) -> String {
        let p = self.target.position_km;
        format!(
            "Target: {} ({:.1}, {:.1}, {:.1})",
            self.target.name, p.x, p.y, p.z
        )
    }

    pub fn coordinates_line(&self) -> Option<String> {
        self.subpoint.map(|sp| {
            format!(
                "LATITUDE: {:.1}\u{b0}\nLONGITUDE: {:.1}\u{b0}\nALTITUDE: {:.1} km",
                sp.lat_deg, sp.lon_deg, sp.altitude_km
            )
        })
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.scene_line(),
            self.camera_mode_line(),
            self.target_line(),
        ];
        if let Some(coords) = self.coordinates_line() {
            lines.push(coords);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraMode;

    const EARTH_RADIUS_KM: f64 = 6371.0;

    #[test]
    fn subpoint_over_the_north_pole() {
        let sp = subpoint(
            &Vector3::new(0.0, EARTH_RADIUS_KM + 400.0, 0.0),
            EARTH_RADIUS_KM,
        )
        .unwrap();
        assert!((sp.lat_deg - 90.0).abs() < 1e-9);
        assert!((sp.altitude_km - 400.0).abs() < 1e-9);
    }

    #[test]
    fn subpoint_on_the_prime_direction_has_zero_angles() {
        let sp = subpoint(&Vector3::new(7000.0, 0.0, 0.0), EARTH_RADIUS_KM).unwrap();
        assert!(sp.lat_deg.abs() < 1e-9);
        assert!(sp.lon_deg.abs() < 1e-9);
        assert!((sp.altitude_km - 629.0).abs() < 1e-9);
    }

    #[test]
    fn the_origin_has_no_subpoint() {
        assert!(subpoint(&Vector3::zeros(), EARTH_RADIUS_KM).is_none());
    }

    #[test]
    fn overlay_lines_echo_scene_mode_and_target() {
        let mut cam = Camera::new(EARTH_RADIUS_KM);
        cam.set_mode(CameraMode::Follow);
        cam.set_target("ISS", Vector3::new(6771.0, 0.0, 0.0));
        let info = OverlayInfo::capture(Scene::TrackingView, &cam);

        assert_eq!(info.scene_line(), "Scene: Tracking");
        assert_eq!(info.camera_mode_line(), "Camera Mode: Follow");
        assert_eq!(info.target_line(), "Target: ISS (6771.0, 0.0, 0.0)");
        let coords = info.coordinates_line().unwrap();
        assert!(coords.starts_with("LATITUDE: 0.0"));
        assert!(coords.ends_with("ALTITUDE: 400.0 km"));
        assert_eq!(info.lines().len(), 4);
    }

    #[test]
    fn planet_target_yields_three_lines() {
        let cam = Camera::new(EARTH_RADIUS_KM);
        let info = OverlayInfo::capture(Scene::GlobeView, &cam);
        assert!(info.subpoint.is_none());
        assert_eq!(info.lines().len(), 3);
    }
}
