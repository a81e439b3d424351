//! Core state model for the Space Map globe viewer.
//!
//! Camera modes and view transforms, scene selection, TLE-backed satellite
//! ephemeris, render quality parameters, overlay readouts, and settings
//! persistence. Rendering, textures, and widgets are external
//! collaborators driven by the per-frame output of [`globe::GlobeView`].

pub mod camera;
pub mod celestial;
pub mod globe;
pub mod math;
pub mod overlay;
pub mod quality;
pub mod scene;
pub mod settings;
pub mod time;
pub mod tle;

pub use camera::{Camera, CameraMode, CameraTarget, ViewTransform};
pub use celestial::{CelestialBody, TextureResolution};
pub use globe::{FrameError, FrameRender, GlobeView};
pub use math::GeometryError;
pub use overlay::{OverlayInfo, Subpoint};
pub use quality::{RenderParams, RenderQuality};
pub use scene::{EphemerisError, EphemerisProvider, Scene, SceneController};
pub use settings::ViewSettings;
pub use time::{FRAME_INTERVAL_MS, SimClock};
pub use tle::{TleError, TlePreset, TleSatellite};
