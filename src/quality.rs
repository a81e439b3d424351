//! Render quality levels and the fixed-function parameters they select.

use serde::{Deserialize, Serialize};

use crate::celestial::TextureResolution;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum RenderQuality {
    Debug,
    Low,
    High,
}

impl RenderQuality {
    pub fn label(&self) -> &'static str {
        match self {
            RenderQuality::Debug => "Debug",
            RenderQuality::Low => "Low",
            RenderQuality::High => "High",
        }
    }

    pub const ALL: [RenderQuality; 3] =
        [RenderQuality::Debug, RenderQuality::Low, RenderQuality::High];

    pub fn params(&self) -> RenderParams {
        match self {
            RenderQuality::Debug => RenderParams {
                sphere_segments: 16,
                smooth_shading: false,
                lighting: false,
                texture_resolution: TextureResolution::R512,
            },
            RenderQuality::Low => RenderParams {
                sphere_segments: 16,
                smooth_shading: false,
                lighting: false,
                texture_resolution: TextureResolution::R2048,
            },
            RenderQuality::High => RenderParams {
                sphere_segments: 128,
                smooth_shading: true,
                lighting: true,
                texture_resolution: TextureResolution::R8192,
            },
        }
    }
}

/// What the renderer reads when tessellating and shading the spheres.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderParams {
    pub sphere_segments: u32,
    pub smooth_shading: bool,
    pub lighting: bool,
    pub texture_resolution: TextureResolution,
}
