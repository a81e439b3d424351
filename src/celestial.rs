use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CelestialBody {
    Earth,
    Moon,
    Mars,
    Mercury,
    Venus,
    Jupiter,
    Saturn,
    Sun,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TextureResolution {
    R512,
    R2048,
    R8192,
}

impl TextureResolution {
    pub fn label(&self) -> &'static str {
        match self {
            TextureResolution::R512 => "512",
            TextureResolution::R2048 => "2K",
            TextureResolution::R8192 => "8K",
        }
    }

    pub fn pixels(&self) -> u32 {
        match self {
            TextureResolution::R512 => 512,
            TextureResolution::R2048 => 2048,
            TextureResolution::R8192 => 8192,
        }
    }
}

impl CelestialBody {
    pub fn label(&self) -> &'static str {
        match self {
            CelestialBody::Earth => "Earth",
            CelestialBody::Moon => "Moon",
            CelestialBody::Mars => "Mars",
            CelestialBody::Mercury => "Mercury",
            CelestialBody::Venus => "Venus",
            CelestialBody::Jupiter => "Jupiter",
            CelestialBody::Saturn => "Saturn",
            CelestialBody::Sun => "Sun",
        }
    }

    pub const ALL: [CelestialBody; 8] = [
        CelestialBody::Earth,
        CelestialBody::Moon,
        CelestialBody::Mars,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Sun,
    ];

    pub fn radius_km(&self) -> f64 {
        match self {
            CelestialBody::Earth => 6371.0,
            CelestialBody::Moon => 1737.4,
            CelestialBody::Mars => 3389.5,
            CelestialBody::Mercury => 2439.7,
            CelestialBody::Venus => 6051.8,
            CelestialBody::Jupiter => 69911.0,
            CelestialBody::Saturn => 58232.0,
            CelestialBody::Sun => 696340.0,
        }
    }

    /// Standard gravitational parameter, km^3/s^2.
    pub fn mu(&self) -> f64 {
        match self {
            CelestialBody::Earth => 398600.4418,
            CelestialBody::Moon => 4902.8,
            CelestialBody::Mars => 42828.37,
            CelestialBody::Mercury => 22032.0,
            CelestialBody::Venus => 324859.0,
            CelestialBody::Jupiter => 126686534.0,
            CelestialBody::Saturn => 37931187.0,
            CelestialBody::Sun => 132712440018.0,
        }
    }

    pub fn rotation_period_hours(&self) -> f64 {
        match self {
            CelestialBody::Earth => 23.9345,
            CelestialBody::Moon => 655.7,
            CelestialBody::Mars => 24.6229,
            CelestialBody::Mercury => 1407.6,
            CelestialBody::Venus => -5832.5,
            CelestialBody::Jupiter => 9.925,
            CelestialBody::Saturn => 10.656,
            CelestialBody::Sun => 609.12,
        }
    }

    /// Radius of the Karman-line shell, drawn for Earth only.
    pub fn karman_line_radius_km(&self) -> Option<f64> {
        match self {
            CelestialBody::Earth => Some(self.radius_km() + 100.0),
            _ => None,
        }
    }

    /// Radius of the cloud-deck shell, drawn for Earth only.
    pub fn cloud_deck_radius_km(&self) -> Option<f64> {
        match self {
            CelestialBody::Earth => Some(self.radius_km() + 12.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_shells_sit_above_the_surface() {
        let earth = CelestialBody::Earth;
        assert_eq!(earth.karman_line_radius_km(), Some(6471.0));
        assert_eq!(earth.cloud_deck_radius_km(), Some(6383.0));
        assert_eq!(CelestialBody::Moon.karman_line_radius_km(), None);
    }

    #[test]
    fn every_body_is_listed_once() {
        for body in CelestialBody::ALL {
            assert!(body.radius_km() > 0.0);
            assert!(body.mu() > 0.0);
            assert_eq!(
                CelestialBody::ALL.iter().filter(|b| **b == body).count(),
                1
            );
        }
    }
}
