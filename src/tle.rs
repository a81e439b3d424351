//! Two-Line Element (TLE) satellite ephemeris.
//!
//! Parses TLE sets, fetches named CelesTrak groups, and propagates
//! satellites with SGP4. Propagated positions are mapped from the TEME
//! frame into the Y-up scene frame consumed by the camera.

use chrono::{DateTime, Utc};
use nalgebra::Vector3;
use sgp4::Constants;
use thiserror::Error;

use crate::celestial::CelestialBody;
use crate::scene::{EphemerisError, EphemerisProvider};

pub const SECONDS_PER_DAY: f64 = 86400.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TleError {
    #[error("no valid TLE data found")]
    NoValidData,
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("read error: {0}")]
    Read(String),
    #[error("propagation failed: {0}")]
    Propagation(String),
}

/// CelesTrak element groups the satellite picker offers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TlePreset {
    Stations,
    ActiveSats,
    Brightest100,
    Starlink,
    OneWeb,
    Gps,
    Weather,
    Science,
}

impl TlePreset {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stations => "Stations",
            Self::ActiveSats => "Active",
            Self::Brightest100 => "100 Brightest",
            Self::Starlink => "Starlink",
            Self::OneWeb => "OneWeb",
            Self::Gps => "GPS",
            Self::Weather => "Weather",
            Self::Science => "Science",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            Self::Stations => "https://celestrak.org/NORAD/elements/gp.php?GROUP=stations&FORMAT=tle",
            Self::ActiveSats => "https://celestrak.org/NORAD/elements/gp.php?GROUP=active&FORMAT=tle",
            Self::Brightest100 => "https://celestrak.org/NORAD/elements/gp.php?GROUP=visual&FORMAT=tle",
            Self::Starlink => "https://celestrak.org/NORAD/elements/gp.php?GROUP=starlink&FORMAT=tle",
            Self::OneWeb => "https://celestrak.org/NORAD/elements/gp.php?GROUP=oneweb&FORMAT=tle",
            Self::Gps => "https://celestrak.org/NORAD/elements/gp.php?GROUP=gps-ops&FORMAT=tle",
            Self::Weather => "https://celestrak.org/NORAD/elements/gp.php?GROUP=weather&FORMAT=tle",
            Self::Science => "https://celestrak.org/NORAD/elements/gp.php?GROUP=science&FORMAT=tle",
        }
    }

    pub const ALL: [TlePreset; 8] = [
        Self::Stations,
        Self::ActiveSats,
        Self::Brightest100,
        Self::Starlink,
        Self::OneWeb,
        Self::Gps,
        Self::Weather,
        Self::Science,
    ];
}

#[derive(Clone)]
pub struct TleSatellite {
    pub name: String,
    pub catalog_number: u64,
    pub constants: Constants,
    pub epoch_minutes: f64,
    pub inclination_deg: f64,
    pub mean_motion: f64,
}

impl TleSatellite {
    /// Scene-frame position in kilometers at the given instant. TEME is
    /// Z-up; the scene frame is Y-up, hence (x, z, -y).
    pub fn propagate_km(&self, at: DateTime<Utc>) -> Result<Vector3<f64>, TleError> {
        let minutes_since_epoch = at.timestamp_millis() as f64 / 60_000.0 - self.epoch_minutes;
        let prediction = self
            .constants
            .propagate(sgp4::MinutesSinceEpoch(minutes_since_epoch))
            .map_err(|e| TleError::Propagation(e.to_string()))?;
        Ok(Vector3::new(
            prediction.position[0],
            prediction.position[2],
            -prediction.position[1],
        ))
    }
}

impl EphemerisProvider for TleSatellite {
    fn name(&self) -> &str {
        &self.name
    }

    fn position_km(&self, at: DateTime<Utc>) -> Result<Vector3<f64>, EphemerisError> {
        self.propagate_km(at).map_err(|e| EphemerisError::Propagation {
            name: self.name.clone(),
            reason: e.to_string(),
        })
    }
}

/// Circular-orbit altitude estimate from a mean motion in revolutions per
/// day. Used for shell grouping and list display, not for propagation.
pub fn mean_motion_to_altitude_km(n_revs_per_day: f64) -> f64 {
    let mu = CelestialBody::Earth.mu();
    let r_earth = CelestialBody::Earth.radius_km();
    let n_rad_s = n_revs_per_day * 2.0 * std::f64::consts::PI / SECONDS_PER_DAY;
    let a = (mu / (n_rad_s * n_rad_s)).powf(1.0 / 3.0);
    a - r_earth
}

pub fn datetime_to_minutes(dt: &sgp4::chrono::NaiveDateTime) -> f64 {
    dt.and_utc().timestamp() as f64 / 60.0
}

pub fn parse_tle_data(data: &str) -> Result<Vec<TleSatellite>, TleError> {
    let lines: Vec<&str> = data.lines().collect();
    let mut satellites = Vec::new();

    let mut i = 0;
    while i + 2 < lines.len() {
        let name_line = lines[i].trim();
        let line1 = lines[i + 1].trim();
        let line2 = lines[i + 2].trim();

        if !line1.starts_with('1') || !line2.starts_with('2') {
            i += 1;
            continue;
        }

        let tle = format!("{}\n{}\n{}", name_line, line1, line2);

        if let Ok(elements_vec) = sgp4::parse_3les(&tle) {
            for elements in elements_vec {
                if let Ok(constants) = Constants::from_elements(&elements) {
                    let epoch_minutes = datetime_to_minutes(&elements.datetime);
                    satellites.push(TleSatellite {
                        name: elements.object_name.unwrap_or_default(),
                        catalog_number: elements.norad_id,
                        inclination_deg: elements.inclination,
                        mean_motion: elements.mean_motion,
                        constants,
                        epoch_minutes,
                    });
                }
            }
        }

        i += 3;
    }

    if satellites.is_empty() {
        Err(TleError::NoValidData)
    } else {
        Ok(satellites)
    }
}

/// Lookup by NORAD catalog number, the identifier the tracking UI types in.
pub fn find_by_catalog_number(satellites: &[TleSatellite], number: u64) -> Option<&TleSatellite> {
    satellites.iter().find(|s| s.catalog_number == number)
}

pub fn fetch_tle_data(url: &str) -> Result<Vec<TleSatellite>, TleError> {
    let response = ureq::get(url)
        .call()
        .map_err(|e| TleError::Http(e.to_string()))?;

    let body = response
        .into_string()
        .map_err(|e| TleError::Read(e.to_string()))?;

    parse_tle_data(&body)
}

pub fn fetch_group(preset: TlePreset) -> Result<Vec<TleSatellite>, TleError> {
    fetch_tle_data(preset.url())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Canonical ISS elements from the SGP4 verification set.
    const ISS_TLE: &str = "ISS (ZARYA)\n\
        1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927\n\
        2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    fn iss() -> TleSatellite {
        parse_tle_data(ISS_TLE).unwrap().remove(0)
    }

    fn epoch_of(sat: &TleSatellite) -> DateTime<Utc> {
        DateTime::from_timestamp((sat.epoch_minutes * 60.0) as i64, 0).unwrap()
    }

    #[test]
    fn parses_name_catalog_number_and_elements() {
        let sat = iss();
        assert_eq!(sat.name, "ISS (ZARYA)");
        assert_eq!(sat.catalog_number, 25544);
        assert!((sat.inclination_deg - 51.6416).abs() < 1e-4);
        assert!((sat.mean_motion - 15.72125391).abs() < 1e-6);
    }

    #[test]
    fn rejects_data_with_no_usable_elements() {
        assert!(matches!(
            parse_tle_data("not a tle\nat all\nreally"),
            Err(TleError::NoValidData)
        ));
        assert!(matches!(parse_tle_data(""), Err(TleError::NoValidData)));
    }

    #[test]
    fn mean_motion_gives_a_low_earth_orbit_altitude() {
        let alt = mean_motion_to_altitude_km(iss().mean_motion);
        assert!(alt > 300.0 && alt < 420.0, "altitude {alt}");
    }

    #[test]
    fn propagation_at_epoch_stays_in_the_leo_shell() {
        let sat = iss();
        let pos = sat.propagate_km(epoch_of(&sat)).unwrap();
        let r = pos.norm();
        assert!(r > 6600.0 && r < 6900.0, "radius {r}");
    }

    #[test]
    fn propagation_an_orbit_later_stays_in_the_leo_shell() {
        let sat = iss();
        let later = epoch_of(&sat) + chrono::Duration::minutes(92);
        let pos = sat.propagate_km(later).unwrap();
        let r = pos.norm();
        assert!(r > 6600.0 && r < 6900.0, "radius {r}");
    }

    #[test]
    fn ephemeris_trait_matches_direct_propagation() {
        let sat = iss();
        let at = epoch_of(&sat);
        let direct = sat.propagate_km(at).unwrap();
        let via_trait = EphemerisProvider::position_km(&sat, at).unwrap();
        assert_eq!(direct, via_trait);
        assert_eq!(EphemerisProvider::name(&sat), "ISS (ZARYA)");
    }

    #[test]
    fn catalog_number_lookup() {
        let sats = parse_tle_data(ISS_TLE).unwrap();
        assert!(find_by_catalog_number(&sats, 25544).is_some());
        assert!(find_by_catalog_number(&sats, 99999).is_none());
    }

    #[test]
    fn every_preset_points_at_a_celestrak_group() {
        for preset in TlePreset::ALL {
            assert!(preset.url().starts_with("https://celestrak.org/"));
            assert!(!preset.label().is_empty());
        }
    }
}
