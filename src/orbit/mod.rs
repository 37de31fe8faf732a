//! Analytic orbits for the satellite and moon.
//!
//! Orbiting bodies are not integrated. Their position is recomputed every
//! tick from the orbital phase angle, so the orbit closes exactly on itself
//! no matter how many ticks pass or how uneven the frame deltas are.

use std::f64::consts::{FRAC_PI_4, TAU};

use bevy::math::DVec3;

use crate::config::ConfigError;

#[cfg(test)]
mod proptest_orbit;

/// Shape and timing of an orbit around the planet.
/// Angles in radians, distances in scene units, period in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalParameters {
    /// Semi-major axis of the ellipse.
    pub semi_major_axis: f64,
    /// Eccentricity (0 ≤ e < 1).
    pub eccentricity: f64,
    /// Tilt of the orbital plane about the x axis.
    pub inclination: f64,
    /// Seconds per revolution.
    pub orbital_period: f64,
}

impl OrbitalParameters {
    /// Circular orbit of radius `radius` tilted by `inclination`.
    pub fn circular(radius: f64, inclination: f64, orbital_period: f64) -> Self {
        Self {
            semi_major_axis: radius,
            eccentricity: 0.0,
            inclination,
            orbital_period,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.semi_major_axis.is_finite() && self.semi_major_axis > 0.0) {
            return Err(ConfigError::InvalidSemiMajorAxis(self.semi_major_axis));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(ConfigError::InvalidEccentricity(self.eccentricity));
        }
        if !(self.orbital_period.is_finite() && self.orbital_period > 0.0) {
            return Err(ConfigError::InvalidOrbitalPeriod(self.orbital_period));
        }
        if !self.inclination.is_finite() {
            return Err(ConfigError::NonFinite("inclination"));
        }
        Ok(())
    }

    /// Phase advance in radians per second.
    pub fn angular_rate(&self) -> f64 {
        TAU / self.orbital_period
    }

    /// Distance from the focus at the given phase angle.
    ///
    /// The denominator `1 + e·cos θ` stays positive for `e < 1`.
    pub fn radius_at(&self, angle: f64) -> f64 {
        let e = self.eccentricity;
        self.semi_major_axis * (1.0 - e * e) / (1.0 + e * angle.cos())
    }
}

/// Position on the orbit at the given phase angle, relative to the scene origin.
///
/// The orbit is laid out in the x/y plane with the focus at `focus`, then
/// tilted about the x axis by the inclination.
pub fn solve_position(focus: DVec3, params: &OrbitalParameters, angle: f64) -> DVec3 {
    let r = params.radius_at(angle);

    let x = r * angle.cos();
    let planar_y = r * angle.sin();

    let (sin_i, cos_i) = params.inclination.sin_cos();
    let y = planar_y * cos_i;
    let z = planar_y * sin_i;

    focus + DVec3::new(x, y, z)
}

/// Named orbit used to seed an orbiting body at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitPreset {
    pub name: &'static str,
    pub params: OrbitalParameters,
    /// Phase angle at the start of the session, radians.
    pub initial_angle: f64,
}

impl OrbitPreset {
    /// Small fast satellite.
    pub fn satellite() -> Self {
        Self {
            name: "satellite",
            params: OrbitalParameters::circular(1200.0, FRAC_PI_4, 10.0),
            initial_angle: 0.0,
        }
    }

    /// Larger, slower moon.
    pub fn moon() -> Self {
        Self {
            name: "moon",
            params: OrbitalParameters::circular(1600.0, FRAC_PI_4, 30.0),
            initial_angle: 40.0,
        }
    }
}

/// A body whose position follows its orbit exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitingBody {
    pub name: &'static str,
    pub position: DVec3,
    pub params: OrbitalParameters,
    /// Current phase angle in radians. Only ever increases.
    pub orbital_angle: f64,
}

impl OrbitingBody {
    /// Place a body on its orbit at the preset's initial angle.
    pub fn from_preset(preset: &OrbitPreset, focus: DVec3) -> Self {
        Self {
            name: preset.name,
            position: solve_position(focus, &preset.params, preset.initial_angle),
            params: preset.params,
            orbital_angle: preset.initial_angle,
        }
    }

    /// Advance the phase by `delta` seconds and recompute the position.
    pub fn advance(&mut self, focus: DVec3, delta: f64) {
        debug_assert!(delta >= 0.0, "orbital phase must not run backwards");
        self.orbital_angle += self.params.angular_rate() * delta;
        self.position = solve_position(focus, &self.params, self.orbital_angle);
        debug_assert!(self.position.is_finite(), "{} left its orbit", self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assertions::assert_vec_close;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_circular_orbit_keeps_radius() {
        let focus = DVec3::new(0.0, -500.0, -1500.0);
        let params = OrbitalParameters::circular(1200.0, FRAC_PI_4, 10.0);

        for step in 0..64 {
            let angle = step as f64 * TAU / 64.0;
            let pos = solve_position(focus, &params, angle);
            assert_relative_eq!((pos - focus).length(), 1200.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_inclination_stays_in_plane() {
        let params = OrbitalParameters::circular(100.0, 0.0, 5.0);
        let pos = solve_position(DVec3::ZERO, &params, 1.234);
        assert_relative_eq!(pos.z, 0.0);
    }

    #[test]
    fn test_inclination_rotates_y_into_z() {
        let params = OrbitalParameters::circular(100.0, FRAC_PI_2, 5.0);
        let pos = solve_position(DVec3::ZERO, &params, FRAC_PI_2);

        assert_vec_close(pos, DVec3::new(0.0, 0.0, 100.0), 1e-9);
    }

    #[test]
    fn test_elliptical_periapsis_and_apoapsis() {
        let params = OrbitalParameters {
            semi_major_axis: 1000.0,
            eccentricity: 0.5,
            inclination: 0.0,
            orbital_period: 20.0,
        };

        // Periapsis at θ = 0: a(1 - e)
        assert_relative_eq!(params.radius_at(0.0), 500.0, epsilon = 1e-9);
        // Apoapsis at θ = π: a(1 + e)
        assert_relative_eq!(params.radius_at(PI), 1500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_advance_uses_period() {
        let preset = OrbitPreset::satellite();
        let mut body = OrbitingBody::from_preset(&preset, DVec3::ZERO);

        // A quarter period moves the phase by π/2.
        body.advance(DVec3::ZERO, 2.5);
        assert_relative_eq!(body.orbital_angle, FRAC_PI_2, epsilon = 1e-12);

        // A full period later the body is back where it started.
        let before = body.position;
        body.advance(DVec3::ZERO, 10.0);
        assert_vec_close(body.position, before, 1e-9);
    }

    #[test]
    fn test_preset_start_positions() {
        let focus = DVec3::new(0.0, -500.0, -1500.0);
        let moon = OrbitingBody::from_preset(&OrbitPreset::moon(), focus);

        assert_eq!(moon.orbital_angle, 40.0);
        assert_relative_eq!((moon.position - focus).length(), 1600.0, epsilon = 1e-9);
    }

    #[test]
    fn test_validate_rejects_bad_orbits() {
        let good = OrbitalParameters::circular(10.0, 0.3, 1.0);
        assert!(good.validate().is_ok());

        let open = OrbitalParameters {
            eccentricity: 1.0,
            ..good
        };
        assert_eq!(open.validate(), Err(ConfigError::InvalidEccentricity(1.0)));

        let frozen = OrbitalParameters {
            orbital_period: 0.0,
            ..good
        };
        assert_eq!(frozen.validate(), Err(ConfigError::InvalidOrbitalPeriod(0.0)));

        let collapsed = OrbitalParameters {
            semi_major_axis: -5.0,
            ..good
        };
        assert_eq!(collapsed.validate(), Err(ConfigError::InvalidSemiMajorAxis(-5.0)));
    }
}
