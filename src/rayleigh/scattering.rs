//! Closed-form molecular scattering quantities.
//!
//! Scalar functions only; the calculator maps them over a profile.

use std::f64::consts::PI;

use crate::rayleigh::constants::{
    BACKSCATTER_EXPONENT, BACKSCATTER_FIT, BOLTZMANN, N_STP, REFRACTIVITY_A, REFRACTIVITY_B,
    REFRACTIVITY_C, REFRACTIVITY_D,
};
use crate::rayleigh::depolarization::{DepolarizationBounds, depolarization_ratio};
use crate::rayleigh::error::RayleighError;

/// Molecular backscatter coefficient (m^-1 sr^-1) of clear, dry air.
///
/// Empirical fit; `temperature` must be in kelvin and `wavelength_m` in meters.
/// Inputs are not range-checked here.
pub fn backscatter_coefficient(pressure: f64, temperature: f64, wavelength_m: f64) -> f64 {
    BACKSCATTER_FIT * (pressure / temperature) * wavelength_m.powf(-BACKSCATTER_EXPONENT)
}

/// Ideal-gas molecular number density (m^-3) from pressure (Pa) and temperature (K).
pub fn number_density(pressure: f64, temperature: f64) -> f64 {
    pressure / (BOLTZMANN * temperature)
}

/// Refractive index of dry air at STP for a wavelength in nanometers.
pub fn refractive_index(wavelength_nm: f64) -> Result<f64, RayleighError> {
    if !wavelength_nm.is_finite() || wavelength_nm <= 0.0 {
        return Err(RayleighError::InvalidWavelength(wavelength_nm));
    }

    let sigma2 = 1e6 / (wavelength_nm * wavelength_nm);
    let denom_a = REFRACTIVITY_B - sigma2;
    let denom_c = REFRACTIVITY_D - sigma2;
    // Both resonance terms blow up in the far UV
    if denom_a <= 0.0 || denom_c <= 0.0 {
        return Err(RayleighError::InvalidWavelength(wavelength_nm));
    }

    Ok(1.0 + 1e-8 * (REFRACTIVITY_A / denom_a + REFRACTIVITY_C / denom_c))
}

/// Rayleigh scattering cross-section per molecule (m^2) for a wavelength in
/// nanometers, including the King correction for depolarization.
pub fn scattering_cross_section(
    wavelength_nm: f64,
    bounds: DepolarizationBounds,
) -> Result<f64, RayleighError> {
    let n = refractive_index(wavelength_nm)?;
    let depol = depolarization_ratio(wavelength_nm, bounds)?;
    Ok(cross_section_from(wavelength_nm, n, depol))
}

pub(crate) fn cross_section_from(wavelength_nm: f64, n: f64, depol: f64) -> f64 {
    let n2 = n * n;
    let king = (6.0 + 3.0 * depol) / (6.0 - 7.0 * depol);

    let mut sigma = 1e36 * 24.0 * PI.powi(3) * (n2 - 1.0).powi(2);
    sigma /= wavelength_nm.powi(4) * N_STP.powi(2) * (n2 + 2.0).powi(2);
    sigma * king
}

/// Extinction coefficient (km^-1) from number density (m^-3) and
/// cross-section (m^2).
pub fn extinction_coefficient(number_density: f64, cross_section: f64) -> f64 {
    number_density * cross_section * 1000.0
}
