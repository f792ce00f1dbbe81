use log::debug;
use serde::Serialize;

use crate::profile::Profile;
use crate::rayleigh::depolarization::{DepolarizationBounds, depolarization_ratio};
use crate::rayleigh::error::RayleighError;
use crate::rayleigh::scattering::{
    backscatter_coefficient, cross_section_from, extinction_coefficient, number_density,
    refractive_index,
};
use crate::rayleigh::transmission::{IntegrationRule, optical_depth};
use crate::units::{ProfileUnits, Wavelength};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RayleighOptions {
    pub integration: IntegrationRule,
    pub bounds: DepolarizationBounds,
}

/// Molecular optical properties of one profile
#[derive(Debug, Clone, Serialize)]
pub struct RayleighProfile {
    pub altitude: Vec<f64>,                 // Altitude [m]
    pub number_density: Vec<f64>,           // Molecular number density [m^-3]
    pub backscatter: Vec<f64>,              // Backscatter coefficient [m^-1 sr^-1]
    pub extinction: Vec<f64>,               // Extinction coefficient [km^-1]
    pub backscatter_transmission: Vec<f64>, // Attenuated backscatter [m^-1 sr^-1]
    pub transmission: f64,                  // Two-way transmission [dimensionless]
    pub optical_depth: f64,                 // One-way optical depth [dimensionless]
    pub refractive_index: f64,              // Dry-air refractive index at STP
    pub depolarization_ratio: f64,          // Depolarization ratio [dimensionless]
    pub cross_section: f64,                 // Scattering cross-section [m^2]
}

/// Runs the full Rayleigh pipeline for one profile.
///
/// The profile is already SI; the wavelength is converted here. Nothing is
/// returned unless every stage succeeds.
pub fn compute_rayleigh_profile(
    wavelength: Wavelength,
    profile: &Profile,
    options: &RayleighOptions,
) -> Result<RayleighProfile, RayleighError> {
    let wavelength_nm = wavelength.as_nanometers();
    let wavelength_m = wavelength.as_meters();

    let n = refractive_index(wavelength_nm)?;
    let depol = depolarization_ratio(wavelength_nm, options.bounds)?;
    let sigma = cross_section_from(wavelength_nm, n, depol);
    debug!(
        "Rayleigh constants at {}: n = {}, depolarization = {}, cross-section = {:e} m^2",
        wavelength, n, depol, sigma
    );

    let samples = profile.pressure().iter().zip(profile.temperature());

    let backscatter: Vec<f64> = samples
        .clone()
        .map(|(&p, &t)| backscatter_coefficient(p, t, wavelength_m))
        .collect();

    let density: Vec<f64> = samples.map(|(&p, &t)| number_density(p, t)).collect();

    let extinction: Vec<f64> = density
        .iter()
        .map(|&nd| extinction_coefficient(nd, sigma))
        .collect();

    let tau = optical_depth(&extinction, profile.altitude(), options.integration);
    let transmission = (-2.0 * tau).exp();
    debug!(
        "Integrated {} samples ({:?}): optical depth = {}, two-way transmission = {}",
        profile.len(),
        options.integration,
        tau,
        transmission
    );

    let backscatter_transmission = backscatter.iter().map(|b| b * transmission).collect();

    Ok(RayleighProfile {
        altitude: profile.altitude().to_vec(),
        number_density: density,
        backscatter,
        extinction,
        backscatter_transmission,
        transmission,
        optical_depth: tau,
        refractive_index: n,
        depolarization_ratio: depol,
        cross_section: sigma,
    })
}

/// [`compute_rayleigh_profile`] on raw series tagged with `units`.
pub fn compute_rayleigh_series(
    wavelength: Wavelength,
    pressure: &[f64],
    temperature: &[f64],
    altitude: &[f64],
    units: ProfileUnits,
    options: &RayleighOptions,
) -> Result<RayleighProfile, RayleighError> {
    let profile = Profile::new(
        pressure.to_vec(),
        temperature.to_vec(),
        altitude.to_vec(),
        units,
    )?;
    compute_rayleigh_profile(wavelength, &profile, options)
}
