//! Physical constants and tabulated coefficients for molecular scattering
//!
//! Values are used as published; the depolarization table in particular is
//! empirical and must not be regenerated from a fit.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Boltzmann constant (J K^-1)
pub const BOLTZMANN: f64 = 1.38064852e-23;

/// Molecular number density of air at standard temperature and pressure (m^-3)
pub const N_STP: f64 = 2.54691e25;

/// Scale factor of the empirical clear-air backscatter fit (m^-1 sr^-1, with
/// pressure in Pa, temperature in K and wavelength in m)
pub const BACKSCATTER_FIT: f64 = 2.938e-32;

/// Wavelength exponent of the backscatter fit
pub const BACKSCATTER_EXPONENT: f64 = 4.0117;

/// Dispersion terms of the dry-air refractive index (Peck and Reeder, 1972)
pub const REFRACTIVITY_A: f64 = 5791817.0;
pub const REFRACTIVITY_B: f64 = 238.0185;
pub const REFRACTIVITY_C: f64 = 167909.0;
pub const REFRACTIVITY_D: f64 = 57.362;

/// Depolarization ratio of air as a function of wavelength (nm)
/// 36 tabulated points from 200 nm to 1064 nm, interpolated linearly
pub static DEPOLARIZATION_TABLE: LazyLock<BTreeMap<u32, f64>> = LazyLock::new(|| {
    BTreeMap::from([
        (200, 0.0454545),
        (205, 0.0438372),
        (210, 0.0422133),
        (215, 0.0411272),
        (220, 0.0400381),
        (225, 0.0389462),
        (230, 0.0378513),
        (240, 0.0367534),
        (250, 0.0356527),
        (260, 0.0345489),
        (270, 0.033996),
        (280, 0.0328878),
        (290, 0.0323326),
        (300, 0.0317766),
        (310, 0.0317766),
        (320, 0.0312199),
        (330, 0.0306624),
        (340, 0.0306624),
        (350, 0.0301042),
        (360, 0.0301042),
        (370, 0.0301042),
        (380, 0.0295452),
        (390, 0.0295452),
        (400, 0.0295452),
        (450, 0.0289855),
        (500, 0.028425),
        (550, 0.028425),
        (600, 0.0278638),
        (650, 0.0278638),
        (700, 0.0278638),
        (800, 0.0273018),
        (850, 0.0273018),
        (900, 0.0273018),
        (950, 0.0273018),
        (1000, 0.0273018),
        (1064, 0.0273018),
    ])
});

/// Shortest tabulated wavelength (nm)
pub const DEPOLARIZATION_MIN_NM: f64 = 200.0;

/// Longest tabulated wavelength (nm)
pub const DEPOLARIZATION_MAX_NM: f64 = 1064.0;

/// Distance (nm) under which a wavelength is snapped onto a table edge
pub const TABLE_EDGE_TOLERANCE_NM: f64 = 1e-6;
