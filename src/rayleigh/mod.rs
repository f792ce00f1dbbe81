//! Molecular (Rayleigh) scattering of a lidar beam by a radiosonde profile
//!
//! The pipeline runs refractive index → depolarization ratio → scattering
//! cross-section → extinction → two-way transmission, and combines the result
//! with the empirical clear-air backscatter fit to give the attenuated
//! molecular backscatter used for lidar calibration.
//!
//! ## Usage Example
//!
//! ```rust
//! use rayleigh_lidar::profile::Profile;
//! use rayleigh_lidar::rayleigh::{compute_rayleigh_profile, RayleighOptions};
//! use rayleigh_lidar::units::{AltitudeUnit, ProfileUnits, Wavelength};
//!
//! let units = ProfileUnits {
//!     altitude: AltitudeUnit::Kilometers,
//!     ..ProfileUnits::si()
//! };
//! let profile = Profile::new(
//!     vec![101325.0, 90000.0, 80000.0],
//!     vec![288.15, 280.0, 270.0],
//!     vec![0.0, 1.0, 2.0],
//!     units,
//! )
//! .unwrap();
//!
//! let result = compute_rayleigh_profile(
//!     Wavelength::nanometers(1064.0),
//!     &profile,
//!     &RayleighOptions::default(),
//! )
//! .unwrap();
//! println!("Two-way transmission: {:.4}", result.transmission);
//! ```

pub mod calculator;
pub mod constants;
pub mod depolarization;
pub mod error;
pub mod scattering;
pub mod transmission;

pub use calculator::{
    RayleighOptions, RayleighProfile, compute_rayleigh_profile, compute_rayleigh_series,
};
pub use depolarization::{DepolarizationBounds, depolarization_ratio};
pub use error::RayleighError;
pub use scattering::*;
pub use transmission::{IntegrationRule, optical_depth, two_way_transmission};
