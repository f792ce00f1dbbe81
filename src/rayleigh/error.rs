use thiserror::Error;

use crate::profile::ProfileError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RayleighError {
    #[error("wavelength {nanometers} nm is outside the tabulated depolarization range [{min}, {max}] nm")]
    WavelengthOutOfRange { nanometers: f64, min: f64, max: f64 },

    #[error("wavelength {0} nm is not usable for Rayleigh scattering")]
    InvalidWavelength(f64),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}
