//! Vertical atmospheric profile normalized to SI units.

use thiserror::Error;

use crate::units::ProfileUnits;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("profile is empty")]
    Empty,

    #[error(
        "profile series have different lengths (pressure: {pressure}, temperature: {temperature}, altitude: {altitude})"
    )]
    MismatchedLengths {
        pressure: usize,
        temperature: usize,
        altitude: usize,
    },

    #[error("{quantity} at index {index} is not a finite number")]
    NonFinite { quantity: &'static str, index: usize },

    #[error("temperature at index {index} is {kelvin} K; must be above absolute zero")]
    NonPositiveTemperature { index: usize, kelvin: f64 },

    #[error("pressure at index {index} is negative ({pascals} Pa)")]
    NegativePressure { index: usize, pascals: f64 },

    #[error("altitude must be strictly increasing (violated at index {index})")]
    AltitudeNotIncreasing { index: usize },
}

/// Pressure (Pa), temperature (K) and altitude (m), co-indexed and ascending in
/// altitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pressure: Vec<f64>,
    temperature: Vec<f64>,
    altitude: Vec<f64>,
}

impl Profile {
    /// Converts the series to SI and checks them. Nothing downstream
    /// re-validates, so every shape or degeneracy problem surfaces here.
    pub fn new(
        pressure: Vec<f64>,
        temperature: Vec<f64>,
        altitude: Vec<f64>,
        units: ProfileUnits,
    ) -> Result<Self, ProfileError> {
        if pressure.len() != temperature.len() || pressure.len() != altitude.len() {
            return Err(ProfileError::MismatchedLengths {
                pressure: pressure.len(),
                temperature: temperature.len(),
                altitude: altitude.len(),
            });
        }
        if pressure.is_empty() {
            return Err(ProfileError::Empty);
        }

        let pressure: Vec<f64> = pressure
            .into_iter()
            .map(|p| units.pressure.to_pascals(p))
            .collect();
        let temperature: Vec<f64> = temperature
            .into_iter()
            .map(|t| units.temperature.to_kelvin(t))
            .collect();
        let altitude: Vec<f64> = altitude
            .into_iter()
            .map(|z| units.altitude.to_meters(z))
            .collect();

        check_finite("pressure", &pressure)?;
        check_finite("temperature", &temperature)?;
        check_finite("altitude", &altitude)?;

        if let Some((index, &pascals)) = pressure.iter().enumerate().find(|(_, p)| **p < 0.0) {
            return Err(ProfileError::NegativePressure { index, pascals });
        }

        if let Some((index, &kelvin)) = temperature.iter().enumerate().find(|(_, t)| **t <= 0.0)
        {
            return Err(ProfileError::NonPositiveTemperature { index, kelvin });
        }

        if let Some(index) = (1..altitude.len()).find(|&i| altitude[i] <= altitude[i - 1]) {
            return Err(ProfileError::AltitudeNotIncreasing { index });
        }

        Ok(Self {
            pressure,
            temperature,
            altitude,
        })
    }

    pub fn len(&self) -> usize {
        self.pressure.len()
    }

    /// Always false for a constructed profile.
    pub fn is_empty(&self) -> bool {
        self.pressure.is_empty()
    }

    /// Pressure in pascals.
    pub fn pressure(&self) -> &[f64] {
        &self.pressure
    }

    /// Temperature in kelvin.
    pub fn temperature(&self) -> &[f64] {
        &self.temperature
    }

    /// Altitude in meters.
    pub fn altitude(&self) -> &[f64] {
        &self.altitude
    }
}

fn check_finite(quantity: &'static str, values: &[f64]) -> Result<(), ProfileError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ProfileError::NonFinite { quantity, index }),
        None => Ok(()),
    }
}
