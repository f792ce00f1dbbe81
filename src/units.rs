//! Unit tags for the quantities fed into the Rayleigh pipeline.
//!
//! Every raw number entering the crate travels with the unit it was measured
//! in. Conversions to SI happen once, when a [`Profile`](crate::profile::Profile)
//! is built or a [`Wavelength`] is queried.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WavelengthUnit {
    #[default]
    Nanometers,
    Meters,
}

/// A light wavelength tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wavelength {
    value: f64,
    unit: WavelengthUnit,
}

impl Wavelength {
    pub fn new(value: f64, unit: WavelengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn nanometers(value: f64) -> Self {
        Self::new(value, WavelengthUnit::Nanometers)
    }

    pub fn meters(value: f64) -> Self {
        Self::new(value, WavelengthUnit::Meters)
    }

    pub fn unit(&self) -> WavelengthUnit {
        self.unit
    }

    pub fn as_nanometers(&self) -> f64 {
        match self.unit {
            WavelengthUnit::Nanometers => self.value,
            WavelengthUnit::Meters => self.value * 1e9,
        }
    }

    pub fn as_meters(&self) -> f64 {
        match self.unit {
            WavelengthUnit::Nanometers => self.value * 1e-9,
            WavelengthUnit::Meters => self.value,
        }
    }
}

impl fmt::Display for Wavelength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            WavelengthUnit::Nanometers => write!(f, "{} nm", self.value),
            WavelengthUnit::Meters => write!(f, "{} m", self.value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureUnit {
    #[default]
    Pascals,
    Hectopascals,
}

impl PressureUnit {
    pub fn to_pascals(self, value: f64) -> f64 {
        match self {
            PressureUnit::Pascals => value,
            PressureUnit::Hectopascals => value * 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Kelvin,
    Celsius,
}

impl TemperatureUnit {
    pub fn to_kelvin(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Kelvin => value,
            TemperatureUnit::Celsius => value + 273.15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AltitudeUnit {
    #[default]
    Meters,
    Kilometers,
}

impl AltitudeUnit {
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            AltitudeUnit::Meters => value,
            AltitudeUnit::Kilometers => value * 1000.0,
        }
    }
}

/// Units of the three co-indexed series of a sounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileUnits {
    pub pressure: PressureUnit,
    pub temperature: TemperatureUnit,
    pub altitude: AltitudeUnit,
}

impl ProfileUnits {
    /// Pascals, kelvin and meters.
    pub fn si() -> Self {
        Self::default()
    }
}
