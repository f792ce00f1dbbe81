use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::binning::AltitudeBins;
use crate::rayleigh::{DepolarizationBounds, IntegrationRule, RayleighOptions};
use crate::units::{
    AltitudeUnit, PressureUnit, ProfileUnits, TemperatureUnit, Wavelength, WavelengthUnit,
};

pub mod error;
pub use error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    wavelength: Wavelength,
    units: ProfileUnits,
    options: RayleighOptions,
    profiles: String,
    output_directory: Option<String>,
    bins: Option<AltitudeBins>,
}

// Deserializes a Config through a helper struct so the wavelength and the
// altitude bins are validated before a Config exists.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            wavelength: f64,
            #[serde(default)]
            wavelength_unit: WavelengthUnit,
            #[serde(default)]
            pressure_unit: PressureUnit,
            #[serde(default)]
            temperature_unit: TemperatureUnit,
            #[serde(default)]
            altitude_unit: AltitudeUnit,
            #[serde(default)]
            integration: IntegrationRule,
            #[serde(default)]
            depolarization_bounds: DepolarizationBounds,
            profiles: String,
            output_directory: Option<String>,
            binning: Option<BinningHelper>,
        }

        #[derive(Deserialize)]
        struct BinningHelper {
            #[serde(default)]
            start: f64,
            stop: f64,
            width: f64,
        }

        let helper = ConfigHelper::deserialize(deserializer)?;

        if !helper.wavelength.is_finite() || helper.wavelength <= 0.0 {
            return Err(D::Error::custom(ConfigError::InvalidWavelength(
                helper.wavelength,
            )));
        }

        let bins = if let Some(binning) = helper.binning {
            Some(
                AltitudeBins::uniform(binning.start, binning.stop, binning.width)
                    .map_err(|e| D::Error::custom(ConfigError::Binning(e)))?,
            )
        } else {
            None
        };

        Ok(Config {
            wavelength: Wavelength::new(helper.wavelength, helper.wavelength_unit),
            units: ProfileUnits {
                pressure: helper.pressure_unit,
                temperature: helper.temperature_unit,
                altitude: helper.altitude_unit,
            },
            options: RayleighOptions {
                integration: helper.integration,
                bounds: helper.depolarization_bounds,
            },
            profiles: helper.profiles,
            output_directory: helper.output_directory,
            bins,
        })
    }
}

impl Config {
    pub fn new(wavelength: Wavelength, profiles: impl Into<String>) -> Self {
        Self {
            wavelength,
            units: ProfileUnits::si(),
            options: RayleighOptions::default(),
            profiles: profiles.into(),
            output_directory: None,
            bins: None,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader).map_err(ConfigError::from)?;

        Ok(config)
    }

    pub fn with_units(mut self, units: ProfileUnits) -> Self {
        self.units = units;
        self
    }

    pub fn with_options(mut self, options: RayleighOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_output_directory(mut self, output_directory: impl Into<String>) -> Self {
        self.output_directory = Some(output_directory.into());
        self
    }

    pub fn with_bins(mut self, bins: AltitudeBins) -> Self {
        self.bins = Some(bins);
        self
    }

    pub fn wavelength(&self) -> Wavelength {
        self.wavelength
    }

    pub fn units(&self) -> ProfileUnits {
        self.units
    }

    pub fn options(&self) -> &RayleighOptions {
        &self.options
    }

    /// Glob pattern matching the sounding documents to process.
    pub fn profiles(&self) -> &str {
        &self.profiles
    }

    pub fn output_directory(&self) -> Option<&str> {
        self.output_directory.as_deref()
    }

    pub fn bins(&self) -> Option<&AltitudeBins> {
        self.bins.as_ref()
    }
}
