use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::batch::BatchError;
use crate::profile::{Profile, ProfileError};
use crate::units::ProfileUnits;

const LAUNCH_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// One radiosonde sounding, already decoded into co-indexed series.
#[derive(Debug, Clone)]
pub struct SoundingDocument {
    pub station: Option<String>,
    pub launch_time: Option<NaiveDateTime>,
    pub pressure: Vec<f64>,
    pub temperature: Vec<f64>,
    pub altitude: Vec<f64>,
}

impl<'de> Deserialize<'de> for SoundingDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct SoundingHelper {
            station: Option<String>,
            launch_time: Option<String>,
            pressure: Vec<f64>,
            temperature: Vec<f64>,
            altitude: Vec<f64>,
        }

        let helper = SoundingHelper::deserialize(deserializer)?;

        let launch_time = match helper.launch_time {
            Some(raw) => Some(parse_launch_time(&raw).ok_or_else(|| {
                D::Error::custom(format!("Invalid launch_time format: {}", raw))
            })?),
            None => None,
        };

        Ok(SoundingDocument {
            station: helper.station,
            launch_time,
            pressure: helper.pressure,
            temperature: helper.temperature,
            altitude: helper.altitude,
        })
    }
}

fn parse_launch_time(raw: &str) -> Option<NaiveDateTime> {
    LAUNCH_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

impl SoundingDocument {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BatchError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        Ok(serde_json::from_reader(reader)?)
    }

    /// Builds the SI profile, interpreting the raw series with `units`.
    pub fn to_profile(&self, units: ProfileUnits) -> Result<Profile, ProfileError> {
        Profile::new(
            self.pressure.clone(),
            self.temperature.clone(),
            self.altitude.clone(),
            units,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{PressureUnit, TemperatureUnit};
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_deserialize_sounding() {
        let doc: SoundingDocument = serde_json::from_str(
            r#"{
                "station": "IAD",
                "launch_time": "2020-03-08T00:00:00",
                "pressure": [1013.0, 925.0],
                "temperature": [12.4, 6.0],
                "altitude": [88.0, 762.0]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.station.as_deref(), Some("IAD"));
        let launch = doc.launch_time.unwrap();
        assert_eq!(launch.date(), NaiveDate::from_ymd_opt(2020, 3, 8).unwrap());
        assert_eq!(launch.hour(), 0);

        let units = ProfileUnits {
            pressure: PressureUnit::Hectopascals,
            temperature: TemperatureUnit::Celsius,
            ..ProfileUnits::si()
        };
        let profile = doc.to_profile(units).unwrap();
        assert_eq!(profile.pressure(), &[101300.0, 92500.0]);
    }

    #[test]
    fn test_alternate_launch_time_format() {
        let doc: SoundingDocument = serde_json::from_str(
            r#"{ "launch_time": "2020-03-08 12:00",
                 "pressure": [], "temperature": [], "altitude": [] }"#,
        )
        .unwrap();
        assert_eq!(doc.launch_time.unwrap().hour(), 12);
        assert!(doc.station.is_none());

        // an empty sounding parses but cannot become a profile
        assert_eq!(
            doc.to_profile(ProfileUnits::si()),
            Err(ProfileError::Empty)
        );
    }

    #[test]
    fn test_invalid_launch_time() {
        let result = serde_json::from_str::<SoundingDocument>(
            r#"{ "launch_time": "08/03/2020",
                 "pressure": [], "temperature": [], "altitude": [] }"#,
        );
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Invalid launch_time format"), "{message}");
    }
}
