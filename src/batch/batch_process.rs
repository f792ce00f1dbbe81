use chrono::NaiveDateTime;
use log::{info, warn};
use serde::Serialize;

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::batch::{BatchError, SoundingDocument, file_stem, is_supported_file_type};
use crate::binning::BinnedValue;
use crate::config::Config;
use crate::rayleigh::{RayleighProfile, compute_rayleigh_profile};
use crate::utils::log_profile_statistics;

/// Everything written out for one sounding
#[derive(Debug, Clone, Serialize)]
pub struct RayleighReport {
    pub source: String,
    pub station: Option<String>,
    pub launch_time: Option<NaiveDateTime>,
    pub wavelength_nm: f64,
    #[serde(flatten)]
    pub profile: RayleighProfile,
    /// Attenuated backscatter averaged per altitude bin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bins: Option<Vec<BinnedValue>>,
}

#[derive(Debug, Clone)]
pub struct ProcessedSounding {
    pub source: PathBuf,
    pub output: Option<PathBuf>,
    pub report: RayleighReport,
}

#[derive(Debug)]
pub struct BatchProcessor {
    config: Config,
}

impl BatchProcessor {
    pub fn new(config: Config) -> Self {
        BatchProcessor { config }
    }

    /// Sounding documents matched by the configured glob pattern, sorted.
    pub fn find_profiles(&self) -> Result<Vec<PathBuf>, BatchError> {
        let mut paths = Vec::new();
        for entry in glob::glob(self.config.profiles())? {
            let path = entry?;
            if path.is_file() && is_supported_file_type(&path) {
                paths.push(path);
            }
        }

        if paths.is_empty() {
            return Err(BatchError::NoProfiles(self.config.profiles().to_string()));
        }
        paths.sort();

        Ok(paths)
    }

    pub fn process_file(&self, path: &Path) -> Result<RayleighReport, BatchError> {
        let sounding = SoundingDocument::from_file(path)?;
        let profile = sounding.to_profile(self.config.units())?;

        let result =
            compute_rayleigh_profile(self.config.wavelength(), &profile, self.config.options())?;

        let bins = match self.config.bins() {
            Some(bins) => Some(bins.mean_by_bin(&result.backscatter_transmission, &result.altitude)?),
            None => None,
        };

        Ok(RayleighReport {
            source: path.to_string_lossy().to_string(),
            station: sounding.station,
            launch_time: sounding.launch_time,
            wavelength_nm: self.config.wavelength().as_nanometers(),
            profile: result,
            bins,
        })
    }

    /// Processes every matched sounding. A sounding that fails is logged and
    /// skipped; the others still run. A report that cannot be written is
    /// logged and kept with `output: None`.
    pub fn process(&self) -> Result<Vec<ProcessedSounding>, BatchError> {
        let paths = self.find_profiles()?;
        let total = paths.len();
        info!(
            "Processing {} sounding(s) at {}",
            total,
            self.config.wavelength()
        );

        if let Some(output_dir) = self.config.output_directory() {
            fs::create_dir_all(output_dir)?;
        }

        let mut processed = Vec::with_capacity(paths.len());
        let mut claimed = HashSet::new();
        for path in paths {
            let report = match self.process_file(&path) {
                Ok(report) => report,
                Err(e) => {
                    warn!("✗ Skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            info!(
                "✓ {}: transmission = {:.6}, optical depth = {:.6}",
                path.display(),
                report.profile.transmission,
                report.profile.optical_depth
            );
            log_profile_statistics(
                "backscatter x transmission (m-1 sr-1)",
                &report.profile.backscatter_transmission,
            );

            let output = match self.config.output_directory() {
                Some(output_dir) => {
                    match self.write_report(output_dir, &path, &report, &mut claimed) {
                        Ok(written) => Some(written),
                        Err(e) => {
                            warn!("✗ Could not write report for {}: {}", path.display(), e);
                            None
                        }
                    }
                }
                None => None,
            };

            processed.push(ProcessedSounding {
                source: path,
                output,
                report,
            });
        }

        info!("Finished {} of {} sounding(s)", processed.len(), total);

        Ok(processed)
    }

    /// Writes the report under a name not yet used in this run; see
    /// `report_path`.
    fn write_report(
        &self,
        output_dir: &str,
        source: &Path,
        report: &RayleighReport,
        claimed: &mut HashSet<PathBuf>,
    ) -> Result<PathBuf, BatchError> {
        let basename = report_basename(source, report.station.as_deref(), report.launch_time);
        let path = report_path(Path::new(output_dir), &basename, source, claimed);

        let writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(writer, report)?;

        info!("✓ Saved report to: {}", path.display());
        Ok(path)
    }
}

/// `rayleigh_<station>_<YYYYMMDDTHHMM>`, falling back to the source file stem
/// for whatever part is missing. The station is reduced to `[A-Za-z0-9_-]`.
fn report_basename(
    source: &Path,
    station: Option<&str>,
    launch_time: Option<NaiveDateTime>,
) -> String {
    let station = station
        .map(sanitize_station)
        .filter(|station| !station.is_empty());

    match (station, launch_time) {
        (Some(station), Some(time)) => {
            format!("rayleigh_{}_{}", station, time.format("%Y%m%dT%H%M"))
        }
        (Some(station), None) => format!("rayleigh_{}_{}", station, file_stem(source)),
        (None, Some(time)) => format!(
            "rayleigh_{}_{}",
            file_stem(source),
            time.format("%Y%m%dT%H%M")
        ),
        (None, None) => format!("rayleigh_{}", file_stem(source)),
    }
}

fn sanitize_station(station: &str) -> String {
    station
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// First of `<basename>.json`, `<basename>_<stem>.json`, `<basename>_<stem>_<n>.json`
/// that no earlier sounding of the run has claimed.
fn report_path(
    output_dir: &Path,
    basename: &str,
    source: &Path,
    claimed: &mut HashSet<PathBuf>,
) -> PathBuf {
    let path = output_dir.join(format!("{basename}.json"));
    if claimed.insert(path.clone()) {
        return path;
    }

    let stem = file_stem(source);
    let mut n = 0;
    loop {
        let name = match n {
            0 => format!("{basename}_{stem}.json"),
            _ => format!("{basename}_{stem}_{n}.json"),
        };
        let path = output_dir.join(name);
        if claimed.insert(path.clone()) {
            return path;
        }
        n += 1;
    }
}
