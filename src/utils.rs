use log::info;

/// Summary of the finite values of a profile quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub valid: usize,
    pub total: usize,
}

impl ProfileStatistics {
    /// `None` when no value is finite.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let valid_values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

        if valid_values.is_empty() {
            return None;
        }

        Some(Self {
            min: valid_values.iter().fold(f64::INFINITY, |a, &b| a.min(b)),
            max: valid_values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b)),
            mean: valid_values.iter().sum::<f64>() / valid_values.len() as f64,
            valid: valid_values.len(),
            total: values.len(),
        })
    }
}

pub fn log_profile_statistics(name: &str, values: &[f64]) {
    match ProfileStatistics::from_values(values) {
        Some(stats) => {
            info!("  {name}");
            info!("    Min: {:.4e}", stats.min);
            info!("    Max: {:.4e}", stats.max);
            info!("    Mean: {:.4e}", stats.mean);
            info!(
                "    Valid samples: {} / {} ({:.1}%)",
                stats.valid,
                stats.total,
                100.0 * stats.valid as f64 / stats.total as f64
            );
        }
        None => info!("  {name}: no finite values"),
    }
}
