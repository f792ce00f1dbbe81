//! Optical depth and two-way transmission through an extinction profile.

use serde::{Deserialize, Serialize};

/// How extinction samples are paired with altitude intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationRule {
    /// `Σ α(z_i) · (z_i − z_{i−1})`: each interval takes the extinction of its
    /// upper sample.
    #[default]
    PerSample,
    /// `Σ ½(α(z_{i−1}) + α(z_i)) · (z_i − z_{i−1})`.
    Trapezoidal,
    /// Every interval is multiplied by the whole extinction profile and the
    /// products summed, i.e. `(Σ α) · (z_last − z_first)`. Reproduces the
    /// array-broadcast integral of the legacy lidar utilities; overestimates
    /// optical depth by roughly the number of samples.
    Broadcast,
}

/// Vertical optical depth of `extinction` (km^-1) over `altitude` (m).
///
/// Returns 0 when there is no interval to integrate over. Both slices are
/// expected to be the same length; extra samples in the longer one are ignored.
pub fn optical_depth(extinction: &[f64], altitude: &[f64], rule: IntegrationRule) -> f64 {
    let n = extinction.len().min(altitude.len());
    if n < 2 {
        return 0.0;
    }

    // extinction is per km
    let dz = |i: usize| (altitude[i] - altitude[i - 1]) / 1000.0;

    match rule {
        IntegrationRule::PerSample => (1..n).map(|i| extinction[i] * dz(i)).sum(),
        IntegrationRule::Trapezoidal => (1..n)
            .map(|i| 0.5 * (extinction[i - 1] + extinction[i]) * dz(i))
            .sum(),
        IntegrationRule::Broadcast => {
            let total: f64 = extinction[..n].iter().sum();
            (1..n).map(|i| total * dz(i)).sum()
        }
    }
}

/// Round-trip transmission `exp(−2τ)` through the whole profile.
pub fn two_way_transmission(extinction: &[f64], altitude: &[f64], rule: IntegrationRule) -> f64 {
    (-2.0 * optical_depth(extinction, altitude, rule)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EXTINCTION: [f64; 3] = [0.3, 0.2, 0.1];
    const ALTITUDE: [f64; 3] = [0.0, 1000.0, 3000.0];

    #[test]
    fn test_per_sample_pairs_upper_sample_with_interval() {
        let tau = optical_depth(&EXTINCTION, &ALTITUDE, IntegrationRule::PerSample);
        assert_relative_eq!(tau, 0.2 * 1.0 + 0.1 * 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_trapezoidal() {
        let tau = optical_depth(&EXTINCTION, &ALTITUDE, IntegrationRule::Trapezoidal);
        assert_relative_eq!(tau, 0.25 * 1.0 + 0.15 * 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_broadcast_multiplies_total_extinction() {
        let tau = optical_depth(&EXTINCTION, &ALTITUDE, IntegrationRule::Broadcast);
        assert_relative_eq!(tau, 0.6 * 3.0, max_relative = 1e-12);
    }

    #[test]
    fn test_transmission_is_exp_of_twice_the_depth() {
        let t = two_way_transmission(&EXTINCTION, &ALTITUDE, IntegrationRule::PerSample);
        assert_relative_eq!(t, (-2.0_f64 * 0.4).exp(), max_relative = 1e-12);
        assert!(t > 0.0 && t <= 1.0);
    }

    #[test]
    fn test_zero_interval_profile_is_fully_transmitting() {
        for rule in [
            IntegrationRule::PerSample,
            IntegrationRule::Trapezoidal,
            IntegrationRule::Broadcast,
        ] {
            assert_eq!(two_way_transmission(&[0.5], &[100.0], rule), 1.0);
            assert_eq!(two_way_transmission(&[], &[], rule), 1.0);
        }
    }

    #[test]
    fn test_zero_extinction_is_fully_transmitting() {
        let t = two_way_transmission(&[0.0; 3], &ALTITUDE, IntegrationRule::Trapezoidal);
        assert_eq!(t, 1.0);
    }

    #[test]
    fn test_rule_deserializes_snake_case() {
        let rule: IntegrationRule = serde_json::from_str("\"per_sample\"").unwrap();
        assert_eq!(rule, IntegrationRule::PerSample);
        let rule: IntegrationRule = serde_json::from_str("\"broadcast\"").unwrap();
        assert_eq!(rule, IntegrationRule::Broadcast);
    }
}
