use serde::{Deserialize, Serialize};

use crate::rayleigh::constants::{
    DEPOLARIZATION_MAX_NM, DEPOLARIZATION_MIN_NM, DEPOLARIZATION_TABLE, TABLE_EDGE_TOLERANCE_NM,
};
use crate::rayleigh::error::RayleighError;

/// What to do with a wavelength outside the tabulated depolarization range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepolarizationBounds {
    /// Report `WavelengthOutOfRange`.
    #[default]
    Strict,
    /// Hold the value of the nearest table edge.
    Clamp,
}

/// Depolarization ratio of air at `wavelength_nm`, linearly interpolated
/// between the two bracketing table rows.
pub fn depolarization_ratio(
    wavelength_nm: f64,
    bounds: DepolarizationBounds,
) -> Result<f64, RayleighError> {
    if !wavelength_nm.is_finite() || wavelength_nm <= 0.0 {
        return Err(RayleighError::InvalidWavelength(wavelength_nm));
    }

    let mut target = wavelength_nm;
    if (target - DEPOLARIZATION_MIN_NM).abs() <= TABLE_EDGE_TOLERANCE_NM {
        target = DEPOLARIZATION_MIN_NM;
    } else if (target - DEPOLARIZATION_MAX_NM).abs() <= TABLE_EDGE_TOLERANCE_NM {
        target = DEPOLARIZATION_MAX_NM;
    }

    if !(DEPOLARIZATION_MIN_NM..=DEPOLARIZATION_MAX_NM).contains(&target) {
        match bounds {
            DepolarizationBounds::Strict => {
                return Err(RayleighError::WavelengthOutOfRange {
                    nanometers: wavelength_nm,
                    min: DEPOLARIZATION_MIN_NM,
                    max: DEPOLARIZATION_MAX_NM,
                });
            }
            DepolarizationBounds::Clamp => {
                target = target.clamp(DEPOLARIZATION_MIN_NM, DEPOLARIZATION_MAX_NM);
            }
        }
    }

    // Keys are whole nanometers, so floor/ceil select the bracketing rows.
    let below = DEPOLARIZATION_TABLE
        .range(..=target.floor() as u32)
        .next_back();
    let above = DEPOLARIZATION_TABLE.range(target.ceil() as u32..).next();

    match (below, above) {
        (Some((&wl_low, &depol_low)), Some((&wl_high, &depol_high))) => {
            if wl_low == wl_high {
                return Ok(depol_low);
            }
            let (wl_low, wl_high) = (wl_low as f64, wl_high as f64);
            let rr = (target - wl_low) / (wl_high - wl_low);
            Ok(depol_low + rr * (depol_high - depol_low))
        }
        // Unreachable once the target sits inside the table range.
        _ => Err(RayleighError::WavelengthOutOfRange {
            nanometers: wavelength_nm,
            min: DEPOLARIZATION_MIN_NM,
            max: DEPOLARIZATION_MAX_NM,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_table_has_36_rows() {
        assert_eq!(DEPOLARIZATION_TABLE.len(), 36);
        assert_eq!(DEPOLARIZATION_TABLE.keys().next(), Some(&200));
        assert_eq!(DEPOLARIZATION_TABLE.keys().next_back(), Some(&1064));
    }

    #[test]
    fn test_tabulated_points_are_exact() {
        let strict = DepolarizationBounds::Strict;
        assert_eq!(depolarization_ratio(1064.0, strict).unwrap(), 0.0273018);
        assert_eq!(depolarization_ratio(200.0, strict).unwrap(), 0.0454545);
        assert_eq!(depolarization_ratio(350.0, strict).unwrap(), 0.0301042);
    }

    #[test]
    fn test_interpolates_between_rows() {
        let strict = DepolarizationBounds::Strict;

        // 500 and 550 nm carry the same value
        assert_relative_eq!(
            depolarization_ratio(532.0, strict).unwrap(),
            0.028425,
            max_relative = 1e-12
        );

        // halfway between 450 nm (0.0289855) and 500 nm (0.028425)
        assert_relative_eq!(
            depolarization_ratio(475.0, strict).unwrap(),
            0.02870525,
            max_relative = 1e-12
        );

        // a quarter of the way from 200 nm to 205 nm
        let expected = 0.0454545 + 0.25 * (0.0438372 - 0.0454545);
        assert_relative_eq!(
            depolarization_ratio(201.25, strict).unwrap(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_out_of_range_is_an_error_when_strict() {
        let result = depolarization_ratio(1550.0, DepolarizationBounds::Strict);
        assert!(matches!(
            result,
            Err(RayleighError::WavelengthOutOfRange { .. })
        ));

        let result = depolarization_ratio(199.9, DepolarizationBounds::Strict);
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_clamps_to_edge() {
        let clamp = DepolarizationBounds::Clamp;
        assert_eq!(depolarization_ratio(1550.0, clamp).unwrap(), 0.0273018);
        assert_eq!(depolarization_ratio(150.0, clamp).unwrap(), 0.0454545);
    }

    #[test]
    fn test_edge_round_off_is_tolerated() {
        let result = depolarization_ratio(1064.0000000000002, DepolarizationBounds::Strict);
        assert_eq!(result.unwrap(), 0.0273018);
    }

    #[test]
    fn test_invalid_wavelength() {
        let clamp = DepolarizationBounds::Clamp;
        assert!(matches!(
            depolarization_ratio(f64::NAN, clamp),
            Err(RayleighError::InvalidWavelength(_))
        ));
        assert!(depolarization_ratio(-532.0, clamp).is_err());
    }
}
