//! # Design Spectrum
//!
//! Site-adjusted (SMS, SM1) and design (SDS, SD1) spectral accelerations.

use serde::{Deserialize, Serialize};

use super::hazard::HazardParameters;
use super::site_coefficients::SiteCoefficients;

/// Design spectral values are two thirds of the site-adjusted values
const DESIGN_FRACTION: f64 = 2.0 / 3.0;

/// Adjusted and design spectral accelerations (g).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignSpectrum {
    /// SMS = Fa·Ss
    pub sms: f64,
    /// SM1 = Fv·S1
    pub sm1: f64,
    /// SDS = (2/3)·SMS
    pub sds: f64,
    /// SD1 = (2/3)·SM1
    pub sd1: f64,
}

impl DesignSpectrum {
    /// Build the spectrum from site coefficients and mapped accelerations.
    ///
    /// Pure arithmetic with no validation of its own; inputs are checked by
    /// [`HazardParameters::validate`] upstream.
    pub fn from_coefficients(coeffs: &SiteCoefficients, hazard: &HazardParameters) -> Self {
        let sms = coeffs.fa * hazard.ss;
        let sm1 = coeffs.fv * hazard.s1;
        DesignSpectrum {
            sms,
            sm1,
            sds: DESIGN_FRACTION * sms,
            sd1: DESIGN_FRACTION * sm1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seismic::site_coefficients::SiteClass;

    #[test]
    fn test_spectrum_values() {
        let hazard = HazardParameters {
            ss: 0.5,
            s1: 0.2,
            site_class: SiteClass::D,
            importance_factor: 1.0,
            response_modification: 8.0,
        };
        let coeffs = SiteCoefficients { fa: 1.4, fv: 2.0 };
        let spectrum = DesignSpectrum::from_coefficients(&coeffs, &hazard);

        // SMS = 1.4 * 0.5 = 0.7, SDS = 0.4667
        assert!((spectrum.sms - 0.7).abs() < 1e-12);
        assert!((spectrum.sds - 0.7 * 2.0 / 3.0).abs() < 1e-12);

        // SM1 = 2.0 * 0.2 = 0.4, SD1 = 0.2667
        assert!((spectrum.sm1 - 0.4).abs() < 1e-12);
        assert!((spectrum.sd1 - 0.4 * 2.0 / 3.0).abs() < 1e-12);
    }
}
