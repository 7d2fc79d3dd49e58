/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Unit conversion utilities

use super::constants;

/// Convert energy from eV to keV
pub fn ev_to_kev(ev: f64) -> f64 {
    ev / constants::EV_PER_KEV
}

/// Convert energy from keV to eV
pub fn kev_to_ev(kev: f64) -> f64 {
    kev * constants::EV_PER_KEV
}

/// Convert mass from g to mg
pub fn gram_to_mg(gram: f64) -> f64 {
    gram * constants::MG_PER_GRAM
}

/// Convert a weight percentage to a fraction of the total
pub fn percent_to_fraction(percent: f64) -> f64 {
    percent / constants::PERCENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_conversions() {
        assert_relative_eq!(ev_to_kev(50.0), 0.05, epsilon = 1e-15);
        assert_relative_eq!(kev_to_ev(ev_to_kev(7112.0)), 7112.0, epsilon = 1e-10);
        assert_relative_eq!(gram_to_mg(0.00625), 6.25, epsilon = 1e-12);
        assert_relative_eq!(percent_to_fraction(5.0), 0.05, epsilon = 1e-15);
    }
}
