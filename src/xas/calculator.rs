/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Edge energy, sample mass and edge step
//!
//! For a sample formula and an absorbing element the calculator finds the edge
//! energy E0, evaluates every element's photoabsorption cross section at
//! E0 - delta and E0 + delta, and sizes the sample so that its total absorption
//! length just above the edge equals the configured target.

use serde::{Deserialize, Serialize};

use crate::atoms::{AtomicDataService, Edge};
use crate::utils::{gram_to_mg, kev_to_ev};

use super::config::AbsorptionConfig;
use super::errors::{Result, XasError};

/// Absorption parameters for one sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbsorptionResult {
    /// Edge energy in eV
    pub edge_energy_ev: f64,
    /// Sample mass in mg
    pub mass_mg: f64,
    /// Expected transmission edge step
    pub edge_step: f64,
}

/// Cross sections of one sample element around the edge
#[derive(Debug, Clone, Copy, PartialEq)]
struct EdgeCrossSections {
    atomic_number: u32,
    mass_fraction: f64,
    below: f64,
    above: f64,
}

/// Computes absorption parameters against an atomic data service
pub struct AbsorptionCalculator<'a, S: AtomicDataService + ?Sized> {
    data: &'a S,
    config: AbsorptionConfig,
}

impl<'a, S: AtomicDataService + ?Sized> AbsorptionCalculator<'a, S> {
    pub fn new(data: &'a S, config: AbsorptionConfig) -> Self {
        Self { data, config }
    }

    /// Calculates edge energy, sample mass and edge step
    ///
    /// # Arguments
    ///
    /// * `sample` - Formula of the whole sample, e.g. "Fe2O3" or "Pt0.05Al2O3"
    /// * `element` - Symbol of the absorbing element
    /// * `edge` - Edge label: K, L1, L2 or L3
    /// * `area` - Cross-sectional area of the sample in the beam (cm^2)
    pub fn calculate(
        &self,
        sample: &str,
        element: &str,
        edge: &str,
        area: f64,
    ) -> Result<AbsorptionResult> {
        let edge: Edge = edge.parse()?;
        self.config.validate()?;
        if !(area.is_finite() && area > 0.0) {
            return Err(XasError::InvalidParameter(format!(
                "beam area must be positive, got {} cm^2",
                area
            )));
        }

        let parsed = self.data.parse_formula(sample)?;
        let absorber = self.data.parse_formula(element)?.first_atomic_number()?;
        let e0 = self.data.edge_energy(absorber, edge)?;
        let delta = self.config.delta_kev();
        log::debug!(
            "{} {} edge at {} keV, sampling {} keV either side",
            element,
            edge,
            e0,
            delta
        );

        let cross_sections = parsed
            .iter()
            .map(|component| -> Result<EdgeCrossSections> {
                let below = self
                    .data
                    .photo_cross_section(component.atomic_number, e0 - delta)?;
                let above = self
                    .data
                    .photo_cross_section(component.atomic_number, e0 + delta)?;
                log::trace!(
                    "Z={} cross section {} -> {} cm^2/g",
                    component.atomic_number,
                    below,
                    above
                );
                Ok(EdgeCrossSections {
                    atomic_number: component.atomic_number,
                    mass_fraction: component.mass_fraction,
                    below,
                    above,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let absorption_length = self.config.absorption_length;
        let (mass, step) = match cross_sections.as_slice() {
            [] => {
                return Err(XasError::InvalidParameter(format!(
                    "sample '{}' has no elements",
                    sample
                )))
            }
            [single] => single_element_mass_and_step(single, absorption_length, area)?,
            mixture => mixture_mass_and_step(mixture, absorption_length, area)?,
        };

        let result = AbsorptionResult {
            edge_energy_ev: kev_to_ev(e0),
            mass_mg: gram_to_mg(mass),
            edge_step: step,
        };
        log::debug!(
            "{}: E0 = {} eV, mass = {} mg, step = {}",
            sample,
            result.edge_energy_ev,
            result.mass_mg,
            result.edge_step
        );
        Ok(result)
    }
}

fn positive_cross_section(mu: f64) -> Result<f64> {
    if mu.is_finite() && mu > 0.0 {
        Ok(mu)
    } else {
        Err(XasError::InvalidParameter(format!(
            "cross section above the edge must be positive, got {} cm^2/g",
            mu
        )))
    }
}

fn single_element_mass_and_step(
    element: &EdgeCrossSections,
    absorption_length: f64,
    area: f64,
) -> Result<(f64, f64)> {
    let mass = absorption_length * area / positive_cross_section(element.above)?;
    let step = (mass / area) * (element.above - element.below);
    Ok((mass, step))
}

fn mixture_mass_and_step(
    elements: &[EdgeCrossSections],
    absorption_length: f64,
    area: f64,
) -> Result<(f64, f64)> {
    let mu_below: f64 = elements.iter().map(|e| e.mass_fraction * e.below).sum();
    let mu_above: f64 = elements.iter().map(|e| e.mass_fraction * e.above).sum();
    log::trace!("Mass-weighted cross section {} -> {} cm^2/g", mu_below, mu_above);

    let mass = absorption_length * area / positive_cross_section(mu_above)?;
    let contributions = elements
        .iter()
        .map(|e| (e.mass_fraction * mass / area) * (e.above - e.below))
        .collect::<Vec<_>>();
    for (element, contribution) in elements.iter().zip(&contributions) {
        log::trace!("Z={} step contribution {}", element.atomic_number, contribution);
    }

    Ok((mass, largest_step(&contributions)))
}

/// The observable edge step is the largest single-element contribution
fn largest_step(contributions: &[f64]) -> f64 {
    contributions
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cross_sections(mass_fraction: f64, below: f64, above: f64) -> EdgeCrossSections {
        EdgeCrossSections {
            atomic_number: 26,
            mass_fraction,
            below,
            above,
        }
    }

    #[test]
    fn test_largest_step() {
        assert_relative_eq!(largest_step(&[0.1, 0.7, 0.3]), 0.7);
        assert_relative_eq!(largest_step(&[0.5, 0.5]), 0.5);
        assert_relative_eq!(largest_step(&[-0.2, 0.0]), 0.0);
    }

    #[test]
    fn test_single_element() {
        let (mass, step) =
            single_element_mass_and_step(&cross_sections(1.0, 60.0, 400.0), 2.5, 1.0).unwrap();
        assert_relative_eq!(mass, 0.00625, epsilon = 1e-15);
        assert_relative_eq!(step, 2.125, epsilon = 1e-12);
    }

    #[test]
    fn test_mixture_uses_mass_weighted_average() {
        let elements = [
            cross_sections(0.7, 60.0, 400.0),
            cross_sections(0.3, 10.0, 10.0),
        ];
        let (mass, step) = mixture_mass_and_step(&elements, 2.5, 2.0).unwrap();
        let mu_above = 0.7 * 400.0 + 0.3 * 10.0;
        assert_relative_eq!(mass, 2.5 * 2.0 / mu_above, epsilon = 1e-15);
        assert_relative_eq!(step, 0.7 * mass / 2.0 * 340.0, epsilon = 1e-12);
    }

    #[test]
    fn test_non_positive_cross_section() {
        let result = single_element_mass_and_step(&cross_sections(1.0, 0.0, 0.0), 2.5, 1.0);
        assert!(matches!(result, Err(XasError::InvalidParameter(_))));
    }
}
