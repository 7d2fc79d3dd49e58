/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Sample planning operations
//!
//! [`SamplePlanner`] composes the stoichiometry and absorption modules into
//! the calculations needed to prepare a sample for a beamline: diluting a
//! sample into a matrix, describing metal sites or complexes loaded on a
//! support, and sizing the sample for a transmission measurement.

use rayon::prelude::*;

use crate::atoms::{AtomicDataService, ParsedFormula};
use crate::stoich::{build_canonical_formula, combine_weighted, WEIGHT_TOLERANCE};
use crate::utils::constants::PERCENT;
use crate::utils::percent_to_fraction;
use crate::xas::{AbsorptionCalculator, AbsorptionConfig, AbsorptionResult};

use super::errors::{Result, SampleError};

/// One edge calculation in a batch
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRequest {
    pub sample: String,
    pub element: String,
    pub edge: String,
    /// Beam cross-sectional area in cm^2
    pub area: f64,
}

impl EdgeRequest {
    pub fn new(sample: &str, element: &str, edge: &str, area: f64) -> Self {
        Self {
            sample: sample.to_string(),
            element: element.to_string(),
            edge: edge.to_string(),
            area,
        }
    }
}

/// Entry point for sample stoichiometry and absorption calculations
///
/// The planner borrows a data service and holds no other state, so one
/// planner can serve any number of threads.
pub struct SamplePlanner<'a, S: AtomicDataService + ?Sized> {
    data: &'a S,
    config: AbsorptionConfig,
}

impl<'a, S: AtomicDataService + ?Sized> SamplePlanner<'a, S> {
    /// Create a planner with the default absorption configuration
    pub fn new(data: &'a S) -> Self {
        Self::with_config(data, AbsorptionConfig::default())
    }

    pub fn with_config(data: &'a S, config: AbsorptionConfig) -> Self {
        Self { data, config }
    }

    pub fn config(&self) -> &AbsorptionConfig {
        &self.config
    }

    /// Edge energy (eV), sample mass (mg) and edge step for a sample
    ///
    /// # Arguments
    ///
    /// * `sample` - Formula of the complete sample
    /// * `element` - Absorbing element symbol
    /// * `edge` - K, L1, L2 or L3
    /// * `area` - Beam cross-sectional area (cm^2)
    pub fn edge_mass_step(
        &self,
        sample: &str,
        element: &str,
        edge: &str,
        area: f64,
    ) -> Result<AbsorptionResult> {
        let calculator = AbsorptionCalculator::new(self.data, self.config);
        Ok(calculator.calculate(sample, element, edge, area)?)
    }

    /// Runs several edge calculations in parallel
    ///
    /// Results are returned in request order; one failed request does not
    /// affect the others.
    pub fn edge_mass_step_batch(&self, requests: &[EdgeRequest]) -> Vec<Result<AbsorptionResult>> {
        log::debug!("Evaluating {} edge requests", requests.len());
        requests
            .par_iter()
            .map(|request| {
                self.edge_mass_step(
                    &request.sample,
                    &request.element,
                    &request.edge,
                    request.area,
                )
            })
            .collect()
    }

    /// Formula of two samples mixed by mass ratio
    ///
    /// `ratio1:ratio2` is the mass ratio of `sample1` to `sample2`; for a 1:5
    /// dilution pass 1 and 5. With `ratio2` of zero the second sample adds
    /// nothing, though it must still be a valid formula. `ratio1` must be
    /// positive.
    pub fn diluted_formula(
        &self,
        sample1: &str,
        sample2: &str,
        ratio1: f64,
        ratio2: f64,
    ) -> Result<String> {
        for ratio in [ratio1, ratio2] {
            if !(ratio.is_finite() && ratio >= 0.0) {
                return Err(SampleError::InvalidComposition(format!(
                    "dilution ratio must be non-negative, got {}",
                    ratio
                )));
            }
        }
        require_positive(ratio1, "dilution ratio of the sample")?;
        let total = ratio1 + ratio2;

        log::debug!("Diluting {} with {} at {}:{}", sample1, sample2, ratio1, ratio2);
        self.blend(&[(sample1, ratio1 / total), (sample2, ratio2 / total)])
    }

    /// Formula of a single metal site loaded on a support
    pub fn supported_metal_formula(
        &self,
        metal_site: &str,
        loading: f64,
        support: &str,
    ) -> Result<String> {
        validate_loading(loading)?;
        require_positive(loading, "metal loading")?;
        validate_total_loading(loading)?;

        log::debug!("{}% {} on {}", loading, metal_site, support);
        let weight = percent_to_fraction(loading);
        self.blend(&[(metal_site, weight), (support, 1.0 - weight)])
    }

    /// Formula of up to two metal sites loaded on a support
    ///
    /// Loadings are weight percentages of the finished material. An empty
    /// `metal_site2` selects single-metal mode, which requires `loading2` to
    /// be zero.
    pub fn supported_two_metal_formula(
        &self,
        metal_site1: &str,
        loading1: f64,
        metal_site2: &str,
        loading2: f64,
        support: &str,
    ) -> Result<String> {
        validate_loading(loading1)?;
        require_positive(loading1, "loading of the first metal site")?;
        validate_loading(loading2)?;

        if metal_site2.trim().is_empty() {
            if loading2 != 0.0 {
                return Err(SampleError::InvalidComposition(format!(
                    "loading of {}% given without a second metal site",
                    loading2
                )));
            }
            return self.supported_metal_formula(metal_site1, loading1, support);
        }
        validate_total_loading(loading1 + loading2)?;

        log::debug!(
            "{}% {} and {}% {} on {}",
            loading1,
            metal_site1,
            loading2,
            metal_site2,
            support
        );
        self.blend(&[
            (metal_site1, percent_to_fraction(loading1)),
            (metal_site2, percent_to_fraction(loading2)),
            (support, 1.0 - percent_to_fraction(loading1 + loading2)),
        ])
    }

    /// Scale factor that brings a complex to the requested metal loading
    ///
    /// The factor is `metal_loading / mass_fraction(metal_site)`; scaling the
    /// complex by `factor / 100` makes the metal site `metal_loading` percent
    /// of the finished material. A loading equal to the metal's natural
    /// percentage in the complex gives exactly 100.
    pub fn complex_weight_factor(
        &self,
        complex: &str,
        metal_loading: f64,
        metal_site: &str,
    ) -> Result<f64> {
        let parsed = self.data.parse_formula(complex)?;
        self.weight_factor(&parsed, metal_loading, metal_site)
    }

    /// Formula of a metal complex loaded on a support
    ///
    /// `metal_loading` is the weight percentage of the metal site element
    /// (not of the whole complex) in the finished material.
    pub fn supported_complex_formula(
        &self,
        complex: &str,
        metal_loading: f64,
        metal_site: &str,
        support: &str,
    ) -> Result<String> {
        let parsed_complex = self.data.parse_formula(complex)?;
        let factor = self.weight_factor(&parsed_complex, metal_loading, metal_site)?;

        let complex_weight = percent_to_fraction(factor);
        let complex_fraction: f64 = parsed_complex
            .iter()
            .map(|c| c.mass_fraction * complex_weight)
            .sum();
        let support_weight = 1.0 - complex_fraction;
        if support_weight < -WEIGHT_TOLERANCE {
            return Err(SampleError::InvalidComposition(format!(
                "{}% {} needs {:.4}% complex, more than the whole sample",
                metal_loading,
                metal_site,
                complex_fraction * PERCENT
            )));
        }

        log::debug!(
            "{} at factor {} on {} (support weight {})",
            complex,
            factor,
            support,
            support_weight
        );
        let parsed_support = self.data.parse_formula(support)?;
        let rows = combine_weighted(&[
            (&parsed_complex, complex_weight),
            (&parsed_support, support_weight.max(0.0)),
        ])?;
        Ok(build_canonical_formula(&rows, self.data)?)
    }

    fn weight_factor(
        &self,
        complex: &ParsedFormula,
        metal_loading: f64,
        metal_site: &str,
    ) -> Result<f64> {
        validate_loading(metal_loading)?;
        require_positive(metal_loading, "metal loading")?;
        validate_total_loading(metal_loading)?;

        let atomic_number = self.data.symbol_to_atomic_number(metal_site)?;
        let site = complex
            .component(atomic_number)
            .ok_or_else(|| SampleError::MetalSiteNotFound(metal_site.to_string()))?;
        Ok(metal_loading / site.mass_fraction)
    }

    /// Every formula is parsed; zero weights only drop the rows
    fn blend(&self, parts: &[(&str, f64)]) -> Result<String> {
        let parsed = parts
            .iter()
            .map(|&(formula, _)| self.data.parse_formula(formula).map_err(SampleError::from))
            .collect::<Result<Vec<_>>>()?;
        let components = parsed
            .iter()
            .zip(parts)
            .map(|(formula, &(_, weight))| (formula, weight))
            .collect::<Vec<_>>();

        let rows = combine_weighted(&components)?;
        Ok(build_canonical_formula(&rows, self.data)?)
    }
}

fn validate_loading(loading: f64) -> Result<()> {
    if loading.is_finite() && loading >= 0.0 {
        Ok(())
    } else {
        Err(SampleError::InvalidComposition(format!(
            "loading must be a non-negative percentage, got {}",
            loading
        )))
    }
}

fn require_positive(value: f64, what: &str) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(SampleError::InvalidComposition(format!(
            "{} must be positive, got {}",
            what, value
        )))
    }
}

fn validate_total_loading(total: f64) -> Result<()> {
    if total <= PERCENT {
        Ok(())
    } else {
        Err(SampleError::InvalidComposition(format!(
            "loadings add up to {}%",
            total
        )))
    }
}
