/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Weighted combination of parsed components

use crate::atoms::ParsedFormula;

use super::errors::{Result, StoichError};

/// Weight fractions at or below this magnitude are treated as zero
pub const WEIGHT_TOLERANCE: f64 = 1e-12;

/// Allowed deviation of the summed weight fractions from one
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// One element row scaled by its component's share of the mixture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedElementRow {
    pub atomic_number: u32,
    pub mass_fraction: f64,
}

/// Blends parsed components into a single table of weighted rows
///
/// Each entry pairs a component with its weight fraction of the whole
/// mixture. Rows keep component order and are never merged here, so an
/// element present in two components yields two rows.
///
/// Components with a zero weight fraction contribute nothing. Weight
/// fractions must be non-negative and sum to one.
pub fn combine_weighted(components: &[(&ParsedFormula, f64)]) -> Result<Vec<WeightedElementRow>> {
    let mut rows = Vec::new();
    let mut total_weight = 0.0;

    for (index, &(formula, weight)) in components.iter().enumerate() {
        if !weight.is_finite() || weight < -WEIGHT_TOLERANCE {
            return Err(StoichError::InvalidComposition(format!(
                "component {} has weight fraction {}",
                index, weight
            )));
        }
        total_weight += weight;

        if weight <= WEIGHT_TOLERANCE {
            log::debug!("Component {} has zero weight and is left out", index);
            continue;
        }

        rows.extend(formula.iter().map(|component| WeightedElementRow {
            atomic_number: component.atomic_number,
            mass_fraction: component.mass_fraction * weight,
        }));
    }

    if (total_weight - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(StoichError::InvalidComposition(format!(
            "weight fractions sum to {} instead of 1",
            total_weight
        )));
    }
    if rows.is_empty() {
        return Err(StoichError::InvalidComposition(
            "mixture has no elements".to_string(),
        ));
    }

    log::trace!(
        "Combined {} components into {} rows",
        components.len(),
        rows.len()
    );
    Ok(rows)
}
