/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Mole ratio normalization

use crate::atoms::AtomicDataService;

use super::errors::{Result, StoichError};
use super::weighted::WeightedElementRow;

/// Molar amounts of each row relative to the scarcest row
///
/// Rows keep their input order. The smallest entry is exactly 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleRatioTable {
    entries: Vec<(u32, f64)>,
}

impl MoleRatioTable {
    /// Converts weighted mass fractions to mole ratios
    pub fn from_rows<S>(rows: &[WeightedElementRow], data: &S) -> Result<Self>
    where
        S: AtomicDataService + ?Sized,
    {
        if rows.is_empty() {
            return Err(StoichError::InvalidComposition(
                "element table is empty".to_string(),
            ));
        }

        let moles = rows
            .iter()
            .map(|row| -> Result<(u32, f64)> {
                if !(row.mass_fraction.is_finite() && row.mass_fraction > 0.0) {
                    return Err(StoichError::InvalidComposition(format!(
                        "atomic number {} has mass fraction {}",
                        row.atomic_number, row.mass_fraction
                    )));
                }
                let weight = data.atomic_weight(row.atomic_number)?;
                Ok((row.atomic_number, row.mass_fraction / weight))
            })
            .collect::<Result<Vec<_>>>()?;

        let min = moles
            .iter()
            .map(|&(_, amount)| amount)
            .fold(f64::INFINITY, f64::min);

        let entries = moles
            .into_iter()
            .map(|(atomic_number, amount)| (atomic_number, amount / min))
            .collect::<Vec<_>>();
        for (atomic_number, ratio) in &entries {
            log::trace!("Z={} mole ratio {}", atomic_number, ratio);
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Smallest mole ratio in the table
    pub fn min_ratio(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, ratio)| ratio)
            .fold(f64::INFINITY, f64::min)
    }
}
