/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Formula formatting and two-pass canonicalization

use crate::atoms::AtomicDataService;
use crate::utils::constants::FORMULA_DECIMALS;

use super::errors::Result;
use super::moles::MoleRatioTable;
use super::weighted::{combine_weighted, WeightedElementRow};

/// Writes `(atomic number, amount)` pairs as `Symbol<amount to 6 places>`
///
/// Order is preserved and repeated elements are written repeatedly.
pub fn format_formula<S, I>(entries: I, data: &S) -> Result<String>
where
    S: AtomicDataService + ?Sized,
    I: IntoIterator<Item = (u32, f64)>,
{
    let mut formula = String::new();
    for (atomic_number, amount) in entries {
        let symbol = data.atomic_number_to_symbol(atomic_number)?;
        formula.push_str(&format!("{}{:.*}", symbol, FORMULA_DECIMALS, amount));
    }
    Ok(formula)
}

/// Turns weighted rows into a canonical formula string
///
/// The rows are normalized to mole ratios and written out with duplicates
/// intact. That intermediate text is then parsed again by the data service,
/// which merges repeated elements, and the merged atom counts are written out
/// with the same rounding. The rounding of the intermediate text carries into
/// the result.
pub fn build_canonical_formula<S>(rows: &[WeightedElementRow], data: &S) -> Result<String>
where
    S: AtomicDataService + ?Sized,
{
    let table = MoleRatioTable::from_rows(rows, data)?;
    let intermediate = format_formula(table.entries().iter().copied(), data)?;
    log::debug!("Intermediate formula: {}", intermediate);

    let merged = data.parse_formula(&intermediate)?;
    let canonical = format_formula(
        merged.iter().map(|c| (c.atomic_number, c.atom_count)),
        data,
    )?;
    log::debug!("Canonical formula: {}", canonical);
    Ok(canonical)
}

/// Canonical form of a single formula
pub fn canonicalize<S>(formula: &str, data: &S) -> Result<String>
where
    S: AtomicDataService + ?Sized,
{
    let parsed = data.parse_formula(formula)?;
    let rows = combine_weighted(&[(&parsed, 1.0)])?;
    build_canonical_formula(&rows, data)
}
