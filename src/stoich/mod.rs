/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Stoichiometry module
//!
//! Blends parsed components by weight fraction, normalizes the blend to mole
//! ratios, and writes canonical formula strings.
//!
//! Canonical formulas are produced in two passes. The weighted rows are first
//! written out with repeated elements kept apart; the data service then parses
//! that text, merging repeated elements, and the merged counts are written
//! out again.

pub mod canonical;
pub mod errors;
pub mod moles;
pub mod weighted;

pub use canonical::{build_canonical_formula, canonicalize, format_formula};
pub use errors::{Result, StoichError};
pub use moles::MoleRatioTable;
pub use weighted::{combine_weighted, WeightedElementRow, WEIGHT_SUM_TOLERANCE, WEIGHT_TOLERANCE};
