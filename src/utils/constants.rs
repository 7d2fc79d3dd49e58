/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Unit constants used in sample calculations

/// Electron volts per kiloelectron volt
pub const EV_PER_KEV: f64 = 1000.0;

/// Milligrams per gram
pub const MG_PER_GRAM: f64 = 1000.0;

/// Percent per unit fraction
pub const PERCENT: f64 = 100.0;

/// Decimal places used when writing formula subscripts
pub const FORMULA_DECIMALS: usize = 6;
