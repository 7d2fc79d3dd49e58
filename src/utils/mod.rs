/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Utility functions for sample calculations
//!
//! Unit constants and conversions shared by the stoichiometry and absorption
//! modules.

pub mod constants;
pub mod conversions;

pub use conversions::{ev_to_kev, gram_to_mg, kev_to_ev, percent_to_fraction};
