/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Atomic data module
//!
//! This module defines the boundary to tabulated atomic physics data: the
//! [`AtomicDataService`] trait, absorption edge labels, a formula parser, and
//! [`TabulatedAtomicData`], a service backed by in-memory element tables.

pub mod database;
pub mod edge;
pub mod errors;
pub mod formula;
pub mod service;
pub mod tabulated;

pub use edge::Edge;
pub use errors::{AtomError, Result};
pub use formula::parse_formula_counts;
pub use service::{AtomicDataService, ElementalComponent, ParsedFormula};
pub use tabulated::{EdgeEnergies, ElementTable, TabulatedAtomicData};
