/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Sample planning module
//!
//! The public operations of the crate: absorption parameters for a sample,
//! and canonical formulas for diluted samples, supported metals and supported
//! complexes.

pub mod errors;
pub mod planner;

pub use errors::{ErrorKind, Result, SampleError};
pub use planner::{EdgeRequest, SamplePlanner};
