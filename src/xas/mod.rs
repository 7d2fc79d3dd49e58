/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! X-ray Absorption Spectroscopy (XAS) module
//!
//! Sample planning for transmission XAS: edge energy, sample mass for a target
//! absorption length, and the expected edge step.

pub mod calculator;
pub mod config;
pub mod errors;

pub use calculator::{AbsorptionCalculator, AbsorptionResult};
pub use config::{AbsorptionConfig, DEFAULT_ABSORPTION_LENGTH, DEFAULT_DELTA_EV};
pub use errors::{Result, XasError};
