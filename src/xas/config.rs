/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Configuration for absorption calculations

use serde::{Deserialize, Serialize};

use super::errors::{Result, XasError};
use crate::utils::ev_to_kev;

/// Default total absorption length (mu*x) targeted above the edge
pub const DEFAULT_ABSORPTION_LENGTH: f64 = 2.5;

/// Default half-width in eV of the window around the edge
pub const DEFAULT_DELTA_EV: f64 = 50.0;

/// Sample thickness target and energy window for absorption calculations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbsorptionConfig {
    /// Total absorption length the sample should reach just above the edge
    pub absorption_length: f64,

    /// Cross sections are evaluated at E0 - delta and E0 + delta (eV)
    pub delta_ev: f64,
}

impl Default for AbsorptionConfig {
    fn default() -> Self {
        Self {
            absorption_length: DEFAULT_ABSORPTION_LENGTH,
            delta_ev: DEFAULT_DELTA_EV,
        }
    }
}

impl AbsorptionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target total absorption length
    pub fn with_absorption_length(&mut self, absorption_length: f64) -> &mut Self {
        self.absorption_length = absorption_length;
        self
    }

    /// Set the energy half-window in eV
    pub fn with_delta(&mut self, delta_ev: f64) -> &mut Self {
        self.delta_ev = delta_ev;
        self
    }

    /// Energy half-window in keV, the unit of the data service
    pub fn delta_kev(&self) -> f64 {
        ev_to_kev(self.delta_ev)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.absorption_length.is_finite() && self.absorption_length > 0.0) {
            return Err(XasError::InvalidParameter(format!(
                "absorption length must be positive, got {}",
                self.absorption_length
            )));
        }
        if !(self.delta_ev.is_finite() && self.delta_ev > 0.0) {
            return Err(XasError::InvalidParameter(format!(
                "energy window must be positive, got {} eV",
                self.delta_ev
            )));
        }
        Ok(())
    }
}
